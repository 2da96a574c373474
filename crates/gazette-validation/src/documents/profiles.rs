//! Built-in check profiles.
//!
//! Points and pass bars live here as table constants so they can be reviewed
//! and tuned per document type without touching the scoring code. Every
//! profile's check maximums add up to [`PROFILE_TOTAL`].

use super::domain::DocumentType;
use super::evaluation::{CheckSpec, MatcherSpec, SignalSpec, Tally};

pub const PROFILE_TOTAL: u32 = 100;

const CALENDAR_DATE: &str = r"\b\d{4}-\d{2}-\d{2}\b|\b\d{1,2}(?:st|nd|rd|th)?[\s/.\-]+(?:\d{1,2}|jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sept?(?:ember)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)[\s/.\-,]+\d{4}\b";

pub(crate) fn standard_profiles() -> [(DocumentType, &'static [CheckSpec]); 4] {
    [
        (DocumentType::StatutoryDeclaration, STATUTORY_DECLARATION),
        (DocumentType::GhanaCard, GHANA_CARD),
        (DocumentType::BirthCertificate, BIRTH_CERTIFICATE),
        (DocumentType::MarriageCertificate, MARRIAGE_CERTIFICATE),
    ]
}

pub const STATUTORY_DECLARATION: &[CheckSpec] = &[
    CheckSpec {
        name: "Document Heading",
        max_score: 20,
        pass_bar: 12,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "statutory declaration title",
                matcher: MatcherSpec::Keyword("statutory declaration"),
                points: 12,
            },
            SignalSpec {
                label: "statute reference",
                matcher: MatcherSpec::AnyKeyword(&[
                    "statutory declarations act",
                    "act 389",
                    "act, 1971",
                ]),
                points: 8,
            },
        ],
    },
    CheckSpec {
        name: "Sworn Statement",
        max_score: 25,
        pass_bar: 20,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "solemn declaration clause",
                matcher: MatcherSpec::Keyword("solemnly and sincerely declare"),
                points: 10,
            },
            SignalSpec {
                label: "belief clause",
                matcher: MatcherSpec::Keyword("believing the same to be true"),
                points: 10,
            },
            SignalSpec {
                label: "oath wording",
                matcher: MatcherSpec::Pattern(r"\bsworn\b|\bsolemn declaration\b"),
                points: 5,
            },
        ],
    },
    CheckSpec {
        name: "Commissioner for Oaths",
        max_score: 25,
        pass_bar: 15,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "commissioner for oaths",
                matcher: MatcherSpec::Keyword("commissioner for oaths"),
                points: 15,
            },
            SignalSpec {
                label: "attestation",
                matcher: MatcherSpec::Keyword("before me"),
                points: 5,
            },
            SignalSpec {
                label: "alternate attesting officer",
                matcher: MatcherSpec::AnyKeyword(&["notary public", "magistrate"]),
                points: 5,
            },
        ],
    },
    CheckSpec {
        name: "Official Seal",
        max_score: 15,
        pass_bar: 10,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "seal",
                matcher: MatcherSpec::Pattern(r"\bseal(?:ed)?\b"),
                points: 10,
            },
            SignalSpec {
                label: "stamp",
                matcher: MatcherSpec::Pattern(r"\bstamp(?:ed)?\b"),
                points: 5,
            },
        ],
    },
    CheckSpec {
        name: "Declaration Format",
        max_score: 15,
        pass_bar: 10,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "declarant clause",
                matcher: MatcherSpec::Pattern(r"\bi,\s+[a-z][a-z.'\- ]+,"),
                points: 5,
            },
            SignalSpec {
                label: "dated clause",
                matcher: MatcherSpec::Pattern(r"\bthis\s+\d{1,2}(?:st|nd|rd|th)?\s+day\s+of\b"),
                points: 5,
            },
            SignalSpec {
                label: "declarant signature line",
                matcher: MatcherSpec::Pattern(r"\bdeclarant\b"),
                points: 5,
            },
        ],
    },
];

pub const GHANA_CARD: &[CheckSpec] = &[
    CheckSpec {
        name: "Personal ID Number Format",
        max_score: 40,
        pass_bar: 40,
        tally: Tally::Signals,
        signals: &[SignalSpec {
            label: "personal ID number (GHA-#########-#)",
            matcher: MatcherSpec::Pattern(r"\bgha-\d{9}-\d\b"),
            points: 40,
        }],
    },
    CheckSpec {
        name: "ECOWAS Card Header",
        max_score: 30,
        pass_bar: 20,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "ECOWAS",
                matcher: MatcherSpec::Keyword("ecowas"),
                points: 10,
            },
            SignalSpec {
                label: "identity card",
                matcher: MatcherSpec::Keyword("identity card"),
                points: 10,
            },
            SignalSpec {
                label: "Republic of Ghana",
                matcher: MatcherSpec::Keyword("republic of ghana"),
                points: 10,
            },
        ],
    },
    CheckSpec {
        name: "Card Information Fields",
        max_score: 30,
        pass_bar: 18,
        tally: Tally::Fields,
        signals: &[
            card_field("Surname", &["surname", "nom"]),
            card_field("First Names", &["firstnames", "first names", "prénoms", "prenoms"]),
            card_field("Nationality", &["nationality", "nationalité", "nationalite"]),
            card_field("Date of Birth", &["date of birth", "date de naissance"]),
            card_field("Sex", &["sex", "sexe"]),
            card_field("Height", &["height", "taille"]),
            card_field(
                "Document Number",
                &["document number", "numéro du document", "numero du document"],
            ),
            card_field(
                "Place of Issuance",
                &["place of issuance", "lieu de délivrance", "lieu de delivrance"],
            ),
            card_field(
                "Date of Issuance",
                &["date of issuance", "date de délivrance", "date de delivrance"],
            ),
            card_field("Date of Expiry", &["date of expiry", "date d'expiration"]),
        ],
    },
];

const CARD_FIELD_POINTS: u32 = 3;

const fn card_field(label: &'static str, synonyms: &'static [&'static str]) -> SignalSpec {
    SignalSpec {
        label,
        matcher: MatcherSpec::FieldLabel(synonyms),
        points: CARD_FIELD_POINTS,
    }
}

pub const BIRTH_CERTIFICATE: &[CheckSpec] = &[
    CheckSpec {
        name: "Birth Certificate Heading",
        max_score: 35,
        pass_bar: 20,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "birth certificate title",
                matcher: MatcherSpec::AnyKeyword(&["certificate of birth", "birth certificate"]),
                points: 20,
            },
            SignalSpec {
                label: "issuing registry",
                matcher: MatcherSpec::AnyKeyword(&[
                    "births and deaths registry",
                    "registry of births",
                    "births and deaths registration",
                ]),
                points: 10,
            },
            SignalSpec {
                label: "Republic of Ghana",
                matcher: MatcherSpec::Keyword("republic of ghana"),
                points: 5,
            },
        ],
    },
    CheckSpec {
        name: "Registrar Signature",
        max_score: 35,
        pass_bar: 25,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "registrar",
                matcher: MatcherSpec::Pattern(r"\bregistrar\b"),
                points: 15,
            },
            SignalSpec {
                label: "signature",
                matcher: MatcherSpec::AnyKeyword(&["signature", "signed"]),
                points: 10,
            },
            SignalSpec {
                label: "seal or stamp",
                matcher: MatcherSpec::Pattern(r"\b(?:seal|stamp)(?:ed)?\b"),
                points: 10,
            },
        ],
    },
    CheckSpec {
        name: "Date of Birth Information",
        max_score: 30,
        pass_bar: 20,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "date of birth label",
                matcher: MatcherSpec::FieldLabel(&["date of birth"]),
                points: 10,
            },
            SignalSpec {
                label: "calendar date",
                matcher: MatcherSpec::Pattern(CALENDAR_DATE),
                points: 10,
            },
            SignalSpec {
                label: "place of birth label",
                matcher: MatcherSpec::FieldLabel(&["place of birth"]),
                points: 10,
            },
        ],
    },
];

pub const MARRIAGE_CERTIFICATE: &[CheckSpec] = &[
    CheckSpec {
        name: "Marriage Certificate Heading",
        max_score: 30,
        pass_bar: 20,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "marriage certificate title",
                matcher: MatcherSpec::AnyKeyword(&[
                    "marriage certificate",
                    "certificate of marriage",
                ]),
                points: 20,
            },
            SignalSpec {
                label: "statute reference",
                matcher: MatcherSpec::AnyKeyword(&[
                    "marriages act",
                    "marriage ordinance",
                    "cap 127",
                    "cap. 127",
                ]),
                points: 10,
            },
        ],
    },
    CheckSpec {
        name: "Marriage Details",
        max_score: 40,
        pass_bar: 30,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "husband",
                matcher: MatcherSpec::FieldLabel(&["husband", "bridegroom"]),
                points: 10,
            },
            SignalSpec {
                label: "wife",
                matcher: MatcherSpec::FieldLabel(&["wife", "bride"]),
                points: 10,
            },
            SignalSpec {
                label: "date of marriage",
                matcher: MatcherSpec::AnyKeyword(&["date of marriage", "married on"]),
                points: 10,
            },
            SignalSpec {
                label: "witnesses",
                matcher: MatcherSpec::Pattern(r"\bwitness(?:es)?\b"),
                points: 10,
            },
        ],
    },
    CheckSpec {
        name: "Official Signature",
        max_score: 30,
        pass_bar: 20,
        tally: Tally::Signals,
        signals: &[
            SignalSpec {
                label: "officiating officer",
                matcher: MatcherSpec::FieldLabel(&["registrar", "marriage officer", "minister"]),
                points: 15,
            },
            SignalSpec {
                label: "signature",
                matcher: MatcherSpec::AnyKeyword(&["signature", "signed"]),
                points: 10,
            },
            SignalSpec {
                label: "licence reference",
                matcher: MatcherSpec::Pattern(r"\blicen[cs]e\b"),
                points: 5,
            },
        ],
    },
];
