use crate::infra::{FileSystemTextExtractor, InMemoryTextExtractor};
use clap::Args;
use gazette_validation::config::AppConfig;
use gazette_validation::documents::{
    DocumentType, DocumentTypeRegistry, DocumentValidationService, FileReference, ScoringPolicy,
    ValidationResult,
};
use gazette_validation::error::AppError;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct ValidateArgs {
    /// Declared document type (statutory-declaration, ghana-card, birth-certificate, marriage-certificate)
    #[arg(long, value_parser = crate::infra::parse_document_type)]
    pub(crate) document_type: DocumentType,
    /// Plain-text file holding the document's extracted content
    pub(crate) path: PathBuf,
    /// Pass threshold percentage for this run (defaults to VALIDATION_PASS_THRESHOLD)
    #[arg(long)]
    pub(crate) threshold: Option<f64>,
    /// Print the result as JSON instead of a check breakdown
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_validate(args: ValidateArgs) -> Result<(), AppError> {
    let ValidateArgs {
        document_type,
        path,
        threshold,
        json,
    } = args;

    let config = AppConfig::load()?;
    let policy = config.validation.scoring_policy()?;

    let root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("'{}' does not name a readable file", path.display()),
            )
        })?;

    let service = DocumentValidationService::standard(
        Arc::new(FileSystemTextExtractor::new(root)),
        policy,
    )?;
    let result = service.validate(document_type, &FileReference::new(file_name), threshold)?;

    if json {
        let payload = serde_json::to_string_pretty(&result).map_err(io::Error::from)?;
        println!("{payload}");
    } else {
        let threshold = threshold.unwrap_or_else(|| policy.pass_threshold());
        println!("Validating {} as {}", path.display(), document_type.label());
        render_verdict(&result, threshold);
    }

    Ok(())
}

pub(crate) fn run_profiles() -> Result<(), AppError> {
    let registry = DocumentTypeRegistry::standard()?;

    println!("Registered document profiles");
    for profile in registry.profiles() {
        let summary = profile.summary();
        println!(
            "\n{} ({}) - {} points",
            summary.label, summary.document_type, summary.total
        );
        for check in &summary.checks {
            println!(
                "  - {}: max {} | pass bar {}",
                check.name, check.max_score, check.pass_bar
            );
        }
    }

    Ok(())
}

/// Canned uploads run through the validator by the `demo` command.
struct SampleDocument {
    reference: &'static str,
    document_type: DocumentType,
    text: Option<&'static str>,
}

const SAMPLE_DECLARATION: &str = "\
STATUTORY DECLARATION
Statutory Declarations Act, 1971 (Act 389)
I, Akosua Frimpong, of P.O. Box 45, Kumasi, do solemnly and sincerely declare that I was
formerly known as Akosua Boateng and shall henceforth be known as Akosua Frimpong,
conscientiously believing the same to be true.
Declared at Kumasi this 3rd day of June, 2024
Signature of Declarant
Before me, Commissioner for Oaths
Seal of the High Court, Kumasi
";

const SAMPLE_GHANA_CARD: &str = "\
REPUBLIC OF GHANA
ECOWAS IDENTITY CARD
GHA-001234567-8
Surname/Nom: OWUSU
Firstnames/Prénoms: ABENA
Nationality/Nationalité: GHANAIAN
Date of Birth/Date de Naissance: 05/11/1988
Sex/Sexe: F
Height/Taille: 1.62
Document Number/Numéro du Document: CD7654321
Place of Issuance/Lieu de Délivrance: KUMASI
Date of Issuance/Date de Délivrance: 14/02/2022
Date of Expiry/Date d'Expiration: 13/02/2032
";

// Personal ID number one digit short.
const SAMPLE_GHANA_CARD_SHORT_ID: &str = "\
REPUBLIC OF GHANA
ECOWAS IDENTITY CARD
GHA-00123456-8
Surname/Nom: OWUSU
Firstnames/Prénoms: ABENA
Nationality/Nationalité: GHANAIAN
Date of Birth/Date de Naissance: 05/11/1988
Sex/Sexe: F
Height/Taille: 1.62
Document Number/Numéro du Document: CD7654321
Place of Issuance/Lieu de Délivrance: KUMASI
Date of Issuance/Date de Délivrance: 14/02/2022
Date of Expiry/Date d'Expiration: 13/02/2032
";

const SAMPLE_BIRTH_CERTIFICATE: &str = "\
REPUBLIC OF GHANA
BIRTHS AND DEATHS REGISTRY
BIRTH CERTIFICATE
Name of Child: Yaw Owusu Ansah
Date of Birth: 21/07/2012
Place of Birth: Komfo Anokye Teaching Hospital, Kumasi
Registrar: K. Adjei
Signature: ________
Official Seal
";

const SAMPLE_MARRIAGE_CERTIFICATE: &str = "\
CERTIFICATE OF MARRIAGE
Marriage Ordinance (Cap 127)
Bridegroom: Kwesi Appiah
Bride: Adwoa Sarpong
Married on 14th February 2020 at Wesley Methodist Church, Accra
Witness: Nana Yeboah
Marriage Officer: Rev. E. Quaye
Signature: ________
Licence No. 0932
";

const SAMPLES: &[SampleDocument] = &[
    SampleDocument {
        reference: "declarations/name-change.txt",
        document_type: DocumentType::StatutoryDeclaration,
        text: Some(SAMPLE_DECLARATION),
    },
    SampleDocument {
        reference: "ids/ghana-card.txt",
        document_type: DocumentType::GhanaCard,
        text: Some(SAMPLE_GHANA_CARD),
    },
    SampleDocument {
        reference: "ids/ghana-card-short-id.txt",
        document_type: DocumentType::GhanaCard,
        text: Some(SAMPLE_GHANA_CARD_SHORT_ID),
    },
    SampleDocument {
        reference: "certificates/birth.txt",
        document_type: DocumentType::BirthCertificate,
        text: Some(SAMPLE_BIRTH_CERTIFICATE),
    },
    SampleDocument {
        reference: "certificates/marriage.txt",
        document_type: DocumentType::MarriageCertificate,
        text: Some(SAMPLE_MARRIAGE_CERTIFICATE),
    },
    SampleDocument {
        reference: "scans/marriage-certificate.pdf",
        document_type: DocumentType::MarriageCertificate,
        text: None,
    },
];

fn demo_service() -> Result<DocumentValidationService<InMemoryTextExtractor>, AppError> {
    let extractor = SAMPLES
        .iter()
        .fold(InMemoryTextExtractor::default(), |extractor, sample| {
            match sample.text {
                Some(text) => extractor.with_document(sample.reference, text),
                None => extractor,
            }
        });
    Ok(DocumentValidationService::standard(
        Arc::new(extractor),
        ScoringPolicy::default(),
    )?)
}

fn demo_results() -> Result<Vec<(&'static SampleDocument, ValidationResult)>, AppError> {
    let service = demo_service()?;
    SAMPLES
        .iter()
        .map(|sample| {
            let result = service.validate(
                sample.document_type,
                &FileReference::new(sample.reference),
                None,
            )?;
            Ok::<_, AppError>((sample, result))
        })
        .collect()
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let threshold = ScoringPolicy::default().pass_threshold();

    println!("Gazette supporting-document validation demo");
    println!("Pass threshold {threshold:.0}% | suspicious band below that");
    for (sample, result) in demo_results()? {
        println!(
            "\n{} declared as {}",
            sample.reference,
            sample.document_type.label()
        );
        render_verdict(&result, threshold);
    }

    Ok(())
}

fn render_verdict(result: &ValidationResult, threshold: f64) {
    println!("  Verdict: {} | pass at {threshold:.0}%", result.summary());

    if result.checks.is_empty() {
        println!("  Document text could not be extracted; no checks were run");
        return;
    }

    for check in &result.checks {
        let mark = if check.passed { "pass" } else { "fail" };
        println!(
            "  [{mark}] {}: {}/{} - {}",
            check.name, check.score, check.max_score, check.details
        );
    }
}
