use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::documents::extraction::{ExtractionError, TextExtractor};
use crate::documents::{
    validation_router, DocumentType, DocumentTypeRegistry, DocumentValidationService,
    FileReference, ScoringPolicy,
};

pub(super) const GHANA_CARD_TEXT: &str = "\
ECOWAS IDENTITY CARD
REPUBLIC OF GHANA
Personal ID Number: GHA-724693385-3
Surname/Nom: MENSAH
Firstnames/Prénoms: KWAME KOFI
Nationality/Nationalité: GHANAIAN
Date of Birth/Date de Naissance: 12/03/1990
Sex/Sexe: M
Height/Taille: 1.75
Document Number/Numéro du Document: AB1234567
Place of Issuance/Lieu de Délivrance: ACCRA
Date of Issuance/Date de Délivrance: 01/06/2021
Date of Expiry/Date d'Expiration: 31/05/2031
";

pub(super) const STATUTORY_DECLARATION_TEXT: &str = "\
STATUTORY DECLARATION
(Statutory Declarations Act, 1971 (Act 389))
I, Kwame Mensah, of House No. 12, Ring Road, Accra, do solemnly and sincerely declare
that I was formerly known and called Kwame Asante and now wish to be known as Kwame Mensah,
conscientiously believing the same to be true.
Declared and sworn at Accra this 14th day of March, 2024
Signature of Declarant
Before me,
COMMISSIONER FOR OATHS
[Official Seal]
Stamped: High Court Registry, Accra
";

/// Heading and sworn statement only: 20 + 25 points.
pub(super) const PARTIAL_DECLARATION_TEXT: &str = "\
STATUTORY DECLARATION
Statutory Declarations Act, 1971 (Act 389)
I do solemnly and sincerely declare that the name on my records was changed by deed,
conscientiously believing the same to be true, and I make this solemn declaration by virtue of the Act.
";

pub(super) const BIRTH_CERTIFICATE_TEXT: &str = "\
REPUBLIC OF GHANA
BIRTHS AND DEATHS REGISTRY
CERTIFICATE OF BIRTH
Name: Ama Serwaa Boateng
Date of Birth: 12th March 2015
Place of Birth: Korle Bu Teaching Hospital, Accra
Signature of Registrar: ____________
Official Stamp
";

pub(super) const MARRIAGE_CERTIFICATE_TEXT: &str = "\
CERTIFICATE OF MARRIAGE
Marriages Act, 1884-1985 (Cap 127)
Husband: Kofi Asante
Wife: Abena Owusu
Date of Marriage: 2nd August 2019
Witnesses: Yaw Darko, Efua Mensah
Licence No. 4471
Signed: Rev. J. Addo, Marriage Officer
";

pub(super) fn full_text(document_type: DocumentType) -> &'static str {
    match document_type {
        DocumentType::StatutoryDeclaration => STATUTORY_DECLARATION_TEXT,
        DocumentType::GhanaCard => GHANA_CARD_TEXT,
        DocumentType::BirthCertificate => BIRTH_CERTIFICATE_TEXT,
        DocumentType::MarriageCertificate => MARRIAGE_CERTIFICATE_TEXT,
    }
}

pub(super) fn malformed_ghana_card_text() -> String {
    GHANA_CARD_TEXT.replace("GHA-724693385-3", "GHA-72469338-3")
}

/// Extractor backed by a map of literal texts; counts every call.
#[derive(Default)]
pub(super) struct MemoryExtractor {
    documents: Mutex<HashMap<FileReference, String>>,
    calls: AtomicUsize,
}

impl MemoryExtractor {
    pub(super) fn with(reference: &str, text: &str) -> Self {
        let extractor = Self::default();
        extractor.insert(reference, text);
        extractor
    }

    pub(super) fn insert(&self, reference: &str, text: &str) {
        self.documents
            .lock()
            .expect("extractor mutex poisoned")
            .insert(FileReference::new(reference), text.to_string());
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TextExtractor for MemoryExtractor {
    fn extract_text(&self, file: &FileReference) -> Result<String, ExtractionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.documents
            .lock()
            .expect("extractor mutex poisoned")
            .get(file)
            .cloned()
            .ok_or_else(|| ExtractionError::NotFound(file.clone()))
    }
}

/// Extractor whose backend is always down.
pub(super) struct FailingExtractor;

impl TextExtractor for FailingExtractor {
    fn extract_text(&self, _file: &FileReference) -> Result<String, ExtractionError> {
        Err(ExtractionError::Unavailable("ocr backend offline".to_string()))
    }
}

/// Extractor whose decoder crashes on every document.
pub(super) struct PanickingExtractor;

impl TextExtractor for PanickingExtractor {
    fn extract_text(&self, file: &FileReference) -> Result<String, ExtractionError> {
        panic!("decoder crashed on {file}")
    }
}

pub(super) fn registry() -> Arc<DocumentTypeRegistry> {
    Arc::new(DocumentTypeRegistry::standard().expect("standard profiles compile"))
}

pub(super) fn service_with<E: TextExtractor + 'static>(
    extractor: Arc<E>,
) -> DocumentValidationService<E> {
    DocumentValidationService::new(registry(), extractor, ScoringPolicy::default())
}

/// Service holding every full fixture under its document type name.
pub(super) fn fixture_service() -> (DocumentValidationService<MemoryExtractor>, Arc<MemoryExtractor>) {
    let extractor = Arc::new(MemoryExtractor::default());
    for document_type in DocumentType::ALL {
        extractor.insert(document_type.as_str(), full_text(document_type));
    }
    extractor.insert("partial-declaration", PARTIAL_DECLARATION_TEXT);
    extractor.insert("malformed-card", &malformed_ghana_card_text());
    extractor.insert("blank", "");
    (service_with(extractor.clone()), extractor)
}

pub(super) fn router_with_service<E: TextExtractor + 'static>(
    service: DocumentValidationService<E>,
) -> axum::Router {
    validation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
