use super::common::*;
use crate::documents::{
    DocumentType, DocumentTypeRegistry, DocumentValidationService, FileReference, OverallStatus,
    ScoringPolicy, ValidationError, ValidationResult,
};
use crate::documents::profiles::GHANA_CARD;
use std::sync::Arc;

#[test]
fn validate_scores_extracted_text() {
    let (service, extractor) = fixture_service();

    let result = service
        .validate(
            DocumentType::GhanaCard,
            &FileReference::new("ghana-card"),
            None,
        )
        .expect("validation succeeds");

    assert_eq!(result.score, 100);
    assert_eq!(result.overall_status, OverallStatus::Valid);
    assert_eq!(extractor.calls(), 1);
}

#[test]
fn default_threshold_is_seventy() {
    let (service, _) = fixture_service();

    assert_eq!(service.policy().pass_threshold(), 70.0);
}

#[test]
fn partial_declaration_is_invalid_at_default_threshold() {
    let (service, _) = fixture_service();

    let result = service
        .validate(
            DocumentType::StatutoryDeclaration,
            &FileReference::new("partial-declaration"),
            None,
        )
        .expect("validation succeeds");

    assert_eq!(result.percentage, 45.0);
    assert!(!result.is_valid);
    assert_eq!(result.overall_status, OverallStatus::Invalid);
}

#[test]
fn threshold_override_applies_per_call() {
    let (service, _) = fixture_service();
    let file = FileReference::new("partial-declaration");

    let lenient = service
        .validate(DocumentType::StatutoryDeclaration, &file, Some(40.0))
        .expect("validation succeeds");
    let default = service
        .validate(DocumentType::StatutoryDeclaration, &file, None)
        .expect("validation succeeds");

    assert!(lenient.is_valid);
    assert_eq!(lenient.overall_status, OverallStatus::Valid);
    assert!(!default.is_valid);
    assert_eq!(default.overall_status, OverallStatus::Invalid);
}

#[test]
fn malformed_card_is_flagged_for_review() {
    let (service, _) = fixture_service();

    let result = service
        .validate(
            DocumentType::GhanaCard,
            &FileReference::new("malformed-card"),
            None,
        )
        .expect("validation succeeds");

    assert_eq!(result.percentage, 60.0);
    assert_eq!(result.overall_status, OverallStatus::Suspicious);
}

#[test]
fn is_valid_tracks_threshold_for_every_value() {
    let (service, _) = fixture_service();
    let file = FileReference::new("malformed-card");

    for threshold in [0.0, 10.0, 42.0, 59.9, 60.0, 60.1, 85.7, 100.0] {
        let result = service
            .validate(DocumentType::GhanaCard, &file, Some(threshold))
            .expect("validation succeeds");
        assert_eq!(result.is_valid, result.percentage >= threshold, "{threshold}");
        assert_eq!(
            result.overall_status == OverallStatus::Valid,
            result.is_valid,
            "{threshold}"
        );
    }
}

#[test]
fn extraction_failure_is_fail_closed_for_every_type_and_threshold() {
    let service = service_with(Arc::new(FailingExtractor));

    for document_type in DocumentType::ALL {
        for threshold in [None, Some(0.0), Some(40.0), Some(100.0)] {
            let result = service
                .validate(document_type, &FileReference::new("scan.pdf"), threshold)
                .expect("extraction failures are not errors");

            assert_eq!(result, ValidationResult::unreadable());
            assert!(result.checks.is_empty());
            assert_eq!(result.score, 0);
            assert_eq!(result.max_score, 100);
            assert_eq!(result.percentage, 0.0);
            assert!(!result.is_valid);
            assert_eq!(result.overall_status, OverallStatus::Invalid);
        }
    }
}

#[test]
fn missing_document_is_fail_closed() {
    let (service, extractor) = fixture_service();

    let result = service
        .validate(
            DocumentType::BirthCertificate,
            &FileReference::new("never-uploaded"),
            None,
        )
        .expect("missing documents are not errors");

    assert!(result.checks.is_empty());
    assert_eq!(result.overall_status, OverallStatus::Invalid);
    assert_eq!(extractor.calls(), 1);
}

#[test]
fn empty_text_still_runs_checks() {
    let (service, _) = fixture_service();

    let result = service
        .validate(
            DocumentType::MarriageCertificate,
            &FileReference::new("blank"),
            None,
        )
        .expect("validation succeeds");

    assert_eq!(result.checks.len(), 3);
    assert_eq!(result.score, 0);
    assert_eq!(result.overall_status, OverallStatus::Invalid);
}

#[test]
fn unsupported_type_fails_before_extraction() {
    let mut registry = DocumentTypeRegistry::empty();
    registry
        .register(DocumentType::GhanaCard, GHANA_CARD)
        .expect("ghana card registers");
    let extractor = Arc::new(MemoryExtractor::with("cert", BIRTH_CERTIFICATE_TEXT));
    let service = DocumentValidationService::new(
        Arc::new(registry),
        extractor.clone(),
        ScoringPolicy::default(),
    );

    let outcome = service.validate(
        DocumentType::BirthCertificate,
        &FileReference::new("cert"),
        None,
    );

    assert_eq!(
        outcome,
        Err(ValidationError::UnsupportedDocumentType(
            "birth-certificate".to_string()
        ))
    );
    assert_eq!(extractor.calls(), 0);
}

#[test]
fn invalid_threshold_fails_before_extraction() {
    let (service, extractor) = fixture_service();

    let outcome = service.validate(
        DocumentType::GhanaCard,
        &FileReference::new("ghana-card"),
        Some(140.0),
    );

    assert_eq!(outcome, Err(ValidationError::InvalidThreshold(140.0)));
    assert_eq!(extractor.calls(), 0);
}

#[test]
fn repeated_validation_is_identical() {
    let (service, _) = fixture_service();

    for document_type in DocumentType::ALL {
        let file = FileReference::new(document_type.as_str());
        let first = service
            .validate(document_type, &file, Some(55.0))
            .expect("validation succeeds");
        let second = service
            .validate(document_type, &file, Some(55.0))
            .expect("validation succeeds");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).expect("serializes"),
            serde_json::to_string(&second).expect("serializes")
        );
    }
}

#[test]
fn custom_policy_shifts_the_review_band() {
    let policy = ScoringPolicy::new(70.0, 0.9).expect("valid policy");
    let extractor = Arc::new(MemoryExtractor::with("card", &malformed_ghana_card_text()));
    let service = DocumentValidationService::new(registry(), extractor, policy);

    let result = service
        .validate(DocumentType::GhanaCard, &FileReference::new("card"), None)
        .expect("validation succeeds");

    assert_eq!(result.percentage, 60.0);
    assert_eq!(result.overall_status, OverallStatus::Invalid);
}

#[test]
fn results_serialize_with_camel_case_fields() {
    let (service, _) = fixture_service();

    let result = service
        .validate(
            DocumentType::GhanaCard,
            &FileReference::new("ghana-card"),
            None,
        )
        .expect("validation succeeds");
    let payload = serde_json::to_value(&result).expect("serializes");

    assert_eq!(payload["maxScore"], 100);
    assert_eq!(payload["isValid"], true);
    assert_eq!(payload["overallStatus"], "valid");
    assert_eq!(payload["checks"][0]["name"], "Personal ID Number Format");
    assert_eq!(payload["checks"][0]["maxScore"], 40);
}

#[test]
fn summary_describes_the_verdict() {
    let (service, _) = fixture_service();

    let scored = service
        .validate(
            DocumentType::GhanaCard,
            &FileReference::new("malformed-card"),
            None,
        )
        .expect("validation succeeds");

    assert_eq!(
        scored.summary(),
        "suspicious at 60.0% (60/100 points, 2/3 checks passed)"
    );
    assert_eq!(
        ValidationResult::unreadable().summary(),
        "invalid (no readable content)"
    );
}

#[test]
fn panicking_extractor_is_fail_closed() {
    let service = service_with(Arc::new(PanickingExtractor));

    let result = service
        .validate(
            DocumentType::GhanaCard,
            &FileReference::new("corrupt.txt"),
            None,
        )
        .expect("extractor panics are not errors");

    assert_eq!(result, ValidationResult::unreadable());
}

#[test]
fn score_equal_to_threshold_is_valid() {
    let text = "GHA-724693385-3\nSurname: OWUSU\nFirstnames: ABENA\nNationality: GHANAIAN\n\
                Date of Birth: 05/11/1988\nSex: F\nHeight: 1.62";
    let extractor = Arc::new(MemoryExtractor::with("id-and-fields", text));
    let service = service_with(extractor);

    let result = service
        .validate(
            DocumentType::GhanaCard,
            &FileReference::new("id-and-fields"),
            Some(58.0),
        )
        .expect("validation succeeds");

    assert_eq!(result.score, 58);
    assert_eq!(result.percentage, 58.0);
    assert!(result.is_valid);
    assert_eq!(result.overall_status, OverallStatus::Valid);
}
