use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{DocumentType, FileReference, ValidationResult};
use super::error::ValidationError;
use super::evaluation::{EvaluationEngine, ScoringPolicy};
use super::extraction::TextExtractor;
use super::registry::{DocumentTypeRegistry, RegistryError};

/// Lifecycle of one validation call, recorded on every log line it emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStage {
    Requested,
    Extracting,
    Checking,
    Scored,
    ExtractionFailed,
}

impl fmt::Display for ValidationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValidationStage::Requested => "requested",
            ValidationStage::Extracting => "extracting",
            ValidationStage::Checking => "checking",
            ValidationStage::Scored => "scored",
            ValidationStage::ExtractionFailed => "extraction_failed",
        };
        f.write_str(label)
    }
}

/// Facade composing the registry, the text extractor, and the scoring engine.
pub struct DocumentValidationService<E> {
    registry: Arc<DocumentTypeRegistry>,
    extractor: Arc<E>,
    engine: Arc<EvaluationEngine>,
}

impl<E> DocumentValidationService<E>
where
    E: TextExtractor + 'static,
{
    pub fn new(registry: Arc<DocumentTypeRegistry>, extractor: Arc<E>, policy: ScoringPolicy) -> Self {
        Self {
            registry,
            extractor,
            engine: Arc::new(EvaluationEngine::new(policy)),
        }
    }

    /// Service backed by the built-in profile for every document type.
    pub fn standard(extractor: Arc<E>, policy: ScoringPolicy) -> Result<Self, RegistryError> {
        let registry = Arc::new(DocumentTypeRegistry::standard()?);
        Ok(Self::new(registry, extractor, policy))
    }

    pub fn registry(&self) -> &DocumentTypeRegistry {
        &self.registry
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.engine.policy()
    }

    /// Validate an uploaded document against the profile for `document_type`.
    ///
    /// Unsupported types and out-of-range thresholds are rejected before the
    /// extractor is called. Extraction failures never surface as errors, and
    /// neither does a panicking extractor: both produce the fail-closed
    /// [`ValidationResult::unreadable`] verdict.
    pub fn validate(
        &self,
        document_type: DocumentType,
        file: &FileReference,
        pass_threshold: Option<f64>,
    ) -> Result<ValidationResult, ValidationError> {
        debug!(stage = %ValidationStage::Requested, %document_type, %file, ?pass_threshold);

        let profile = self.registry.profile(document_type)?;
        let policy = match pass_threshold {
            Some(threshold) => self.engine.policy().with_threshold(threshold)?,
            None => *self.engine.policy(),
        };

        debug!(stage = %ValidationStage::Extracting, %document_type, %file);
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| self.extractor.extract_text(file)));
        let text = match extracted {
            Ok(Ok(text)) => text,
            Ok(Err(error)) => {
                warn!(
                    stage = %ValidationStage::ExtractionFailed,
                    %document_type,
                    %file,
                    %error,
                    "text extraction failed; document treated as invalid"
                );
                return Ok(ValidationResult::unreadable());
            }
            Err(_) => {
                warn!(
                    stage = %ValidationStage::ExtractionFailed,
                    %document_type,
                    %file,
                    "text extractor panicked; document treated as invalid"
                );
                return Ok(ValidationResult::unreadable());
            }
        };

        debug!(
            stage = %ValidationStage::Checking,
            %document_type,
            checks = profile.checks().len(),
            characters = text.chars().count()
        );
        let checks = self.engine.run_checks(profile, &text);
        let result = EvaluationEngine::score(checks, &policy);

        info!(
            stage = %ValidationStage::Scored,
            %document_type,
            %file,
            score = result.score,
            percentage = result.percentage,
            status = %result.overall_status,
            "document validated"
        );

        Ok(result)
    }
}
