//! Supporting-document validation for gazette applications.
//!
//! Uploaded documents are reduced to text by a [`TextExtractor`], scored by the
//! check profile registered for their declared [`DocumentType`], and graded as
//! valid, suspicious, or invalid with a per-check audit trail.

pub mod domain;
pub mod error;
pub(crate) mod evaluation;
pub mod extraction;
pub mod profiles;
pub mod registry;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{CheckResult, DocumentType, FileReference, OverallStatus, ValidationResult};
pub use evaluation::{
    CheckSpec, MatcherSpec, ScoringPolicy, SignalSpec, Tally, DEFAULT_PASS_THRESHOLD,
    DEFAULT_SUSPICIOUS_FACTOR,
};
pub use extraction::{ExtractionError, TextExtractor};
pub use registry::{CheckProfile, CheckSummary, DocumentTypeRegistry, ProfileSummary, RegistryError};
pub use router::{validation_router, ValidateDocumentRequest};
pub use error::ValidationError;
pub use service::{DocumentValidationService, ValidationStage};
