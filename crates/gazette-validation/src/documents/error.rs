/// Caller errors raised before any validation work begins.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("unsupported document type: {0}")]
    UnsupportedDocumentType(String),
    #[error("pass threshold {0} must be a percentage between 0 and 100")]
    InvalidThreshold(f64),
    #[error("suspicious factor {0} must be between 0 and 1")]
    InvalidSuspiciousFactor(f64),
}
