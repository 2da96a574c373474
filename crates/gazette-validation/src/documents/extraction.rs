use super::domain::FileReference;

/// Collaborator turning an uploaded file into its visible text.
///
/// Implementations decide how text is produced (plain read, OCR, PDF parsing).
/// Empty content is `Ok(String::new())`; only genuine failures return `Err`.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, file: &FileReference) -> Result<String, ExtractionError>;
}

impl<T: TextExtractor + ?Sized> TextExtractor for std::sync::Arc<T> {
    fn extract_text(&self, file: &FileReference) -> Result<String, ExtractionError> {
        (**self).extract_text(file)
    }
}

/// Failure reported by a text extractor.
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("document not found: {0}")]
    NotFound(FileReference),
    #[error("invalid document reference: {0}")]
    InvalidReference(FileReference),
    #[error("unsupported document format '{format}' for {file}")]
    UnsupportedFormat { file: FileReference, format: String },
    #[error("document content is unreadable: {0}")]
    Unreadable(FileReference),
    #[error("failed to read {file}")]
    Io {
        file: FileReference,
        #[source]
        source: std::io::Error,
    },
    #[error("extractor unavailable: {0}")]
    Unavailable(String),
}
