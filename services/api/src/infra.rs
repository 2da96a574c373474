use gazette_validation::documents::{DocumentType, ExtractionError, FileReference, TextExtractor};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reads uploaded plain-text documents from beneath a fixed root directory.
#[derive(Debug, Clone)]
pub(crate) struct FileSystemTextExtractor {
    root: PathBuf,
}

impl FileSystemTextExtractor {
    pub(crate) fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, file: &FileReference) -> Result<PathBuf, ExtractionError> {
        let relative = Path::new(file.as_str());
        if file.as_str().trim().is_empty() || relative.is_absolute() {
            return Err(ExtractionError::InvalidReference(file.clone()));
        }
        let escapes_root = relative
            .components()
            .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir));
        if escapes_root {
            return Err(ExtractionError::InvalidReference(file.clone()));
        }
        Ok(self.root.join(relative))
    }
}

impl TextExtractor for FileSystemTextExtractor {
    fn extract_text(&self, file: &FileReference) -> Result<String, ExtractionError> {
        let path = self.resolve(file)?;

        let format = mime_guess::from_path(&path).first_or_octet_stream();
        if format.type_() != mime_guess::mime::TEXT {
            return Err(ExtractionError::UnsupportedFormat {
                file: file.clone(),
                format: format.essence_str().to_string(),
            });
        }

        let bytes = fs::read(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ExtractionError::NotFound(file.clone()),
            _ => ExtractionError::Io {
                file: file.clone(),
                source,
            },
        })?;

        String::from_utf8(bytes).map_err(|_| ExtractionError::Unreadable(file.clone()))
    }
}

/// Fixed reference-to-text map; unknown references are reported missing.
#[derive(Debug, Clone, Default)]
pub(crate) struct InMemoryTextExtractor {
    documents: HashMap<FileReference, String>,
}

impl InMemoryTextExtractor {
    pub(crate) fn with_document(mut self, reference: &str, text: impl Into<String>) -> Self {
        self.documents
            .insert(FileReference::new(reference), text.into());
        self
    }
}

impl TextExtractor for InMemoryTextExtractor {
    fn extract_text(&self, file: &FileReference) -> Result<String, ExtractionError> {
        self.documents
            .get(file)
            .cloned()
            .ok_or_else(|| ExtractionError::NotFound(file.clone()))
    }
}

pub(crate) fn parse_document_type(raw: &str) -> Result<DocumentType, String> {
    raw.parse::<DocumentType>().map_err(|err| {
        let known: Vec<&str> = DocumentType::ALL.iter().map(|kind| kind.as_str()).collect();
        format!("{err} (expected one of: {})", known.join(", "))
    })
}
