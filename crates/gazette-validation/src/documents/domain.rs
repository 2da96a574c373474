use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

/// Supporting document types accepted alongside gazette applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    StatutoryDeclaration,
    GhanaCard,
    BirthCertificate,
    MarriageCertificate,
}

impl DocumentType {
    pub const ALL: [DocumentType; 4] = [
        DocumentType::StatutoryDeclaration,
        DocumentType::GhanaCard,
        DocumentType::BirthCertificate,
        DocumentType::MarriageCertificate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::StatutoryDeclaration => "statutory-declaration",
            DocumentType::GhanaCard => "ghana-card",
            DocumentType::BirthCertificate => "birth-certificate",
            DocumentType::MarriageCertificate => "marriage-certificate",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::StatutoryDeclaration => "Statutory Declaration",
            DocumentType::GhanaCard => "Ghana Card",
            DocumentType::BirthCertificate => "Birth Certificate",
            DocumentType::MarriageCertificate => "Marriage Certificate",
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        DocumentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ValidationError::UnsupportedDocumentType(value.trim().to_string()))
    }
}

/// Opaque handle naming an uploaded file; only the extractor interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileReference(pub String);

impl FileReference {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of a single check, kept for the audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub score: u32,
    pub max_score: u32,
    pub details: String,
}

/// Tri-state verdict handed back to reviewers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Valid,
    Suspicious,
    Invalid,
}

impl OverallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OverallStatus::Valid => "valid",
            OverallStatus::Suspicious => "suspicious",
            OverallStatus::Invalid => "invalid",
        }
    }
}

impl fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Final verdict for one validation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub is_valid: bool,
    pub checks: Vec<CheckResult>,
    pub overall_status: OverallStatus,
}

impl ValidationResult {
    /// Fail-closed verdict used when no readable text could be obtained.
    pub fn unreadable() -> Self {
        Self {
            score: 0,
            max_score: super::profiles::PROFILE_TOTAL,
            percentage: 0.0,
            is_valid: false,
            checks: Vec::new(),
            overall_status: OverallStatus::Invalid,
        }
    }

    pub fn summary(&self) -> String {
        if self.checks.is_empty() && self.score == 0 {
            return format!("{} (no readable content)", self.overall_status);
        }
        let passed = self.checks.iter().filter(|check| check.passed).count();
        format!(
            "{} at {:.1}% ({}/{} points, {}/{} checks passed)",
            self.overall_status,
            self.percentage,
            self.score,
            self.max_score,
            passed,
            self.checks.len()
        )
    }
}
