use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::DocumentType;
use super::evaluation::{Check, CheckSpec};
use super::profiles::{standard_profiles, PROFILE_TOTAL};
use super::error::ValidationError;

/// Errors raised while assembling the registry at startup.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("check '{check}' signal '{signal}' has an invalid pattern")]
    InvalidPattern {
        check: &'static str,
        signal: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("check '{check}' pass bar {pass_bar} must be between 1 and {max_score}")]
    InvalidPassBar {
        check: &'static str,
        pass_bar: u32,
        max_score: u32,
    },
    #[error("check '{check}' signal '{signal}' awards {points} points, above the check maximum {max_score}")]
    SignalExceedsMaximum {
        check: &'static str,
        signal: &'static str,
        points: u32,
        max_score: u32,
    },
    #[error("profile for {document_type} totals {total} points (expected {expected})")]
    UnbalancedProfile {
        document_type: DocumentType,
        total: u32,
        expected: u32,
    },
    #[error("profile for {0} is already registered")]
    DuplicateProfile(DocumentType),
}

/// Ordered, fully weighted set of checks for one document type.
#[derive(Debug, Clone)]
pub struct CheckProfile {
    document_type: DocumentType,
    checks: Vec<Check>,
}

impl CheckProfile {
    pub fn compile(document_type: DocumentType, specs: &[CheckSpec]) -> Result<Self, RegistryError> {
        let checks = specs
            .iter()
            .map(Check::compile)
            .collect::<Result<Vec<_>, _>>()?;

        let total: u32 = checks.iter().map(Check::max_score).sum();
        if total != PROFILE_TOTAL {
            return Err(RegistryError::UnbalancedProfile {
                document_type,
                total,
                expected: PROFILE_TOTAL,
            });
        }

        Ok(Self {
            document_type,
            checks,
        })
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub(crate) fn checks(&self) -> &[Check] {
        &self.checks
    }

    pub fn total(&self) -> u32 {
        self.checks.iter().map(Check::max_score).sum()
    }

    pub fn summary(&self) -> ProfileSummary {
        ProfileSummary {
            document_type: self.document_type,
            label: self.document_type.label(),
            total: self.total(),
            checks: self
                .checks
                .iter()
                .map(|check| CheckSummary {
                    name: check.name(),
                    max_score: check.max_score(),
                    pass_bar: check.pass_bar(),
                })
                .collect(),
        }
    }
}

/// Maps each supported document type to its check profile.
#[derive(Debug, Clone, Default)]
pub struct DocumentTypeRegistry {
    profiles: BTreeMap<DocumentType, CheckProfile>,
}

impl DocumentTypeRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the built-in profile for every document type.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = Self::empty();
        for (document_type, specs) in standard_profiles() {
            registry.register(document_type, specs)?;
        }
        Ok(registry)
    }

    pub fn register(
        &mut self,
        document_type: DocumentType,
        specs: &[CheckSpec],
    ) -> Result<&mut Self, RegistryError> {
        if self.profiles.contains_key(&document_type) {
            return Err(RegistryError::DuplicateProfile(document_type));
        }
        let profile = CheckProfile::compile(document_type, specs)?;
        self.profiles.insert(document_type, profile);
        Ok(self)
    }

    pub fn profile(&self, document_type: DocumentType) -> Result<&CheckProfile, ValidationError> {
        self.profiles
            .get(&document_type)
            .ok_or_else(|| ValidationError::UnsupportedDocumentType(document_type.to_string()))
    }

    pub fn document_types(&self) -> impl Iterator<Item = DocumentType> + '_ {
        self.profiles.keys().copied()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &CheckProfile> {
        self.profiles.values()
    }
}

/// Public description of a profile, used by listings and the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub document_type: DocumentType,
    pub label: &'static str,
    pub total: u32,
    pub checks: Vec<CheckSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSummary {
    pub name: &'static str,
    pub max_score: u32,
    pub pass_bar: u32,
}
