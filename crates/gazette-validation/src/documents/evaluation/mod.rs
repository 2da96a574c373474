mod config;
mod matcher;
mod policy;
mod rules;

pub use config::{ScoringPolicy, DEFAULT_PASS_THRESHOLD, DEFAULT_SUSPICIOUS_FACTOR};
pub use matcher::MatcherSpec;
pub use rules::{Check, CheckSpec, SignalSpec, Tally};

use super::domain::{CheckResult, ValidationResult};
use super::registry::CheckProfile;

/// Stateless evaluator that runs a profile against text and grades the outcome.
#[derive(Debug, Clone)]
pub struct EvaluationEngine {
    policy: ScoringPolicy,
}

impl EvaluationEngine {
    pub fn new(policy: ScoringPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Runs every check in profile order; no check sees another's result.
    pub fn run_checks(&self, profile: &CheckProfile, text: &str) -> Vec<CheckResult> {
        let normalized = text.to_lowercase();
        profile
            .checks()
            .iter()
            .map(|check| check.run(&normalized))
            .collect()
    }

    /// Grades check results under `policy`, which may carry a per-call threshold.
    pub fn score(checks: Vec<CheckResult>, policy: &ScoringPolicy) -> ValidationResult {
        policy::score_checks(checks, policy)
    }
}
