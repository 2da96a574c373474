use super::super::domain::{CheckResult, OverallStatus, ValidationResult};
use super::config::ScoringPolicy;

pub(crate) fn classify(percentage: f64, policy: &ScoringPolicy) -> OverallStatus {
    if percentage >= policy.pass_threshold() {
        OverallStatus::Valid
    } else if percentage >= policy.suspicious_floor() {
        OverallStatus::Suspicious
    } else {
        OverallStatus::Invalid
    }
}

pub(crate) fn score_checks(checks: Vec<CheckResult>, policy: &ScoringPolicy) -> ValidationResult {
    let score: u32 = checks.iter().map(|check| check.score).sum();
    let max_score: u32 = checks.iter().map(|check| check.max_score).sum();

    let percentage = if max_score == 0 {
        0.0
    } else {
        f64::from(score) * 100.0 / f64::from(max_score)
    };

    ValidationResult {
        score,
        max_score,
        percentage,
        is_valid: percentage >= policy.pass_threshold(),
        checks,
        overall_status: classify(percentage, policy),
    }
}
