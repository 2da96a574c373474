use super::super::error::ValidationError;

pub const DEFAULT_PASS_THRESHOLD: f64 = 70.0;

/// Fraction of the pass threshold below which a document is rejected outright
/// instead of being flagged for manual review.
pub const DEFAULT_SUSPICIOUS_FACTOR: f64 = 0.7;

/// Grading dials applied to every profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringPolicy {
    pass_threshold: f64,
    suspicious_factor: f64,
}

impl ScoringPolicy {
    pub fn new(pass_threshold: f64, suspicious_factor: f64) -> Result<Self, ValidationError> {
        let policy = Self::default().with_threshold(pass_threshold)?;
        if !suspicious_factor.is_finite() || !(0.0..=1.0).contains(&suspicious_factor) {
            return Err(ValidationError::InvalidSuspiciousFactor(suspicious_factor));
        }
        Ok(Self {
            suspicious_factor,
            ..policy
        })
    }

    /// Copy of this policy with a different pass threshold.
    pub fn with_threshold(self, pass_threshold: f64) -> Result<Self, ValidationError> {
        if !pass_threshold.is_finite() || !(0.0..=100.0).contains(&pass_threshold) {
            return Err(ValidationError::InvalidThreshold(pass_threshold));
        }
        Ok(Self {
            pass_threshold,
            ..self
        })
    }

    pub fn pass_threshold(&self) -> f64 {
        self.pass_threshold
    }

    pub fn suspicious_factor(&self) -> f64 {
        self.suspicious_factor
    }

    /// Lowest percentage still routed to manual review.
    pub fn suspicious_floor(&self) -> f64 {
        self.pass_threshold * self.suspicious_factor
    }
}

impl Default for ScoringPolicy {
    fn default() -> Self {
        Self {
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            suspicious_factor: DEFAULT_SUSPICIOUS_FACTOR,
        }
    }
}
