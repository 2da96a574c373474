use super::super::domain::CheckResult;
use super::super::registry::RegistryError;
use super::matcher::{Matcher, MatcherSpec};

/// One atomic presence test and the points it earns.
#[derive(Debug, Clone, Copy)]
pub struct SignalSpec {
    pub label: &'static str,
    pub matcher: MatcherSpec,
    pub points: u32,
}

/// How matched signals are reported in the rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tally {
    /// Independent sub-signals, listed by name.
    Signals,
    /// Form field labels, reported as a count of fields found.
    Fields,
}

/// Table entry describing one weighted check.
#[derive(Debug, Clone, Copy)]
pub struct CheckSpec {
    pub name: &'static str,
    pub max_score: u32,
    pub pass_bar: u32,
    pub tally: Tally,
    pub signals: &'static [SignalSpec],
}

#[derive(Debug, Clone)]
struct CompiledSignal {
    label: &'static str,
    matcher: Matcher,
    points: u32,
}

/// A check with its matchers compiled, ready to run against document text.
#[derive(Debug, Clone)]
pub struct Check {
    name: &'static str,
    max_score: u32,
    pass_bar: u32,
    tally: Tally,
    signals: Vec<CompiledSignal>,
}

impl Check {
    pub fn compile(spec: &CheckSpec) -> Result<Self, RegistryError> {
        if spec.pass_bar == 0 || spec.pass_bar > spec.max_score {
            return Err(RegistryError::InvalidPassBar {
                check: spec.name,
                pass_bar: spec.pass_bar,
                max_score: spec.max_score,
            });
        }

        let mut signals = Vec::with_capacity(spec.signals.len());
        for signal in spec.signals {
            if signal.points > spec.max_score {
                return Err(RegistryError::SignalExceedsMaximum {
                    check: spec.name,
                    signal: signal.label,
                    points: signal.points,
                    max_score: spec.max_score,
                });
            }
            let matcher =
                Matcher::compile(&signal.matcher).map_err(|source| RegistryError::InvalidPattern {
                    check: spec.name,
                    signal: signal.label,
                    source,
                })?;
            signals.push(CompiledSignal {
                label: signal.label,
                matcher,
                points: signal.points,
            });
        }

        Ok(Self {
            name: spec.name,
            max_score: spec.max_score,
            pass_bar: spec.pass_bar,
            tally: spec.tally,
            signals,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn pass_bar(&self) -> u32 {
        self.pass_bar
    }

    /// Scores lowercased document text. Each signal counts at most once.
    pub fn run(&self, text: &str) -> CheckResult {
        let mut detected = Vec::new();
        let mut missing = Vec::new();
        let mut earned: u32 = 0;

        for signal in &self.signals {
            if signal.matcher.is_match(text) {
                earned = earned.saturating_add(signal.points);
                detected.push(signal.label);
            } else {
                missing.push(signal.label);
            }
        }

        let score = earned.min(self.max_score);
        let details = match self.tally {
            Tally::Signals => describe_signals(&detected, &missing),
            Tally::Fields => describe_fields(&detected, &missing),
        };

        CheckResult {
            name: self.name.to_string(),
            passed: score >= self.pass_bar,
            score,
            max_score: self.max_score,
            details,
        }
    }
}

fn describe_signals(detected: &[&str], missing: &[&str]) -> String {
    match (detected.is_empty(), missing.is_empty()) {
        (true, _) => format!("no signals detected (expected: {})", missing.join(", ")),
        (false, true) => format!("detected: {}", detected.join(", ")),
        (false, false) => format!(
            "detected: {}; missing: {}",
            detected.join(", "),
            missing.join(", ")
        ),
    }
}

fn describe_fields(found: &[&str], missing: &[&str]) -> String {
    let total = found.len() + missing.len();
    if found.is_empty() {
        return format!("no card fields detected (0 of {total})");
    }
    let mut details = format!(
        "found {} of {} fields: {}",
        found.len(),
        total,
        found.join(", ")
    );
    if !missing.is_empty() {
        details.push_str(&format!("; missing: {}", missing.join(", ")));
    }
    details
}
