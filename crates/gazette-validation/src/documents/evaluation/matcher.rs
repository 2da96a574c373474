use regex::{Regex, RegexBuilder};

/// Declarative description of a sub-signal test, compiled into a [`Matcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatcherSpec {
    /// Plain phrase; any occurrence counts.
    Keyword(&'static str),
    /// Any one of several phrases; any occurrence counts.
    AnyKeyword(&'static [&'static str]),
    /// Regular expression, matched case-insensitively.
    Pattern(&'static str),
    /// Field label with synonyms, each required to stand as whole words.
    FieldLabel(&'static [&'static str]),
}

/// Compiled presence test run against normalized (lowercased) document text.
#[derive(Debug, Clone)]
pub enum Matcher {
    Keyword(Vec<String>),
    Pattern(Regex),
}

impl Matcher {
    pub fn compile(spec: &MatcherSpec) -> Result<Self, regex::Error> {
        match spec {
            MatcherSpec::Keyword(phrase) => Ok(Self::Keyword(vec![phrase.to_lowercase()])),
            MatcherSpec::AnyKeyword(phrases) => Ok(Self::Keyword(
                phrases.iter().map(|phrase| phrase.to_lowercase()).collect(),
            )),
            MatcherSpec::Pattern(pattern) => case_insensitive(pattern).map(Self::Pattern),
            MatcherSpec::FieldLabel(synonyms) => {
                let alternatives = synonyms
                    .iter()
                    .map(|label| label_pattern(label))
                    .collect::<Vec<_>>()
                    .join("|");
                case_insensitive(&format!(r"\b(?:{alternatives})\b")).map(Self::Pattern)
            }
        }
    }

    /// `text` must already be lowercased; patterns are case-insensitive regardless.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Keyword(phrases) => phrases.iter().any(|phrase| text.contains(phrase.as_str())),
            Matcher::Pattern(regex) => regex.is_match(text),
        }
    }
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

/// Escapes a label and lets any run of whitespace stand in for its spaces,
/// since extracted text often breaks labels across lines.
fn label_pattern(label: &str) -> String {
    label
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
