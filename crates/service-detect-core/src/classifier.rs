//! Identifier Classifier
//!
//! Maps a cleaned identifier to exactly one [`Label`] by scanning
//! [`RuleSet::builtin`] and falling back to [`Label::Unknown`].

use std::fmt;

use tracing::debug;

use crate::input::clean;
use crate::rule::RuleSet;

const NO_MATCH_REASON: &str = "no pattern matched";

/// Service category an identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    /// `NNN-NNN-NNNN`
    Google,
    /// Digits only
    Yahoo,
    /// Starts with an ASCII letter
    Msa,
    /// Nothing matched
    Unknown,
}

impl Label {
    /// All labels, in rule order with the fallback last.
    pub const ALL: [Label; 4] = [Label::Google, Label::Yahoo, Label::Msa, Label::Unknown];

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Google => "google",
            Label::Yahoo => "yahoo",
            Label::Msa => "msa",
            Label::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub label: Label,
    pub reason: &'static str,
}

/// Full pipeline result: the input as given, as cleaned, and its label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub raw: String,
    pub cleaned: String,
    pub classification: Classification,
}

/// Classify an already-cleaned identifier. First matching rule wins.
pub fn classify(cleaned: &str) -> Classification {
    match RuleSet::builtin().first_match(cleaned) {
        Some(rule) => {
            debug!(rule = rule.name, label = %rule.label, "rule matched");
            Classification {
                label: rule.label,
                reason: rule.reason,
            }
        }
        None => {
            debug!(label = %Label::Unknown, "no rule matched");
            Classification {
                label: Label::Unknown,
                reason: NO_MATCH_REASON,
            }
        }
    }
}

/// Clean `raw` and classify the result.
pub fn detect(raw: &str) -> Detection {
    let cleaned = clean(raw);
    let classification = classify(&cleaned);
    Detection {
        raw: raw.to_string(),
        cleaned,
        classification,
    }
}
