//! Builtin Detection Rules
//!
//! The ordered rule table evaluated by the classifier. Order is part of the
//! semantics: an earlier, stricter rule shadows later, looser ones, so
//! reordering or tightening an entry can reclassify inputs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::classifier::Label;

/// Builtin rule table, in evaluation order.
///
/// Patterns use `[0-9]` rather than `\d` so only ASCII digits qualify.
pub const BUILTIN_RULES: &[BuiltinRule] = &[
    BuiltinRule {
        name: "GOOGLE_RE",
        pattern: r"\A[0-9]{3}-[0-9]{3}-[0-9]{4}\z",
        label: Label::Google,
        reason: "matched GOOGLE_RE",
    },
    BuiltinRule {
        name: "YAHOO_RE",
        pattern: r"\A[0-9]+\z",
        label: Label::Yahoo,
        reason: "matched YAHOO_RE",
    },
    BuiltinRule {
        name: "MSA_RE",
        pattern: r"\A[A-Za-z]",
        label: Label::Msa,
        reason: "starts with a letter (MSA rule)",
    },
];

static BUILTIN_RULE_SET: Lazy<RuleSet> = Lazy::new(|| RuleSet::compile(BUILTIN_RULES));

/// Static definition of a rule
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRule {
    /// Rule identifier (shown in logs)
    pub name: &'static str,
    /// Regular expression the cleaned input is tested against
    pub pattern: &'static str,
    /// Label produced on match
    pub label: Label,
    /// Human-readable justification
    pub reason: &'static str,
}

/// A rule with its pattern compiled
#[derive(Debug)]
pub struct CompiledRule {
    pub def: &'static BuiltinRule,
    regex: Regex,
}

impl CompiledRule {
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Ordered, read-only set of compiled rules.
#[derive(Debug)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    fn compile(defs: &'static [BuiltinRule]) -> Self {
        let rules = defs
            .iter()
            .map(|def| CompiledRule {
                def,
                regex: Regex::new(def.pattern).expect("Valid regex pattern"),
            })
            .collect();
        Self { rules }
    }

    /// Shared instance compiled from [`BUILTIN_RULES`] on first use.
    pub fn builtin() -> &'static RuleSet {
        &BUILTIN_RULE_SET
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }

    /// First rule whose pattern matches, scanning in table order.
    pub fn first_match(&self, text: &str) -> Option<&'static BuiltinRule> {
        self.rules
            .iter()
            .find(|rule| rule.is_match(text))
            .map(|rule| rule.def)
    }
}
