//! Property declaration rule.
//!
//! Checks single-line auto properties of the form
//! `Type[[]] Property Name [= default] Auto|AutoReadOnly [Conditional|Hidden]`.

use lazy_static::lazy_static;
use papyrus_lint_core::{Document, Finding, LintContext, Rule, ScriptFlag};
use regex::Regex;

lazy_static! {
    // Groups: type, name, default, access flag, visibility flag.
    static ref PROPERTY: Regex = Regex::new(
        r#"^(\w+(?:\[\])?)\s+Property\b(?:\s+(\w+)?\s*(?:=\s*("[^"]*"|-?[\w.]+))?\s*(?:(\w+)?\s*(\w+)?$)?)?"#
    )
    .unwrap_or_else(|e| panic!("property regex: {e}"));
}

/// Access qualifier of an auto property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    Auto,
    AutoReadOnly,
}

impl Access {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "Auto" => Some(Self::Auto),
            "AutoReadOnly" => Some(Self::AutoReadOnly),
            _ => None,
        }
    }
}

/// Validates every property declaration in the script.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyRule;

impl PropertyRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn check_line(line: &str) -> Option<String> {
        let caps = PROPERTY.captures(line)?;
        let ty = caps.get(1).map_or("", |m| m.as_str());

        let Some(name) = caps.get(2).map(|m| m.as_str()) else {
            return Some(format!("{ty} property error: missing name"));
        };
        let fault = |msg: String| Some(format!("{ty} {name} property error: {msg}"));

        let Some(access_token) = caps.get(4).map(|m| m.as_str()) else {
            return fault("missing flag".to_string());
        };
        let Some(access) = Access::from_token(access_token) else {
            return fault(format!("unknown flag {access_token}"));
        };
        if access == Access::AutoReadOnly && caps.get(3).is_none() {
            return fault("an AutoReadOnly property must have a default value".to_string());
        }

        if let Some(token) = caps.get(5).map(|m| m.as_str()) {
            match ScriptFlag::from_token(token) {
                None => return fault(format!("unknown flag {token}")),
                Some(ScriptFlag::Conditional) if access != Access::Auto => {
                    return fault(
                        "Conditional is only applicable on property flagged Auto".to_string(),
                    );
                }
                Some(_) => {}
            }
        }

        None
    }
}

impl Rule for PropertyRule {
    fn name(&self) -> &'static str {
        "property"
    }

    fn code(&self) -> &'static str {
        "PL007"
    }

    fn description(&self) -> &'static str {
        "Auto properties are named, flagged Auto or AutoReadOnly, and read-only ones have a default"
    }

    fn check(&self, doc: &Document, _ctx: &mut LintContext) -> Option<Finding> {
        doc.normalized_lines()
            .iter()
            .enumerate()
            .find_map(|(i, line)| {
                Self::check_line(line)
                    .map(|message| Finding::at(self.name(), doc, i + 1, line.len(), message))
            })
    }
}
