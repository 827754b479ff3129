//! Header rule: the mandatory `Scriptname` declaration.

use lazy_static::lazy_static;
use papyrus_lint_core::{Document, Finding, LintContext, Rule, ScriptFlag, ScriptHeader};
use regex::Regex;
use tracing::debug;

/// Keyword that opens the header line.
pub const HEADER_KEYWORD: &str = "Scriptname";

/// Trailing flags a header may carry.
const MAX_FLAGS: usize = 2;

lazy_static! {
    // Groups: keyword, separator, name, `extends`, parent, trailing tokens.
    static ref HEADER: Regex = Regex::new(
        r"^(Scriptname)(\s+)?(\w+)?(?:\s+(extends)\b(?:\s+(\w+))?)?([^;]*)"
    )
    .unwrap_or_else(|e| panic!("header regex: {e}"));
    static ref TOKEN: Regex = Regex::new(r"\S+").unwrap_or_else(|e| panic!("token regex: {e}"));
}

/// Validates the first normalized line as the script header.
///
/// The declared name must equal the file's base name without extension, and
/// any trailing token must be `Conditional` or `Hidden`. A valid header is
/// recorded in the context and its line is claimed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptNameRule;

impl ScriptNameRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn error(&self, doc: &Document, column: usize, fault: impl std::fmt::Display) -> Finding {
        Finding::at(
            self.name(),
            doc,
            1,
            column,
            format!("{HEADER_KEYWORD} error: {fault}"),
        )
    }
}

impl Rule for ScriptNameRule {
    fn name(&self) -> &'static str {
        "script-name"
    }

    fn code(&self) -> &'static str {
        "PL002"
    }

    fn description(&self) -> &'static str {
        "The first line declares a Scriptname matching the file name"
    }

    fn check(&self, doc: &Document, ctx: &mut LintContext) -> Option<Finding> {
        let no_header = || self.error(doc, 1, format!("no {HEADER_KEYWORD} specified"));

        let Some(line) = doc.normalized_lines().first() else {
            return Some(no_header());
        };
        let Some(caps) = HEADER.captures(line) else {
            return Some(no_header());
        };

        let Some(separator) = caps.get(2) else {
            return Some(self.error(
                doc,
                HEADER_KEYWORD.len(),
                format!("missing space after {HEADER_KEYWORD}"),
            ));
        };

        let expected = doc.script_name();
        let name_column = HEADER_KEYWORD.len() + separator.as_str().len();
        let name = match caps.get(3).map(|m| m.as_str()) {
            None => return Some(self.error(doc, name_column, "missing name")),
            Some(name) if name != expected => {
                return Some(self.error(
                    doc,
                    name_column,
                    format!("{HEADER_KEYWORD} must match filename, {expected} expected, got {name}"),
                ));
            }
            Some(name) => name,
        };

        if let Some(extends) = caps.get(4) {
            if caps.get(5).is_none() {
                return Some(self.error(
                    doc,
                    extends.end(),
                    "missing parent script after extends",
                ));
            }
        }

        let mut flags = Vec::new();
        if let Some(rest) = caps.get(6) {
            for (i, token) in TOKEN.find_iter(rest.as_str()).enumerate() {
                match ScriptFlag::from_token(token.as_str()) {
                    Some(flag) if i < MAX_FLAGS => flags.push(flag),
                    _ => {
                        return Some(self.error(
                            doc,
                            rest.start() + token.start(),
                            format!("unknown flag {}", token.as_str()),
                        ));
                    }
                }
            }
        }

        let header = ScriptHeader {
            name: name.to_string(),
            parent: caps.get(5).map(|m| m.as_str().to_string()),
            flags,
            end_column: line.len(),
        };
        debug!(
            "{}: header {} (parent {:?}, flags {:?})",
            doc.file_name(),
            header.name,
            header.parent,
            header.flags
        );

        ctx.record_header(header);
        ctx.consume(0);
        None
    }
}
