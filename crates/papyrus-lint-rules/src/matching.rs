//! Generic open/close pairing over the normalized line view.
//!
//! Pairing runs in two phases. First every unclaimed line that reads as an
//! opener is validated, in index order, and the first malformed opener is
//! reported. Then each valid opener is paired with the first unclaimed
//! closer after it; both lines are claimed, and the first opener without a
//! closer is reported.

use papyrus_lint_core::{ConsumptionSet, Document, Finding, LintContext};
use tracing::debug;

use crate::statements::StatementSpec;

/// Outcome of reading one line as a block opener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Opener {
    /// A well-formed opener. `label` names the block in messages.
    Valid { label: String },
    /// A malformed opener.
    Invalid { column: usize, message: String },
}

/// Syntax of one block family.
pub(crate) trait BlockSyntax {
    /// Rule name reported in findings.
    fn rule_name(&self) -> &'static str;

    /// Keywords of the family.
    fn spec(&self) -> StatementSpec;

    /// Reads `line` as an opener; `None` if it is not one.
    fn parse_opener(&self, line: &str) -> Option<Opener>;

    /// Returns true if `line` closes a block of this family.
    fn is_closer(&self, line: &str) -> bool;

    /// Message for an opener that never finds its closer.
    fn unclosed_message(&self, label: &str) -> String;
}

/// Finds the first unclaimed closer at or after `from`.
pub(crate) fn find_closer(
    lines: &[String],
    from: usize,
    consumed: &ConsumptionSet,
    is_closer: impl Fn(&str) -> bool,
) -> Option<usize> {
    lines
        .iter()
        .enumerate()
        .skip(from)
        .find(|&(i, line)| !consumed.is_marked(i) && is_closer(line.as_str()))
        .map(|(i, _)| i)
}

/// Validates and pairs every block of one family in `doc`.
pub(crate) fn check_blocks<S: BlockSyntax>(
    syntax: &S,
    doc: &Document,
    ctx: &mut LintContext,
) -> Option<Finding> {
    let lines = doc.normalized_lines();
    let spec = syntax.spec();

    let mut openers = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        if ctx.is_consumed(i) || line == spec.close {
            continue;
        }

        match syntax.parse_opener(line) {
            None => {}
            Some(Opener::Invalid { column, message }) => {
                return Some(Finding::at(syntax.rule_name(), doc, i + 1, column, message));
            }
            Some(Opener::Valid { label }) => openers.push((i, label)),
        }
    }

    for (i, label) in openers {
        match find_closer(lines, i + 1, ctx.consumed(), |line| syntax.is_closer(line)) {
            Some(j) => {
                debug!(
                    "{}: paired {} at {} with {} at {}",
                    doc.file_name(),
                    spec.open,
                    i + 1,
                    spec.close,
                    j + 1
                );
                ctx.consume(i);
                ctx.consume(j);
            }
            None => {
                return Some(Finding::at(
                    syntax.rule_name(),
                    doc,
                    i + 1,
                    1,
                    syntax.unclosed_message(&label),
                ));
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &[&str]) -> Vec<String> {
        src.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn finds_first_closer_after_start() {
        let lines = lines(&["if a", "endif", "if b", "endif"]);
        let consumed = ConsumptionSet::new();
        assert_eq!(find_closer(&lines, 1, &consumed, |l| l == "endif"), Some(1));
        assert_eq!(find_closer(&lines, 2, &consumed, |l| l == "endif"), Some(3));
    }

    #[test]
    fn skips_claimed_closers() {
        let lines = lines(&["if a", "if b", "endif", "endif"]);
        let mut consumed = ConsumptionSet::new();
        consumed.mark(2);
        assert_eq!(find_closer(&lines, 1, &consumed, |l| l == "endif"), Some(3));
        consumed.mark(3);
        assert_eq!(find_closer(&lines, 1, &consumed, |l| l == "endif"), None);
    }

    #[test]
    fn runs_off_the_end() {
        let lines = lines(&["if a"]);
        let consumed = ConsumptionSet::new();
        assert_eq!(find_closer(&lines, 1, &consumed, |_| true), None);
    }
}
