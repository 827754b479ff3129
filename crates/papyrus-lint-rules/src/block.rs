//! Rules for named blocks: `Function ... EndFunction` and `Event ... EndEvent`.
//!
//! An opener has the shape `[ReturnType[[]]] Keyword Name(args)`. It must
//! name the block, open and close its argument list, and not end the list
//! with a comma. Its closer is a line reading exactly `EndFunction` or
//! `EndEvent`.

use lazy_static::lazy_static;
use papyrus_lint_core::{Document, Finding, LintContext, Rule};
use regex::Regex;

use crate::matching::{check_blocks, BlockSyntax, Opener};
use crate::statements::{BlockKind, StatementSpec};

lazy_static! {
    static ref FUNCTION_OPENER: Regex = opener_regex(BlockKind::Function);
    static ref EVENT_OPENER: Regex = opener_regex(BlockKind::Event);
}

fn opener_regex(kind: BlockKind) -> Regex {
    let open = regex::escape(kind.spec().open);
    Regex::new(&format!(
        r"^(?:(\w+(?:\[\])?)\s+)?{open}\b(\s*)(\w+)?(\()?([^)]+)?(\))?"
    ))
    .unwrap_or_else(|e| panic!("{open} opener regex: {e}"))
}

/// Validates named blocks of one family and pairs them with their closers.
#[derive(Debug, Clone)]
pub struct BlockRule {
    kind: BlockKind,
    name: &'static str,
    code: &'static str,
    description: &'static str,
}

impl BlockRule {
    /// `Function ... EndFunction` blocks.
    #[must_use]
    pub fn function() -> Self {
        Self {
            kind: BlockKind::Function,
            name: "function-block",
            code: "PL003",
            description: "Functions are named, have a well-formed argument list and are closed",
        }
    }

    /// `Event ... EndEvent` blocks.
    #[must_use]
    pub fn event() -> Self {
        Self {
            kind: BlockKind::Event,
            name: "event-block",
            code: "PL006",
            description: "Events are named, have a well-formed argument list and are closed",
        }
    }

    fn opener(&self) -> &'static Regex {
        match self.kind {
            BlockKind::Event => &*EVENT_OPENER,
            _ => &*FUNCTION_OPENER,
        }
    }
}

/// Joins the non-empty parts of a block label with single spaces.
fn label(parts: &[&str]) -> String {
    parts
        .iter()
        .filter(|p| !p.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

impl BlockSyntax for BlockRule {
    fn rule_name(&self) -> &'static str {
        self.name
    }

    fn spec(&self) -> StatementSpec {
        self.kind.spec()
    }

    fn parse_opener(&self, line: &str) -> Option<Opener> {
        let caps = self.opener().captures(line)?;
        let open = self.kind.spec().open;
        let return_type = caps.get(1).map_or("", |m| m.as_str());

        let Some(name) = caps.get(3).map(|m| m.as_str()) else {
            return Some(Opener::Invalid {
                column: 1,
                message: format!("{} error: missing name", label(&[return_type, open])),
            });
        };

        let label = label(&[return_type, name, open]);
        let args = caps.get(5).map_or("", |m| m.as_str());

        let fault = if caps.get(4).is_none() {
            Some("missing open parenthesis")
        } else if caps.get(6).is_none() {
            Some("missing close parenthesis")
        } else if args.trim_end().ends_with(',') {
            Some("trailing comma")
        } else {
            None
        };

        Some(match fault {
            Some(fault) => Opener::Invalid {
                column: 1,
                message: format!("{label} error: {fault}"),
            },
            None => Opener::Valid { label },
        })
    }

    fn is_closer(&self, line: &str) -> bool {
        line == self.kind.spec().close
    }

    fn unclosed_message(&self, label: &str) -> String {
        format!("{label} error: {} is not closed", self.kind.spec().open)
    }
}

impl Rule for BlockRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn code(&self) -> &'static str {
        self.code
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn check(&self, doc: &Document, ctx: &mut LintContext) -> Option<Finding> {
        check_blocks(self, doc, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_functions(code: &str) -> Option<Finding> {
        let doc = Document::new("test.psc", code);
        BlockRule::function().check(&doc, &mut LintContext::new())
    }

    fn check_events(code: &str) -> Option<Finding> {
        let doc = Document::new("test.psc", code);
        BlockRule::event().check(&doc, &mut LintContext::new())
    }

    fn message(finding: Option<Finding>) -> String {
        finding.map(|f| f.message).unwrap_or_default()
    }

    #[test]
    fn accepts_basic_function() {
        assert_eq!(check_functions("Scriptname test\n\nFunction test()\nEndFunction"), None);
    }

    #[test]
    fn accepts_arguments_and_return_types() {
        for opener in [
            "Function test(string name)",
            "Function test(string name, int test)",
            "Function test(string[] name, int test)",
            "int[] Function test(string[] name, int test)",
            "int Function test(string[] name, int test)",
        ] {
            let code = format!("Scriptname test\n\n{opener}\nEndFunction");
            assert_eq!(check_functions(&code), None, "{opener}");
        }
    }

    #[test]
    fn accepts_multiple_functions() {
        let code = "Scriptname test\n\nFunction test()\nEndFunction\n\nString Function test2()\n\nEndFunction";
        assert_eq!(check_functions(code), None);
    }

    #[test]
    fn ignores_commented_blocks() {
        let code = "Scriptname test\n\n;int Function test(string name,)\n\n;EndFunction";
        assert_eq!(check_functions(code), None);
    }

    #[test]
    fn reports_unclosed_function() {
        let finding = check_functions("Function test()\nEndFunctio");
        assert_eq!(message(finding), "test Function error: Function is not closed");
    }

    #[test]
    fn reports_second_unclosed_function() {
        let code = "Scriptname test\n\nFunction test()\nEndFunction\n\nString Function test2()\n\nEndFunctio";
        let finding = check_functions(code).unwrap();
        assert_eq!(finding.message, "String test2 Function error: Function is not closed");
        assert_eq!(finding.line(), 4);
        assert_eq!(finding.column(), 1);
    }

    #[test]
    fn reports_parenthesis_faults() {
        let cases = [
            ("Function test(", "test Function error: missing close parenthesis"),
            ("Function test)", "test Function error: missing open parenthesis"),
            ("Function test", "test Function error: missing open parenthesis"),
            ("Function", "Function error: missing name"),
            ("String Function test(string name,)", "String test Function error: trailing comma"),
        ];
        for (opener, expected) in cases {
            let code = format!("Scriptname test\n\n{opener}\nEndFunction");
            assert_eq!(message(check_functions(&code)), expected, "{opener}");
        }
    }

    #[test]
    fn commented_closer_does_not_close() {
        let code = "Scriptname test\n\nString Function test(string name)\n;EndFunction";
        assert_eq!(
            message(check_functions(code)),
            "String test Function error: Function is not closed"
        );
    }

    #[test]
    fn closer_is_claimed_by_the_first_opener() {
        let code = "Scriptname test\n\nInt Function test()\n\n;EndFunction\n\nFunction test3()\n\nEndFunction";
        assert_eq!(
            message(check_functions(code)),
            "test3 Function error: Function is not closed"
        );
    }

    #[test]
    fn malformed_opener_wins_over_unclosed_one() {
        let code = "Function first()\nFunction second(\nEndFunction";
        assert_eq!(
            message(check_functions(code)),
            "second Function error: missing close parenthesis"
        );
    }

    #[test]
    fn ignores_lines_mentioning_the_keyword() {
        let code = "Debug.Trace(\"Function call\")\nx = MyFunction()\nEndFunction";
        assert_eq!(check_functions(code), None);
    }

    #[test]
    fn accepts_events() {
        let code = "Event OnUpdate()\n\nEndEvent\n\nEvent OnCustomEvent(string name, string test)\n\nEndEvent";
        assert_eq!(check_events(code), None);
    }

    #[test]
    fn reports_event_faults() {
        let cases = [
            (
                "Event OnUpdate()\n\nEndEve\n\nEvent OnCustomEvent(string name, string test)\n\nEndEven",
                "OnUpdate Event error: Event is not closed",
            ),
            (
                "Event OnUpdate()\n\nEndEvent\n\nEvent OnCustomEventstring name, string test)\n\nEndEvent",
                "OnCustomEventstring Event error: missing open parenthesis",
            ),
            (
                "Event OnUpdate()\n\nEndEvent\n\nEvent OnCustomEvent(string name, string test\n\nEndEvent",
                "OnCustomEvent Event error: missing close parenthesis",
            ),
            ("Event\n\nEndEvent", "Event error: missing name"),
            ("Event()\n\nEndEvent", "Event error: missing name"),
            (
                "Scriptname test\n\nEvent test(string name)\n;EndEvent",
                "test Event error: Event is not closed",
            ),
        ];
        for (code, expected) in cases {
            assert_eq!(message(check_events(code)), expected, "{code}");
        }
    }

    #[test]
    fn pairs_are_claimed_so_a_second_run_agrees() {
        let doc = Document::new("test.psc", "Function a()\nEndFunction\nFunction b()\nEndFunction");
        let rule = BlockRule::function();
        let mut ctx = LintContext::new();

        assert_eq!(rule.check(&doc, &mut ctx), None);
        assert_eq!(ctx.consumed().iter().collect::<Vec<_>>(), vec![0, 1, 2, 3]);
        assert_eq!(rule.check(&doc, &mut ctx), None);
    }
}
