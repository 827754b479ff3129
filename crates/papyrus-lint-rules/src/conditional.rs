//! Rules for test-expression blocks: `if ... endif` and `while ... endwhile`.

use lazy_static::lazy_static;
use papyrus_lint_core::{Document, Finding, LintContext, Rule};
use regex::Regex;

use crate::matching::{check_blocks, BlockSyntax, Opener};
use crate::statements::{BlockKind, StatementSpec};

lazy_static! {
    static ref IF_OPENER: Regex = opener_regex(BlockKind::If);
    static ref WHILE_OPENER: Regex = opener_regex(BlockKind::While);
}

// Groups: separator, open paren, body, dangling operators, close paren.
fn opener_regex(kind: BlockKind) -> Regex {
    let open = regex::escape(kind.spec().open);
    Regex::new(&format!(
        r#"^{open}\b(\s*)(\()?([^)|&=!"'@#\-*+]+)?([|&=!"'@#\-*+/(]+)?(\))?"#
    ))
    .unwrap_or_else(|e| panic!("{open} opener regex: {e}"))
}

/// Validates the test expression of `if` or `while` openers and pairs them
/// with their closers.
#[derive(Debug, Clone)]
pub struct ConditionalRule {
    kind: BlockKind,
    name: &'static str,
    code: &'static str,
    description: &'static str,
}

impl ConditionalRule {
    /// `if ... endif` blocks.
    #[must_use]
    pub fn if_statement() -> Self {
        Self {
            kind: BlockKind::If,
            name: "if-statement",
            code: "PL004",
            description: "if tests have balanced parentheses, no dangling operator and an endif",
        }
    }

    /// `while ... endwhile` blocks.
    #[must_use]
    pub fn while_loop() -> Self {
        Self {
            kind: BlockKind::While,
            name: "while-loop",
            code: "PL005",
            description: "while tests have balanced parentheses, no dangling operator and an endwhile",
        }
    }

    fn opener(&self) -> &'static Regex {
        match self.kind {
            BlockKind::While => &*WHILE_OPENER,
            _ => &*IF_OPENER,
        }
    }
}

impl BlockSyntax for ConditionalRule {
    fn rule_name(&self) -> &'static str {
        self.name
    }

    fn spec(&self) -> StatementSpec {
        self.kind.spec()
    }

    fn parse_opener(&self, line: &str) -> Option<Opener> {
        let caps = self.opener().captures(line)?;
        let open = self.kind.spec().open;

        let separator = caps.get(1).map_or("", |m| m.as_str());
        let open_paren = caps.get(2).is_some();
        let mut body = caps.get(3).map_or(String::new(), |m| m.as_str().to_string());
        let dangling = caps.get(4).map_or("", |m| m.as_str());
        let mut close_paren = caps.get(5).is_some();

        // `if call()`: the body swallowed the call's `(`, so its `)` is not
        // the test's closing parenthesis.
        if !open_paren && close_paren && body.ends_with('(') {
            body.push(')');
            close_paren = false;
        }

        if open_paren || close_paren {
            if !open_paren {
                return Some(Opener::Invalid {
                    column: open.len() + separator.len(),
                    message: format!("{open} error: missing open parenthesis"),
                });
            }
            if !close_paren {
                return Some(Opener::Invalid {
                    column: open.len() + separator.len() + body.len(),
                    message: format!("{open} error: missing close parenthesis"),
                });
            }
        }

        if !dangling.is_empty() {
            return Some(Opener::Invalid {
                column: line.len(),
                message: format!("{open} error: extraneous {dangling}"),
            });
        }

        Some(Opener::Valid {
            label: open.to_string(),
        })
    }

    fn is_closer(&self, line: &str) -> bool {
        line.starts_with(self.kind.spec().close)
    }

    fn unclosed_message(&self, label: &str) -> String {
        format!("{label} is not closed (missing {})", self.kind.spec().close)
    }
}

impl Rule for ConditionalRule {
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

    fn check_if(code: &str) -> Option<Finding> {
        let doc = Document::new("test.psc", code);
        ConditionalRule::if_statement().check(&doc, &mut LintContext::new())
    }

    fn check_while(code: &str) -> Option<Finding> {
        let doc = Document::new("test.psc", code);
        ConditionalRule::while_loop().check(&doc, &mut LintContext::new())
    }

    fn wrap(opener: &str, closer: &str) -> String {
        format!("Scriptname test\n\n{opener}\n\n{closer}")
    }

    #[test]
    fn accepts_well_formed_tests() {
        for opener in [
            "if (true )",
            "if toto()",
            "if (toto())",
            "if true",
            "if(true)",
            "if active() && notDisabled()",
            "if x > 1",
        ] {
            let code = wrap(opener, "endif");
            assert_eq!(check_if(&code), None, "{opener}");
        }
    }

    #[test]
    fn accepts_nested_call_inside_function() {
        let code = "Scriptname test\n\nInt Function test2()\n    if active()\n\n    endif\nEndFunction";
        assert_eq!(check_if(code), None);
    }

    #[test]
    fn reports_unclosed_if() {
        for closer in ["endi", ";endif"] {
            let finding = check_if(&wrap("if (true)", closer)).unwrap();
            assert_eq!(finding.message, "if is not closed (missing endif)");
            assert_eq!(finding.line(), 2);
            assert_eq!(finding.column(), 1);
        }
    }

    #[test]
    fn reports_unclosed_nested_if() {
        let code = "Scriptname test\n\nif (true)\n\n    if true\n\n    endi\n\nendif";
        let finding = check_if(code).unwrap();
        assert_eq!(finding.message, "if is not closed (missing endif)");
        assert_eq!(finding.line(), 3);
    }

    #[test]
    fn reports_parenthesis_faults() {
        let finding = check_if(&wrap("if (true", "endif")).unwrap();
        assert_eq!(finding.message, "if error: missing close parenthesis");
        assert_eq!(finding.column(), 7);

        let finding = check_if(&wrap("if true)", "endif")).unwrap();
        assert_eq!(finding.message, "if error: missing open parenthesis");
        assert_eq!(finding.column(), 3);
    }

    #[test]
    fn reports_dangling_operators() {
        for symbol in ["||", "&&", "=", "+", "-", "*", "'", "\""] {
            let opener = format!("if true {symbol}");
            let finding = check_if(&wrap(&opener, "endif")).unwrap();
            assert_eq!(finding.message, format!("if error: extraneous {symbol}"));
            assert_eq!(finding.column(), opener.len());
        }
    }

    #[test]
    fn closer_matches_by_prefix() {
        let code = "if true\nendif ; done";
        assert_eq!(check_if(code), None);
    }

    #[test]
    fn identifiers_starting_with_keyword_are_not_openers() {
        let code = "ifCount = 1\nwhileRunning = false";
        assert_eq!(check_if(code), None);
        assert_eq!(check_while(code), None);
    }

    #[test]
    fn accepts_well_formed_loops() {
        for opener in ["while (true )", "while toto()", "while (toto())", "while true", "while(true)"] {
            let code = wrap(opener, "endwhile");
            assert_eq!(check_while(&code), None, "{opener}");
        }
    }

    #[test]
    fn reports_loop_faults() {
        let cases = [
            ("while (true)", "endwh", "while is not closed (missing endwhile)"),
            ("while (true", "endwhile", "while error: missing close parenthesis"),
            ("while true)", "endwhile", "while error: missing open parenthesis"),
        ];
        for (opener, closer, expected) in cases {
            let finding = check_while(&wrap(opener, closer));
            assert_eq!(finding.map(|f| f.message).as_deref(), Some(expected), "{opener}");
        }
    }
}
