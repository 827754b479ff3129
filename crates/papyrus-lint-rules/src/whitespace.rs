//! Stray whitespace around block openers and on blank lines.

use papyrus_lint_core::{Document, Finding, LineView, LintContext, Rule};

use crate::script_name::HEADER_KEYWORD;
use crate::statements::BlockKind;

const BLANKS: [char; 2] = [' ', '\t'];

/// Reports leading or trailing blanks on blank lines and on lines that open
/// a function, an event or the script header.
///
/// Other lines are not inspected: indentation inside bodies is free.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrailingWhitespaceRule;

impl TrailingWhitespaceRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn in_scope(trimmed: &str) -> bool {
        trimmed.is_empty()
            || [
                BlockKind::Function.spec().open,
                BlockKind::Event.spec().open,
                HEADER_KEYWORD,
            ]
            .iter()
            .any(|keyword| trimmed.starts_with(keyword))
    }

    /// Column and message for the first whitespace fault on `line`.
    fn check_line(line: &str) -> Option<(usize, &'static str)> {
        let trimmed = line.trim_matches(BLANKS);
        if !Self::in_scope(trimmed) {
            return None;
        }

        let leading = line.len() - line.trim_start_matches(BLANKS).len();
        if leading > 0 {
            let message = if trimmed.is_empty() {
                "on empty line"
            } else {
                "at the beginning of the line"
            };
            return Some((leading + 1, message));
        }

        let content_end = line.trim_end_matches(BLANKS).len();
        (content_end < line.len()).then_some((content_end + 1, "at the end of the line"))
    }
}

impl Rule for TrailingWhitespaceRule {
    fn name(&self) -> &'static str {
        "trailing-whitespace"
    }

    fn code(&self) -> &'static str {
        "PL001"
    }

    fn description(&self) -> &'static str {
        "No stray blanks on empty lines or around Scriptname, Function and Event lines"
    }

    fn check(&self, doc: &Document, _ctx: &mut LintContext) -> Option<Finding> {
        doc.raw_lines()
            .iter()
            .enumerate()
            .find_map(|(i, line)| {
                Self::check_line(line).map(|(column, fault)| {
                    Finding::at(
                        self.name(),
                        doc,
                        i + 1,
                        column,
                        format!("trailing whitespace error: {fault}"),
                    )
                    .in_view(LineView::Raw)
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(code: &str) -> Option<Finding> {
        let doc = Document::new("test.psc", code);
        TrailingWhitespaceRule.check(&doc, &mut LintContext::new())
    }

    #[test]
    fn accepts_clean_scripts() {
        assert_eq!(check("Scriptname test"), None);
        assert_eq!(
            check("Scriptname test\n\nFunction toto()\n    if active()\n\n    endif\nEndFunction"),
            None
        );
    }

    #[test]
    fn body_lines_are_out_of_scope() {
        assert_eq!(check("Scriptname test\n    x = 1   \n\tendif\t"), None);
    }

    #[test]
    fn reports_leading_blanks() {
        let finding = check("  Scriptname test").unwrap();
        assert_eq!(finding.message, "trailing whitespace error: at the beginning of the line");
        assert_eq!((finding.line(), finding.column()), (1, 3));

        let finding = check("Scriptname test\n\n  Function test()\n\nEndFunction").unwrap();
        assert_eq!(finding.message, "trailing whitespace error: at the beginning of the line");
        assert_eq!(finding.line(), 3);
    }

    #[test]
    fn reports_trailing_blanks() {
        let finding = check("Scriptname test  ").unwrap();
        assert_eq!(finding.view, LineView::Raw);
        insta::assert_snapshot!(
            finding.to_string(),
            @"[line 1: col 16]; script test.psc; trailing whitespace error: at the end of the line"
        );
    }

    #[test]
    fn reports_blank_line_with_content() {
        let finding =
            check("Scriptname test\n\nFunction toto()\n    if active()\n    \n    endif\nEndFunction")
                .unwrap();
        assert_eq!(finding.message, "trailing whitespace error: on empty line");
        assert_eq!((finding.line(), finding.column()), (5, 5));
    }

    #[test]
    fn tabs_count_as_blanks() {
        let finding = check("Scriptname test\nEvent OnInit()\t").unwrap();
        assert_eq!(finding.message, "trailing whitespace error: at the end of the line");
        assert_eq!((finding.line(), finding.column()), (2, 15));
    }
}
