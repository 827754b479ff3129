//! Core types for lint findings and results.

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::document::Document;

/// Source code location of a finding.
///
/// Structural rules report lines relative to the normalized view of the
/// script (comments and blank lines stripped), so `line` can be smaller than
/// the physical line number in the file. The whitespace rule reports physical
/// lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File name of the script (base name, no directory).
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number.
    pub column: usize,
}

impl Location {
    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: impl Into<PathBuf>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

/// Line view a finding's position refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineView {
    /// Trimmed lines with comments and blanks dropped.
    #[default]
    Normalized,
    /// Physical lines of the file.
    Raw,
}

/// The single error record a rule may produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the rule that produced this finding (e.g., "script-name").
    pub rule: String,
    /// Where the fault was detected.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// View `location` is counted in.
    #[serde(default)]
    pub view: LineView,
}

impl Finding {
    /// Creates a new finding.
    #[must_use]
    pub fn new(rule: impl Into<String>, location: Location, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            location,
            message: message.into(),
            view: LineView::Normalized,
        }
    }

    /// Marks this finding as positioned in the given line view.
    #[must_use]
    pub fn in_view(mut self, view: LineView) -> Self {
        self.view = view;
        self
    }

    /// Creates a finding located in `doc`.
    #[must_use]
    pub fn at(
        rule: impl Into<String>,
        doc: &Document,
        line: usize,
        column: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::new(rule, Location::new(doc.file_name(), line, column), message)
    }

    /// Returns the 1-indexed line of this finding.
    #[must_use]
    pub fn line(&self) -> usize {
        self.location.line
    }

    /// Returns the column of this finding.
    #[must_use]
    pub fn column(&self) -> usize {
        self.location.column
    }

    /// Converts this finding into a miette diagnostic over the view of `doc`
    /// its position was counted in.
    #[must_use]
    pub fn to_diagnostic(&self, doc: &Document) -> FindingDiagnostic {
        let source = match self.view {
            LineView::Raw => doc.content().to_string(),
            LineView::Normalized => doc.normalized_lines().join("\n"),
        };
        let offset = offset_for(&source, self.location.line, self.location.column);
        FindingDiagnostic {
            message: self.message.clone(),
            src: NamedSource::new(doc.file_name(), source),
            span: SourceSpan::from((offset, 0)),
            rule: self.rule.clone(),
        }
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[line {}: col {}]; script {}; {}",
            self.location.line,
            self.location.column,
            self.location.file.display(),
            self.message
        )
    }
}

/// Byte offset of a 1-indexed line and column, clamped to the content.
fn offset_for(content: &str, line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }

    let mut offset = 0;
    for (i, line_content) in content.split('\n').enumerate() {
        if i + 1 == line {
            return offset + column.saturating_sub(1).min(line_content.len());
        }
        offset += line_content.len() + 1;
    }

    content.len()
}

/// A [`Finding`] rendered as a miette diagnostic for rich terminal output.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct FindingDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{rule}")]
    span: SourceSpan,
    rule: String,
}

/// Result of linting a set of scripts.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintReport {
    /// One finding at most per script.
    pub findings: Vec<Finding>,
    /// Number of scripts checked.
    pub files_checked: usize,
}

impl LintReport {
    /// Creates a new empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one script's lint pass.
    pub fn record(&mut self, finding: Option<Finding>) {
        self.files_checked += 1;
        self.findings.extend(finding);
    }

    /// Returns true if any script failed its lint pass.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_finding() -> Finding {
        Finding::new(
            "script-name",
            Location::new("test.psc", 1, 11),
            "Scriptname error: missing name",
        )
    }

    #[test]
    fn display_matches_report_format() {
        insta::assert_snapshot!(
            make_finding().to_string(),
            @"[line 1: col 11]; script test.psc; Scriptname error: missing name"
        );
    }

    #[test]
    fn report_records_passes_and_findings() {
        let mut report = LintReport::new();
        report.record(None);
        report.record(Some(make_finding()));

        assert_eq!(report.files_checked, 2);
        assert_eq!(report.findings.len(), 1);
        assert!(report.has_findings());
    }

    fn labelled_line(diagnostic: &FindingDiagnostic) -> &str {
        let source = diagnostic.src.inner();
        let start = diagnostic.span.offset();
        let line_start = source[..start].rfind('\n').map_or(0, |i| i + 1);
        let line_end = source[start..].find('\n').map_or(source.len(), |i| start + i);
        &source[line_start..line_end]
    }

    #[test]
    fn structural_diagnostic_labels_the_line_that_was_read() {
        let doc = Document::new(
            "test.psc",
            "Scriptname test\n\n; note\nFunction f(\nEndFunction",
        );
        let finding = Finding::at("function-block", &doc, 2, 1, "missing close parenthesis");

        let diagnostic = finding.to_diagnostic(&doc);
        assert_eq!(labelled_line(&diagnostic), "Function f(");
    }

    #[test]
    fn raw_diagnostic_labels_the_physical_line() {
        let doc = Document::new(
            "test.psc",
            "Scriptname test\n\n; note\nFunction f() \nEndFunction",
        );
        let finding = Finding::at("trailing-whitespace", &doc, 4, 13, "at the end of the line")
            .in_view(LineView::Raw);

        let diagnostic = finding.to_diagnostic(&doc);
        assert_eq!(labelled_line(&diagnostic), "Function f() ");
        assert_eq!(diagnostic.span.offset(), doc.content().find("Function").unwrap() + 12);
    }

    #[test]
    fn offset_calculation() {
        let content = "line1\nline2\nline3";
        assert_eq!(offset_for(content, 1, 1), 0);
        assert_eq!(offset_for(content, 2, 1), 6);
        assert_eq!(offset_for(content, 2, 3), 8);
        assert_eq!(offset_for(content, 2, 99), 11);
        assert_eq!(offset_for(content, 9, 1), content.len());
    }
}
