//! Output formatting for lint reports.

use anyhow::Result;
use papyrus_lint_core::{Analysis, LintReport};

use crate::OutputFormat;

/// Prints the outcome of a lint run in the given format.
pub fn print(analysis: &Analysis, format: OutputFormat) -> Result<()> {
    let report = &analysis.report;
    match format {
        OutputFormat::Text => print_text(analysis),
        OutputFormat::Json => return print_json(report),
        OutputFormat::Compact => print_compact(report),
    }
    Ok(())
}

fn print_text(analysis: &Analysis) {
    let report = &analysis.report;
    for (doc, finding) in &analysis.failures {
        let diagnostic = miette::Report::new(finding.to_diagnostic(doc));
        println!("{} {}", finding.rule, doc.path().display());
        println!("{diagnostic:?}");
    }

    let color = if report.has_findings() {
        "\x1b[31m"
    } else {
        "\x1b[32m"
    };

    println!(
        "{color}{} of {} script(s) failed\x1b[0m",
        report.findings.len(),
        report.files_checked
    );
}

fn print_json(report: &LintReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{json}");
    Ok(())
}

fn print_compact(report: &LintReport) {
    for finding in &report.findings {
        println!("{finding}");
    }
}
