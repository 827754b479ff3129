//! Check command implementation.

use anyhow::{Context, Result};
use papyrus_lint_core::{Config, Linter, RuleBox};
use papyrus_lint_rules::{rule_by_name, rules_for_config};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command. Returns `true` when every script passed.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<bool> {
    let config = load_config(source)?;

    let rules = match rules_filter {
        Some(filter) => filter_rules(&filter),
        None => rules_for_config(&config),
    };

    let linter = Linter::builder()
        .rules(rules)
        .excludes(exclude)
        .config(config)
        .build();

    tracing::info!(
        "Linting {:?} with rules {:?}",
        paths,
        linter.active_rules()
    );

    let analysis = linter.analyze(paths).context("Failed to lint scripts")?;

    super::output::print(&analysis, format)?;

    Ok(!analysis.report.has_findings())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };

    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }

    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

fn filter_rules(filter: &str) -> Vec<RuleBox> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            let rule = rule_by_name(name);
            if rule.is_none() {
                tracing::warn!("Unknown rule: {}", name);
            }
            rule
        })
        .collect()
}
