//! The lint pass orchestrator.

use crate::config::Config;
use crate::context::LintContext;
use crate::document::{Document, SourceError};
use crate::rule::{Rule, RuleBox};
use crate::types::{Finding, LintReport};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while linting a set of paths.
#[derive(Debug, Error)]
pub enum LinterError {
    /// IO error walking directories.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A script could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),
}

/// Outcome of [`Linter::analyze`].
#[derive(Debug, Default)]
pub struct Analysis {
    /// Findings and the number of scripts checked.
    pub report: LintReport,
    /// Every failing script with its finding, in lint order.
    pub failures: Vec<(Document, Finding)>,
}

/// Builder for configuring a [`Linter`].
#[derive(Default)]
pub struct LinterBuilder {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl LinterBuilder {
    /// Creates a new builder with no rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule. Rules run in the order they were added.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends a boxed rule.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Appends several boxed rules, keeping their order.
    #[must_use]
    pub fn rules<I>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = RuleBox>,
    {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern for script discovery.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the linter.
    #[must_use]
    pub fn build(self) -> Linter {
        let mut exclude_patterns = self.exclude_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.linter.exclude.clone());
        }

        Linter {
            rules: self.rules,
            exclude_patterns,
            config: self.config.unwrap_or_default(),
        }
    }
}

/// Runs an ordered set of rules over scripts, stopping at the first finding.
///
/// Use [`Linter::builder()`] to construct an instance.
pub struct Linter {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Config,
}

impl Linter {
    /// Creates a new builder for configuring a linter.
    #[must_use]
    pub fn builder() -> LinterBuilder {
        LinterBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of the rules that will run, in order.
    #[must_use]
    pub fn active_rules(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|r| r.name())
            .filter(|name| self.config.is_rule_enabled(name))
            .collect()
    }

    /// Runs one lint pass over `doc` with a fresh context.
    #[must_use]
    pub fn lint(&self, doc: &Document) -> Option<Finding> {
        let mut ctx = LintContext::new();
        self.lint_with_context(doc, &mut ctx)
    }

    /// Runs one lint pass over `doc`, threading `ctx` through every rule.
    ///
    /// Rules run in registration order; the first finding ends the pass.
    pub fn lint_with_context(&self, doc: &Document, ctx: &mut LintContext) -> Option<Finding> {
        for rule in &self.rules {
            if !self.config.is_rule_enabled(rule.name()) {
                debug!("Skipping disabled rule: {}", rule.name());
                continue;
            }

            debug!("Running {} on {}", rule.name(), doc.file_name());
            if let Some(finding) = rule.check(doc, ctx) {
                debug!("{} failed {}: {}", doc.file_name(), rule.name(), finding.message);
                return Some(finding);
            }
        }

        None
    }

    /// Lints every script named by `paths`.
    ///
    /// Files are linted as given; directories are searched for `*.psc`
    /// scripts.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails or a script cannot be loaded.
    pub fn analyze(&self, paths: &[PathBuf]) -> Result<Analysis, LinterError> {
        let files = self.collect_files(paths)?;
        let mut analysis = Analysis::default();
        for file in &files {
            let doc = Document::from_path(file)?;
            let finding = self.lint(&doc);
            if let Some(finding) = &finding {
                analysis.failures.push((doc, finding.clone()));
            }
            analysis.report.record(finding);
        }

        info!(
            "Lint complete: {} finding(s) in {} script(s)",
            analysis.report.findings.len(),
            analysis.report.files_checked
        );

        Ok(analysis)
    }

    /// Expands `paths` into the list of scripts to lint.
    ///
    /// Files are kept as given; directories are replaced by the scripts
    /// found under them.
    ///
    /// # Errors
    ///
    /// Returns an error if discovery fails.
    pub fn collect_files(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, LinterError> {
        let mut files = Vec::new();
        for path in paths {
            if path.is_dir() {
                files.extend(self.discover_files(path)?);
            } else {
                files.push(path.clone());
            }
        }

        info!("Found {} scripts to lint", files.len());
        Ok(files)
    }

    /// Discovers all scripts under `root`, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns an error if the search pattern is invalid or a directory
    /// cannot be read.
    pub fn discover_files(&self, root: &Path) -> Result<Vec<PathBuf>, LinterError> {
        let pattern = format!("{}/**/*.psc", root.display());
        let mut files = Vec::new();

        for entry in glob::glob(&pattern)? {
            let path = entry.map_err(|e| LinterError::Io(e.into()))?;

            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }

            if path.is_file() {
                files.push(path);
            }
        }

        files.sort();
        Ok(files)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.exclude_patterns.iter().any(|pattern| {
            if glob::Pattern::new(pattern).is_ok_and(|p| p.matches(&path_str)) {
                return true;
            }

            let normalized_pattern = pattern.replace("**", "");
            !normalized_pattern.is_empty()
                && normalized_pattern != "/"
                && path_str.contains(&normalized_pattern)
        })
    }
}
