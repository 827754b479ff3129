//! # papyrus-lint-core
//!
//! Core framework for structural linting of Papyrus (`.psc`) scripts.
//!
//! The rules in this workspace never build a syntax tree. They work on a
//! flat, line-oriented view of the script and pair block openers with their
//! closers by regular-expression matching alone. This crate provides the
//! pieces every rule shares:
//!
//! - [`Document`] with its raw and normalized line views
//! - [`ConsumptionSet`] and [`LintContext`], the state one lint pass threads
//!   through its rules
//! - [`Rule`] trait for per-construct validators
//! - [`Linter`] for running an ordered, fail-fast set of rules
//! - [`Finding`] for the single error a pass may report
//!
//! ## Example
//!
//! ```ignore
//! use papyrus_lint_core::{Document, Linter};
//!
//! let linter = Linter::builder()
//!     .rule(MyRule::new())
//!     .build();
//!
//! let doc = Document::from_path("Scripts/Source/MyQuest.psc")?;
//! if let Some(finding) = linter.lint(&doc) {
//!     eprintln!("{finding}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod consumption;
mod context;
mod document;
mod header;
mod linter;
mod rule;
mod types;

pub use config::{Config, ConfigError, LinterConfig, RuleConfig};
pub use consumption::ConsumptionSet;
pub use context::LintContext;
pub use document::{normalize_lines, raw_lines, Document, SourceError, COMMENT_MARKER};
pub use header::{ScriptFlag, ScriptHeader};
pub use linter::{Analysis, Linter, LinterBuilder, LinterError};
pub use rule::{Rule, RuleBox};
pub use types::{Finding, FindingDiagnostic, LineView, LintReport, Location};
