//! Rule trait for defining lint rules.

use crate::context::LintContext;
use crate::document::Document;
use crate::types::Finding;

/// A per-construct lint rule.
///
/// A rule inspects one [`Document`] and reports at most one [`Finding`]:
/// the first violation it encounters. Rules that confirm lines (the header,
/// a block's opener and closer) claim them in the shared [`LintContext`] so
/// that later rules in the same pass do not read them again.
///
/// # Example
///
/// ```ignore
/// use papyrus_lint_core::{Document, Finding, LintContext, Rule};
///
/// pub struct NoTabs;
///
/// impl Rule for NoTabs {
///     fn name(&self) -> &'static str { "no-tabs" }
///     fn code(&self) -> &'static str { "PL100" }
///
///     fn check(&self, doc: &Document, _ctx: &mut LintContext) -> Option<Finding> {
///         doc.raw_lines().iter().enumerate().find_map(|(i, line)| {
///             line.find('\t').map(|col| {
///                 Finding::at(self.name(), doc, i + 1, col + 1, "tab character")
///             })
///         })
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "script-name").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "PL002").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks a document and returns the first violation found, if any.
    fn check(&self, doc: &Document, ctx: &mut LintContext) -> Option<Finding>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
