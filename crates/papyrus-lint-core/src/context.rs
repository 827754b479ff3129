//! Per-pass state threaded through every rule.

use crate::consumption::ConsumptionSet;
use crate::header::ScriptHeader;

/// Mutable state of one lint pass over one [`Document`](crate::Document).
///
/// Every rule receives the same context. The header rule records the
/// confirmed [`ScriptHeader`] and claims its line; the block rules claim the
/// openers and closers they pair. Later rules trust what earlier rules have
/// claimed.
#[derive(Debug, Clone, Default)]
pub struct LintContext {
    consumed: ConsumptionSet,
    header: Option<ScriptHeader>,
}

impl LintContext {
    /// Creates a fresh context for a new pass.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lines claimed so far.
    #[must_use]
    pub fn consumed(&self) -> &ConsumptionSet {
        &self.consumed
    }

    /// Returns true if normalized line `index` has been claimed.
    #[must_use]
    pub fn is_consumed(&self, index: usize) -> bool {
        self.consumed.is_marked(index)
    }

    /// Claims normalized line `index`.
    pub fn consume(&mut self, index: usize) {
        self.consumed.mark(index);
    }

    /// Returns the header confirmed in this pass, if any.
    #[must_use]
    pub fn header(&self) -> Option<&ScriptHeader> {
        self.header.as_ref()
    }

    /// Records the confirmed header.
    pub fn record_header(&mut self, header: ScriptHeader) {
        self.header = Some(header);
    }
}
