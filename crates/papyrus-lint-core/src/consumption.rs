//! Tracking of normalized lines already claimed during a lint pass.

use std::collections::BTreeSet;

/// Set of normalized-line indices already claimed by a rule.
///
/// A marked line is never read as a fresh block opener nor as an unclaimed
/// closer. The set lives for one lint pass and is shared by every rule in
/// it, so a line confirmed by an earlier rule (the header line, a paired
/// `EndFunction`) stays claimed for the rules that follow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsumptionSet {
    marked: BTreeSet<usize>,
}

impl ConsumptionSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `index` as consumed. Returns false if it was already marked.
    pub fn mark(&mut self, index: usize) -> bool {
        self.marked.insert(index)
    }

    /// Returns true if `index` has been marked.
    #[must_use]
    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    /// Number of marked indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// Returns true if nothing has been marked yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    /// Iterates over marked indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.marked.iter().copied()
    }
}
