//! The statement-family table.
//!
//! Each block family is described by its opening and closing keyword. The
//! block rules are generic over this table; adding a family means adding a
//! row, not a matcher.

/// Opening and closing keyword of one block family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementSpec {
    /// Keyword that opens the block (e.g., `Function`).
    pub open: &'static str,
    /// Keyword that closes the block (e.g., `EndFunction`).
    pub close: &'static str,
}

/// Block families known to the linter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `Function ... EndFunction`
    Function,
    /// `Event ... EndEvent`
    Event,
    /// `if ... endif`
    If,
    /// `while ... endwhile`
    While,
}

const STATEMENTS: [(BlockKind, StatementSpec); 4] = [
    (
        BlockKind::Function,
        StatementSpec {
            open: "Function",
            close: "EndFunction",
        },
    ),
    (
        BlockKind::Event,
        StatementSpec {
            open: "Event",
            close: "EndEvent",
        },
    ),
    (
        BlockKind::If,
        StatementSpec {
            open: "if",
            close: "endif",
        },
    ),
    (
        BlockKind::While,
        StatementSpec {
            open: "while",
            close: "endwhile",
        },
    ),
];

impl BlockKind {
    /// All block families, in table order.
    pub const ALL: [Self; 4] = [Self::Function, Self::Event, Self::If, Self::While];

    /// Returns the keywords of this family.
    #[must_use]
    pub const fn spec(self) -> StatementSpec {
        STATEMENTS[self as usize].1
    }
}
