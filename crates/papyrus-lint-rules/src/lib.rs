//! # papyrus-lint-rules
//!
//! Built-in lint rules for papyrus-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Default | Description |
//! |------|------|---------|-------------|
//! | PL001 | `trailing-whitespace` | yes | Stray blanks on blank lines and opener lines |
//! | PL002 | `script-name` | yes | `Scriptname` header matches the file name |
//! | PL003 | `function-block` | yes | `Function ... EndFunction` blocks |
//! | PL004 | `if-statement` | yes | `if ... endif` blocks |
//! | PL005 | `while-loop` | yes | `while ... endwhile` blocks |
//! | PL006 | `event-block` | no | `Event ... EndEvent` blocks |
//! | PL007 | `property` | no | Auto property declarations |
//!
//! ## Usage
//!
//! ```ignore
//! use papyrus_lint_core::{Document, Linter};
//! use papyrus_lint_rules::default_rules;
//!
//! let linter = Linter::builder().rules(default_rules()).build();
//! let doc = Document::from_path("Scripts/Source/MyQuest.psc")?;
//! assert!(linter.lint(&doc).is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod conditional;
mod matching;
mod presets;
mod property;
mod script_name;
mod statements;
mod whitespace;

pub use block::BlockRule;
pub use conditional::ConditionalRule;
pub use presets::{
    all_rules, default_rules, rule_by_name, rules_for_config, strict_rules, Preset,
};
pub use property::PropertyRule;
pub use script_name::{ScriptNameRule, HEADER_KEYWORD};
pub use statements::{BlockKind, StatementSpec};
pub use whitespace::TrailingWhitespaceRule;

/// Re-export core types for convenience.
pub use papyrus_lint_core::{Document, Finding, LintContext, Rule};
