//! The script header node.

use serde::{Deserialize, Serialize};

/// Trailing qualifier on a `Scriptname` line or an auto property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptFlag {
    /// Visible to condition functions.
    Conditional,
    /// Hidden from the editor.
    Hidden,
}

impl ScriptFlag {
    /// Parses a flag token. Matching is case-sensitive.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Conditional" => Some(Self::Conditional),
            "Hidden" => Some(Self::Hidden),
            _ => None,
        }
    }

    /// Returns the flag as written in source.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conditional => "Conditional",
            Self::Hidden => "Hidden",
        }
    }
}

impl std::fmt::Display for ScriptFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The declaration line of a script, as confirmed by the header rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptHeader {
    /// Declared script name.
    pub name: String,
    /// Parent script named after `extends`, if any.
    pub parent: Option<String>,
    /// Trailing flags in source order.
    pub flags: Vec<ScriptFlag>,
    /// Column of the last character of the header line.
    pub end_column: usize,
}

impl ScriptHeader {
    /// Returns true if the header carries `flag`.
    #[must_use]
    pub fn has_flag(&self, flag: ScriptFlag) -> bool {
        self.flags.contains(&flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_tokens_are_case_sensitive() {
        assert_eq!(ScriptFlag::from_token("Hidden"), Some(ScriptFlag::Hidden));
        assert_eq!(
            ScriptFlag::from_token("Conditional"),
            Some(ScriptFlag::Conditional)
        );
        assert_eq!(ScriptFlag::from_token("hidden"), None);
        assert_eq!(ScriptFlag::from_token("Condition"), None);
    }
}
