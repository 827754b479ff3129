//! Rule presets and configuration-driven rule selection.

use crate::{BlockRule, ConditionalRule, PropertyRule, ScriptNameRule, TrailingWhitespaceRule};
use papyrus_lint_core::{Config, RuleBox};
use tracing::warn;

/// Preset configurations for papyrus-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// The standard lint pass.
    #[default]
    Default,
    /// The standard pass plus the event and property rules.
    Strict,
}

impl Preset {
    /// Parses a preset name as written in configuration.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default" => Some(Self::Default),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Default => default_rules(),
            Self::Strict => strict_rules(),
        }
    }
}

/// Returns the standard lint pass, in run order.
///
/// Includes:
/// - `trailing-whitespace` (PL001)
/// - `script-name` (PL002)
/// - `function-block` (PL003)
/// - `if-statement` (PL004)
/// - `while-loop` (PL005)
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(TrailingWhitespaceRule::new()),
        Box::new(ScriptNameRule::new()),
        Box::new(BlockRule::function()),
        Box::new(ConditionalRule::if_statement()),
        Box::new(ConditionalRule::while_loop()),
    ]
}

/// Returns the strict set of rules.
///
/// Includes the default rules plus:
/// - `event-block` (PL006)
/// - `property` (PL007)
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns all available rules, in canonical run order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    let mut rules = default_rules();
    rules.push(Box::new(BlockRule::event()));
    rules.push(Box::new(PropertyRule::new()));
    rules
}

/// Looks up a rule by name (e.g. `if-statement`) or code (e.g. `PL004`).
#[must_use]
pub fn rule_by_name(name_or_code: &str) -> Option<RuleBox> {
    all_rules()
        .into_iter()
        .find(|r| r.name() == name_or_code || r.code().eq_ignore_ascii_case(name_or_code))
}

/// Selects the rules `config` asks for, in canonical run order.
///
/// The preset supplies the starting set. `[rules.<name>] enabled = false`
/// removes a rule from it and `enabled = true` adds one it lacks.
#[must_use]
pub fn rules_for_config(config: &Config) -> Vec<RuleBox> {
    let preset = match config.preset.as_deref() {
        None => Preset::Default,
        Some(name) => Preset::from_name(name).unwrap_or_else(|| {
            warn!("Unknown preset '{name}', using default");
            Preset::Default
        }),
    };
    let in_preset: Vec<&'static str> = preset.rules().iter().map(|r| r.name()).collect();

    let known: Vec<&'static str> = all_rules().iter().map(|r| r.name()).collect();
    for name in config.rules.keys() {
        if !known.contains(&name.as_str()) {
            warn!("Unknown rule in config: {name}");
        }
    }

    all_rules()
        .into_iter()
        .filter(|r| {
            config
                .rule_setting(r.name())
                .unwrap_or_else(|| in_preset.contains(&r.name()))
        })
        .collect()
}
