//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# papyrus-lint configuration

# "default" runs trailing-whitespace, script-name, function-block,
# if-statement and while-loop. "strict" adds event-block and property.
preset = "default"

[linter]
# Glob patterns skipped when searching directories for scripts
exclude = [
    "**/backup/**",
]

# Rules can be switched on or off individually

# [rules.event-block]
# enabled = true

# [rules.property]
# enabled = true

# [rules.trailing-whitespace]
# enabled = false
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("papyrus-lint.toml"), force)?;

    println!("Created papyrus-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit papyrus-lint.toml to choose rules");
    println!("  2. Run: papyrus-lint check");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use papyrus_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn template_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.preset.as_deref(), Some("default"));
        assert_eq!(config.linter.exclude, ["**/backup/**"]);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("papyrus-lint.toml");
        std::fs::write(&path, "preset = \"strict\"\n").unwrap();

        assert!(write_config(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "preset = \"strict\"\n");

        write_config(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
