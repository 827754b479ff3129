//! List rules command implementation.

use papyrus_lint_rules::{all_rules, default_rules};

/// Runs the list-rules command.
pub fn run() {
    let defaults: Vec<&str> = default_rules().iter().map(|r| r.name()).collect();

    println!("Available rules:\n");
    println!("{:<8} {:<22} {:<9} Description", "Code", "Name", "Default");
    println!("{}", "-".repeat(96));

    for rule in all_rules() {
        let default = if defaults.contains(&rule.name()) { "yes" } else { "no" };
        println!(
            "{:<8} {:<22} {:<9} {}",
            rule.code(),
            rule.name(),
            default,
            rule.description()
        );
    }

    println!("\nPresets:");
    println!("  default  - PL001 to PL005, in that order");
    println!("  strict   - All rules");

    println!("\nUse --rules to run specific rules, e.g.:");
    println!("  papyrus-lint check --rules script-name,function-block");
    println!("  papyrus-lint check --rules PL006,PL007");
}
