//! Show-config command implementation.

use anyhow::{Context, Result};
use console::style;

use qcut_core::QaoaConfig;

use super::common::{print_result, print_section};

/// Execute the show-config command.
pub fn execute(path: &str) -> Result<()> {
    let config =
        QaoaConfig::load(path).with_context(|| format!("Failed to load configuration: {path}"))?;

    println!(
        "{} Configuration {}",
        style("→").cyan().bold(),
        style(path).green()
    );
    print_result("steps", config.steps);
    print_result("expected cut", format!("{:.4}", config.expected_cut));
    print_result("rounds", config.num_rounds());

    print_section("Angles");
    for (i, round) in config.rounds.iter().enumerate() {
        println!(
            "  {:>2}: beta = {:.6}, gamma = {:.6}",
            i, round.beta, round.gamma
        );
    }

    Ok(())
}
