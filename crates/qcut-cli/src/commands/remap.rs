//! Remap command implementation.

use anyhow::Result;
use console::style;

use super::common::{load, print_mapping, print_section};

/// Execute the remap command.
pub fn execute(graph_path: &str) -> Result<()> {
    println!(
        "{} Remapping {}",
        style("→").cyan().bold(),
        style(graph_path).green()
    );

    let graph = load(graph_path)?;
    let (remapped, mapping) = qcut_core::remap(&graph);

    print_section("Mapping (original -> new)");
    print_mapping(&mapping);

    if mapping.is_identity() {
        println!("  {}", style("node ids are already 0..n-1").dim());
    }

    print_section("Remapped graph");
    print!("{remapped}");

    Ok(())
}
