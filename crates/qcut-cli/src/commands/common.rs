//! Shared helpers for CLI commands.

use std::path::Path;

use anyhow::{Context, Result};
use console::style;

use qcut_core::{Graph, NodeMapping, load_graph};

/// Load a graph, failing early with a readable message if the file is missing.
pub fn load(path: &str) -> Result<Graph> {
    if !Path::new(path).exists() {
        anyhow::bail!("File not found: {path}");
    }
    let graph = load_graph(path).with_context(|| format!("Failed to load graph: {path}"))?;
    print_result(
        "graph",
        format!("{} nodes, {} edges", graph.num_nodes(), graph.num_edges()),
    );
    Ok(graph)
}

/// Load a graph and optionally renumber its nodes, printing the mapping.
pub fn load_maybe_remapped(path: &str, do_remap: bool) -> Result<(Graph, Option<NodeMapping>)> {
    let graph = load(path)?;
    if !do_remap {
        return Ok((graph, None));
    }

    let (remapped, mapping) = qcut_core::remap(&graph);
    print_section("Remapping");
    print_mapping(&mapping);
    Ok((remapped, Some(mapping)))
}

/// Print `original -> new` for every node.
pub fn print_mapping(mapping: &NodeMapping) {
    for (new, original) in mapping.iter() {
        println!("  {} -> {}", original, style(new).cyan());
    }
}

/// Print a section title.
pub fn print_section(title: &str) {
    println!();
    println!("{}", style(format!("▶ {title}")).green().bold());
}

/// Print a result line.
pub fn print_result(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).dim(), value);
}

/// Render a probability as a fixed-width bar.
pub fn bar(probability: f64) -> String {
    let len = (probability * 50.0).round().clamp(0.0, 50.0) as usize;
    "█".repeat(len)
}

/// Print "first N of M" when a listing was cut short.
pub fn print_truncated(shown: usize, total: usize, what: &str) {
    if total > shown {
        println!("  {}", style(format!("first {shown} of {total} {what}")).dim());
    }
}
