//! Analyze command implementation.

use anyhow::{Context, Result};
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use qcut_core::{
    CutDistribution, Executor, Graph, Histogram, ReplayExecutor, bitstring_cut_value, cut_dist,
    execute_checked, rand_cut_dist,
};

use super::common::{bar, load_maybe_remapped, print_result, print_section, print_truncated};

/// Options for the analyze command.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Renumber nodes before evaluating.
    pub remap: bool,
    /// Random states drawn for the baseline (0 skips it).
    pub baseline_samples: usize,
    /// Seed for the baseline.
    pub random_seed: u64,
    /// Most frequent states to list.
    pub top_states: usize,
    /// Cut values to list.
    pub top_cuts: usize,
}

/// Execute the analyze command.
pub fn execute(graph_path: &str, counts_path: &str, options: &AnalyzeOptions) -> Result<()> {
    println!(
        "{} Analyzing {} on {}",
        style("→").cyan().bold(),
        style(counts_path).green(),
        style(graph_path).green()
    );

    let (graph, _mapping) = load_maybe_remapped(graph_path, options.remap)?;
    let recorded = Histogram::load(counts_path)
        .with_context(|| format!("Failed to load counts: {counts_path}"))?;

    let total = recorded.total_shots()?;
    let shots =
        u32::try_from(total).with_context(|| format!("Shot count {total} does not fit in u32"))?;
    let backend = ReplayExecutor::new(counts_path, recorded);
    let counts = execute_checked(&backend, &(), &graph, shots)?;
    info!("Replayed {} distinct states from {}", counts.len(), backend.name());
    print_result("shots", shots);

    print_section("State distribution (cut - state - count)");
    let states = top_states(&graph, &counts, options.top_states)?;
    for (cut, bitstring, count) in &states {
        println!("  {:>3} - {} - {}", cut, style(bitstring).cyan(), count);
    }
    print_truncated(states.len(), counts.len(), "states");

    print_section("Cut distribution");
    let dist = cut_dist(&graph, &counts)?;
    print_distribution(&dist, options.top_cuts);
    print_result(
        "expected cut value",
        style(format!("{:.4}", dist.expectation())).yellow().bold(),
    );

    if options.baseline_samples > 0 {
        print_section(&format!(
            "Random cut distribution ({} samples)",
            options.baseline_samples
        ));
        let mut rng = StdRng::seed_from_u64(options.random_seed);
        let baseline = rand_cut_dist(&graph, options.baseline_samples, &mut rng)?;
        print_distribution(&baseline, options.top_cuts);
        print_result(
            "expected cut value",
            format!("{:.4}", baseline.expectation()),
        );
    }

    Ok(())
}

/// The `limit` most frequent states with their cut values.
fn top_states<'a>(
    graph: &Graph,
    counts: &'a Histogram,
    limit: usize,
) -> Result<Vec<(usize, &'a str, u64)>> {
    counts
        .sorted()
        .into_iter()
        .take(limit)
        .map(|(bitstring, count)| {
            let cut = bitstring_cut_value(graph, bitstring)?;
            Ok::<_, anyhow::Error>((cut, bitstring, count))
        })
        .collect()
}

/// Print cut values from highest to lowest.
fn print_distribution(dist: &CutDistribution, limit: usize) {
    for (cut, p) in dist.iter().rev().take(limit) {
        println!("  {:>3} - {:.6} {}", cut, p, style(bar(p)).green());
    }
    print_truncated(limit.min(dist.len()), dist.len(), "cut values");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> AnalyzeOptions {
        AnalyzeOptions {
            remap: false,
            baseline_samples: 200,
            random_seed: 0,
            top_states: 50,
            top_cuts: 20,
        }
    }

    #[test]
    fn test_top_states() {
        let graph = Graph::from_pairs(&[(0, 1), (1, 2)]).unwrap();
        let counts: Histogram = [("000", 5), ("010", 20), ("001", 10)].into_iter().collect();

        let states = top_states(&graph, &counts, 2).unwrap();
        assert_eq!(states, vec![(2, "010", 20), (1, "001", 10)]);
    }

    #[test]
    fn test_analyze_files() {
        let dir = tempfile::tempdir().unwrap();
        let graph_path = dir.path().join("edge.qx");
        let counts_path = dir.path().join("counts.json");
        std::fs::write(&graph_path, "2 1\n0 1 1.0\n").unwrap();
        std::fs::write(&counts_path, r#"{"01": 70, "11": 30}"#).unwrap();

        execute(
            graph_path.to_str().unwrap(),
            counts_path.to_str().unwrap(),
            &options(),
        )
        .unwrap();
    }

    #[test]
    fn test_analyze_rejects_wrong_width() {
        let dir = tempfile::tempdir().unwrap();
        let graph_path = dir.path().join("edge.qx");
        let counts_path = dir.path().join("counts.json");
        std::fs::write(&graph_path, "2 1\n0 1 1.0\n").unwrap();
        std::fs::write(&counts_path, r#"{"011": 70}"#).unwrap();

        let err = execute(
            graph_path.to_str().unwrap(),
            counts_path.to_str().unwrap(),
            &options(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("width"));
    }

    #[test]
    fn test_analyze_rejects_overflowing_counts() {
        let dir = tempfile::tempdir().unwrap();
        let graph_path = dir.path().join("edge.qx");
        let counts_path = dir.path().join("counts.json");
        std::fs::write(&graph_path, "2 1\n0 1 1.0\n").unwrap();
        std::fs::write(&counts_path, r#"{"01": 18446744073709551615, "10": 1}"#).unwrap();

        let err = execute(
            graph_path.to_str().unwrap(),
            counts_path.to_str().unwrap(),
            &options(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("overflow"));
    }

    #[test]
    fn test_analyze_remapped_counts() {
        // Nodes {2, 4} become {0, 1}, so two-character states are valid.
        let dir = tempfile::tempdir().unwrap();
        let graph_path = dir.path().join("sparse.qx");
        let counts_path = dir.path().join("counts.json");
        std::fs::write(&graph_path, "5 1\n2 4 1.0\n").unwrap();
        std::fs::write(&counts_path, r#"{"10": 4}"#).unwrap();

        let mut opts = options();
        opts.remap = true;
        execute(
            graph_path.to_str().unwrap(),
            counts_path.to_str().unwrap(),
            &opts,
        )
        .unwrap();
    }
}
