//! Eval command implementation.

use anyhow::Result;
use console::style;
use rand::SeedableRng;
use rand::rngs::StdRng;

use qcut_core::{best_cuts, sample_cuts};

use super::common::{load, print_section};

/// Execute the eval command.
pub fn execute(graph_path: &str, samples: usize, random_seed: u64) -> Result<()> {
    println!(
        "{} Sampling {} random cuts of {}",
        style("→").cyan().bold(),
        samples,
        style(graph_path).green()
    );

    let graph = load(graph_path)?;
    let mut rng = StdRng::seed_from_u64(random_seed);
    let sampled = sample_cuts(&graph, samples, &mut rng)?;

    print_section("Cut values for random assignments");
    for sample in &sampled {
        println!("  {:>3} - {}", sample.cut, sample.assignment);
    }

    if let Some((best, winners)) = best_cuts(&sampled) {
        print_section(&format!("Best cuts (size {best})"));
        for sample in winners {
            println!("  {}", style(&sample.assignment).yellow());
        }
    }

    Ok(())
}
