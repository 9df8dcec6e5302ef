//! qcut Command-Line Interface
//!
//! Inspect Max-Cut graphs and the measurement statistics of QAOA runs.

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{analyze, eval, grid, remap, show_config};

/// qcut - Max-Cut statistics for QAOA experiments
#[derive(Parser)]
#[command(name = "qcut")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cut values of uniformly random assignments
    Eval {
        /// Graph data file (.qx)
        graph: String,

        /// Number of random configurations to try
        #[arg(short, long, default_value = "25")]
        samples: usize,

        /// Seed of the random number generator
        #[arg(long, default_value = "0")]
        random_seed: u64,
    },

    /// Cut statistics for measurement counts of a graph
    Analyze {
        /// Graph data file (.qx)
        graph: String,

        /// Measurement counts (JSON object of bitstring -> count)
        counts: String,

        /// Renumber nodes to 0..n-1 before evaluating
        #[arg(long)]
        remap: bool,

        /// Number of random states for the baseline distribution
        #[arg(long, default_value = "100000")]
        baseline_samples: usize,

        /// Seed of the random number generator
        #[arg(long, default_value = "0")]
        random_seed: u64,

        /// Number of most frequent states to list
        #[arg(long, default_value = "50")]
        top_states: usize,

        /// Number of cut values to list
        #[arg(long, default_value = "20")]
        top_cuts: usize,
    },

    /// Show how node ids are renumbered to 0..n-1
    Remap {
        /// Graph data file (.qx)
        graph: String,
    },

    /// Show the QAOA angle grid
    Grid {
        /// Number of angle rounds
        #[arg(short, long, default_value = "1")]
        rounds: usize,

        /// Angle discretization steps
        #[arg(short, long, default_value = "3")]
        steps: usize,

        /// Reduces the total range for angle steps
        #[arg(long, default_value = "1.0")]
        sample_range_scale: f64,
    },

    /// Print a saved QAOA configuration
    ShowConfig {
        /// Configuration file (.json)
        config: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Eval {
            graph,
            samples,
            random_seed,
        } => eval::execute(&graph, samples, random_seed),

        Commands::Analyze {
            graph,
            counts,
            remap: do_remap,
            baseline_samples,
            random_seed,
            top_states,
            top_cuts,
        } => analyze::execute(
            &graph,
            &counts,
            &analyze::AnalyzeOptions {
                remap: do_remap,
                baseline_samples,
                random_seed,
                top_states,
                top_cuts,
            },
        ),

        Commands::Remap { graph } => remap::execute(&graph),

        Commands::Grid {
            rounds,
            steps,
            sample_range_scale,
        } => grid::execute(rounds, steps, sample_range_scale),

        Commands::ShowConfig { config } => show_config::execute(&config),
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
