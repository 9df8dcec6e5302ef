//! qcut core
//!
//! Classical post-processing for QAOA Max-Cut experiments: graph loading,
//! cut evaluation, and statistics over the measurement histograms returned
//! by a quantum backend.
//!
//! # Overview
//!
//! - [`load_graph`] / [`parse_graph`] read `.qx` edge lists into a [`Graph`]
//! - [`remap`] renumbers nodes to `0..n` and returns a [`NodeMapping`]
//! - [`cut_value`] evaluates an [`Assignment`]
//! - [`cut_dist`] / [`expected_cut`] turn a [`Histogram`] into a
//!   [`CutDistribution`]
//! - [`rand_cut_dist`] gives the uniformly random baseline to compare with
//! - [`grid_search`] sweeps QAOA angles on any [`Executor`]
//!
//! # Bit order
//!
//! Backends report bitstrings with qubit 0 as the rightmost character. A
//! bitstring `"01"` therefore assigns node 0 to side 1 and node 1 to side 0.
//!
//! # Example
//!
//! ```
//! use qcut_core::{Histogram, cut_dist, expected_cut, parse_graph};
//!
//! let graph = parse_graph("2 1\n0 1 1.0\n")?;
//! let counts: Histogram = [("01", 100)].into_iter().collect();
//!
//! let dist = cut_dist(&graph, &counts)?;
//! assert_eq!(dist.probability(1), 1.0);
//! assert_eq!(expected_cut(&graph, &counts)?, 1.0);
//! # Ok::<(), qcut_core::CutError>(())
//! ```

pub mod assignment;
pub mod backend;
pub mod config;
pub mod counts;
pub mod distribution;
pub mod error;
pub mod graph;
pub mod sampling;
pub mod sweep;

pub use assignment::{Assignment, bitstring_cut_value, cut_value};
pub use backend::{Executor, ReplayExecutor, execute_checked};
pub use config::{QaoaConfig, Round, config_path_for};
pub use counts::Histogram;
pub use distribution::{CutDistribution, cut_dist, expected_cut, rand_cut_dist};
pub use error::{CutError, CutResult};
pub use graph::{Edge, Graph, NodeMapping, load_graph, parse_graph, remap};
pub use sampling::{CutSample, best_cuts, sample_cuts};
pub use sweep::{AngleGrid, Configurations, frange, grid_search};
