//! Execution boundary toward a quantum backend.
//!
//! Circuit construction and execution belong to an external SDK. The core
//! only needs one capability from it:
//!
//! ```text
//!   execute(circuit, shots) ──→ Histogram
//! ```
//!
//! There is no retry or cancellation; a caller that wants a timeout wraps
//! the call itself.

use tracing::debug;

use crate::counts::Histogram;
use crate::error::{CutError, CutResult};
use crate::graph::Graph;

/// Something that runs a circuit and returns measurement counts.
///
/// The circuit type is opaque to this crate.
pub trait Executor {
    /// Circuit description accepted by the backend.
    type Circuit;

    /// Name of the backend, for diagnostics.
    fn name(&self) -> &str;

    /// Run `circuit` for `shots` repetitions.
    fn execute(&self, circuit: &Self::Circuit, shots: u32) -> CutResult<Histogram>;
}

/// Execute a circuit measuring every node of `graph` and check that the
/// backend kept its side of the contract.
///
/// The histogram must have one character per node (`graph.max_node()`) and
/// its counts must add up to `shots`.
pub fn execute_checked<E: Executor + ?Sized>(
    executor: &E,
    circuit: &E::Circuit,
    graph: &Graph,
    shots: u32,
) -> CutResult<Histogram> {
    if shots == 0 {
        return Err(CutError::InvalidShots("shot count must be positive".into()));
    }
    debug!("Executing on {} ({} shots)", executor.name(), shots);

    let histogram = executor.execute(circuit, shots)?;
    histogram.validate(graph.max_node(), u64::from(shots))?;
    Ok(histogram)
}

/// Replays a recorded histogram, ignoring the circuit.
///
/// Used to analyze counts captured from an earlier run.
#[derive(Debug, Clone)]
pub struct ReplayExecutor {
    name: String,
    histogram: Histogram,
}

impl ReplayExecutor {
    /// Create a replay backend for a recorded histogram.
    pub fn new(name: impl Into<String>, histogram: Histogram) -> Self {
        Self {
            name: name.into(),
            histogram,
        }
    }

    /// The recorded histogram.
    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }
}

impl Executor for ReplayExecutor {
    type Circuit = ();

    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, _circuit: &(), shots: u32) -> CutResult<Histogram> {
        let recorded = self.histogram.total_shots()?;
        if recorded != u64::from(shots) {
            return Err(CutError::InvalidShots(format!(
                "recorded histogram holds {recorded} shots, {shots} requested"
            )));
        }
        Ok(self.histogram.clone())
    }
}
