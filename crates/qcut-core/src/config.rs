//! Persisted QAOA angle configurations.
//!
//! ```json
//! {
//!   "expected_cut": 1.72,
//!   "rounds": [
//!     { "beta": 0.39, "gamma": 0.78 }
//!   ],
//!   "steps": 8
//! }
//! ```
//!
//! Fields are declared in alphabetical order so the pretty-printed JSON has
//! sorted keys.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::{CutError, CutResult};

/// Mixer and cost angles of one QAOA round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Mixer angle.
    pub beta: f64,
    /// Cost angle.
    pub gamma: f64,
}

/// Best angles found by a sweep, with the expected cut they achieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaoaConfig {
    /// Expected cut value measured for these angles.
    pub expected_cut: f64,
    /// Angles per round, in application order.
    pub rounds: Vec<Round>,
    /// Angle discretization steps used by the sweep.
    pub steps: usize,
}

impl QaoaConfig {
    /// Number of QAOA rounds.
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    /// Serialize as pretty JSON.
    pub fn to_json(&self) -> CutResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON.
    pub fn from_json(json: &str) -> CutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> CutResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CutError::io(path, &e))?;
        let config = Self::from_json(&json)?;
        debug!("Loaded configuration with {} rounds", config.num_rounds());
        Ok(config)
    }

    /// Write the configuration as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> CutResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?).map_err(|e| CutError::io(path, &e))
    }
}

/// Default configuration file for a graph: `foo.qx` → `foo_config_01.json`.
///
/// Files without a `.qx` extension get the suffix appended to the full name.
pub fn config_path_for(graph_path: &Path, rounds: usize) -> PathBuf {
    let suffix = format!("_config_{rounds:02}.json");
    let base = if graph_path.extension().is_some_and(|ext| ext == "qx") {
        graph_path.with_extension("")
    } else {
        graph_path.to_path_buf()
    };
    let mut name = base.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    base.with_file_name(name)
}
