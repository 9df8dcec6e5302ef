//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur while loading graphs or evaluating measurements.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CutError {
    /// Malformed or semantically invalid graph file.
    #[error("Format error{}: {message}", .line.map(|l| format!(" at line {l}")).unwrap_or_default())]
    Format {
        /// 1-based source line, when the problem is tied to one.
        line: Option<usize>,
        /// What was wrong.
        message: String,
    },

    /// File could not be read or written.
    #[error("I/O error on {path}: {message}")]
    Io {
        /// Path of the file.
        path: String,
        /// Underlying error message.
        message: String,
    },

    /// Input with nothing to normalize over (zero counts, zero samples, empty grid).
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Bitstring contains characters other than '0' and '1'.
    #[error("Invalid bitstring: {0:?}")]
    InvalidBitstring(String),

    /// An edge references a node the assignment does not cover.
    #[error("Assignment has no value for node {0}")]
    UnassignedNode(usize),

    /// Invalid number of shots.
    #[error("Invalid shots: {0}")]
    InvalidShots(String),

    /// Shot counts add up to more than a `u64` can hold.
    #[error("Count overflow: {0}")]
    CountOverflow(String),

    /// The execution backend failed or broke its contract.
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CutError {
    /// Format error tied to a source line.
    pub(crate) fn format_at(line: usize, message: impl Into<String>) -> Self {
        CutError::Format {
            line: Some(line),
            message: message.into(),
        }
    }

    /// Format error about the file as a whole.
    pub(crate) fn format(message: impl Into<String>) -> Self {
        CutError::Format {
            line: None,
            message: message.into(),
        }
    }

    pub(crate) fn io(path: &std::path::Path, err: &std::io::Error) -> Self {
        CutError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    /// Check if this is a graph format error.
    pub fn is_format(&self) -> bool {
        matches!(self, CutError::Format { .. })
    }
}

/// Result type for core operations.
pub type CutResult<T> = Result<T, CutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = CutError::format_at(3, "weight must be 1.0");
        assert_eq!(err.to_string(), "Format error at line 3: weight must be 1.0");

        let err = CutError::format("edge count mismatch");
        assert_eq!(err.to_string(), "Format error: edge count mismatch");
        assert!(err.is_format());
    }

    #[test]
    fn test_unassigned_node_display() {
        assert!(!CutError::UnassignedNode(4).is_format());
        assert_eq!(
            CutError::UnassignedNode(4).to_string(),
            "Assignment has no value for node 4"
        );
    }
}
