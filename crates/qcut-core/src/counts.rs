//! Measurement histograms returned by execution backends.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{CutError, CutResult};

/// Measurement counts: bitstring → number of shots that produced it.
///
/// Serialized as a plain JSON object, e.g. `{"01": 512, "10": 488}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Histogram {
    counts: BTreeMap<String, u64>,
}

impl Histogram {
    /// Create an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) -> CutResult<()> {
        let bitstring = bitstring.into();
        let entry = self.counts.entry(bitstring).or_insert(0);
        *entry = entry.checked_add(count).ok_or_else(|| {
            CutError::CountOverflow(format!("adding {count} shots overflows a u64 count"))
        })?;
        Ok(())
    }

    /// Count for a bitstring (zero if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.counts.get(bitstring).copied().unwrap_or(0)
    }

    /// Iterate `(bitstring, count)` in bitstring order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of distinct bitstrings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total_shots(&self) -> CutResult<u64> {
        self.counts
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count))
            .ok_or_else(|| CutError::CountOverflow("histogram total exceeds u64::MAX".into()))
    }

    /// Entries sorted by count, most frequent first (ties in bitstring order).
    pub fn sorted(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }

    /// The most frequent outcome.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.sorted().into_iter().next()
    }

    /// Check the execution boundary contract: every bitstring is `width`
    /// characters wide and the counts add up to `shots`.
    pub fn validate(&self, width: usize, shots: u64) -> CutResult<()> {
        if let Some((bitstring, _)) = self.iter().find(|(b, _)| b.chars().count() != width) {
            return Err(CutError::Backend(format!(
                "bitstring '{bitstring}' has width {}, expected {width}",
                bitstring.chars().count()
            )));
        }
        let total = self.total_shots()?;
        if total != shots {
            return Err(CutError::Backend(format!(
                "histogram holds {total} shots, expected {shots}"
            )));
        }
        Ok(())
    }

    /// Parse a histogram from a JSON object.
    pub fn from_json(json: &str) -> CutResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a histogram from a JSON counts file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> CutResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| CutError::io(path, &e))?;
        Self::from_json(&json)
    }
}

/// Repeated bitstrings are merged. A merged count saturates at `u64::MAX`;
/// use [`Histogram::insert`] to detect that instead.
impl<S: Into<String>> FromIterator<(S, u64)> for Histogram {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for (bitstring, count) in iter {
            let entry = counts.entry(bitstring.into()).or_insert(0);
            *entry = entry.saturating_add(count);
        }
        Self { counts }
    }
}
