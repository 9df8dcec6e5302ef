//! Cut-value distributions from measurement histograms and random baselines.
//!
//! All maps are ordered by cut value and every reduction runs in ascending
//! key order, so identical inputs give bit-for-bit identical results.

use std::collections::BTreeMap;

use rand::Rng;
use tracing::debug;

use crate::assignment::{Assignment, cut_value};
use crate::counts::Histogram;
use crate::error::{CutError, CutResult};
use crate::graph::Graph;

/// Probability of each observed cut value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CutDistribution {
    probabilities: BTreeMap<usize, f64>,
}

impl CutDistribution {
    /// Normalize per-cut-value counts into probabilities.
    pub fn from_counts(cut_counts: &BTreeMap<usize, u64>) -> CutResult<Self> {
        let total = cut_counts
            .values()
            .try_fold(0u64, |total, &count| total.checked_add(count))
            .ok_or_else(|| CutError::CountOverflow("cut counts exceed u64::MAX".into()))?;
        if total == 0 {
            return Err(CutError::DegenerateInput(
                "histogram has zero total count".into(),
            ));
        }
        let probabilities = cut_counts
            .iter()
            .map(|(&cut, &count)| (cut, count as f64 / total as f64))
            .collect();
        Ok(Self { probabilities })
    }

    /// Probability of a cut value (zero if never observed).
    pub fn probability(&self, cut: usize) -> f64 {
        self.probabilities.get(&cut).copied().unwrap_or(0.0)
    }

    /// Iterate `(cut, probability)` in ascending cut order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (usize, f64)> + '_ {
        self.probabilities.iter().map(|(&cut, &p)| (cut, p))
    }

    /// Number of distinct cut values.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    /// Check if the distribution is empty.
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Sum of all probabilities (1.0 up to rounding).
    pub fn total_probability(&self) -> f64 {
        self.probabilities.values().sum()
    }

    /// Probability-weighted mean cut value.
    pub fn expectation(&self) -> f64 {
        self.iter().map(|(cut, p)| cut as f64 * p).sum()
    }

    /// Largest cut value with non-zero probability.
    pub fn max_cut(&self) -> Option<usize> {
        self.probabilities.keys().next_back().copied()
    }
}

/// Distribution of cut values over the outcomes of a histogram.
///
/// Each bitstring is decoded with the reversed bit-order convention and its
/// count is added to the bucket of its cut value.
pub fn cut_dist(graph: &Graph, histogram: &Histogram) -> CutResult<CutDistribution> {
    let mut cut_counts: BTreeMap<usize, u64> = BTreeMap::new();
    for (bitstring, count) in histogram.iter() {
        let assignment = Assignment::from_bitstring(bitstring)?;
        let cut = cut_value(graph, &assignment)?;
        let bucket = cut_counts.entry(cut).or_insert(0);
        *bucket = bucket.checked_add(count).ok_or_else(|| {
            CutError::CountOverflow(format!("shots for cut value {cut} exceed u64::MAX"))
        })?;
    }
    let dist = CutDistribution::from_counts(&cut_counts)?;
    debug!(
        "Cut distribution over {} outcomes: {} cut values",
        histogram.len(),
        dist.len()
    );
    Ok(dist)
}

/// Expected cut value of a histogram.
pub fn expected_cut(graph: &Graph, histogram: &Histogram) -> CutResult<f64> {
    Ok(cut_dist(graph, histogram)?.expectation())
}

/// Cut distribution of `samples` uniformly random `max_node`-bit states.
///
/// States are drawn from `[0, 2^max_node)` and decoded with the same bit
/// order as backend bitstrings. Widths above 64 bits are drawn as
/// independent 64-bit words.
pub fn rand_cut_dist<R: Rng + ?Sized>(
    graph: &Graph,
    samples: usize,
    rng: &mut R,
) -> CutResult<CutDistribution> {
    if samples == 0 {
        return Err(CutError::DegenerateInput(
            "random baseline needs at least one sample".into(),
        ));
    }

    let width = graph.max_node();
    let mut cut_counts: BTreeMap<usize, u64> = BTreeMap::new();
    for _ in 0..samples {
        let assignment = random_state(width, rng);
        let cut = cut_value(graph, &assignment)?;
        *cut_counts.entry(cut).or_insert(0) += 1;
    }
    CutDistribution::from_counts(&cut_counts)
}

fn random_state<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Assignment {
    if width < 64 {
        let state = rng.gen_range(0..(1u64 << width));
        return Assignment::from_state(state, width);
    }
    let words: Vec<u64> = (0..width.div_ceil(64)).map(|_| rng.r#gen()).collect();
    Assignment::from_words(&words, width)
}
