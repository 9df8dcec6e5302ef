//! Exhaustive angle sweep for QAOA.
//!
//! Each round has a mixer angle `beta ∈ (0, scale·π)` and a cost angle
//! `gamma ∈ (0, scale·2π)`, both sampled on an evenly spaced grid. The sweep
//! runs every combination across all rounds on a backend and keeps the one
//! with the highest expected cut.

use std::f64::consts::PI;

use tracing::{debug, info};

use crate::backend::{Executor, execute_checked};
use crate::config::{QaoaConfig, Round};
use crate::distribution::expected_cut;
use crate::error::{CutError, CutResult};
use crate::graph::Graph;

/// Evenly spaced values `start + k·(stop-start)/steps` below `stop`.
///
/// `k` starts at 0, or at 1 when `include_start` is false.
pub fn frange(start: f64, stop: f64, steps: usize, include_start: bool) -> Vec<f64> {
    if steps == 0 {
        return Vec::new();
    }
    let inc = (stop - start) / steps as f64;
    let first = usize::from(!include_start);
    (first..steps)
        .map(|k| start + k as f64 * inc)
        .filter(|&v| v < stop)
        .collect()
}

/// Grid of QAOA angles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleGrid {
    /// Number of QAOA rounds.
    pub rounds: usize,
    /// Discretization steps per angle range.
    pub steps: usize,
    /// Shrinks both angle ranges (1.0 = full range).
    pub sample_range_scale: f64,
}

impl Default for AngleGrid {
    fn default() -> Self {
        Self {
            rounds: 1,
            steps: 3,
            sample_range_scale: 1.0,
        }
    }
}

impl AngleGrid {
    /// Create a grid with full angle ranges.
    pub fn new(rounds: usize, steps: usize) -> Self {
        Self {
            rounds,
            steps,
            ..Self::default()
        }
    }

    /// Set the range scale.
    pub fn with_range_scale(mut self, scale: f64) -> Self {
        self.sample_range_scale = scale;
        self
    }

    /// Sampled mixer angles.
    pub fn beta_values(&self) -> Vec<f64> {
        frange(0.0, self.sample_range_scale * PI, self.steps, false)
    }

    /// Sampled cost angles.
    pub fn gamma_values(&self) -> Vec<f64> {
        frange(0.0, self.sample_range_scale * 2.0 * PI, self.steps, false)
    }

    /// Number of configurations, if it fits in a `usize`.
    pub fn num_configurations(&self) -> Option<usize> {
        let per_round = self.beta_values().len() * self.gamma_values().len();
        u32::try_from(self.rounds)
            .ok()
            .and_then(|r| per_round.checked_pow(r))
    }

    /// Every configuration, round 0 beta varying slowest.
    pub fn configurations(&self) -> Configurations {
        Configurations::new(self.beta_values(), self.gamma_values(), self.rounds)
    }
}

/// Iterator over all angle combinations of an [`AngleGrid`].
#[derive(Debug, Clone)]
pub struct Configurations {
    beta: Vec<f64>,
    gamma: Vec<f64>,
    /// Odometer digits: `[beta_0, gamma_0, beta_1, gamma_1, ...]`.
    digits: Vec<usize>,
    done: bool,
}

impl Configurations {
    fn new(beta: Vec<f64>, gamma: Vec<f64>, rounds: usize) -> Self {
        let done = rounds > 0 && (beta.is_empty() || gamma.is_empty());
        Self {
            beta,
            gamma,
            digits: vec![0; 2 * rounds],
            done,
        }
    }

    fn radix(&self, position: usize) -> usize {
        if position % 2 == 0 {
            self.beta.len()
        } else {
            self.gamma.len()
        }
    }
}

impl Iterator for Configurations {
    type Item = Vec<Round>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self
            .digits
            .chunks(2)
            .map(|d| Round {
                beta: self.beta[d[0]],
                gamma: self.gamma[d[1]],
            })
            .collect();

        // Advance, last digit fastest.
        self.done = true;
        for position in (0..self.digits.len()).rev() {
            self.digits[position] += 1;
            if self.digits[position] < self.radix(position) {
                self.done = false;
                break;
            }
            self.digits[position] = 0;
        }

        Some(current)
    }
}

/// Run every configuration of `grid` and return the best one.
///
/// `build` turns a set of round angles into a backend circuit. The first
/// configuration reaching the highest expected cut wins.
pub fn grid_search<E, F>(
    executor: &E,
    graph: &Graph,
    grid: &AngleGrid,
    shots: u32,
    mut build: F,
) -> CutResult<QaoaConfig>
where
    E: Executor + ?Sized,
    F: FnMut(&[Round]) -> E::Circuit,
{
    let mut best: Option<QaoaConfig> = None;
    let mut evaluated = 0usize;

    for rounds in grid.configurations() {
        let circuit = build(rounds.as_slice());
        let histogram = execute_checked(executor, &circuit, graph, shots)?;
        let ec = expected_cut(graph, &histogram)?;
        evaluated += 1;

        if best.as_ref().is_none_or(|b| ec > b.expected_cut) {
            info!("New best expected cut {ec:.4} for {rounds:?}");
            best = Some(QaoaConfig {
                expected_cut: ec,
                rounds,
                steps: grid.steps,
            });
        }
    }

    debug!("Evaluated {evaluated} configurations");
    best.ok_or_else(|| CutError::DegenerateInput("angle grid has no configurations".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frange() {
        assert_eq!(frange(0.0, 1.0, 4, false), vec![0.25, 0.5, 0.75]);
        assert_eq!(frange(0.0, 1.0, 4, true), vec![0.0, 0.25, 0.5, 0.75]);
        assert!(frange(0.0, 1.0, 0, true).is_empty());
        assert!(frange(1.0, 1.0, 3, true).is_empty());
    }

    #[test]
    fn test_grid_values() {
        let grid = AngleGrid::new(1, 4);
        let beta = grid.beta_values();
        assert_eq!(beta.len(), 3);
        assert!((beta[0] - PI / 4.0).abs() < 1e-12);
        assert!((grid.gamma_values()[2] - 1.5 * PI).abs() < 1e-12);

        let half = grid.with_range_scale(0.5);
        assert!((half.beta_values()[0] - PI / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_configuration_count() {
        let grid = AngleGrid::new(2, 3);
        // 2 beta x 2 gamma values per round, two rounds.
        assert_eq!(grid.num_configurations(), Some(16));
        assert_eq!(grid.configurations().count(), 16);
    }

    #[test]
    fn test_configuration_order() {
        let grid = AngleGrid::new(1, 3);
        let configs: Vec<Vec<Round>> = grid.configurations().collect();
        let beta = grid.beta_values();
        let gamma = grid.gamma_values();

        assert_eq!(configs.len(), 4);
        assert_eq!(configs[0], vec![Round { beta: beta[0], gamma: gamma[0] }]);
        assert_eq!(configs[1], vec![Round { beta: beta[0], gamma: gamma[1] }]);
        assert_eq!(configs[2], vec![Round { beta: beta[1], gamma: gamma[0] }]);
    }

    #[test]
    fn test_zero_rounds_has_single_empty_configuration() {
        let configs: Vec<_> = AngleGrid::new(0, 3).configurations().collect();
        assert_eq!(configs, vec![Vec::<Round>::new()]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = AngleGrid::new(1, 1);
        assert_eq!(grid.configurations().count(), 0);
        assert_eq!(grid.num_configurations(), Some(0));
    }
}
