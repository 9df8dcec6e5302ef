//! Random node assignments for eyeballing cut quality without a backend.

use rand::Rng;

use crate::assignment::{Assignment, cut_value};
use crate::error::CutResult;
use crate::graph::Graph;

/// A sampled assignment together with its cut value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CutSample {
    /// Cut value of `assignment`.
    pub cut: usize,
    /// The sampled assignment.
    pub assignment: Assignment,
}

/// Draw `samples` assignments with one fair coin per node (ascending node order).
pub fn sample_cuts<R: Rng + ?Sized>(
    graph: &Graph,
    samples: usize,
    rng: &mut R,
) -> CutResult<Vec<CutSample>> {
    (0..samples)
        .map(|_| {
            let assignment: Assignment = graph
                .nodes()
                .iter()
                .map(|&node| (node, rng.gen_bool(0.5)))
                .collect();
            let cut = cut_value(graph, &assignment)?;
            Ok(CutSample { cut, assignment })
        })
        .collect()
}

/// The best cut value among `samples` and every sample reaching it, in draw order.
pub fn best_cuts(samples: &[CutSample]) -> Option<(usize, Vec<&CutSample>)> {
    let best = samples.iter().map(|s| s.cut).max()?;
    let winners = samples.iter().filter(|s| s.cut == best).collect();
    Some((best, winners))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_samples_cover_every_node() {
        let g = Graph::from_pairs(&[(0, 3), (3, 5)]).unwrap();
        let samples = sample_cuts(&g, 10, &mut StdRng::seed_from_u64(0)).unwrap();
        assert_eq!(samples.len(), 10);
        for s in &samples {
            let nodes: Vec<usize> = s.assignment.iter().map(|(n, _)| n).collect();
            assert_eq!(nodes, vec![0, 3, 5]);
            assert!(s.cut <= 2);
        }
    }

    #[test]
    fn test_best_cuts() {
        let mk = |cut, bits: &str| CutSample {
            cut,
            assignment: Assignment::from_bitstring(bits).unwrap(),
        };
        let samples = vec![mk(1, "01"), mk(2, "10"), mk(0, "00"), mk(2, "01")];

        let (best, winners) = best_cuts(&samples).unwrap();
        assert_eq!(best, 2);
        assert_eq!(winners.len(), 2);
        assert_eq!(winners[0].assignment.to_bitstring(), "10");
        assert!(best_cuts(&[]).is_none());
    }

    #[test]
    fn test_sampling_reproducible() {
        let g = Graph::from_pairs(&[(0, 1), (1, 2)]).unwrap();
        let a = sample_cuts(&g, 20, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = sample_cuts(&g, 20, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
