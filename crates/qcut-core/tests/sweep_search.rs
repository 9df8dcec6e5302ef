//! Angle sweep against a deterministic fake backend.

use qcut_core::{
    AngleGrid, CutError, CutResult, Executor, Graph, Histogram, ReplayExecutor, Round,
    grid_search,
};

/// Returns a perfect cut for one chosen angle pair and a poor one otherwise.
struct PeakedBackend {
    peak: Round,
}

impl Executor for PeakedBackend {
    type Circuit = Vec<Round>;

    fn name(&self) -> &str {
        "peaked"
    }

    fn execute(&self, circuit: &Vec<Round>, shots: u32) -> CutResult<Histogram> {
        let shots = u64::from(shots);
        let mut counts = Histogram::new();
        if circuit.first() == Some(&self.peak) {
            // Square graph: "0101" and "1010" cut all four edges.
            counts.insert("0101", shots / 2)?;
            counts.insert("1010", shots - shots / 2)?;
        } else {
            counts.insert("0000", shots / 2)?;
            counts.insert("0011", shots - shots / 2)?;
        }
        Ok(counts)
    }
}

fn square() -> Graph {
    Graph::from_pairs(&[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
}

#[test]
fn test_grid_search_finds_peak() {
    let grid = AngleGrid::new(1, 4);
    let peak = Round {
        beta: grid.beta_values()[1],
        gamma: grid.gamma_values()[2],
    };
    let backend = PeakedBackend { peak };

    let best = grid_search(&backend, &square(), &grid, 1000, |rounds| rounds.to_vec()).unwrap();
    assert_eq!(best.rounds, vec![peak]);
    assert_eq!(best.expected_cut, 4.0);
    assert_eq!(best.steps, 4);
}

#[test]
fn test_grid_search_ties_keep_first() {
    let counts: Histogram = [("0101", 10)].into_iter().collect();
    let backend = ReplayExecutor::new("replay", counts);
    let grid = AngleGrid::new(1, 3);

    let best = grid_search(&backend, &square(), &grid, 10, |_| ()).unwrap();
    let first = grid.configurations().next().unwrap();
    assert_eq!(best.rounds, first);
}

#[test]
fn test_grid_search_builds_every_configuration() {
    let counts: Histogram = [("0011", 8)].into_iter().collect();
    let backend = ReplayExecutor::new("replay", counts);
    let grid = AngleGrid::new(2, 3);

    let mut built = 0;
    grid_search(&backend, &square(), &grid, 8, |_| built += 1).unwrap();
    assert_eq!(built, 16);
}

#[test]
fn test_grid_search_empty_grid() {
    let backend = ReplayExecutor::new("replay", Histogram::new());
    let err = grid_search(&backend, &square(), &AngleGrid::new(1, 1), 10, |_| ()).unwrap_err();
    assert!(matches!(err, CutError::DegenerateInput(_)));
}

#[test]
fn test_grid_search_propagates_backend_contract() {
    // Three-bit outcomes for a four-node graph.
    let counts: Histogram = [("011", 8)].into_iter().collect();
    let backend = ReplayExecutor::new("replay", counts);
    let err = grid_search(&backend, &square(), &AngleGrid::new(1, 3), 8, |_| ()).unwrap_err();
    assert!(matches!(err, CutError::Backend(_)));
}
