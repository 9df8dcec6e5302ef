//! File-based tests for graph, counts and configuration loading.

use std::fs;

use qcut_core::{
    CutError, Histogram, QaoaConfig, Round, config_path_for, cut_dist, expected_cut, load_graph,
};

#[test]
fn test_load_single_edge_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edge.qx");
    fs::write(&path, "2 1\n0 1 1.0\n").unwrap();

    let graph = load_graph(&path).unwrap();
    assert_eq!(graph.nodes().iter().copied().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(graph.num_edges(), 1);
    assert_eq!(graph.max_node(), 2);

    let counts_path = dir.path().join("counts.json");
    fs::write(&counts_path, r#"{"01": 100}"#).unwrap();
    let counts = Histogram::load(&counts_path).unwrap();

    let dist = cut_dist(&graph, &counts).unwrap();
    assert_eq!(dist.iter().collect::<Vec<_>>(), vec![(1, 1.0)]);
    assert_eq!(expected_cut(&graph, &counts).unwrap(), 1.0);
}

#[test]
fn test_load_ring_with_comments() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ring.qx");
    fs::write(
        &path,
        "# 5-node ring\n5 5\n0 1 1.0\n1 2 1.0\n2 3 1.0\n3 4 1.0\n4 0 1.0\n",
    )
    .unwrap();

    let graph = load_graph(&path).unwrap();
    assert_eq!(graph.num_nodes(), 5);
    assert_eq!(graph.num_edges(), 5);
}

#[test]
fn test_load_half_weight_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weighted.qx");
    fs::write(&path, "2 1\n0 1 0.5\n").unwrap();

    let err = load_graph(&path).unwrap_err();
    assert!(err.is_format());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_graph(dir.path().join("missing.qx")).unwrap_err();
    assert!(matches!(err, CutError::Io { .. }));
}

#[test]
fn test_config_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let graph_path = dir.path().join("square.qx");
    let path = config_path_for(&graph_path, 2);
    assert_eq!(path.file_name().unwrap(), "square_config_02.json");

    let config = QaoaConfig {
        expected_cut: 3.25,
        rounds: vec![
            Round {
                beta: 0.25,
                gamma: 0.5,
            },
            Round {
                beta: 0.75,
                gamma: 1.5,
            },
        ],
        steps: 4,
    };
    config.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let expected_cut_at = text.find("\"expected_cut\"").unwrap();
    let rounds_at = text.find("\"rounds\"").unwrap();
    let steps_at = text.find("\"steps\"").unwrap();
    assert!(expected_cut_at < rounds_at && rounds_at < steps_at);

    assert_eq!(QaoaConfig::load(&path).unwrap(), config);
}
