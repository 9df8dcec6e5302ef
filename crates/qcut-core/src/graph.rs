//! Max-Cut graph definition and `.qx` edge-list loading.
//!
//! The `.qx` format is a plain-text edge list:
//!
//! ```text
//! # comment lines start with '#'
//! <max_node> <num_edges>
//! <from> <to> <weight>
//! ...
//! ```
//!
//! Only unweighted Max-Cut is supported, so every weight must be exactly
//! `1.0`. Lines that do not have exactly three tokens are skipped with a
//! warning.

use std::collections::BTreeSet;
use std::num::{IntErrorKind, ParseIntError};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::error::{CutError, CutResult};

/// An undirected, unit-weight edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// First endpoint.
    pub from: usize,
    /// Second endpoint.
    pub to: usize,
    /// Edge weight (always 1.0 in a valid graph).
    pub weight: f64,
}

impl Edge {
    /// Create a unit-weight edge.
    pub fn new(from: usize, to: usize) -> Self {
        Self {
            from,
            to,
            weight: 1.0,
        }
    }
}

/// A graph for the Max-Cut problem.
///
/// Nodes are the endpoints that occur in `edges`. `max_node` is the declared
/// register width and always equals the largest node id plus one.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: BTreeSet<usize>,
    edges: Vec<Edge>,
    max_node: usize,
}

impl Graph {
    /// Create a graph, checking the unit-weight and node-range invariants.
    pub fn new(edges: Vec<Edge>, max_node: usize) -> CutResult<Self> {
        if let Some(edge) = edges.iter().find(|e| e.weight != 1.0) {
            return Err(CutError::format(format!(
                "edge {} -- {} has weight {}; only unit weights are supported",
                edge.from, edge.to, edge.weight
            )));
        }

        let nodes: BTreeSet<usize> = edges.iter().flat_map(|e| [e.from, e.to]).collect();
        let Some(&largest) = nodes.last() else {
            return Err(CutError::format("graph has no nodes"));
        };
        if largest.checked_add(1) != Some(max_node) {
            return Err(CutError::format(format!(
                "largest node id is {largest} but header declares {max_node} nodes"
            )));
        }

        Ok(Self {
            nodes,
            edges,
            max_node,
        })
    }

    /// Create a graph from unit-weight `(from, to)` pairs.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> CutResult<Self> {
        let edges: Vec<Edge> = pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect();
        let max_node = edges
            .iter()
            .map(|e| e.from.max(e.to).saturating_add(1))
            .max()
            .unwrap_or(0);
        Self::new(edges, max_node)
    }

    /// Node ids, ascending.
    pub fn nodes(&self) -> &BTreeSet<usize> {
        &self.nodes
    }

    /// Edges in file order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Declared node-count upper bound (register width).
    pub fn max_node(&self) -> usize {
        self.max_node
    }

    /// Get the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Check whether node ids are exactly `0..n`.
    pub fn is_canonical(&self) -> bool {
        self.nodes.len() == self.max_node
    }
}

impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Graph ({} nodes, {} edges):",
            self.num_nodes(),
            self.num_edges()
        )?;
        for edge in &self.edges {
            writeln!(f, "  {} -- {}", edge.from, edge.to)?;
        }
        Ok(())
    }
}

/// Load a graph from a `.qx` file.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_graph(path: impl AsRef<Path>) -> CutResult<Graph> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| CutError::io(path, &e))?;
    let graph = parse_graph(&source)?;
    debug!(
        "Loaded graph: {} nodes, {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );
    Ok(graph)
}

/// Parse a graph from `.qx` source text.
pub fn parse_graph(source: &str) -> CutResult<Graph> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| CutError::format("missing '<max_node> <num_edges>' header"))?;
    let (max_node, num_edges) = parse_header(header_no, header)?;

    let mut raw_edges: Vec<(i128, i128)> = Vec::with_capacity(num_edges);
    for (line_no, line) in lines {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let [from, to, weight] = parts[..] else {
            warn!(
                line = line_no,
                "Skipping line with {} tokens: {line}",
                parts.len()
            );
            continue;
        };

        let from = parse_node(line_no, from)?;
        let to = parse_node(line_no, to)?;
        let weight: f64 = weight
            .parse()
            .map_err(|_| CutError::format_at(line_no, format!("invalid weight '{weight}'")))?;
        if weight != 1.0 {
            return Err(CutError::format_at(
                line_no,
                format!("edge weight {weight} is not 1.0; only unweighted max-cut is supported"),
            ));
        }
        raw_edges.push((from, to));
    }

    if let Some(min) = raw_edges.iter().flat_map(|&(a, b)| [a, b]).min() {
        if min < 0 {
            return Err(CutError::format(format!("negative node id {min}")));
        }
    }
    if raw_edges.len() != num_edges {
        return Err(CutError::format(format!(
            "header declares {num_edges} edges but {} were parsed",
            raw_edges.len()
        )));
    }

    let node_id = |id: i128| {
        usize::try_from(id).map_err(|_| CutError::format(format!("node id {id} is out of range")))
    };
    let edges = raw_edges
        .into_iter()
        .map(|(a, b)| Ok(Edge::new(node_id(a)?, node_id(b)?)))
        .collect::<CutResult<Vec<_>>>()?;
    Graph::new(edges, max_node)
}

fn parse_header(line_no: usize, header: &str) -> CutResult<(usize, usize)> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    let [max_node, num_edges] = parts[..] else {
        return Err(CutError::format_at(
            line_no,
            format!("expected '<max_node> <num_edges>', found '{header}'"),
        ));
    };
    let parse = |token: &str| {
        token
            .parse::<usize>()
            .map_err(|_| CutError::format_at(line_no, format!("invalid header count '{token}'")))
    };
    Ok((parse(max_node)?, parse(num_edges)?))
}

fn parse_node(line_no: usize, token: &str) -> CutResult<i128> {
    token.parse().map_err(|e: ParseIntError| {
        let reason = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "out of range",
            _ => "invalid",
        };
        CutError::format_at(line_no, format!("{reason} node id '{token}'"))
    })
}

/// Mapping between remapped (dense) node ids and original node ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeMapping {
    /// `new_to_original[new] == original`, ascending.
    new_to_original: Vec<usize>,
}

impl NodeMapping {
    /// Original id for a remapped id.
    pub fn original(&self, new_id: usize) -> Option<usize> {
        self.new_to_original.get(new_id).copied()
    }

    /// Remapped id for an original id.
    pub fn new_id(&self, original: usize) -> Option<usize> {
        self.new_to_original.binary_search(&original).ok()
    }

    /// Iterate `(new, original)` pairs in new-id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.new_to_original.iter().copied().enumerate()
    }

    /// Number of mapped nodes.
    pub fn len(&self) -> usize {
        self.new_to_original.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.new_to_original.is_empty()
    }

    /// Check if every node keeps its id.
    pub fn is_identity(&self) -> bool {
        self.iter().all(|(new, original)| new == original)
    }
}

/// Renumber nodes to `0..k` in ascending order of their original ids.
///
/// Returns the remapped graph and the new → original mapping.
pub fn remap(graph: &Graph) -> (Graph, NodeMapping) {
    let new_to_original: Vec<usize> = graph.nodes.iter().copied().collect();
    let mapping = NodeMapping { new_to_original };

    // Every endpoint is a member of `nodes`, so the lookups cannot miss.
    let lookup = |id: usize| mapping.new_id(id).unwrap_or(id);
    let edges: Vec<Edge> = graph
        .edges
        .iter()
        .map(|e| Edge {
            from: lookup(e.from),
            to: lookup(e.to),
            weight: e.weight,
        })
        .collect();

    let remapped = Graph {
        nodes: (0..mapping.len()).collect(),
        edges,
        max_node: mapping.len(),
    };
    debug!(
        "Remapped {} nodes (identity: {})",
        mapping.len(),
        mapping.is_identity()
    );

    (remapped, mapping)
}
