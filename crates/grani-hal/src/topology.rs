//! Qubit coupling topology and derived connectivity statistics.
//!
//! [`TopologyFeatures`] values are descriptive platform features (dataset
//! columns for the downstream ML layer); they never feed the fitness
//! formula. All statistics are computed from the edge list, never stored on
//! the graph.

use petgraph::algo::dijkstra;
use petgraph::graph::{NodeIndex, UnGraph};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Qubit coupling graph: an edge list over qubit indices.
///
/// Edges are stored as reported by the platform descriptor; directed
/// coupling maps list both orientations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topology {
    edges: Vec<(u32, u32)>,
}

impl Topology {
    /// Create a topology from an explicit edge list.
    pub fn custom(edges: Vec<(u32, u32)>) -> Self {
        Self { edges }
    }

    /// Create a linear chain topology.
    pub fn linear(n: u32) -> Self {
        Self {
            edges: (0..n.saturating_sub(1)).map(|i| (i, i + 1)).collect(),
        }
    }

    /// Create a star topology (qubit 0 coupled to all others).
    pub fn star(n: u32) -> Self {
        Self {
            edges: (1..n).map(|i| (0, i)).collect(),
        }
    }

    /// Create a fully connected topology.
    pub fn full(n: u32) -> Self {
        let mut edges = vec![];
        for i in 0..n {
            for j in (i + 1)..n {
                edges.push((i, j));
            }
        }
        Self { edges }
    }

    /// Create a 2D grid topology.
    pub fn grid(rows: u32, cols: u32) -> Self {
        let mut edges = vec![];
        for r in 0..rows {
            for c in 0..cols {
                let idx = r * cols + c;
                if c + 1 < cols {
                    edges.push((idx, idx + 1));
                }
                if r + 1 < rows {
                    edges.push((idx, idx + cols));
                }
            }
        }
        Self { edges }
    }

    /// Coupling edges as reported.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Check if two qubits are directly coupled (either orientation).
    pub fn is_connected(&self, q1: u32, q2: u32) -> bool {
        self.edges
            .iter()
            .any(|&(a, b)| (a == q1 && b == q2) || (a == q2 && b == q1))
    }

    /// Highest qubit index appearing in any edge, if the edge list is
    /// non-empty.
    pub fn max_qubit_index(&self) -> Option<u32> {
        self.edges.iter().map(|&(a, b)| a.max(b)).max()
    }
}

/// Connectivity statistics derived from a coupling graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyFeatures {
    /// Raw edge count divided by `max_qubit_index + 1`.
    ///
    /// The denominator is deliberately the highest qubit *index*, not the
    /// count of distinct coupled qubits, so isolated high-index qubits
    /// inflate it. Preserved as-is because every downstream ranking was
    /// produced with this formula.
    pub average_degree: f64,
    /// Undirected edge density: `2m / (n·(n−1))` over distinct coupled qubits.
    pub density: f64,
    /// Mean local clustering coefficient over coupled qubits.
    pub average_clustering: f64,
    /// Number of connected components (the connectivity statistic).
    pub connected_components: usize,
    /// Mean shortest-path length over reachable ordered qubit pairs.
    pub average_shortest_path: f64,
}

impl TopologyFeatures {
    /// Compute all statistics for a coupling graph.
    ///
    /// An empty edge list yields all-zero features.
    pub fn profile(topology: &Topology) -> Self {
        let Some(max_index) = topology.max_qubit_index() else {
            return Self {
                average_degree: 0.0,
                density: 0.0,
                average_clustering: 0.0,
                connected_components: 0,
                average_shortest_path: 0.0,
            };
        };

        let average_degree = topology.edges().len() as f64 / f64::from(max_index + 1);

        let graph = build_graph(topology);
        let n = graph.node_count();
        let m = graph.edge_count();

        let density = if n > 1 {
            2.0 * m as f64 / (n as f64 * (n - 1) as f64)
        } else {
            0.0
        };

        Self {
            average_degree,
            density,
            average_clustering: average_clustering(&graph),
            connected_components: petgraph::algo::connected_components(&graph),
            average_shortest_path: average_shortest_path(&graph),
        }
    }
}

/// Build a deduplicated undirected graph from the edge list.
fn build_graph(topology: &Topology) -> UnGraph<u32, ()> {
    let mut graph = UnGraph::new_undirected();
    let mut nodes: FxHashMap<u32, NodeIndex> = FxHashMap::default();

    for &(a, b) in topology.edges() {
        let na = *nodes.entry(a).or_insert_with(|| graph.add_node(a));
        let nb = *nodes.entry(b).or_insert_with(|| graph.add_node(b));
        if na != nb && graph.find_edge(na, nb).is_none() {
            graph.add_edge(na, nb, ());
        }
    }

    graph
}

/// Mean local clustering coefficient. Nodes with fewer than two neighbors
/// contribute 0.
fn average_clustering(graph: &UnGraph<u32, ()>) -> f64 {
    let n = graph.node_count();
    if n == 0 {
        return 0.0;
    }

    let mut sum = 0.0;
    for node in graph.node_indices() {
        let neighbors: Vec<_> = graph.neighbors(node).collect();
        let k = neighbors.len();
        if k < 2 {
            continue;
        }
        let mut closed = 0usize;
        for i in 0..k {
            for j in (i + 1)..k {
                if graph.find_edge(neighbors[i], neighbors[j]).is_some() {
                    closed += 1;
                }
            }
        }
        sum += 2.0 * closed as f64 / (k * (k - 1)) as f64;
    }

    sum / n as f64
}

/// Mean shortest-path length over reachable ordered node pairs.
fn average_shortest_path(graph: &UnGraph<u32, ()>) -> f64 {
    let mut total = 0usize;
    let mut pairs = 0usize;

    for source in graph.node_indices() {
        let distances = dijkstra(graph, source, None, |_| 1usize);
        for (target, dist) in distances {
            if target != source {
                total += dist;
                pairs += 1;
            }
        }
    }

    if pairs == 0 {
        0.0
    } else {
        total as f64 / pairs as f64
    }
}
