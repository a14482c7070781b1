pub use builder::{KruskalBuilder, MstBuilder, PrimBuilder, PrimMode};
pub use dsu::DisjointSetUnion;
pub use error::{GraphError, Result};
pub use graph::{AdjacencyList, Edge, Graph, Vertex, Weight, MAX_VERTICES};

pub mod builder;
pub mod dsu;
mod error;
pub mod graph;
pub mod report;

/// Describes how much of the graph a spanning result covers.
///
/// # There are three variants:
/// - `Spanning`: a single tree touching every vertex (an empty graph is trivially spanning).
/// - `Forest`: one minimum tree per connected component.
/// - `Partial`: a tree grown from one root that could not reach every vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Every vertex is connected by the reported edges.
    Spanning,
    /// The graph is disconnected and every component got its own tree.
    Forest {
        /// Number of trees in the forest.
        components: usize,
    },
    /// Only the component of the root was explored.
    Partial {
        /// Vertices settled into the tree, root included.
        reached: usize,
        /// Vertices in the graph.
        total: usize,
    },
}

/// The outcome of one spanning tree construction.
///
/// # Fields
///
/// * `total_cost` - Sum of the weights of the selected edges.
/// * `edges` - Selected edges, sorted by `(u, v)` ascending.
/// * `coverage` - Whether the edges span the whole graph.
///
/// # Example
///
/// ```
/// use mst_algorithm::{Edge, Graph, KruskalBuilder, MstBuilder};
///
/// let edges = vec![Edge::new(0, 1, 2), Edge::new(1, 2, 5), Edge::new(0, 2, 9)];
/// let graph = Graph::new(3, edges).unwrap();
/// let result = KruskalBuilder.build(&graph);
/// assert_eq!(result.total_cost, 7);
/// assert_eq!(result.edge_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MstResult {
    /// Sum of the selected edge weights.
    pub total_cost: i64,

    /// Selected edges in reporting order.
    pub edges: Vec<Edge>,

    /// How much of the graph the edges cover.
    pub coverage: Coverage,
}

impl MstResult {
    /// Result for a graph that has nothing to connect.
    pub fn empty() -> Self {
        MstResult {
            total_cost: 0,
            edges: Vec::new(),
            coverage: Coverage::Spanning,
        }
    }

    /// Number of edges in the tree (or forest).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if every vertex of the graph is covered, either by one tree or by a forest.
    pub fn covers_all_vertices(&self) -> bool {
        !matches!(self.coverage, Coverage::Partial { .. })
    }
}

/// Kruskal and Prim results computed on the same graph.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub kruskal: MstResult,
    pub prim: MstResult,
}

impl Comparison {
    /// Returns `true` if both algorithms found the same total cost.
    pub fn costs_agree(&self) -> bool {
        self.kruskal.total_cost == self.prim.total_cost
    }

    /// Returns `true` unless the graph is connected and the costs differ.
    ///
    /// On a disconnected graph a single-root Prim only sees one component,
    /// so a cost mismatch there is expected.
    pub fn is_consistent(&self) -> bool {
        self.kruskal.coverage != Coverage::Spanning || self.costs_agree()
    }
}

/// Runs Kruskal and single-root Prim on the same graph, in parallel.
///
/// Each builder owns its own working structures, so the graph is only borrowed.
///
/// # Arguments
///
/// * `graph` - The loaded graph.
///
/// # Returns
///
/// Both results. A disagreement on a connected graph is logged as a warning.
pub fn compare(graph: &Graph) -> Comparison {
    let (kruskal, prim) = rayon::join(
        || KruskalBuilder.build(graph),
        || PrimBuilder::default().build(graph),
    );

    let comparison = Comparison { kruskal, prim };
    if !comparison.is_consistent() {
        log::warn!(
            "Kruskal cost {} differs from Prim cost {} on a connected graph",
            comparison.kruskal.total_cost,
            comparison.prim.total_cost
        );
    }
    comparison
}
