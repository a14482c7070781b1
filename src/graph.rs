mod parser;

use crate::error::{GraphError, Result};
pub use parser::{parse_graph, read_graph};

/// Dense vertex index in `[0, V)`.
pub type Vertex = usize;

/// Signed edge weight.
pub type Weight = i64;

/// Largest vertex count a graph may declare. Every builder allocates per-vertex arrays.
pub const MAX_VERTICES: usize = 1 << 26;

/// An undirected weighted edge.
///
/// The endpoints keep the orientation they were given in; `u` and `v` are
/// interchangeable for every algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: Vertex,
    pub v: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: Vertex, v: Vertex, weight: Weight) -> Edge {
        Edge { u, v, weight }
    }

    /// Returns `true` if both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }
}

/// A weighted undirected graph with a fixed vertex count.
///
/// Every edge endpoint is guaranteed to be below `vertex_count`, which lets the
/// builders index their per-vertex arrays without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    /// Builds a graph after checking that every endpoint lies in `[0, vertex_count)`.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Number of vertices `V`.
    /// * `edges` - The edge multiset. Parallel edges and self-loops are allowed.
    ///
    /// # Returns
    ///
    /// The graph, or the first problem found: `TooManyVertices` above [`MAX_VERTICES`],
    /// `VertexOutOfRange` naming the first bad edge, or `WeightOverflow` when the absolute
    /// weights sum past `i64::MAX`.
    pub fn new(vertex_count: usize, edges: Vec<Edge>) -> Result<Graph> {
        check_vertex_count(vertex_count)?;
        for (edge_index, edge) in edges.iter().enumerate() {
            for vertex in [edge.u, edge.v] {
                if vertex >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        edge_index,
                        vertex,
                        vertex_count,
                    });
                }
            }
        }

        let absolute_sum: u128 = edges
            .iter()
            .map(|edge| u128::from(edge.weight.unsigned_abs()))
            .sum();
        if absolute_sum > i64::MAX as u128 {
            return Err(GraphError::WeightOverflow);
        }

        Ok(Graph {
            vertex_count,
            edges,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Builds the adjacency-list view of this graph.
    pub fn adjacency(&self) -> AdjacencyList {
        AdjacencyList::from_graph(self)
    }
}

pub(crate) fn check_vertex_count(vertex_count: usize) -> Result<()> {
    if vertex_count > MAX_VERTICES {
        return Err(GraphError::TooManyVertices {
            vertex_count,
            max: MAX_VERTICES,
        });
    }
    Ok(())
}

/// Per-vertex lists of `(neighbor, weight)` pairs.
///
/// Each undirected edge is stored in both directions, so a self-loop appears twice
/// in its own vertex's list.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyList {
    neighbors: Vec<Vec<(Vertex, Weight)>>,
}

impl AdjacencyList {
    pub fn from_graph(graph: &Graph) -> AdjacencyList {
        let mut neighbors = vec![Vec::new(); graph.vertex_count()];
        for edge in graph.edges() {
            neighbors[edge.u].push((edge.v, edge.weight));
            neighbors[edge.v].push((edge.u, edge.weight));
        }
        AdjacencyList { neighbors }
    }

    pub fn vertex_count(&self) -> usize {
        self.neighbors.len()
    }

    pub fn neighbors(&self, vertex: Vertex) -> &[(Vertex, Weight)] {
        &self.neighbors[vertex]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_should_reject_out_of_range_endpoint() {
        let err = Graph::new(3, vec![Edge::new(0, 1, 1), Edge::new(2, 3, 1)]).unwrap_err();
        match err {
            GraphError::VertexOutOfRange {
                edge_index,
                vertex,
                vertex_count,
            } => {
                assert_eq!(edge_index, 1);
                assert_eq!(vertex, 3);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn new_should_reject_weights_whose_sum_overflows() {
        let edges = vec![Edge::new(0, 1, i64::MAX), Edge::new(1, 2, -1)];
        assert!(matches!(
            Graph::new(3, edges).unwrap_err(),
            GraphError::WeightOverflow
        ));
        assert!(Graph::new(2, vec![Edge::new(0, 1, i64::MIN + 1)]).is_ok());
    }

    #[test]
    fn new_should_reject_huge_vertex_count() {
        assert!(matches!(
            Graph::new(MAX_VERTICES + 1, vec![]).unwrap_err(),
            GraphError::TooManyVertices { .. }
        ));
    }

    #[test]
    fn new_should_accept_empty_graph() {
        let graph = Graph::new(0, vec![]).unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.adjacency().vertex_count(), 0);
    }

    #[test]
    fn adjacency_should_store_both_directions() {
        let graph = Graph::new(3, vec![Edge::new(0, 1, 4), Edge::new(1, 2, -2)]).unwrap();
        let adjacency = graph.adjacency();
        assert_eq!(adjacency.neighbors(0), &[(1, 4)]);
        assert_eq!(adjacency.neighbors(1), &[(0, 4), (2, -2)]);
        assert_eq!(adjacency.neighbors(2), &[(1, -2)]);
    }

    #[test]
    fn self_loop_is_detected() {
        assert!(Edge::new(2, 2, 1).is_self_loop());
        assert!(!Edge::new(1, 2, 1).is_self_loop());
    }
}
