use crate::builder::MstBuilder;
use crate::dsu::DisjointSetUnion;
use crate::graph::{Edge, Graph};
use crate::{Coverage, MstResult};

/// Builds a minimum spanning forest with Kruskal's algorithm.
///
/// Edges are scanned in `(weight, u, v)` order and accepted whenever their endpoints
/// still belong to different sets of a [`DisjointSetUnion`]. The whole edge list is
/// always scanned, so a disconnected graph yields one tree per component.
///
/// # Example
///
/// ```
/// use mst_algorithm::{Coverage, Edge, Graph, KruskalBuilder, MstBuilder};
///
/// let graph = Graph::new(4, vec![Edge::new(0, 1, 3), Edge::new(2, 3, 7)]).unwrap();
/// let forest = KruskalBuilder.build(&graph);
/// assert_eq!(forest.total_cost, 10);
/// assert_eq!(forest.coverage, Coverage::Forest { components: 2 });
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KruskalBuilder;

impl MstBuilder for KruskalBuilder {
    fn build(&self, graph: &Graph) -> MstResult {
        let mut sorted = graph.edges().to_vec();
        sorted.sort_by_key(|edge| (edge.weight, edge.u, edge.v));

        let mut dsu = DisjointSetUnion::new(graph.vertex_count());
        let mut tree: Vec<Edge> = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
        let mut total_cost = 0;

        for edge in sorted {
            if dsu.union(edge.u, edge.v) {
                total_cost += edge.weight;
                tree.push(edge);
            }
        }

        tree.sort_by_key(|edge| (edge.u, edge.v));

        let components = dsu.count();
        log::debug!(
            "kruskal: scanned {} edges, accepted {}, discarded {}, {} component(s)",
            graph.edge_count(),
            tree.len(),
            graph.edge_count() - tree.len(),
            components
        );

        let coverage = if components <= 1 {
            Coverage::Spanning
        } else {
            Coverage::Forest { components }
        };

        MstResult {
            total_cost,
            edges: tree,
            coverage,
        }
    }

    fn name(&self) -> &'static str {
        "kruskal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(vertex_count: usize, edges: &[(usize, usize, i64)]) -> Graph {
        Graph::new(
            vertex_count,
            edges.iter().map(|&(u, v, w)| Edge::new(u, v, w)).collect(),
        )
        .unwrap()
    }

    fn pairs(result: &MstResult) -> Vec<(usize, usize)> {
        result.edges.iter().map(|edge| (edge.u, edge.v)).collect()
    }

    #[test]
    fn build_should_select_cheapest_tree() {
        let result = KruskalBuilder.build(&graph(
            4,
            &[(0, 1, 10), (0, 2, 6), (0, 3, 5), (1, 3, 15), (2, 3, 4)],
        ));
        assert_eq!(result.total_cost, 19);
        assert_eq!(pairs(&result), vec![(0, 1), (0, 3), (2, 3)]);
        assert_eq!(result.coverage, Coverage::Spanning);
    }

    #[test]
    fn build_should_produce_forest_on_disconnected_graph() {
        let result = KruskalBuilder.build(&graph(4, &[(0, 1, 3), (2, 3, 7)]));
        assert_eq!(result.total_cost, 10);
        assert_eq!(result.edge_count(), 2);
        assert_eq!(result.coverage, Coverage::Forest { components: 2 });
    }

    #[test]
    fn isolated_vertices_count_as_components() {
        let result = KruskalBuilder.build(&graph(3, &[]));
        assert_eq!(result.edge_count(), 0);
        assert_eq!(result.coverage, Coverage::Forest { components: 3 });
    }

    #[test]
    fn boundary_graphs_have_zero_cost() {
        for vertex_count in [0, 1] {
            let result = KruskalBuilder.build(&graph(vertex_count, &[]));
            assert_eq!(result, MstResult::empty());
        }
    }

    #[test]
    fn ties_are_broken_by_endpoints() {
        // All weights equal: the scan order is (0,1), (0,2), (1,2).
        let result = KruskalBuilder.build(&graph(3, &[(1, 2, 1), (0, 2, 1), (0, 1, 1)]));
        assert_eq!(pairs(&result), vec![(0, 1), (0, 2)]);
    }

    #[test]
    fn self_loops_and_parallel_edges_are_handled() {
        let result = KruskalBuilder.build(&graph(2, &[(0, 0, -5), (0, 1, 4), (1, 0, 2)]));
        assert_eq!(result.total_cost, 2);
        assert_eq!(pairs(&result), vec![(1, 0)]);
    }

    #[test]
    fn negative_weights_are_allowed() {
        let result = KruskalBuilder.build(&graph(3, &[(0, 1, -3), (1, 2, -1), (0, 2, 0)]));
        assert_eq!(result.total_cost, -4);
    }

    #[test]
    fn build_is_idempotent() {
        let g = graph(5, &[(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 4, 2), (4, 0, 2), (0, 2, 2)]);
        assert_eq!(KruskalBuilder.build(&g), KruskalBuilder.build(&g));
    }

    #[test]
    fn extreme_weights_within_graph_bound_do_not_overflow() {
        let half = i64::MAX / 2;
        let g = graph(3, &[(0, 1, half), (1, 2, half)]);
        assert_eq!(KruskalBuilder.build(&g).total_cost, i64::MAX - 1);
        let g = graph(3, &[(0, 1, -half), (1, 2, -half)]);
        assert_eq!(KruskalBuilder.build(&g).total_cost, -(i64::MAX - 1));
    }
}
