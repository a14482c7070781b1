use mst_algorithm::{compare, Coverage, Edge, Graph, KruskalBuilder, MstBuilder, PrimBuilder};
use proptest::prelude::*;

fn connected_graph() -> impl Strategy<Value = Graph> {
    (2_usize..15).prop_flat_map(|n| {
        let path = prop::collection::vec(-20_i64..50, n - 1);
        let extra = prop::collection::vec((0..n, 0..n, -20_i64..50), 0..30);
        (Just(n), path, extra).prop_map(|(n, path, extra)| {
            let mut edges: Vec<Edge> = path
                .into_iter()
                .enumerate()
                .map(|(i, w)| Edge::new(i, i + 1, w))
                .collect();
            edges.extend(extra.into_iter().map(|(u, v, w)| Edge::new(u, v, w)));
            Graph::new(n, edges).unwrap()
        })
    })
}

fn graph_with_root() -> impl Strategy<Value = (Graph, usize)> {
    connected_graph().prop_flat_map(|graph| {
        let n = graph.vertex_count();
        (Just(graph), 0..n)
    })
}

proptest! {
    #[test]
    fn prop_connected_costs_agree(graph in connected_graph()) {
        let comparison = compare(&graph);
        prop_assert_eq!(comparison.kruskal.total_cost, comparison.prim.total_cost);
        prop_assert_eq!(comparison.kruskal.coverage, Coverage::Spanning);
        prop_assert_eq!(comparison.prim.edge_count(), graph.vertex_count() - 1);
    }

    #[test]
    fn prop_kruskal_edges_sorted_by_endpoints(graph in connected_graph()) {
        let result = KruskalBuilder.build(&graph);
        for pair in result.edges.windows(2) {
            prop_assert!((pair[0].u, pair[0].v) <= (pair[1].u, pair[1].v));
        }
        let cost: i64 = result.edges.iter().map(|edge| edge.weight).sum();
        prop_assert_eq!(cost, result.total_cost);
    }

    #[test]
    fn prop_prim_spans_connected_graph_from_any_root((graph, root) in graph_with_root()) {
        let result = PrimBuilder::default().with_root(root).build(&graph);
        prop_assert!(result.covers_all_vertices());
        prop_assert_eq!(result.edge_count(), graph.vertex_count() - 1);
        prop_assert_eq!(result.total_cost, KruskalBuilder.build(&graph).total_cost);
        prop_assert!(result.edges.iter().all(|edge| !edge.is_self_loop()));
    }
}
