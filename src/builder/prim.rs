use crate::builder::MstBuilder;
use crate::graph::{AdjacencyList, Edge, Graph, Vertex, Weight};
use crate::{Coverage, MstResult};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// How Prim's algorithm treats vertices the root cannot reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimMode {
    /// Grow a single tree from the root; unreachable vertices are left out and
    /// the result is flagged [`Coverage::Partial`].
    #[default]
    SingleRoot,
    /// After the root's tree is complete, restart from the lowest unsettled vertex
    /// until every vertex is settled, producing a spanning forest.
    Forest,
}

/// Builds a minimum spanning tree with Prim's algorithm and a binary heap.
///
/// # Fields
///
/// * `root` - Vertex the first tree is grown from. Defaults to 0.
/// * `mode` - Single-root or forest behaviour on disconnected graphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrimBuilder {
    root: Vertex,
    mode: PrimMode,
}

impl PrimBuilder {
    pub fn new(root: Vertex, mode: PrimMode) -> PrimBuilder {
        PrimBuilder { root, mode }
    }

    /// Forest-building Prim rooted at vertex 0.
    pub fn forest() -> PrimBuilder {
        PrimBuilder::new(0, PrimMode::Forest)
    }

    pub fn with_root(self, root: Vertex) -> PrimBuilder {
        PrimBuilder { root, ..self }
    }

    pub fn root(&self) -> Vertex {
        self.root
    }

    pub fn mode(&self) -> PrimMode {
        self.mode
    }
}

/// Working arrays of one Prim run.
struct PrimState {
    /// Cheapest known weight connecting each vertex to the tree; `None` is infinity.
    key: Vec<Option<Weight>>,
    parent: Vec<Option<Vertex>>,
    visited: Vec<bool>,
    settled: usize,
    pushes: usize,
}

impl PrimState {
    fn new(vertex_count: usize) -> PrimState {
        PrimState {
            key: vec![None; vertex_count],
            parent: vec![None; vertex_count],
            visited: vec![false; vertex_count],
            settled: 0,
            pushes: 0,
        }
    }

    /// Settles every vertex reachable from `root` that is not yet in a tree.
    fn grow(&mut self, adjacency: &AdjacencyList, root: Vertex) {
        let mut heap = BinaryHeap::new();
        self.key[root] = Some(0);
        heap.push(Reverse((0, root)));
        self.pushes += 1;

        while let Some(Reverse((_, current))) = heap.pop() {
            if self.visited[current] {
                continue;
            }
            self.visited[current] = true;
            self.settled += 1;

            for &(neighbor, weight) in adjacency.neighbors(current) {
                if self.visited[neighbor] {
                    continue;
                }
                if self.key[neighbor].map_or(true, |key| weight < key) {
                    self.key[neighbor] = Some(weight);
                    self.parent[neighbor] = Some(current);
                    heap.push(Reverse((weight, neighbor)));
                    self.pushes += 1;
                }
            }
        }
    }

    /// Sum of keys over settled vertices only.
    fn total_cost(&self) -> Weight {
        (0..self.visited.len())
            .filter(|&vertex| self.visited[vertex])
            .filter_map(|vertex| self.key[vertex])
            .sum()
    }

    fn tree_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = (0..self.visited.len())
            .filter(|&child| self.visited[child])
            .filter_map(|child| {
                let parent = self.parent[child]?;
                let weight = self.key[child]?;
                self.visited[parent].then(|| Edge::new(parent, child, weight))
            })
            .collect();
        edges.sort_by_key(|edge| (edge.u, edge.v));
        edges
    }
}

impl MstBuilder for PrimBuilder {
    fn build(&self, graph: &Graph) -> MstResult {
        let vertex_count = graph.vertex_count();
        if vertex_count == 0 {
            return MstResult::empty();
        }
        assert!(
            self.root < vertex_count,
            "prim root {} is outside of [0, {vertex_count})",
            self.root
        );

        let adjacency = graph.adjacency();
        let mut state = PrimState::new(vertex_count);
        state.grow(&adjacency, self.root);
        let mut trees = 1;

        if self.mode == PrimMode::Forest {
            for start in 0..vertex_count {
                if !state.visited[start] {
                    state.grow(&adjacency, start);
                    trees += 1;
                }
            }
        }

        let edges = state.tree_edges();
        let total_cost = state.total_cost();
        log::debug!(
            "{}: settled {} of {} vertices in {} tree(s), {} heap pushes",
            self.name(),
            state.settled,
            vertex_count,
            trees,
            state.pushes
        );

        let coverage = match self.mode {
            PrimMode::SingleRoot if state.settled < vertex_count => Coverage::Partial {
                reached: state.settled,
                total: vertex_count,
            },
            PrimMode::Forest if trees > 1 => Coverage::Forest { components: trees },
            _ => Coverage::Spanning,
        };

        MstResult {
            total_cost,
            edges,
            coverage,
        }
    }

    fn name(&self) -> &'static str {
        match self.mode {
            PrimMode::SingleRoot => "prim",
            PrimMode::Forest => "prim-forest",
        }
    }
}
