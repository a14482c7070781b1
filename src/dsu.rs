use crate::graph::Vertex;

/// A disjoint-set union over the vertices `[0, n)`.
///
/// `find` applies full path compression and `union` attaches the lower-rank root
/// under the higher-rank one. Sets only ever merge.
///
/// # Panics
///
/// Every operation panics when given an element outside `[0, n)`.
#[derive(Debug, Clone)]
pub struct DisjointSetUnion {
    /// Parent pointer of each element. A root points at itself.
    parent: Vec<Vertex>,
    /// Upper bound on the depth of the tree rooted at each element.
    rank: Vec<u32>,
    /// Number of disjoint sets.
    count: usize,
}

impl DisjointSetUnion {
    /// Creates `n` singleton sets, each element its own root with rank 1.
    pub fn new(n: usize) -> DisjointSetUnion {
        DisjointSetUnion {
            parent: (0..n).collect(),
            rank: vec![1; n],
            count: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Finds the representative of the set containing `x`.
    ///
    /// Every element on the way to the root is re-pointed directly at the root.
    pub fn find(&mut self, x: Vertex) -> Vertex {
        self.check(x);
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    /// Merges the sets containing `x` and `y`.
    ///
    /// # Returns
    ///
    /// `false` if they were already in the same set (the edge would close a cycle),
    /// `true` if two sets were merged into one.
    pub fn union(&mut self, x: Vertex, y: Vertex) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        if self.rank[root_x] < self.rank[root_y] {
            self.parent[root_x] = root_y;
        } else if self.rank[root_y] < self.rank[root_x] {
            self.parent[root_y] = root_x;
        } else {
            self.parent[root_y] = root_x;
            self.rank[root_x] += 1;
        }
        self.count -= 1;
        true
    }

    /// Returns `true` if `x` and `y` belong to the same set.
    pub fn same(&mut self, x: Vertex, y: Vertex) -> bool {
        self.find(x) == self.find(y)
    }

    fn check(&self, x: Vertex) {
        assert!(
            x < self.len(),
            "element {x} is outside of the disjoint-set range [0, {})",
            self.len()
        );
    }
}
