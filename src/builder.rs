mod kruskal;
mod prim;

use crate::graph::Graph;
use crate::MstResult;
pub use kruskal::KruskalBuilder;
pub use prim::{PrimBuilder, PrimMode};

/// A minimum spanning tree algorithm.
///
/// Implementors take an already loaded graph and produce a fresh result; they
/// never keep state between runs, so building twice on the same graph yields
/// the same cost and the same edge list.
pub trait MstBuilder {
    /// Computes the spanning tree (or forest, or partial tree) of `graph`.
    ///
    /// # Parameters
    /// - `graph`: The graph to span. Only borrowed; every working structure is owned by the run.
    ///
    /// # Returns
    /// The total cost, the selected edges sorted by `(u, v)` and the coverage of the result.
    fn build(&self, graph: &Graph) -> MstResult;

    /// Short human-readable name used in logs and by the runner.
    fn name(&self) -> &'static str;
}
