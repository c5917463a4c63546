use thiserror::Error;
use webgraph::traits::RandomAccessGraph;

/// The error returned when a graph does not satisfy the contract of an
/// undirected graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidGraphError {
    /// An arc whose opposite arc is missing from the graph.
    #[error("the arc ({0}, {1}) has no opposite arc: the graph is not symmetric")]
    AsymmetricArc(usize, usize),
}

/// Checks that the graph is symmetric, that is, that every arc has an
/// opposite arc.
///
/// Undirected graphs are represented as symmetric directed graphs, with an
/// arc in each direction for every edge. Algorithms working on undirected
/// graphs use this check at their boundary and report the first violation,
/// rather than silently returning wrong results on directed input.
pub fn check_undirected(graph: &impl RandomAccessGraph) -> Result<(), InvalidGraphError> {
    for node in 0..graph.num_nodes() {
        for succ in graph.successors(node) {
            if !graph.has_arc(succ, node) {
                return Err(InvalidGraphError::AsymmetricArc(node, succ));
            }
        }
    }

    Ok(())
}
