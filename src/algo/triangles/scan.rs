use super::Triangle;
use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow;
use sux::bits::BitVec;
use webgraph::traits::RandomAccessGraph;

/// A sequential triangle scan over a symmetric graph.
///
/// This is an iterative, explicit-stack walker. Stack entries are
/// `(current, parent)` pairs; a root is seeded as `(root, root)`, so a node
/// equal to its parent marks the start of a visit tree.
///
/// The scan departs from a classical depth-first visit in two ways, both
/// required for completeness:
/// * a node is marked visited when it is *popped*, not when it is pushed,
///   so a node may appear on the stack once per incoming arc scanned
///   before its first pop;
/// * every pop re-scans all successors of the node, even if the node was
///   already visited. Each `(parent, current)` pairing must be examined at
///   least once, otherwise triangles incident on a node reached through a
///   later arc would be missed.
///
/// When the scan crosses an arc toward an already-visited successor that is
/// also adjacent to the parent of the current node, the three nodes close a
/// triangle and the callback is invoked with the canonical [`Triangle`].
/// The callback returns a [`ControlFlow`]: breaking aborts the whole scan
/// and the break value is propagated to the caller, which is how
/// [decision queries](super::find_one) stop at the first triangle.
///
/// Each arc causes at most one push per direction plus one adjacency test
/// per scan of its source, keeping the total work linear in the size of
/// the graph for graphs with adjacency tests of constant cost.
///
/// The scan assumes the graph is symmetric; callers are expected to have
/// validated the input with
/// [`check_undirected`](crate::utils::check_undirected).
pub struct SeqScan<'a, G: RandomAccessGraph> {
    graph: &'a G,
    visited: BitVec,
    stack: Vec<(usize, usize)>,
}

impl<'a, G: RandomAccessGraph> SeqScan<'a, G> {
    /// Creates a new sequential scan.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to scan.
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: BitVec::new(graph.num_nodes()),
            stack: Vec::with_capacity(16),
        }
    }

    /// Scans the component of the given root, invoking `callback` on every
    /// triangle closed by the scan.
    ///
    /// Roots already visited by a previous scan are skipped.
    ///
    /// # Arguments
    /// * `root`: the node to start the scan from.
    /// * `callback`: invoked on each closed triangle; returning
    ///   [`ControlFlow::Break`] aborts the scan.
    /// * `pl`: a progress logger, updated once per stack pop.
    pub fn scan<B, C: FnMut(Triangle) -> ControlFlow<B>>(
        &mut self,
        root: usize,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B> {
        if self.visited[root] {
            return ControlFlow::Continue(());
        }

        // The root acts as its own parent.
        self.stack.push((root, root));

        while let Some((curr, parent)) = self.stack.pop() {
            self.visited.set(curr, true);

            for succ in self.graph.successors(curr) {
                if self.visited[succ] {
                    // An arc toward a visited node: if its endpoint is also
                    // adjacent to the parent, the three nodes close a
                    // triangle, unless the triple is degenerate (the root
                    // sentinel or a 2-cycle).
                    if self.graph.has_arc(parent, succ) {
                        if let Some(triangle) = Triangle::new(parent, curr, succ) {
                            callback(triangle)?;
                        }
                    }
                } else {
                    // curr is the parent of succ. succ may be pushed again
                    // by another incoming arc before its first pop.
                    self.stack.push((succ, curr));
                }
            }

            pl.light_update();
        }

        ControlFlow::Continue(())
    }

    /// Scans the whole graph, seeding one scan per not-yet-visited node so
    /// that every connected component is covered.
    ///
    /// See [`scan`](Self::scan) for the callback contract.
    pub fn scan_all<B, C: FnMut(Triangle) -> ControlFlow<B>>(
        &mut self,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B> {
        for root in 0..self.graph.num_nodes() {
            self.scan(root, &mut callback, pl)?;
        }

        ControlFlow::Continue(())
    }

    /// Resets the scan state, making it possible to reuse it.
    pub fn reset(&mut self) {
        self.stack.clear();
        self.visited.reset();
    }
}
