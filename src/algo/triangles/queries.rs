use super::{SeqScan, Triangle};
use crate::utils::{check_undirected, InvalidGraphError};
use dsi_progress_logger::ProgressLog;
use no_break::NoBreak;
use std::collections::HashSet;
use std::ops::ControlFlow::{Break, Continue};
use webgraph::traits::RandomAccessGraph;

/// Returns whether the graph contains at least one triangle.
///
/// The scan stops as soon as a triangle is found.
///
/// # Arguments
/// * `graph`: a symmetric graph.
/// * `pl`: a progress logger.
pub fn exists(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Result<bool, InvalidGraphError> {
    Ok(find_one(graph, pl)?.is_some())
}

/// Returns a triangle of the graph, or `None` if the graph is
/// triangle-free.
///
/// The scan stops as soon as a triangle is found; which triangle is
/// returned depends on the order in which arcs are scanned, but it is
/// always a member of the set returned by [`find_all`].
///
/// # Arguments
/// * `graph`: a symmetric graph.
/// * `pl`: a progress logger.
pub fn find_one(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Result<Option<Triangle>, InvalidGraphError> {
    check_undirected(&graph)?;

    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Searching for a triangle...");

    let mut scan = SeqScan::new(&graph);
    let result = match scan.scan_all(Break, pl) {
        Break(triangle) => Some(triangle),
        Continue(()) => None,
    };

    pl.done();

    Ok(result)
}

/// Returns the set of all triangles of the graph.
///
/// The result is empty, not an error, when the graph is triangle-free.
///
/// # Arguments
/// * `graph`: a symmetric graph.
/// * `pl`: a progress logger.
pub fn find_all(
    graph: impl RandomAccessGraph,
    pl: &mut impl ProgressLog,
) -> Result<HashSet<Triangle>, InvalidGraphError> {
    check_undirected(&graph)?;

    pl.item_name("node");
    pl.expected_updates(Some(graph.num_nodes()));
    pl.start("Enumerating triangles...");

    let mut triangles = HashSet::new();
    let mut scan = SeqScan::new(&graph);
    scan.scan_all(
        |triangle| {
            // Reached once per discovery path; the set deduplicates.
            triangles.insert(triangle);
            Continue(())
        },
        pl,
    )
    .continue_value_no_break();

    pl.done();
    pl.info(format_args!("Found {} triangles", triangles.len()));

    Ok(triangles)
}
