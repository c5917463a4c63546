//! Triangle detection and enumeration on undirected graphs.
//!
//! An undirected graph is represented, as usual in the webgraph ecosystem,
//! as a symmetric [`RandomAccessGraph`](webgraph::traits::RandomAccessGraph):
//! every arc has an opposite arc. All queries verify this contract with
//! [`check_undirected`](crate::utils::check_undirected) before starting and
//! return an [`InvalidGraphError`](crate::utils::InvalidGraphError) if it
//! does not hold.
//!
//! The algorithm is a single stack-driven scan of the graph (see
//! [`SeqScan`]): a triangle is reported whenever the scan crosses an arc
//! whose endpoint has already been popped and is adjacent to the
//! predecessor of the current node. Triangles are collected as canonical
//! [`Triangle`] values, so the same triangle reached along different paths
//! is reported as a single result.
//!
//! Three queries are provided:
//! * [`exists`] answers whether the graph contains any triangle, stopping
//!   at the first one found;
//! * [`find_one`] additionally returns the witnessing triangle;
//! * [`find_all`] returns the set of all triangles of the graph.
//!
//! # Examples
//!
//! ```
//! use webgraph_triangles::prelude::*;
//! use dsi_progress_logger::no_logging;
//! use webgraph::prelude::VecGraph;
//!
//! // A triangle on {0, 1, 2} plus a pendant edge {2, 3}
//! let graph = VecGraph::from_arcs([
//!     (0, 1), (1, 0),
//!     (1, 2), (2, 1),
//!     (2, 0), (0, 2),
//!     (2, 3), (3, 2),
//! ]);
//!
//! assert!(triangles::exists(&graph, no_logging![]).unwrap());
//!
//! let all = triangles::find_all(&graph, no_logging![]).unwrap();
//! assert_eq!(all.len(), 1);
//! assert!(all.contains(&Triangle::new(0, 1, 2).unwrap()));
//! ```

mod triangle;
pub use triangle::Triangle;

mod scan;
pub use scan::SeqScan;

mod queries;
pub use queries::*;
