pub mod algo;
pub mod utils;

/// Use `use webgraph_triangles::prelude::*;` to import the algorithm
/// module, the triangle type and the boundary checks.
pub mod prelude {
    use super::*;
    pub use algo::triangles;
    pub use algo::triangles::Triangle;
    pub use utils::{check_undirected, InvalidGraphError};
}
