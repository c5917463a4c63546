//! Module containing all algorithm implementations.

pub mod triangles;
