//! Module containing utilities.

mod check;
pub use check::*;
