//! Constructive heuristics for building an initial routing solution.
//!
//! - [`solomon_i1`] — Solomon's I1 sequential insertion, opening new trips
//!   on demand once the last trip of every compatible vehicle is full.

mod solomon_i1;

pub use solomon_i1::solve;
