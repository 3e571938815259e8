//! Composition of numbered image series into near-square grids ("quilts")
//!
//! Files in a directory are grouped into series by their name prefix and
//! extension, ordered by the number in their name, laid out in the most square
//! grid their count factors into and pasted onto one canvas per series.

#![forbid(unsafe_code)]

/// Grid compositor and tile sources
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Divisor search for grid shapes
pub mod math;
/// Grouping and ordering of files into series
pub mod series;
/// Grid geometry and cell placement
pub mod spatial;

pub use io::error::{QuiltError, Result};
