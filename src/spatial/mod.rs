//! Spatial layout of tiles within a quilt

/// Grid shape, tile size and cell placement
pub mod grid;

pub use grid::{CellOffset, GridShape, TileSize};
