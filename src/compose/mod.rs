//! Quilt composition from ordered tiles

/// Grid compositor producing the quilt canvas
pub mod compositor;
/// Tile sources for files and decoded images
pub mod tiles;

pub use compositor::{Quilt, compose, compose_series};
pub use tiles::{FileTiles, MemoryTiles, TileSource};
