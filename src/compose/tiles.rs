//! Access to tile images during composition
//!
//! The compositor reads one tile's size up front and then decodes tiles one at
//! a time, so a source only has to hand out a single decoded image per call.

use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::io::error::{QuiltError, Result};
use crate::spatial::grid::TileSize;

/// Provider of tile sizes and decoded tile images
pub trait TileSource {
    /// Handle identifying one tile
    type Tile;

    /// Human readable location of a tile, used in errors and diagnostics
    fn locate(&self, index: usize, tile: &Self::Tile) -> PathBuf;

    /// Read a tile's pixel size without decoding the full image
    ///
    /// # Errors
    ///
    /// Returns an error if the tile cannot be opened or its header is invalid
    fn dimensions(&self, tile: &Self::Tile) -> Result<TileSize>;

    /// Decode a tile
    ///
    /// # Errors
    ///
    /// Returns an error if the tile cannot be opened or decoded
    fn load(&self, tile: &Self::Tile) -> Result<DynamicImage>;
}

/// Tiles stored as image files on disk
#[derive(Debug, Default, Clone, Copy)]
pub struct FileTiles;

impl TileSource for FileTiles {
    type Tile = PathBuf;

    fn locate(&self, _index: usize, tile: &PathBuf) -> PathBuf {
        tile.clone()
    }

    fn dimensions(&self, tile: &PathBuf) -> Result<TileSize> {
        image::image_dimensions(tile)
            .map(TileSize::from)
            .map_err(|source| load_error(tile, source))
    }

    fn load(&self, tile: &PathBuf) -> Result<DynamicImage> {
        image::open(tile).map_err(|source| load_error(tile, source))
    }
}

/// Tiles that are already decoded
///
/// Each load hands out a copy of the stored image.
#[derive(Debug, Default, Clone, Copy)]
pub struct MemoryTiles;

impl TileSource for MemoryTiles {
    type Tile = DynamicImage;

    fn locate(&self, index: usize, _tile: &DynamicImage) -> PathBuf {
        PathBuf::from(format!("<tile {index}>"))
    }

    fn dimensions(&self, tile: &DynamicImage) -> Result<TileSize> {
        Ok(TileSize::new(tile.width(), tile.height()))
    }

    fn load(&self, tile: &DynamicImage) -> Result<DynamicImage> {
        Ok(tile.clone())
    }
}

fn load_error(path: &Path, source: image::ImageError) -> QuiltError {
    QuiltError::ImageLoad {
        path: path.to_path_buf(),
        source,
    }
}
