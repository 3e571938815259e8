//! Grid geometry for quilts: shape, tile size and the cell placement rule
//!
//! Series order fills the grid left to right, one logical row at a time, and
//! logical rows are stacked from the bottom of the canvas upward. Combined with
//! the classifier's descending default, the highest sequence number lands in
//! the bottom-left corner and the lowest in the top-right.

use std::fmt;

use crate::io::error::{Result, invalid_input};

/// Grid dimensions chosen for a quilt
///
/// `rows * columns` always equals the number of tiles in the series; the
/// layout never pads or crops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridShape {
    rows: u32,
    columns: u32,
}

impl GridShape {
    /// Create a shape, rejecting zero-sized dimensions
    ///
    /// # Errors
    ///
    /// Returns [`crate::QuiltError::InvalidInput`] if either dimension is zero
    pub fn new(rows: u32, columns: u32) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(invalid_input(
                "grid shape",
                &format!("dimensions must be at least 1, got {rows}x{columns}"),
            ));
        }
        Ok(Self { rows, columns })
    }

    /// Number of grid rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of grid columns
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Logical `(row, column)` of the item at `index`, row 0 being filled first
    pub const fn logical_cell(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        ((index / columns) as u32, (index % columns) as u32)
    }

    /// Pixel offset of the item at `index` for tiles of `tile` size
    ///
    /// Logical row 0 is drawn at the bottom of the canvas. `index` must be
    /// below [`Self::cell_count`].
    pub const fn cell_offset(&self, index: usize, tile: TileSize) -> CellOffset {
        let (row, column) = self.logical_cell(index);
        CellOffset {
            x: column * tile.width,
            y: (self.rows - 1 - row) * tile.height,
        }
    }

    /// Canvas size needed to hold every cell at `tile` size
    ///
    /// `None` when the canvas would not fit in `u32` pixel coordinates.
    pub const fn canvas_size(&self, tile: TileSize) -> Option<(u32, u32)> {
        match (
            self.columns.checked_mul(tile.width),
            self.rows.checked_mul(tile.height),
        ) {
            (Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

/// Pixel dimensions shared by every tile of a series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

impl TileSize {
    /// Create a tile size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

impl From<(u32, u32)> for TileSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Top-left pixel position of a tile within the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOffset {
    /// Horizontal offset from the left edge
    pub x: u32,
    /// Vertical offset from the top edge
    pub y: u32,
}
