//! Composition of an ordered tile list into a single quilt canvas

use image::{RgbImage, imageops};

use crate::compose::tiles::TileSource;
use crate::io::error::{QuiltError, Result, invalid_input};
use crate::io::report::{QuiltEvent, Reporter};
use crate::math::divisor::solve_len;
use crate::spatial::grid::{GridShape, TileSize};

/// A composed quilt together with the layout that produced it
#[derive(Debug, Clone)]
pub struct Quilt {
    canvas: RgbImage,
    shape: GridShape,
    tile_size: TileSize,
}

impl Quilt {
    /// The composed pixels
    pub const fn canvas(&self) -> &RgbImage {
        &self.canvas
    }

    /// Take ownership of the composed pixels
    pub fn into_canvas(self) -> RgbImage {
        self.canvas
    }

    /// Grid shape the tiles were laid out in
    pub const fn shape(&self) -> GridShape {
        self.shape
    }

    /// Size shared by every tile
    pub const fn tile_size(&self) -> TileSize {
        self.tile_size
    }

    /// Tile width divided by tile height
    pub fn aspect_ratio(&self) -> f64 {
        self.tile_size.aspect_ratio()
    }
}

/// Compose `tiles` into a grid of the given `shape`
///
/// The first tile's size fixes the cell size. Every tile is decoded, checked
/// against that size and pasted opaquely at its cell offset before the next one
/// is decoded. Alpha is dropped; the canvas is RGB.
///
/// # Errors
///
/// Returns an error if:
/// - `tiles` is empty or its length differs from the shape's cell count
/// - the canvas size overflows pixel coordinates
/// - a tile cannot be read or decoded
/// - a tile's size differs from the first tile's
pub fn compose<S: TileSource>(
    source: &S,
    tiles: &[S::Tile],
    shape: GridShape,
    reporter: &dyn Reporter,
) -> Result<Quilt> {
    let Some(first) = tiles.first() else {
        return Err(invalid_input("compositor", &"empty image list"));
    };
    if tiles.len() != shape.cell_count() {
        return Err(invalid_input(
            "compositor",
            &format!(
                "{} tiles cannot fill a {shape} grid of {} cells",
                tiles.len(),
                shape.cell_count()
            ),
        ));
    }

    let tile_size = source.dimensions(first)?;
    reporter.report(QuiltEvent::TileSize {
        path: source.locate(0, first),
        size: tile_size,
    });

    let canvas_size = shape.canvas_size(tile_size).ok_or_else(|| {
        invalid_input(
            "compositor",
            &format!(
                "a {shape} grid of {}x{}px tiles exceeds the maximum canvas size",
                tile_size.width, tile_size.height
            ),
        )
    })?;
    reporter.report(QuiltEvent::ShapeComputed {
        tiles: tiles.len(),
        shape,
        canvas: canvas_size,
    });

    let mut canvas = RgbImage::new(canvas_size.0, canvas_size.1);
    for (index, tile) in tiles.iter().enumerate() {
        let image = source.load(tile)?;
        let found = (image.width(), image.height());
        if found != (tile_size.width, tile_size.height) {
            return Err(QuiltError::TileSizeMismatch {
                path: source.locate(index, tile),
                expected: (tile_size.width, tile_size.height),
                found,
            });
        }

        let offset = shape.cell_offset(index, tile_size);
        imageops::replace(
            &mut canvas,
            &image.to_rgb8(),
            i64::from(offset.x),
            i64::from(offset.y),
        );
    }
    reporter.report(QuiltEvent::Composed { tiles: tiles.len() });

    Ok(Quilt {
        canvas,
        shape,
        tile_size,
    })
}

/// Compose `tiles` into the most square grid their count allows
///
/// # Errors
///
/// Returns an error if `tiles` is empty or [`compose`] fails
pub fn compose_series<S: TileSource>(
    source: &S,
    tiles: &[S::Tile],
    reporter: &dyn Reporter,
) -> Result<Quilt> {
    let shape = solve_len(tiles.len())?;
    compose(source, tiles, shape, reporter)
}
