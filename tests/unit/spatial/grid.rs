//! Tests for grid shape geometry and the bottom-up cell placement rule

#[cfg(test)]
mod tests {
    use quilter::spatial::grid::{CellOffset, GridShape, TileSize};

    // Tests the documented 2x2 placement with a row flip
    // Verified by drawing logical row 0 at the top
    #[test]
    fn test_cell_offsets_flip_rows() {
        let shape = GridShape::new(2, 2).unwrap();
        let tile = TileSize::new(100, 50);

        let offsets: Vec<(u32, u32)> = (0..4)
            .map(|i| shape.cell_offset(i, tile))
            .map(|CellOffset { x, y }| (x, y))
            .collect();
        assert_eq!(offsets, vec![(0, 50), (100, 50), (0, 0), (100, 0)]);
    }

    // Tests rows fill left to right before moving up
    // Verified by filling columns first
    #[test]
    fn test_logical_cells_fill_rows_first() {
        let shape = GridShape::new(2, 3).unwrap();
        let cells: Vec<(u32, u32)> = (0..6).map(|i| shape.logical_cell(i)).collect();
        assert_eq!(cells, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    // Tests non-square grids place the first item at bottom-left
    // Verified by using columns instead of rows in the flip
    #[test]
    fn test_rectangular_grid_offsets() {
        let shape = GridShape::new(3, 2).unwrap();
        let tile = TileSize::new(10, 20);

        assert_eq!(shape.cell_offset(0, tile), CellOffset { x: 0, y: 40 });
        assert_eq!(shape.cell_offset(3, tile), CellOffset { x: 10, y: 20 });
        assert_eq!(shape.cell_offset(5, tile), CellOffset { x: 10, y: 0 });
    }

    // Tests single row grids never move vertically
    // Verified by off-by-one in the flip
    #[test]
    fn test_single_row_offsets() {
        let shape = GridShape::new(1, 5).unwrap();
        let tile = TileSize::new(8, 8);
        for i in 0..5 {
            assert_eq!(shape.cell_offset(i, tile).y, 0);
            assert_eq!(shape.cell_offset(i, tile).x, i as u32 * 8);
        }
    }

    // Tests canvas size is columns by width and rows by height
    // Verified by swapping the dimensions
    #[test]
    fn test_canvas_size() {
        let shape = GridShape::new(2, 3).unwrap();
        assert_eq!(shape.canvas_size(TileSize::new(100, 50)), Some((300, 100)));
        assert_eq!(shape.cell_count(), 6);
    }

    // Tests canvas overflow is reported instead of wrapping
    // Verified by using wrapping multiplication
    #[test]
    fn test_canvas_size_overflow() {
        let shape = GridShape::new(1, 70_000).unwrap();
        assert_eq!(shape.canvas_size(TileSize::new(70_000, 1)), None);
    }

    // Tests zero dimensions are rejected
    // Verified by removing the zero check
    #[test]
    fn test_shape_rejects_zero() {
        assert!(GridShape::new(0, 3).unwrap_err().is_invalid_input());
        assert!(GridShape::new(3, 0).unwrap_err().is_invalid_input());
    }

    // Tests aspect ratio is width over height
    // Verified by inverting the ratio
    #[test]
    fn test_aspect_ratio() {
        assert!((TileSize::new(100, 50).aspect_ratio() - 2.0).abs() < f64::EPSILON);
        assert!((TileSize::from((3, 4)).aspect_ratio() - 0.75).abs() < f64::EPSILON);
    }

    // Tests shape display lists rows first
    // Verified by printing columns first
    #[test]
    fn test_shape_display() {
        assert_eq!(GridShape::new(2, 5).unwrap().to_string(), "2x5");
    }
}
