//! Tests for file-backed and in-memory tile sources

#[cfg(test)]
mod tests {
    use image::{DynamicImage, Rgb, RgbImage};
    use quilter::QuiltError;
    use quilter::compose::tiles::{FileTiles, MemoryTiles, TileSource};
    use quilter::spatial::grid::TileSize;
    use std::path::PathBuf;

    // Tests dimensions are read from the file header
    // Verified by returning the decoded size swapped
    #[test]
    fn test_file_tiles_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t1.png");
        RgbImage::from_pixel(7, 3, Rgb([1, 2, 3])).save(&path).unwrap();

        assert_eq!(FileTiles.dimensions(&path).unwrap(), TileSize::new(7, 3));
        let image = FileTiles.load(&path).unwrap();
        assert_eq!((image.width(), image.height()), (7, 3));
        assert_eq!(FileTiles.locate(0, &path), path);
    }

    // Tests missing files surface as load errors with their path
    // Verified by mapping to a generic file system error
    #[test]
    fn test_file_tiles_missing_file() {
        let path = PathBuf::from("does/not/exist7.png");
        match FileTiles.load(&path) {
            Err(QuiltError::ImageLoad { path: failed, .. }) => assert_eq!(failed, path),
            other => unreachable!("expected an image load error, got {other:?}"),
        }
        assert!(FileTiles.dimensions(&path).is_err());
    }

    // Tests undecodable content is a load error
    // Verified by skipping decode failures
    #[test]
    fn test_file_tiles_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad1.png");
        std::fs::write(&path, b"not a png").unwrap();

        assert!(matches!(
            FileTiles.load(&path),
            Err(QuiltError::ImageLoad { .. })
        ));
    }

    // Tests in-memory tiles hand out copies and index labels
    // Verified by labelling every tile with index 0
    #[test]
    fn test_memory_tiles() {
        let tile = DynamicImage::ImageRgb8(RgbImage::new(4, 6));

        assert_eq!(MemoryTiles.dimensions(&tile).unwrap(), TileSize::new(4, 6));
        assert_eq!(MemoryTiles.load(&tile).unwrap(), tile);
        assert_eq!(MemoryTiles.locate(3, &tile), PathBuf::from("<tile 3>"));
    }
}
