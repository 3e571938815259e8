//! Directory scanning, output naming and PNG export of quilts

use std::path::{Path, PathBuf};

use crate::compose::compositor::Quilt;
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_STEM};
use crate::io::error::{QuiltError, Result, file_system};
use crate::series::classifier::SeriesKey;
use crate::series::naming::matches_image_glob;
use crate::spatial::grid::GridShape;

/// List image files in `dir`, sorted by file name
///
/// Only regular files matching the `*.*g` glob are returned; subdirectories are
/// not descended into.
///
/// # Errors
///
/// Returns [`QuiltError::FileSystem`] if the directory or one of its entries
/// cannot be read
pub fn scan_image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(file_system(dir, "read directory"))? {
        let entry = entry.map_err(file_system(dir, "read directory entry"))?;
        let path = entry.path();
        let is_image = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(matches_image_glob);
        if is_image && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File name a series' quilt is written under
///
/// `{key}_quilt_qs{columns}x{rows}a{aspect}.png`, the aspect ratio always
/// carrying a decimal point (`2.0`, `1.3333333333333333`) or a signed
/// two-digit exponent (`5e-05`).
pub fn quilt_file_name(key: &SeriesKey, shape: GridShape, aspect_ratio: f64) -> String {
    let prefix = if key.as_str().is_empty() {
        String::new()
    } else {
        format!("{key}_")
    };
    format!(
        "{prefix}{OUTPUT_STEM}_qs{}x{}a{}.{OUTPUT_EXTENSION}",
        shape.columns(),
        shape.rows(),
        format_aspect_ratio(aspect_ratio)
    )
}

/// Shortest round-trip text of a ratio with exponents written as `e-05`/`e+16`
fn format_aspect_ratio(aspect_ratio: f64) -> String {
    let text = format!("{aspect_ratio:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = exponent
                .strip_prefix('-')
                .map_or(("+", exponent), |digits| ("-", digits));
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}

/// Full output path of a series' quilt
pub fn quilt_output_path(
    output_dir: &Path,
    key: &SeriesKey,
    shape: GridShape,
    aspect_ratio: f64,
) -> PathBuf {
    output_dir.join(quilt_file_name(key, shape, aspect_ratio))
}

/// Write a quilt's canvas to `path`, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_quilt(quilt: &Quilt, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system(parent, "create directory"))?;
    }

    quilt
        .canvas()
        .save(path)
        .map_err(|source| QuiltError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
