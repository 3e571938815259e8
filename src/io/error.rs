//! Error types for quilt composition and the surrounding file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all quilt operations
#[derive(Debug)]
pub enum QuiltError {
    /// Input that no layout can be computed for
    ///
    /// Raised for a non-positive tile count handed to the divisor solver and
    /// for an empty tile list handed to the compositor.
    InvalidInput {
        /// Operation that rejected the input
        operation: &'static str,
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Failed to open or decode a source image
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write a composed quilt
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A tile's pixel size differs from the first tile of its series
    TileSizeMismatch {
        /// Path (or label) of the offending tile
        path: PathBuf,
        /// Size of the first tile (width, height)
        expected: (u32, u32),
        /// Size of the offending tile (width, height)
        found: (u32, u32),
    },

    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for QuiltError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { operation, reason } => {
                write!(f, "Invalid input to {operation}: {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::TileSizeMismatch {
                path,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile '{}' is {}x{}px but the series uses {}x{}px tiles",
                    path.display(),
                    found.0,
                    found.1,
                    expected.0,
                    expected.1
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for QuiltError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for quilt results
pub type Result<T> = std::result::Result<T, QuiltError>;

/// Create an invalid input error
pub fn invalid_input(operation: &'static str, reason: &impl ToString) -> QuiltError {
    QuiltError::InvalidInput {
        operation,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> QuiltError {
    QuiltError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Wrap an I/O failure with the path and operation it happened on
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> QuiltError {
    let path = path.into();
    move |source| QuiltError::FileSystem {
        path,
        operation,
        source,
    }
}

impl QuiltError {
    /// Whether the error stems from input validation rather than I/O
    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}
