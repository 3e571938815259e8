//! Diagnostic events emitted while grouping and composing series
//!
//! Components receive a [`Reporter`] instead of writing to a global logger, so
//! callers decide whether events go to `tracing`, to a test recorder or nowhere.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::io::configuration::AnnotatePosition;
use crate::series::classifier::SeriesKey;
use crate::spatial::grid::{GridShape, TileSize};

/// Structured diagnostic event
#[derive(Debug, Clone, PartialEq)]
pub enum QuiltEvent {
    /// First file of a new series was seen
    SeriesDiscovered {
        /// Key of the new series
        key: SeriesKey,
    },
    /// A file name did not follow the `<prefix><number>...<.ext>` pattern
    FileSkipped {
        /// The ignored file name
        name: String,
    },
    /// Tile size read from the first tile of a series
    TileSize {
        /// Path of the tile the size was read from
        path: PathBuf,
        /// The tile size
        size: TileSize,
    },
    /// Grid shape chosen for a series
    ShapeComputed {
        /// Number of tiles in the series
        tiles: usize,
        /// Chosen shape
        shape: GridShape,
        /// Resulting canvas size in pixels
        canvas: (u32, u32),
    },
    /// All tiles were pasted onto the canvas
    Composed {
        /// Number of tiles pasted
        tiles: usize,
    },
    /// A quilt was written to disk
    QuiltSaved {
        /// Output file path
        path: PathBuf,
    },
    /// Annotation options were given but are not rendered
    AnnotationIgnored {
        /// Requested text
        text: String,
        /// Requested corner
        position: AnnotatePosition,
        /// Requested font
        font: Option<String>,
    },
    /// A series was not written because its output already exists
    SeriesSkipped {
        /// Key of the skipped series
        key: SeriesKey,
        /// The existing output file
        path: PathBuf,
    },
}

/// Receiver of diagnostic events
pub trait Reporter {
    /// Handle one event
    fn report(&self, event: QuiltEvent);
}

/// Forwards events to `tracing` with structured fields
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, event: QuiltEvent) {
        match event {
            QuiltEvent::SeriesDiscovered { key } => {
                tracing::debug!(key = %key, "new series");
            }
            QuiltEvent::FileSkipped { name } => {
                tracing::debug!(file = %name, "file name does not match series pattern");
            }
            QuiltEvent::TileSize { path, size } => {
                tracing::info!(
                    file = %display_name(&path),
                    width = size.width,
                    height = size.height,
                    "tile size"
                );
            }
            QuiltEvent::ShapeComputed {
                tiles,
                shape,
                canvas,
            } => {
                tracing::info!(
                    tiles,
                    rows = shape.rows(),
                    columns = shape.columns(),
                    width = canvas.0,
                    height = canvas.1,
                    "grid shape"
                );
            }
            QuiltEvent::Composed { tiles } => {
                tracing::debug!(tiles, "concatenated");
            }
            QuiltEvent::QuiltSaved { path } => {
                tracing::info!(path = %path.display(), "saved quilt");
            }
            QuiltEvent::AnnotationIgnored {
                text,
                position,
                font,
            } => {
                tracing::warn!(
                    text = %text,
                    position = %position,
                    font = font.as_deref().unwrap_or("<default>"),
                    "annotation is not rendered"
                );
            }
            QuiltEvent::SeriesSkipped { key, path } => {
                tracing::warn!(key = %key, path = %path.display(), "output exists, skipping");
            }
        }
    }
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _event: QuiltEvent) {}
}

/// Keeps every event in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<QuiltEvent>>,
}

impl RecordingReporter {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far
    pub fn events(&self) -> Vec<QuiltEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }
}

impl Reporter for RecordingReporter {
    fn report(&self, event: QuiltEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Install the global `tracing` subscriber writing to stderr
///
/// `RUST_LOG` takes precedence over `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // A subscriber may already be installed, e.g. by a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
