//! Command-line interface and the run orchestrator

use crate::compose::compositor::compose;
use crate::compose::tiles::{FileTiles, TileSource};
use crate::io::configuration::{
    AnnotatePosition, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, QuiltSettings,
};
use crate::io::error::{Result, invalid_input};
use crate::io::image::{quilt_output_path, save_quilt, scan_image_files};
use crate::io::progress::ProgressManager;
use crate::io::report::{QuiltEvent, Reporter};
use crate::math::divisor::solve_len;
use crate::series::classifier::{Series, SeriesKey, classify};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "quilter")]
#[command(
    author,
    version,
    about = "Compose numbered image series into near-square quilts"
)]
/// Command-line arguments for the quilting tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory containing the numbered tile images
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input: PathBuf,

    /// Directory the quilts are written to
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Order tiles by ascending sequence number instead of descending
    #[arg(short, long)]
    pub ascending: bool,

    /// Text to annotate quilts with (not rendered yet)
    #[arg(long, value_name = "TEXT")]
    pub annotate_text: Option<String>,

    /// Corner for the annotation (not rendered yet)
    #[arg(long, value_enum, default_value_t = AnnotatePosition::BottomRight)]
    pub annotate_position: AnnotatePosition,

    /// Font for the annotation (not rendered yet)
    #[arg(long, value_name = "NAME")]
    pub font: Option<String>,

    /// Plan the quilts and print their names without writing anything
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Leave series alone whose quilt already exists
    #[arg(short, long)]
    pub skip_existing: bool,

    /// Suppress progress output and informational logs
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log every discovered series and skipped file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the validated run settings from the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if any setting fails validation
    pub fn settings(&self) -> Result<QuiltSettings> {
        QuiltSettings::builder()
            .input_dir(&self.input)
            .output_dir(&self.output)
            .reverse(!self.ascending)
            .annotate_text(self.annotate_text.clone())
            .annotate_position(self.annotate_position)
            .font_name(self.font.clone())
            .build()
    }

    /// Run behaviour switches from the arguments
    pub const fn run_options(&self) -> RunOptions {
        RunOptions {
            dry_run: self.dry_run,
            skip_existing: self.skip_existing,
            show_progress: !self.quiet && !self.dry_run,
        }
    }

    /// Default log level when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}

/// Switches that change what a run does without changing the layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Compute layouts and output names only
    pub dry_run: bool,
    /// Skip series whose output file already exists
    pub skip_existing: bool,
    /// Draw a progress bar
    pub show_progress: bool,
}

/// What happened to one series
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesOutcome {
    /// The quilt was composed and written
    Written(PathBuf),
    /// The quilt already existed and was left alone
    Skipped(PathBuf),
    /// Dry run: the quilt would be written here
    Planned(PathBuf),
}

impl SeriesOutcome {
    /// The output path regardless of outcome
    pub fn path(&self) -> &Path {
        match self {
            Self::Written(path) | Self::Skipped(path) | Self::Planned(path) => path,
        }
    }
}

/// Orchestrates a run: scan, classify, compose and save every series
pub struct QuiltProcessor<'a> {
    settings: QuiltSettings,
    options: RunOptions,
    reporter: &'a dyn Reporter,
}

impl<'a> QuiltProcessor<'a> {
    /// Create a processor for the given settings
    pub fn new(settings: QuiltSettings, options: RunOptions, reporter: &'a dyn Reporter) -> Self {
        Self {
            settings,
            options,
            reporter,
        }
    }

    /// Settings of this run
    pub const fn settings(&self) -> &QuiltSettings {
        &self.settings
    }

    /// Quilt every series found in the input directory
    ///
    /// Series are handled in key order. The first failure aborts the run;
    /// quilts written before it stay on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the input directory cannot be read, a tile cannot
    /// be decoded, tiles of a series differ in size, or a quilt cannot be saved
    pub fn process(&self) -> Result<Vec<(SeriesKey, SeriesOutcome)>> {
        if let Some(text) = self.settings.annotate_text() {
            self.reporter.report(QuiltEvent::AnnotationIgnored {
                text: text.to_string(),
                position: self.settings.annotate_position(),
                font: self.settings.font_name().map(str::to_string),
            });
        }

        let files = scan_image_files(self.settings.input_dir())?;
        let series = classify(files, self.settings.sequence_order(), self.reporter);

        let mut progress = if self.options.show_progress {
            ProgressManager::new(series.len())
        } else {
            ProgressManager::hidden(series.len())
        };

        let mut outcomes = Vec::with_capacity(series.len());
        for (key, group) in &series {
            let start_time = Instant::now();
            progress.start_series(key, group.len());
            let outcome = self.process_series(group)?;
            progress.complete_series(key, start_time.elapsed());
            outcomes.push((key.clone(), outcome));
        }
        progress.finish();

        Ok(outcomes)
    }

    fn process_series(&self, series: &Series) -> Result<SeriesOutcome> {
        let tiles: Vec<PathBuf> = series.paths().map(Path::to_path_buf).collect();
        let shape = solve_len(tiles.len())?;

        if self.options.dry_run || self.options.skip_existing {
            let first = tiles
                .first()
                .ok_or_else(|| invalid_input("orchestrator", &"series has no tiles"))?;
            let aspect_ratio = FileTiles.dimensions(first)?.aspect_ratio();
            let path = quilt_output_path(
                self.settings.output_dir(),
                series.key(),
                shape,
                aspect_ratio,
            );
            if self.options.dry_run {
                return Ok(SeriesOutcome::Planned(path));
            }
            if path.exists() {
                self.reporter.report(QuiltEvent::SeriesSkipped {
                    key: series.key().clone(),
                    path: path.clone(),
                });
                return Ok(SeriesOutcome::Skipped(path));
            }
        }

        let quilt = compose(&FileTiles, &tiles, shape, self.reporter)?;
        let path = quilt_output_path(
            self.settings.output_dir(),
            series.key(),
            quilt.shape(),
            quilt.aspect_ratio(),
        );
        save_quilt(&quilt, &path)?;
        self.reporter.report(QuiltEvent::QuiltSaved { path: path.clone() });

        Ok(SeriesOutcome::Written(path))
    }
}
