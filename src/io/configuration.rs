//! Naming constants and the validated run configuration

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;

use crate::io::error::{Result, invalid_parameter};
use crate::series::classifier::SequenceOrder;

/// Directory scanned for tiles when none is given
pub const DEFAULT_INPUT_DIR: &str = "./input/";
/// Directory quilts are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "./output/";

// Output settings
/// Marker between the series key and the grid description in output names
pub const OUTPUT_STEM: &str = "quilt";
/// Extension of written quilts, which also selects the encoder
pub const OUTPUT_EXTENSION: &str = "png";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Corner an annotation would be anchored to
///
/// Carried through the configuration but not rendered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AnnotatePosition {
    /// Upper left corner
    TopLeft,
    /// Upper right corner
    TopRight,
    /// Lower left corner
    BottomLeft,
    /// Lower right corner
    #[default]
    BottomRight,
}

impl AnnotatePosition {
    /// Canonical kebab-case name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for AnnotatePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnnotatePosition {
    type Err = crate::QuiltError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            _ => Err(invalid_parameter(
                "annotate_position",
                &value,
                &"expected one of top-left, top-right, bottom-left, bottom-right",
            )),
        }
    }
}

/// Immutable settings for one quilting run
///
/// Built through [`QuiltSettings::builder`], which validates every field.
#[derive(Debug, Clone, PartialEq)]
pub struct QuiltSettings {
    input_dir: PathBuf,
    output_dir: PathBuf,
    reverse: bool,
    annotate_text: Option<String>,
    annotate_position: AnnotatePosition,
    font_name: Option<String>,
}

impl Default for QuiltSettings {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            reverse: true,
            annotate_text: None,
            annotate_position: AnnotatePosition::default(),
            font_name: None,
        }
    }
}

impl QuiltSettings {
    /// Start from the defaults
    pub fn builder() -> QuiltSettingsBuilder {
        QuiltSettingsBuilder {
            settings: Self::default(),
        }
    }

    /// Directory scanned for tiles
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    /// Directory quilts are written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether series are sorted by descending sequence number
    pub const fn reverse(&self) -> bool {
        self.reverse
    }

    /// Sort direction derived from [`Self::reverse`]
    pub const fn sequence_order(&self) -> SequenceOrder {
        SequenceOrder::from_reverse(self.reverse)
    }

    /// Annotation text, currently not rendered
    pub fn annotate_text(&self) -> Option<&str> {
        self.annotate_text.as_deref()
    }

    /// Annotation corner, currently not rendered
    pub const fn annotate_position(&self) -> AnnotatePosition {
        self.annotate_position
    }

    /// Annotation font, currently not rendered
    pub fn font_name(&self) -> Option<&str> {
        self.font_name.as_deref()
    }
}

/// Step-by-step construction of [`QuiltSettings`]
#[derive(Debug, Clone)]
pub struct QuiltSettingsBuilder {
    settings: QuiltSettings,
}

impl QuiltSettingsBuilder {
    /// Set the input directory
    #[must_use]
    pub fn input_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.input_dir = dir.into();
        self
    }

    /// Set the output directory
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.settings.output_dir = dir.into();
        self
    }

    /// Sort descending (`true`) or ascending (`false`)
    #[must_use]
    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.settings.reverse = reverse;
        self
    }

    /// Set the annotation text
    #[must_use]
    pub fn annotate_text(mut self, text: Option<String>) -> Self {
        self.settings.annotate_text = text;
        self
    }

    /// Set the annotation corner
    #[must_use]
    pub const fn annotate_position(mut self, position: AnnotatePosition) -> Self {
        self.settings.annotate_position = position;
        self
    }

    /// Set the annotation font
    #[must_use]
    pub fn font_name(mut self, font: Option<String>) -> Self {
        self.settings.font_name = font;
        self
    }

    /// Validate and freeze the settings
    ///
    /// # Errors
    ///
    /// Returns [`crate::QuiltError::InvalidParameter`] if a directory is empty
    /// or the annotation text or font name is blank
    pub fn build(self) -> Result<QuiltSettings> {
        let settings = self.settings;
        if settings.input_dir.as_os_str().is_empty() {
            return Err(invalid_parameter(
                "input_dir",
                &"",
                &"directory must not be empty",
            ));
        }
        if settings.output_dir.as_os_str().is_empty() {
            return Err(invalid_parameter(
                "output_dir",
                &"",
                &"directory must not be empty",
            ));
        }
        if let Some(text) = settings.annotate_text.as_deref() {
            if text.trim().is_empty() {
                return Err(invalid_parameter(
                    "annotate_text",
                    &text,
                    &"text must not be blank",
                ));
            }
        }
        if let Some(font) = settings.font_name.as_deref() {
            if font.trim().is_empty() {
                return Err(invalid_parameter(
                    "font_name",
                    &font,
                    &"font name must not be blank",
                ));
            }
        }
        Ok(settings)
    }
}
