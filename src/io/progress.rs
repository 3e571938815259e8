//! Progress display over the series of a run

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use crate::series::classifier::SeriesKey;

static SERIES_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Series: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many series of a run have been quilted
pub struct ProgressManager {
    bar: ProgressBar,
    completed: Vec<(SeriesKey, Duration)>,
}

impl ProgressManager {
    /// Create a progress bar for `series_count` series drawn to stderr
    pub fn new(series_count: usize) -> Self {
        let bar = ProgressBar::new(series_count as u64);
        bar.set_style(SERIES_STYLE.clone());
        Self {
            bar,
            completed: Vec::new(),
        }
    }

    /// Create a progress manager that tracks state without drawing
    pub fn hidden(series_count: usize) -> Self {
        let manager = Self::new(series_count);
        manager.bar.set_draw_target(ProgressDrawTarget::hidden());
        manager
    }

    /// Announce the series currently being composed
    pub fn start_series(&self, key: &SeriesKey, tiles: usize) {
        self.bar.set_message(format!("{key} ({tiles} tiles)"));
    }

    /// Mark a series as finished, whether written or skipped
    pub fn complete_series(&mut self, key: &SeriesKey, elapsed: Duration) {
        self.completed.push((key.clone(), elapsed));
        self.bar.inc(1);
    }

    /// Series finished so far, in completion order
    pub fn completed(&self) -> &[(SeriesKey, Duration)] {
        &self.completed
    }

    /// Number of series finished so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the progress display
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
