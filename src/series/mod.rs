//! Series discovery from file names

/// Grouping and ordering of files into series
pub mod classifier;
/// File name parsing and the image glob
pub mod naming;

pub use classifier::{Series, SeriesEntry, SeriesKey, SeriesMap, SequenceOrder, classify};
