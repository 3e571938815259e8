//! Grouping of file names into series and ordering within each series

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::io::report::{QuiltEvent, Reporter};
use crate::series::naming::parse_name;

/// Key reserved for series whose members have no prefix
pub const NO_PREFIX_KEY: &str = "none";

/// Identity of a series, `{prefix}_{extension}`
///
/// Derived from file name text only. Members without a prefix share the key
/// `none_{extension}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesKey(String);

impl SeriesKey {
    /// Build a key from a parsed prefix and extension
    pub fn new(prefix: &str, extension: &str) -> Self {
        let prefix = if prefix.is_empty() {
            NO_PREFIX_KEY
        } else {
            prefix
        };
        Self(format!("{prefix}_{extension}"))
    }

    /// The key text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeriesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One member of a series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesEntry {
    /// Number parsed from the file name
    pub sequence: u64,
    /// Location of the image
    pub path: PathBuf,
}

/// Direction in which sequence numbers are sorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SequenceOrder {
    /// Highest sequence number first
    #[default]
    Descending,
    /// Lowest sequence number first
    Ascending,
}

impl SequenceOrder {
    /// Map the `reverse` switch to an order, `true` meaning descending
    pub const fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Descending
        } else {
            Self::Ascending
        }
    }
}

/// An ordered, immutable group of images sharing a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    key: SeriesKey,
    entries: Vec<SeriesEntry>,
}

impl Series {
    /// The series key
    pub const fn key(&self) -> &SeriesKey {
        &self.key
    }

    /// Members in composition order
    pub fn entries(&self) -> &[SeriesEntry] {
        &self.entries
    }

    /// Member paths in composition order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(|entry| entry.path.as_path())
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the series has no members
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Every series found in a listing, keyed and iterated in key order
pub type SeriesMap = BTreeMap<SeriesKey, Series>;

/// Group paths into series and sort each series by sequence number
///
/// Paths whose file name falls outside the naming convention are left out of
/// every series. Sorting is stable, so members sharing a sequence number keep
/// their input order.
pub fn classify<I, P>(paths: I, order: SequenceOrder, reporter: &dyn Reporter) -> SeriesMap
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    let mut series = SeriesMap::new();

    for path in paths {
        let path = path.into();
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let Some(parsed) = parse_name(name) else {
            reporter.report(QuiltEvent::FileSkipped {
                name: name.to_string(),
            });
            continue;
        };

        let key = SeriesKey::new(parsed.prefix, parsed.extension);
        let sequence = parsed.sequence;
        let group = series.entry(key.clone()).or_insert_with(|| {
            reporter.report(QuiltEvent::SeriesDiscovered { key: key.clone() });
            Series {
                key,
                entries: Vec::new(),
            }
        });
        group.entries.push(SeriesEntry { sequence, path });
    }

    for group in series.values_mut() {
        match order {
            SequenceOrder::Descending => group
                .entries
                .sort_by(|a, b| b.sequence.cmp(&a.sequence)),
            SequenceOrder::Ascending => group.entries.sort_by_key(|entry| entry.sequence),
        }
    }

    series
}
