//! File name conventions for series members
//!
//! A member is named `<prefix><number><anything>.<extension>`: an optional run
//! of non-digits, a run of ASCII digits, then anything up to the last dot. The
//! whole name must match; `.` does not cross a newline.

use std::sync::LazyLock;

use regex::Regex;

static MEMBER_NAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\D*)([0-9]+).*\.(.+)$").ok());

/// Components parsed out of a series member's file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName<'a> {
    /// Leading non-digit text, possibly empty
    pub prefix: &'a str,
    /// Value of the first digit run
    pub sequence: u64,
    /// Text after the last dot
    pub extension: &'a str,
}

/// Parse a file name, returning `None` for names outside the convention
///
/// Digit runs too long for a `u64` are treated as outside the convention.
pub fn parse_name(name: &str) -> Option<ParsedName<'_>> {
    let captures = MEMBER_NAME.as_ref()?.captures(name)?;
    let prefix = captures.get(1)?.as_str();
    let sequence = captures.get(2)?.as_str().parse().ok()?;
    let extension = captures.get(3)?.as_str();
    Some(ParsedName {
        prefix,
        sequence,
        extension,
    })
}

/// Whether a file name is picked up by the `*.*g` image glob
///
/// Matches `png`, `jpg`, `jpeg` and friends; case-sensitive.
pub fn matches_image_glob(name: &str) -> bool {
    name.strip_suffix('g')
        .is_some_and(|stem| stem.contains('.'))
}
