//! Dotted-decimal version strings.
//!
//! Parsing keeps only the all-digit segments of a `.`-separated string, so
//! `"1.02.x.3"` becomes `[1, 2, 3]` and formats back as `"1.2.3"`. The pair
//! is not an exact inverse on arbitrary input: leading zeros and non-numeric
//! segments do not survive.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Parses a semver-ish string into its integral segments, in order.
///
/// Segments that are not plain ASCII digits are dropped, as are digit runs
/// too large for a `u64`.
#[must_use]
pub fn parse_version(vstr: &str) -> Vec<u64> {
    vstr.split('.')
        .filter(|seg| !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()))
        .filter_map(|seg| seg.parse::<u64>().ok())
        .collect()
}

/// Joins version segments into a dotted-decimal string.
#[must_use]
pub fn format_version(vsn: &[u64]) -> String {
    vsn.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

/// A parsed version, ordered component by component.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version(Vec<u64>);

impl Version {
    pub fn new(parts: Vec<u64>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[u64] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Segment at `index`, or zero when the version is shorter.
    pub fn part(&self, index: usize) -> u64 {
        self.0.get(index).copied().unwrap_or(0)
    }
}

impl From<Vec<u64>> for Version {
    fn from(parts: Vec<u64>) -> Self {
        Self(parts)
    }
}

impl From<Version> for Vec<u64> {
    fn from(version: Version) -> Self {
        version.0
    }
}

impl FromStr for Version {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(parse_version(s)))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_version(&self.0))
    }
}
