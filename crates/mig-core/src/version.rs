//! Migration versions and the persisted version marker.
//!
//! Versions compare numerically, so file names of different digit widths
//! still order correctly. New files are still written zero-padded to
//! [`VERSION_WIDTH`] digits so directory listings sort the same way.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Digit width of generated version tokens (nanosecond epoch).
pub const VERSION_WIDTH: usize = 19;

/// Reasons a version token was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseVersionError {
    #[error("version is empty")]
    Empty,
    #[error("version '{0}' contains non-digit characters")]
    NotNumeric(String),
    #[error("version '{0}' does not fit in 64 bits")]
    Overflow(String),
    #[error("version 0 is reserved for the baseline marker")]
    Zero,
}

/// Ordered identifier of one migration point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Version(u64);

impl Version {
    /// Create a version, returning `None` for the reserved value 0.
    pub fn new(value: u64) -> Option<Self> {
        (value > 0).then_some(Self(value))
    }

    /// Version derived from a UTC timestamp in nanoseconds since the epoch.
    ///
    /// Returns `None` for timestamps outside the representable range.
    pub fn from_timestamp(ts: DateTime<Utc>) -> Option<Self> {
        let nanos = ts.timestamp_nanos_opt()?;
        u64::try_from(nanos).ok().and_then(Self::new)
    }

    /// Numeric value of the version.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Zero-padded form used in generated file names.
    pub fn padded(self) -> String {
        format!("{:0width$}", self.0, width = VERSION_WIDTH)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseVersionError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseVersionError::NotNumeric(s.to_string()));
        }
        let value: u64 = s
            .parse()
            .map_err(|_| ParseVersionError::Overflow(s.to_string()))?;
        Self::new(value).ok_or(ParseVersionError::Zero)
    }
}

/// Persisted "current version" state.
///
/// The two sentinels mean different things and must not be merged:
/// `Empty` is "nothing applied / no earlier rollback target", `Baseline`
/// is "rolled back to before the first migration". Variant order gives
/// `Empty < Baseline < Applied(_)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Marker {
    /// Persisted as an empty file.
    #[default]
    Empty,
    /// Persisted as `0`.
    Baseline,
    /// Persisted as the decimal version.
    Applied(Version),
}

impl Marker {
    /// Parse persisted marker text.
    ///
    /// Surrounding whitespace is ignored. A full migration base name
    /// (`<version>_<label>.sql`) is accepted and reduced to its version.
    pub fn parse(content: &str) -> Option<Self> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Some(Marker::Empty);
        }
        let token = trimmed.split_once('_').map_or(trimmed, |(head, _)| head);
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if token.bytes().all(|b| b == b'0') {
            return Some(Marker::Baseline);
        }
        token.parse().ok().map(Marker::Applied)
    }

    /// The applied version, if any.
    pub fn version(&self) -> Option<Version> {
        match self {
            Marker::Applied(v) => Some(*v),
            Marker::Empty | Marker::Baseline => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Marker::Empty)
    }
}

impl From<Version> for Marker {
    fn from(v: Version) -> Self {
        Marker::Applied(v)
    }
}

/// Displays the persisted form: `""`, `"0"`, or the version digits.
impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Marker::Empty => Ok(()),
            Marker::Baseline => f.write_str("0"),
            Marker::Applied(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for Marker {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "version_test.rs"]
mod tests;
