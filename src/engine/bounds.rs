// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_END, DEFAULT_START};
use crate::errors::EngineError;

/// A validated inclusive integer range `[start, end]` with `start <= end`.
///
/// Construction is the only place a range can fail, so everything downstream
/// of an `InclusiveRange` is infallible.
///
/// Ranges read and print as `START..END`, both ends inclusive:
///
/// ```
/// use the_fizzbuzz::engine::InclusiveRange;
///
/// let range: InclusiveRange = "1..5".parse().unwrap();
/// assert_eq!(range.start(), 1);
/// assert_eq!(range.end(), 5);
/// assert_eq!(range.len(), 5);
/// assert_eq!(range.to_string(), "1..5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InclusiveRange {
    start: i64,
    end: i64,
}

impl InclusiveRange {
    pub fn new(start: i64, end: i64) -> Result<Self, EngineError> {
        if start > end {
            return Err(EngineError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Number of integers covered, saturating at `u64::MAX` for the full `i64` domain.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Always false; a valid range holds at least one integer.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.start..=self.end).contains(&value)
    }

    /// Ascending iterator over every integer in the range.
    pub fn iter(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Split into consecutive sub-ranges of at most `size` integers.
    ///
    /// A `size` of zero is treated as one.
    ///
    /// ```
    /// use the_fizzbuzz::engine::InclusiveRange;
    ///
    /// let range = InclusiveRange::new(1, 10).unwrap();
    /// let pieces: Vec<String> = range.chunks(4).map(|r| r.to_string()).collect();
    /// assert_eq!(pieces, vec!["1..4", "5..8", "9..10"]);
    /// ```
    pub fn chunks(&self, size: u64) -> Chunks {
        Chunks {
            next_start: Some(self.start),
            end: self.end,
            step: i64::try_from(size.max(1) - 1).unwrap_or(i64::MAX),
        }
    }
}

/// Iterator returned by [`InclusiveRange::chunks`].
#[derive(Debug, Clone)]
pub struct Chunks {
    next_start: Option<i64>,
    end: i64,
    step: i64,
}

impl Iterator for Chunks {
    type Item = InclusiveRange;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;
        let end = start.saturating_add(self.step).min(self.end);
        // end < self.end guarantees end + 1 cannot overflow.
        self.next_start = if end < self.end { Some(end + 1) } else { None };
        Some(InclusiveRange { start, end })
    }
}

impl std::iter::FusedIterator for Chunks {}

impl Default for InclusiveRange {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            end: DEFAULT_END,
        }
    }
}

impl TryFrom<RangeInclusive<i64>> for InclusiveRange {
    type Error = EngineError;

    fn try_from(bounds: RangeInclusive<i64>) -> Result<Self, Self::Error> {
        Self::new(*bounds.start(), *bounds.end())
    }
}

impl IntoIterator for &InclusiveRange {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for InclusiveRange {
    type Err = EngineError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || EngineError::MalformedRange(text.to_string());

        let (start, end) = text.trim().split_once("..").ok_or_else(malformed)?;
        // Accept Rust's own `..=` spelling as well.
        let end = end.strip_prefix('=').unwrap_or(end);

        let start = start.trim().parse::<i64>().map_err(|_| malformed())?;
        let end = end.trim().parse::<i64>().map_err(|_| malformed())?;

        Self::new(start, end)
    }
}

impl fmt::Display for InclusiveRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl TryFrom<String> for InclusiveRange {
    type Error = EngineError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<InclusiveRange> for String {
    fn from(range: InclusiveRange) -> Self {
        range.to_string()
    }
}
