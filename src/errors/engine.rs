// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised by the engine at call time.
///
/// Predicate failures are not represented here: a predicate that panics
/// unwinds through the engine untouched and is the caller's problem.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The range bounds are reversed.
    #[error("Invalid range: start {start} is greater than end {end}")]
    InvalidRange { start: i64, end: i64 },

    /// The range text could not be read as `START..END` with integer bounds.
    #[error("Malformed range '{0}': expected START..END with integer bounds")]
    MalformedRange(String),

    /// The range holds more results than can be buffered at once.
    #[error("Range of {len} values is too large to buffer; the limit is {max}")]
    RangeTooLarge { len: u64, max: u64 },
}
