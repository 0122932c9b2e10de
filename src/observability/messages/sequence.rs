// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for lazy sequence events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A lazy sequence was created and is about to be consumed.
///
/// # Log Level
/// `debug!` - Per-run detail
///
/// # Example
/// ```
/// use the_fizzbuzz::observability::messages::sequence::SequenceStarted;
///
/// let msg = SequenceStarted {
///     start: 1,
///     trigger_count: 2,
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct SequenceStarted {
    pub start: i64,
    pub trigger_count: usize,
}

impl Display for SequenceStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting lazy sequence at {} with {} trigger(s)",
            self.start, self.trigger_count
        )
    }
}

impl StructuredLog for SequenceStarted {
    fn log(&self) {
        tracing::debug!(
            start = self.start,
            trigger_count = self.trigger_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sequence",
            span_name = name,
            start = self.start,
            trigger_count = self.trigger_count,
        )
    }
}

/// The consumer stopped pulling from a lazy sequence.
///
/// `next_cursor` is `None` when the integer domain was exhausted.
///
/// # Log Level
/// `debug!` - Per-run detail
pub struct SequenceStopped {
    pub produced: usize,
    pub next_cursor: Option<i64>,
}

impl Display for SequenceStopped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self.next_cursor {
            Some(cursor) => write!(
                f,
                "Lazy sequence stopped after {} values; next value would be {}",
                self.produced, cursor
            ),
            None => write!(
                f,
                "Lazy sequence exhausted the integer domain after {} values",
                self.produced
            ),
        }
    }
}

impl StructuredLog for SequenceStopped {
    fn log(&self) {
        tracing::debug!(
            produced = self.produced,
            next_cursor = ?self.next_cursor,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sequence_stopped",
            span_name = name,
            produced = self.produced,
            next_cursor = ?self.next_cursor,
        )
    }
}
