// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for bounded evaluation events.
//!
//! This module contains message types for logging events related to:
//! * A paradigm variant starting on a range
//! * A paradigm variant finishing, with result count and timing

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Evaluation started for a range.
///
/// # Log Level
/// `debug!` - Per-run detail
///
/// # Example
/// ```
/// use the_fizzbuzz::observability::messages::evaluation::EvaluationStarted;
///
/// let msg = EvaluationStarted {
///     variant: "imperative",
///     start: 1,
///     end: 15,
///     trigger_count: 2,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Starting imperative evaluation over 1..15 with 2 trigger(s)"
/// );
/// ```
pub struct EvaluationStarted<'a> {
    pub variant: &'a str,
    pub start: i64,
    pub end: i64,
    pub trigger_count: usize,
}

impl Display for EvaluationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting {} evaluation over {}..{} with {} trigger(s)",
            self.variant, self.start, self.end, self.trigger_count
        )
    }
}

impl StructuredLog for EvaluationStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            variant = self.variant,
            start = self.start,
            end = self.end,
            trigger_count = self.trigger_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "evaluation",
            span_name = name,
            variant = self.variant,
            start = self.start,
            end = self.end,
            trigger_count = self.trigger_count,
        )
    }
}

/// Evaluation completed.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_fizzbuzz::observability::messages::evaluation::EvaluationCompleted;
/// use std::time::Duration;
///
/// let msg = EvaluationCompleted {
///     variant: "lazy",
///     result_count: 100,
///     duration: Duration::from_micros(40),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct EvaluationCompleted<'a> {
    pub variant: &'a str,
    pub result_count: usize,
    pub duration: std::time::Duration,
}

impl Display for EvaluationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Completed {} evaluation: {} results in {:?}",
            self.variant, self.result_count, self.duration
        )
    }
}

impl StructuredLog for EvaluationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            variant = self.variant,
            result_count = self.result_count,
            duration_us = self.duration.as_micros() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "evaluation_completed",
            span_name = name,
            variant = self.variant,
            result_count = self.result_count,
            duration = ?self.duration,
        )
    }
}
