// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for command-line lifecycle events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// The binary parsed its arguments and installed logging.
///
/// # Log Level
/// `debug!` - Startup detail; the raw arguments are only emitted at `trace!`
///
/// # Example
/// ```
/// use the_fizzbuzz::observability::messages::cli::CliStarted;
///
/// let args = vec!["the-fizzbuzz".to_string(), "-vv".to_string()];
/// let msg = CliStarted {
///     verbosity: 2,
///     args: &args,
/// };
///
/// assert_eq!(msg.to_string(), "the-fizzbuzz started with verbosity level: 2");
/// ```
pub struct CliStarted<'a> {
    pub verbosity: u8,
    pub args: &'a [String],
}

impl Display for CliStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "the-fizzbuzz started with verbosity level: {}", self.verbosity)
    }
}

impl StructuredLog for CliStarted<'_> {
    fn log(&self) {
        tracing::debug!(verbosity = self.verbosity, "{}", self);
        tracing::trace!(args = ?self.args, "Full CLI args");
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "cli",
            span_name = name,
            verbosity = self.verbosity,
        )
    }
}

/// Results were written to stdout.
///
/// # Log Level
/// `debug!` - Per-run detail
pub struct OutputWritten<'a> {
    pub format: &'a str,
    pub result_count: u64,
}

impl Display for OutputWritten<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Wrote {} results as {}", self.result_count, self.format)
    }
}

impl StructuredLog for OutputWritten<'_> {
    fn log(&self) {
        tracing::debug!(
            format = self.format,
            result_count = self.result_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "output_written",
            span_name = name,
            format = self.format,
            result_count = self.result_count,
        )
    }
}
