// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself with structured fields at its own level.
//!
//! # Usage Pattern
//!
//! ```rust
//! use the_fizzbuzz::observability::messages::{sequence::SequenceStarted, StructuredLog};
//!
//! let msg = SequenceStarted {
//!     start: 1,
//!     trigger_count: 2,
//! };
//!
//! let span = msg.span("lazy_sequence");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod cli;
pub mod evaluation;
pub mod sequence;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a single event.
    fn log(&self);

    /// Open a span carrying the same fields, named `name`.
    fn span(&self, name: &str) -> Span;
}
