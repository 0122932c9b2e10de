// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration validation results.

use crate::engine::InclusiveRange;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Configuration passed validation.
///
/// # Log Level
/// `debug!` - Per-run detail
pub struct ConfigValidated<'a> {
    pub strategy: &'a str,
    pub trigger_count: usize,
    pub range: &'a InclusiveRange,
}

impl Display for ConfigValidated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Configuration valid: {} strategy over {} with {} trigger(s)",
            self.strategy, self.range, self.trigger_count
        )
    }
}

impl StructuredLog for ConfigValidated<'_> {
    fn log(&self) {
        tracing::debug!(
            strategy = self.strategy,
            trigger_count = self.trigger_count,
            range = %self.range,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config_validated",
            span_name = name,
            strategy = self.strategy,
            trigger_count = self.trigger_count,
            range = %self.range,
        )
    }
}

/// A single validation error.
///
/// # Log Level
/// `warn!` - The run will be refused
///
/// # Example
/// ```
/// use the_fizzbuzz::errors::ValidationError;
/// use the_fizzbuzz::observability::messages::validation::ConfigValidationFailed;
///
/// let error = ValidationError::EmptyLabel { index: 0 };
/// let msg = ConfigValidationFailed { error: &error };
///
/// assert_eq!(
///     msg.to_string(),
///     "Configuration validation failed: Trigger #0 has an empty label"
/// );
/// ```
pub struct ConfigValidationFailed<'a> {
    pub error: &'a dyn std::error::Error,
}

impl Display for ConfigValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Configuration validation failed: {}", self.error)
    }
}

impl StructuredLog for ConfigValidationFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "config_validation_failed",
            span_name = name,
            error = %self.error,
        )
    }
}
