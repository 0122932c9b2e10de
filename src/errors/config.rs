// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur while assembling or validating a run configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A trigger has an empty label and could never contribute output
    #[error("Trigger #{index} has an empty label")]
    EmptyLabel {
        /// Zero-based position of the trigger in the trigger set
        index: usize,
    },

    /// A divisibility rule would divide by zero
    #[error("Trigger '{label}' uses divisible_by:0, which is undefined")]
    ZeroDivisor { label: String },

    /// A fixed-rule strategy was given a non-default trigger set
    #[error(
        "Strategy '{strategy}' only supports the default Fizz/Buzz triggers, but {trigger_count} custom trigger(s) were supplied"
    )]
    FixedRuleStrategy {
        strategy: String,
        trigger_count: usize,
    },

    /// A buffered output format was asked for more results than fit in memory
    #[error("{len} results requested, but '{format}' output is limited to {max}; use 'lines' to stream")]
    RangeTooLargeToBuffer {
        format: String,
        len: u64,
        max: u64,
    },

    /// Trigger text was not of the form `LABEL=RULE`
    #[error("Malformed trigger '{0}': expected LABEL=RULE")]
    MalformedTrigger(String),

    /// The rule part of a trigger was not recognized
    #[error("Unknown rule '{0}': expected divisible_by:N, odd, even, equals:N, greater_than:N or less_than:N")]
    UnknownRule(String),
}
