// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::config::consts::{BUZZ_DIVISOR, BUZZ_LABEL, FIZZ_DIVISOR, FIZZ_LABEL};
use crate::engine::InclusiveRange;
use crate::observability::messages::{evaluation::*, StructuredLog};
use crate::traits::Evaluator;

/// Deduplicated FizzBuzz - no separate "FizzBuzz" branch.
///
/// Each label is appended on its own hit, so 15 becomes "Fizz" + "Buzz".
/// Still hard-wired to the two default rules.
pub struct DeduplicatedEvaluator;

impl DeduplicatedEvaluator {
    pub fn new() -> Self {
        Self
    }

    fn label_for(value: i64) -> String {
        let mut output = String::new();
        if value % FIZZ_DIVISOR == 0 {
            output.push_str(FIZZ_LABEL);
        }
        if value % BUZZ_DIVISOR == 0 {
            output.push_str(BUZZ_LABEL);
        }
        if output.is_empty() {
            output = value.to_string();
        }
        output
    }
}

impl Default for DeduplicatedEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for DeduplicatedEvaluator {
    fn evaluate(&self, range: &InclusiveRange) -> Vec<String> {
        let start_msg = EvaluationStarted {
            variant: self.name(),
            start: range.start(),
            end: range.end(),
            trigger_count: 2,
        };

        let span = start_msg.span("variant_evaluation");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let mut results = Vec::new();
        for value in range {
            results.push(Self::label_for(value));
        }

        EvaluationCompleted {
            variant: self.name(),
            result_count: results.len(),
            duration: start_time.elapsed(),
        }
        .log();

        results
    }

    fn name(&self) -> &'static str {
        "deduplicated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for() {
        assert_eq!(DeduplicatedEvaluator::label_for(3), "Fizz");
        assert_eq!(DeduplicatedEvaluator::label_for(10), "Buzz");
        assert_eq!(DeduplicatedEvaluator::label_for(45), "FizzBuzz");
        assert_eq!(DeduplicatedEvaluator::label_for(-7), "-7");
    }
}
