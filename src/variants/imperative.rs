// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::config::consts::{BUZZ_DIVISOR, BUZZ_LABEL, FIZZ_DIVISOR, FIZZ_LABEL};
use crate::engine::InclusiveRange;
use crate::observability::messages::{evaluation::*, StructuredLog};
use crate::traits::Evaluator;

/// Imperative FizzBuzz - a counter, a loop, and an if/else chain.
///
/// The rules are baked in; this variant only ever knows Fizz and Buzz.
pub struct ImperativeEvaluator;

impl ImperativeEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImperativeEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for ImperativeEvaluator {
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
        let mut value = range.start();

        loop {
            let result = if value % (FIZZ_DIVISOR * BUZZ_DIVISOR) == 0 {
                format!("{}{}", FIZZ_LABEL, BUZZ_LABEL)
            } else if value % FIZZ_DIVISOR == 0 {
                FIZZ_LABEL.to_string()
            } else if value % BUZZ_DIVISOR == 0 {
                BUZZ_LABEL.to_string()
            } else {
                value.to_string()
            };
            results.push(result);

            // Checked before incrementing so an end of i64::MAX cannot overflow.
            if value == range.end() {
                break;
            }
            value += 1;
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
        "imperative"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fifteen() {
        let range = InclusiveRange::new(1, 15).unwrap();
        let results = ImperativeEvaluator::new().evaluate(&range);
        assert_eq!(
            results,
            vec![
                "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz",
                "13", "14", "FizzBuzz"
            ]
        );
    }

    #[test]
    fn test_stops_at_top_of_domain() {
        let range = InclusiveRange::new(i64::MAX - 1, i64::MAX).unwrap();
        assert_eq!(ImperativeEvaluator::new().evaluate(&range).len(), 2);
    }
}
