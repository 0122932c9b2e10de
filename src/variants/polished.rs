// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::engine::{evaluate_range, InclusiveRange, TriggerSet};
use crate::observability::messages::{evaluation::*, StructuredLog};
use crate::traits::Evaluator;

/// The public module form: a thin wrapper over [`evaluate_range`].
pub struct PolishedEvaluator {
    triggers: TriggerSet,
}

impl PolishedEvaluator {
    pub fn new(triggers: TriggerSet) -> Self {
        Self { triggers }
    }
}

impl Default for PolishedEvaluator {
    fn default() -> Self {
        Self::new(TriggerSet::fizz_buzz())
    }
}

impl Evaluator for PolishedEvaluator {
    fn evaluate(&self, range: &InclusiveRange) -> Vec<String> {
        let start_msg = EvaluationStarted {
            variant: self.name(),
            start: range.start(),
            end: range.end(),
            trigger_count: self.triggers.len(),
        };

        let span = start_msg.span("variant_evaluation");
        let _guard = span.enter();
        start_msg.log();

        let start_time = Instant::now();
        let results = evaluate_range(range, &self.triggers);

        EvaluationCompleted {
            variant: self.name(),
            result_count: results.len(),
            duration: start_time.elapsed(),
        }
        .log();

        results
    }

    fn name(&self) -> &'static str {
        "polished"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;

    #[test]
    fn test_default_is_classic_fizz_buzz() {
        let results = PolishedEvaluator::default().evaluate(&InclusiveRange::new(1, 15).unwrap());
        assert_eq!(
            results,
            vec![
                "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz",
                "13", "14", "FizzBuzz"
            ]
        );
    }

    #[test]
    fn test_custom_triggers() {
        let evaluator = PolishedEvaluator::new(TriggerSet::new().with("Neg", Rule::LessThan(0)));
        let results = evaluator.evaluate(&InclusiveRange::new(-1, 1).unwrap());
        assert_eq!(results, vec!["Neg", "0", "1"]);
    }
}
