// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::engine::{InclusiveRange, TriggerSet};
use crate::observability::messages::{evaluation::*, StructuredLog};
use crate::traits::Evaluator;

/// Parameterized FizzBuzz - the rules become data.
///
/// An explicit nested loop: for each integer, walk the trigger set and push
/// every matching label into a buffer.
pub struct ParameterizedEvaluator {
    triggers: TriggerSet,
}

impl ParameterizedEvaluator {
    pub fn new(triggers: TriggerSet) -> Self {
        Self { triggers }
    }
}

impl Evaluator for ParameterizedEvaluator {
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
        let mut results = Vec::new();

        for value in range {
            let mut output = String::new();
            for trigger in &self.triggers {
                if trigger.fires(value) {
                    output.push_str(trigger.label());
                }
            }
            if output.is_empty() {
                output = value.to_string();
            }
            results.push(output);
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
        "parameterized"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;

    #[test]
    fn test_custom_rules() {
        let triggers = TriggerSet::new()
            .with("Fizz", Rule::DivisibleBy(3))
            .with("Buzz", Rule::DivisibleBy(5))
            .with("Bazz", Rule::DivisibleBy(7));
        let evaluator = ParameterizedEvaluator::new(triggers);

        let results = evaluator.evaluate(&InclusiveRange::new(103, 105).unwrap());
        assert_eq!(results, vec!["103", "104", "FizzBuzzBazz"]);
    }
}
