// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::engine::{InclusiveRange, Trigger, TriggerSet};
use crate::observability::messages::{evaluation::*, StructuredLog};
use crate::traits::Evaluator;

/// Functional FizzBuzz - no mutable buffers, only iterator adapters.
pub struct FunctionalEvaluator {
    triggers: TriggerSet,
}

impl FunctionalEvaluator {
    pub fn new(triggers: TriggerSet) -> Self {
        Self { triggers }
    }
}

impl Evaluator for FunctionalEvaluator {
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
        let results: Vec<String> = range
            .iter()
            .map(|value| {
                Some(
                    self.triggers
                        .iter()
                        .filter(|trigger| trigger.fires(value))
                        .map(Trigger::label)
                        .collect::<Vec<_>>()
                        .concat(),
                )
                .filter(|labels| !labels.is_empty())
                .unwrap_or_else(|| value.to_string())
            })
            .collect();

        EvaluationCompleted {
            variant: self.name(),
            result_count: results.len(),
            duration: start_time.elapsed(),
        }
        .log();

        results
    }

    fn name(&self) -> &'static str {
        "functional"
    }
}
