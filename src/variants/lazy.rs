// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;

use crate::engine::{sequence, InclusiveRange, TriggerSet};
use crate::observability::messages::{evaluation::*, sequence::*, StructuredLog};
use crate::traits::Evaluator;

/// Lazy FizzBuzz - bounded evaluation by draining a lazy sequence.
///
/// The sequence starts at the range start and is pulled exactly
/// `range.len()` times.
pub struct LazyEvaluator {
    triggers: TriggerSet,
}

impl LazyEvaluator {
    pub fn new(triggers: TriggerSet) -> Self {
        Self { triggers }
    }
}

impl Evaluator for LazyEvaluator {
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

        SequenceStarted {
            start: range.start(),
            trigger_count: self.triggers.len(),
        }
        .log();

        let mut values = sequence(range.start(), self.triggers.clone());
        let count = usize::try_from(range.len()).unwrap_or(usize::MAX);
        let results: Vec<String> = values.by_ref().take(count).collect();

        SequenceStopped {
            produced: results.len(),
            next_cursor: values.peek_cursor(),
        }
        .log();

        EvaluationCompleted {
            variant: self.name(),
            result_count: results.len(),
            duration: start_time.elapsed(),
        }
        .log();

        results
    }

    fn name(&self) -> &'static str {
        "lazy"
    }
}
