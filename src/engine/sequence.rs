// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::iter::FusedIterator;

use crate::engine::{classify, TriggerSet};

/// Lazy, single-pass FizzBuzz sequence.
///
/// The whole state is the cursor: the next integer to evaluate. Each call to
/// `next` classifies the cursor and then moves it up by one. To start over,
/// build a new sequence from the same starting point.
///
/// The sequence has no upper bound other than the integer domain itself. After
/// yielding the result for `i64::MAX` it is exhausted and keeps returning `None`.
///
/// ```
/// use the_fizzbuzz::engine::{sequence, TriggerSet};
///
/// let mut fizz_buzz = sequence(1, TriggerSet::fizz_buzz());
/// assert_eq!(fizz_buzz.next().as_deref(), Some("1"));
/// assert_eq!(fizz_buzz.next().as_deref(), Some("2"));
/// assert_eq!(fizz_buzz.next().as_deref(), Some("Fizz"));
/// assert_eq!(fizz_buzz.peek_cursor(), Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct FizzBuzzSequence {
    cursor: Option<i64>,
    triggers: TriggerSet,
}

impl FizzBuzzSequence {
    pub fn new(start: i64, triggers: TriggerSet) -> Self {
        Self {
            cursor: Some(start),
            triggers,
        }
    }

    /// The integer the next call to `next` will evaluate, or `None` once the
    /// domain is exhausted.
    pub fn peek_cursor(&self) -> Option<i64> {
        self.cursor
    }
}

impl Iterator for FizzBuzzSequence {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor?;
        self.cursor = value.checked_add(1);
        Some(classify(value, &self.triggers))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Some(value) => {
                let remaining = i64::MAX.abs_diff(value).saturating_add(1);
                let lower = usize::try_from(remaining).unwrap_or(usize::MAX);
                (lower, usize::try_from(remaining).ok())
            }
            None => (0, Some(0)),
        }
    }
}

impl FusedIterator for FizzBuzzSequence {}

/// Start a lazy sequence at `start`.
pub fn sequence(start: i64, triggers: TriggerSet) -> FizzBuzzSequence {
    FizzBuzzSequence::new(start, triggers)
}
