// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Bounded evaluation.
//!
//! Both entry points here are pure: the same arguments always give the same
//! results, and nothing is printed or logged. Output is the caller's concern.

use std::ops::RangeInclusive;

use crate::config::consts::MAX_BUFFERED_RESULTS;
use crate::engine::{InclusiveRange, Trigger, TriggerSet};
use crate::errors::EngineError;

/// Result for a single integer.
///
/// Labels of every trigger that fires are concatenated in trigger order; if
/// none fire the integer's decimal string is returned instead.
///
/// ```
/// use the_fizzbuzz::engine::{classify, TriggerSet};
///
/// let triggers = TriggerSet::fizz_buzz();
/// assert_eq!(classify(9, &triggers), "Fizz");
/// assert_eq!(classify(30, &triggers), "FizzBuzz");
/// assert_eq!(classify(7, &triggers), "7");
/// ```
pub fn classify(value: i64, triggers: &TriggerSet) -> String {
    let labels: String = triggers
        .iter()
        .filter(|trigger| trigger.fires(value))
        .map(Trigger::label)
        .collect();

    if labels.is_empty() {
        value.to_string()
    } else {
        labels
    }
}

/// Iterator form of bounded evaluation: results are produced one at a time,
/// so memory use does not grow with the length of the range.
pub fn evaluate_iter<'a>(
    range: &InclusiveRange,
    triggers: &'a TriggerSet,
) -> impl Iterator<Item = String> + 'a {
    range.iter().map(move |value| classify(value, triggers))
}

/// Evaluate every integer of an already-validated range, ascending.
///
/// The whole result list is held in memory. Callers with very large ranges
/// should use [`evaluate_iter`] or split the range with
/// [`InclusiveRange::chunks`].
pub fn evaluate_range(range: &InclusiveRange, triggers: &TriggerSet) -> Vec<String> {
    evaluate_iter(range, triggers).collect()
}

/// Evaluate `bounds` against `triggers`.
///
/// Fails with [`EngineError::InvalidRange`] when the start is past the end,
/// and with [`EngineError::RangeTooLarge`] when the range holds more than
/// `MAX_BUFFERED_RESULTS` values, since the results are returned as one list.
///
/// ```
/// use the_fizzbuzz::engine::{range, Rule, TriggerSet};
///
/// let results = range(1..=5, &TriggerSet::fizz_buzz()).unwrap();
/// assert_eq!(results, vec!["1", "2", "Fizz", "4", "Buzz"]);
///
/// let odd = TriggerSet::new().with("Odd", Rule::Odd);
/// assert_eq!(range(1..=5, &odd).unwrap(), vec!["Odd", "2", "Odd", "4", "Odd"]);
///
/// assert!(range(5..=1, &odd).is_err());
/// ```
pub fn range(bounds: RangeInclusive<i64>, triggers: &TriggerSet) -> Result<Vec<String>, EngineError> {
    let range = InclusiveRange::try_from(bounds)?;
    if range.len() > MAX_BUFFERED_RESULTS {
        return Err(EngineError::RangeTooLarge {
            len: range.len(),
            max: MAX_BUFFERED_RESULTS,
        });
    }
    Ok(evaluate_range(&range, triggers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Rule;

    #[test]
    fn test_classify_concatenates_in_trigger_order() {
        let buzz_first = TriggerSet::new()
            .with("Buzz", Rule::DivisibleBy(5))
            .with("Fizz", Rule::DivisibleBy(3));
        assert_eq!(classify(15, &buzz_first), "BuzzFizz");
        assert_eq!(classify(15, &TriggerSet::fizz_buzz()), "FizzBuzz");
    }

    #[test]
    fn test_classify_with_duplicate_triggers() {
        let triggers = TriggerSet::new()
            .with("Fizz", Rule::DivisibleBy(3))
            .with("Fizz", Rule::DivisibleBy(3));
        assert_eq!(classify(3, &triggers), "FizzFizz");
        assert_eq!(classify(4, &triggers), "4");
    }

    #[test]
    fn test_classify_falls_back_to_decimal_string() {
        let empty = TriggerSet::new();
        assert_eq!(classify(0, &empty), "0");
        assert_eq!(classify(-17, &empty), "-17");
        assert_eq!(classify(i64::MAX, &empty), i64::MAX.to_string());
    }

    #[test]
    fn test_empty_label_falls_back_to_number() {
        let triggers = TriggerSet::new().with("", Rule::Odd);
        assert_eq!(classify(3, &triggers), "3");
    }

    #[test]
    fn test_range_rejects_reversed_bounds() {
        assert_eq!(
            range(10..=1, &TriggerSet::fizz_buzz()),
            Err(EngineError::InvalidRange { start: 10, end: 1 })
        );
    }

    #[test]
    fn test_range_refuses_to_buffer_full_domain() {
        assert_eq!(
            range(i64::MIN..=i64::MAX, &TriggerSet::new()),
            Err(EngineError::RangeTooLarge {
                len: u64::MAX,
                max: MAX_BUFFERED_RESULTS,
            })
        );
    }

    #[test]
    fn test_range_at_buffer_limit_boundary() {
        let over = MAX_BUFFERED_RESULTS as i64 + 1;
        assert!(matches!(
            range(1..=over, &TriggerSet::new()),
            Err(EngineError::RangeTooLarge { .. })
        ));
    }

    #[test]
    fn test_evaluate_iter_is_lazy_over_full_domain() {
        let full = InclusiveRange::new(i64::MIN, i64::MAX).unwrap();
        let triggers = TriggerSet::fizz_buzz();
        let first: Vec<String> = evaluate_iter(&full, &triggers).take(2).collect();
        assert_eq!(first, vec![i64::MIN.to_string(), (i64::MIN + 1).to_string()]);
    }

    #[test]
    fn test_range_over_negative_values() {
        let results = range(-5..=0, &TriggerSet::fizz_buzz()).unwrap();
        assert_eq!(results, vec!["Buzz", "-4", "Fizz", "-2", "-1", "FizzBuzz"]);
    }

    #[test]
    fn test_range_at_top_of_domain() {
        let results = range(i64::MAX - 1..=i64::MAX, &TriggerSet::new()).unwrap();
        assert_eq!(results, vec![(i64::MAX - 1).to_string(), i64::MAX.to_string()]);
    }

    #[test]
    #[should_panic]
    fn test_predicate_panic_propagates() {
        let triggers = TriggerSet::new().with("Boom", |n: i64| 10 / n == 1);
        let _ = range(-1..=1, &triggers);
    }
}
