// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Every variant must agree with the engine.

use crate::config::Strategy;
use crate::engine::{evaluate_range, InclusiveRange, Rule, TriggerSet};
use crate::variants::EvaluatorFactory;

#[test]
fn test_all_variants_agree_on_default_range() {
    let range = InclusiveRange::default();
    let expected = evaluate_range(&range, &TriggerSet::fizz_buzz());

    for strategy in Strategy::all() {
        let evaluator = EvaluatorFactory::create(strategy, TriggerSet::fizz_buzz());
        assert_eq!(
            evaluator.evaluate(&range),
            expected,
            "Variant '{}' disagrees with the engine",
            strategy
        );
    }
}

#[test]
fn test_all_variants_agree_across_zero() {
    let range = InclusiveRange::new(-31, 31).unwrap();
    let expected = evaluate_range(&range, &TriggerSet::fizz_buzz());

    for strategy in Strategy::all() {
        let evaluator = EvaluatorFactory::create(strategy, TriggerSet::fizz_buzz());
        assert_eq!(evaluator.evaluate(&range), expected, "Failed for {}", strategy);
    }
}

#[test]
fn test_parameterized_variants_agree_on_custom_triggers() {
    let triggers = TriggerSet::new()
        .with("Odd", Rule::Odd)
        .with("Big", Rule::GreaterThan(40))
        .with("Odd", Rule::Odd)
        .with("Seven", |n: i64| n % 7 == 0);
    let range = InclusiveRange::new(30, 50).unwrap();
    let expected = evaluate_range(&range, &triggers);
    assert_eq!(expected[5], "OddOddSeven"); // 35

    let parameterized = Strategy::all().into_iter().filter(|s| !s.is_fixed_rule());
    for strategy in parameterized {
        let evaluator = EvaluatorFactory::create(strategy, triggers.clone());
        assert_eq!(evaluator.evaluate(&range), expected, "Failed for {}", strategy);
    }
}

#[test]
fn test_single_value_range() {
    let range = InclusiveRange::new(15, 15).unwrap();
    for strategy in Strategy::all() {
        let evaluator = EvaluatorFactory::create(strategy, TriggerSet::fizz_buzz());
        assert_eq!(evaluator.evaluate(&range), vec!["FizzBuzz"]);
    }
}
