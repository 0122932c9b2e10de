// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;
use crate::traits::Predicate;

/// Declarable predicates, usable from the command line and from serialized config.
///
/// # Text form
/// * `divisible_by:N`
/// * `odd`, `even`
/// * `equals:N`, `greater_than:N`, `less_than:N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Rule {
    DivisibleBy(i64),
    Odd,
    Even,
    Equals(i64),
    GreaterThan(i64),
    LessThan(i64),
}

impl Predicate for Rule {
    fn evaluate(&self, value: i64) -> bool {
        match *self {
            // wrapping_rem keeps i64::MIN % -1 at 0; a zero divisor still panics.
            Rule::DivisibleBy(divisor) => value.wrapping_rem(divisor) == 0,
            Rule::Odd => value % 2 != 0,
            Rule::Even => value % 2 == 0,
            Rule::Equals(target) => value == target,
            Rule::GreaterThan(bound) => value > bound,
            Rule::LessThan(bound) => value < bound,
        }
    }
}

impl FromStr for Rule {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let unknown = || ValidationError::UnknownRule(text.to_string());
        let text = text.trim();

        let (name, argument) = match text.split_once(':') {
            Some((name, argument)) => {
                let argument = argument.trim().parse::<i64>().map_err(|_| unknown())?;
                (name.trim(), Some(argument))
            }
            None => (text, None),
        };

        match (name, argument) {
            ("divisible_by", Some(n)) => Ok(Rule::DivisibleBy(n)),
            ("odd", None) => Ok(Rule::Odd),
            ("even", None) => Ok(Rule::Even),
            ("equals", Some(n)) => Ok(Rule::Equals(n)),
            ("greater_than", Some(n)) => Ok(Rule::GreaterThan(n)),
            ("less_than", Some(n)) => Ok(Rule::LessThan(n)),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::DivisibleBy(n) => write!(f, "divisible_by:{}", n),
            Rule::Odd => write!(f, "odd"),
            Rule::Even => write!(f, "even"),
            Rule::Equals(n) => write!(f, "equals:{}", n),
            Rule::GreaterThan(n) => write!(f, "greater_than:{}", n),
            Rule::LessThan(n) => write!(f, "less_than:{}", n),
        }
    }
}

impl TryFrom<String> for Rule {
    type Error = ValidationError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Rule> for String {
    fn from(rule: Rule) -> Self {
        rule.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisible_by_handles_negatives_and_zero() {
        let rule = Rule::DivisibleBy(3);
        assert!(rule.evaluate(0));
        assert!(rule.evaluate(-9));
        assert!(!rule.evaluate(-10));
        assert!(Rule::DivisibleBy(-1).evaluate(i64::MIN));
    }

    #[test]
    #[should_panic]
    fn test_divisible_by_zero_panics() {
        Rule::DivisibleBy(0).evaluate(10);
    }

    #[test]
    fn test_parity_rules() {
        assert!(Rule::Odd.evaluate(-3));
        assert!(!Rule::Odd.evaluate(4));
        assert!(Rule::Even.evaluate(0));
        assert!(Rule::Even.evaluate(-2));
    }

    #[test]
    fn test_comparison_rules() {
        assert!(Rule::Equals(42).evaluate(42));
        assert!(Rule::GreaterThan(10).evaluate(11));
        assert!(!Rule::GreaterThan(10).evaluate(10));
        assert!(Rule::LessThan(0).evaluate(-1));
    }

    #[test]
    fn test_parse_from_text() {
        let test_cases = vec![
            ("divisible_by:3", Rule::DivisibleBy(3)),
            ("odd", Rule::Odd),
            (" even ", Rule::Even),
            ("equals:-4", Rule::Equals(-4)),
            ("greater_than: 50", Rule::GreaterThan(50)),
            ("less_than:7", Rule::LessThan(7)),
        ];

        for (text, expected) in test_cases {
            assert_eq!(text.parse::<Rule>().unwrap(), expected, "Failed for '{}'", text);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_or_misshapen_rules() {
        for text in ["prime", "odd:3", "divisible_by", "divisible_by:x", "equals:"] {
            assert_eq!(
                text.parse::<Rule>(),
                Err(ValidationError::UnknownRule(text.to_string()))
            );
        }
    }

    #[test]
    fn test_display_matches_parse_form() {
        for rule in [Rule::DivisibleBy(5), Rule::Odd, Rule::LessThan(-2)] {
            assert_eq!(rule.to_string().parse::<Rule>().unwrap(), rule);
        }
    }

    #[test]
    fn test_serde_uses_text_form() {
        let json = serde_json::to_string(&Rule::DivisibleBy(3)).unwrap();
        assert_eq!(json, r#""divisible_by:3""#);

        let rule: Rule = serde_json::from_str(r#""odd""#).unwrap();
        assert_eq!(rule, Rule::Odd);

        assert!(serde_json::from_str::<Rule>(r#""prime""#).is_err());
    }
}
