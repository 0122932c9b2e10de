// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::sync::Arc;

use crate::config::consts::{BUZZ_DIVISOR, BUZZ_LABEL, FIZZ_DIVISOR, FIZZ_LABEL};
use crate::engine::Rule;
use crate::traits::Predicate;

/// A label paired with the predicate that decides whether it applies.
///
/// The predicate is held behind an `Arc` so trigger sets can be cloned into
/// several evaluators without copying closures.
#[derive(Clone)]
pub struct Trigger {
    label: String,
    predicate: Arc<dyn Predicate>,
}

impl Trigger {
    pub fn new(label: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether this trigger's label applies to `value`.
    pub fn fires(&self, value: i64) -> bool {
        self.predicate.evaluate(value)
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of triggers.
///
/// Order decides label concatenation order. Duplicates are kept as-is, so a
/// trigger listed twice contributes its label twice.
#[derive(Debug, Clone, Default)]
pub struct TriggerSet(pub Vec<Trigger>);

impl TriggerSet {
    /// Create a new empty trigger set
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The classic pair: `Fizz` on multiples of 3, then `Buzz` on multiples of 5
    pub fn fizz_buzz() -> Self {
        Self::new()
            .with(FIZZ_LABEL, Rule::DivisibleBy(FIZZ_DIVISOR))
            .with(BUZZ_LABEL, Rule::DivisibleBy(BUZZ_DIVISOR))
    }

    /// Builder form of [`TriggerSet::add`]
    pub fn with(mut self, label: impl Into<String>, predicate: impl Predicate + 'static) -> Self {
        self.add(Trigger::new(label, predicate));
        self
    }

    /// Append a trigger after all existing ones
    pub fn add(&mut self, trigger: Trigger) {
        self.0.push(trigger);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trigger> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Labels in definition order
    pub fn labels(&self) -> Vec<&str> {
        self.0.iter().map(Trigger::label).collect()
    }
}

impl From<Vec<Trigger>> for TriggerSet {
    fn from(triggers: Vec<Trigger>) -> Self {
        Self(triggers)
    }
}

impl FromIterator<Trigger> for TriggerSet {
    fn from_iter<I: IntoIterator<Item = Trigger>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TriggerSet {
    type Item = &'a Trigger;
    type IntoIter = std::slice::Iter<'a, Trigger>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fizz_buzz_order() {
        let triggers = TriggerSet::fizz_buzz();
        assert_eq!(triggers.labels(), vec!["Fizz", "Buzz"]);
    }

    #[test]
    fn test_closure_trigger_fires() {
        let trigger = Trigger::new("Big", |n: i64| n > 1_000);
        assert!(trigger.fires(1_001));
        assert!(!trigger.fires(1_000));
        assert_eq!(trigger.label(), "Big");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let triggers = TriggerSet::new()
            .with("Fizz", Rule::DivisibleBy(3))
            .with("Fizz", Rule::DivisibleBy(3));
        assert_eq!(triggers.len(), 2);
    }

    #[test]
    fn test_clone_shares_predicate() {
        let triggers = TriggerSet::new().with("Odd", Rule::Odd);
        let cloned = triggers.clone();
        assert!(cloned.iter().all(|t| t.fires(3)));
        assert!(Arc::ptr_eq(&triggers.0[0].predicate, &cloned.0[0].predicate));
    }

    #[test]
    fn test_debug_shows_label_only() {
        let trigger = Trigger::new("Fizz", Rule::DivisibleBy(3));
        let rendered = format!("{:?}", trigger);
        assert!(rendered.contains("Fizz"));
        assert!(rendered.contains(".."));
    }
}
