// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{validate_strategy_triggers, Config, Strategy};
use crate::engine::TriggerSet;
use crate::errors::ValidationError;
use crate::traits::Evaluator;
use super::*;

/// Factory for creating paradigm variants from configuration
pub struct EvaluatorFactory;

impl EvaluatorFactory {
    /// Create the evaluator named by the configuration strategy.
    ///
    /// Fixed-rule strategies are refused unless the configuration carries
    /// exactly the default Fizz/Buzz triggers.
    pub fn from_config(cfg: &Config) -> Result<Box<dyn Evaluator>, ValidationError> {
        validate_strategy_triggers(cfg)?;
        Ok(Self::create(cfg.strategy, cfg.trigger_set()))
    }

    /// Create an evaluator directly.
    ///
    /// `triggers` is ignored by the fixed-rule strategies (`imperative`,
    /// `deduplicated`); use [`EvaluatorFactory::from_config`] to have that checked.
    pub fn create(strategy: Strategy, triggers: TriggerSet) -> Box<dyn Evaluator> {
        match strategy {
            Strategy::Imperative => Box::new(ImperativeEvaluator::new()),
            Strategy::Deduplicated => Box::new(DeduplicatedEvaluator::new()),
            Strategy::Parameterized => Box::new(ParameterizedEvaluator::new(triggers)),
            Strategy::Functional => Box::new(FunctionalEvaluator::new(triggers)),
            Strategy::Lazy => Box::new(LazyEvaluator::new(triggers)),
            Strategy::Polished => Box::new(PolishedEvaluator::new(triggers)),
        }
    }

    /// List all available strategy names
    pub fn list_available_strategies() -> Vec<&'static str> {
        Strategy::all().iter().map(Strategy::as_str).collect()
    }

    /// Check if a strategy name is available
    pub fn is_strategy_available(name: &str) -> bool {
        Self::list_available_strategies().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TriggerConfig;
    use crate::engine::{InclusiveRange, Rule};

    #[test]
    fn test_create_each_strategy() {
        for strategy in Strategy::all() {
            let evaluator = EvaluatorFactory::create(strategy, TriggerSet::fizz_buzz());
            assert_eq!(evaluator.name(), strategy.as_str());
        }
    }

    #[test]
    fn test_from_config_runs_custom_triggers() {
        let config = Config {
            strategy: Strategy::Functional,
            triggers: vec![TriggerConfig::new("Odd", Rule::Odd)],
            ..Config::default()
        };

        let evaluator = EvaluatorFactory::from_config(&config).unwrap();
        let results = evaluator.evaluate(&InclusiveRange::new(1, 5).unwrap());
        assert_eq!(results, vec!["Odd", "2", "Odd", "4", "Odd"]);
    }

    #[test]
    fn test_from_config_refuses_fixed_rule_with_custom_triggers() {
        let config = Config {
            strategy: Strategy::Imperative,
            triggers: vec![TriggerConfig::new("Odd", Rule::Odd)],
            ..Config::default()
        };

        let result = EvaluatorFactory::from_config(&config);
        assert!(matches!(
            result,
            Err(ValidationError::FixedRuleStrategy { trigger_count: 1, .. })
        ));
    }

    #[test]
    fn test_strategy_listing() {
        assert_eq!(EvaluatorFactory::list_available_strategies().len(), 6);
        assert!(EvaluatorFactory::is_strategy_available("lazy"));
        assert!(!EvaluatorFactory::is_strategy_available("recursive"));
    }
}
