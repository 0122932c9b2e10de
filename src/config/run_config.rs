// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::consts::{BUZZ_DIVISOR, BUZZ_LABEL, FIZZ_DIVISOR, FIZZ_LABEL};
use crate::engine::{InclusiveRange, Rule, Trigger, TriggerSet};
use crate::errors::ValidationError;

/// Complete settings for one run.
///
/// Assembled from command-line arguments; every field has a default so an
/// empty command line reproduces classic FizzBuzz over `1..100`.
///
/// # Example
/// ```yaml
/// strategy: polished
/// range: 1..100
/// triggers:
///   - label: Fizz
///     rule: divisible_by:3
///   - label: Buzz
///     rule: divisible_by:5
/// format: lines
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub strategy: Strategy,
    #[serde(default)]
    pub range: InclusiveRange,
    #[serde(default = "default_trigger_configs")]
    pub triggers: Vec<TriggerConfig>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            range: InclusiveRange::default(),
            triggers: default_trigger_configs(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Build the engine trigger set, preserving order and duplicates
    pub fn trigger_set(&self) -> TriggerSet {
        self.triggers.iter().map(TriggerConfig::to_trigger).collect()
    }

    /// True when the triggers are exactly the classic Fizz/Buzz pair
    pub fn uses_default_triggers(&self) -> bool {
        self.triggers == default_trigger_configs()
    }

    /// Render the effective configuration for `--show-config`
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }
}

/// Which paradigm variant evaluates the range.
///
/// * `Imperative` - hard-coded if/else chain, default triggers only
/// * `Deduplicated` - appends each label once per hit, default triggers only
/// * `Parameterized` - explicit loop over any trigger set
/// * `Functional` - iterator adapters over any trigger set
/// * `Lazy` - drains a lazy sequence
/// * `Polished` - the engine's public `range` operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Imperative,
    Deduplicated,
    Parameterized,
    Functional,
    Lazy,
    #[default]
    Polished,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Imperative => "imperative",
            Strategy::Deduplicated => "deduplicated",
            Strategy::Parameterized => "parameterized",
            Strategy::Functional => "functional",
            Strategy::Lazy => "lazy",
            Strategy::Polished => "polished",
        }
    }

    /// Strategies that bake the Fizz/Buzz rules into their code
    pub fn is_fixed_rule(&self) -> bool {
        matches!(self, Strategy::Imperative | Strategy::Deduplicated)
    }

    pub fn all() -> [Strategy; 6] {
        [
            Strategy::Imperative,
            Strategy::Deduplicated,
            Strategy::Parameterized,
            Strategy::Functional,
            Strategy::Lazy,
            Strategy::Polished,
        ]
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One result per line
    #[default]
    Lines,
    /// A JSON array of strings
    Json,
    /// A YAML sequence of strings
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Lines => "lines",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

/// Serializable description of one trigger: a label and a declarable rule.
///
/// Reads from `LABEL=RULE` text, e.g. `Fizz=divisible_by:3` or `Odd=odd`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    pub label: String,
    pub rule: Rule,
}

impl TriggerConfig {
    pub fn new(label: impl Into<String>, rule: Rule) -> Self {
        Self {
            label: label.into(),
            rule,
        }
    }

    pub fn to_trigger(&self) -> Trigger {
        Trigger::new(self.label.clone(), self.rule)
    }
}

impl FromStr for TriggerConfig {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (label, rule) = text
            .split_once('=')
            .ok_or_else(|| ValidationError::MalformedTrigger(text.to_string()))?;
        Ok(Self::new(label.trim(), rule.parse()?))
    }
}

impl fmt::Display for TriggerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.label, self.rule)
    }
}

/// The classic Fizz/Buzz trigger pair
pub fn default_trigger_configs() -> Vec<TriggerConfig> {
    vec![
        TriggerConfig::new(FIZZ_LABEL, Rule::DivisibleBy(FIZZ_DIVISOR)),
        TriggerConfig::new(BUZZ_LABEL, Rule::DivisibleBy(BUZZ_DIVISOR)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.strategy, Strategy::Polished);
        assert_eq!(config.range, InclusiveRange::default());
        assert_eq!(config.format, OutputFormat::Lines);
        assert!(config.uses_default_triggers());
        assert_eq!(config.trigger_set().labels(), vec!["Fizz", "Buzz"]);
    }

    #[test]
    fn test_trigger_config_from_text() {
        let trigger: TriggerConfig = "Fizz=divisible_by:3".parse().unwrap();
        assert_eq!(trigger, TriggerConfig::new("Fizz", Rule::DivisibleBy(3)));
        assert_eq!(trigger.to_string(), "Fizz=divisible_by:3");

        let odd: TriggerConfig = " Odd = odd".parse().unwrap();
        assert_eq!(odd, TriggerConfig::new("Odd", Rule::Odd));
    }

    #[test]
    fn test_trigger_config_rejects_missing_separator() {
        assert_eq!(
            "Fizz".parse::<TriggerConfig>(),
            Err(ValidationError::MalformedTrigger("Fizz".to_string()))
        );
    }

    #[test]
    fn test_trigger_config_rejects_unknown_rule() {
        assert_eq!(
            "Prime=prime".parse::<TriggerConfig>(),
            Err(ValidationError::UnknownRule("prime".to_string()))
        );
    }

    #[test]
    fn test_reordered_defaults_are_not_default() {
        let mut config = Config::default();
        config.triggers.reverse();
        assert!(!config.uses_default_triggers());
    }

    #[test]
    fn test_fixed_rule_strategies() {
        let fixed: Vec<Strategy> = Strategy::all()
            .into_iter()
            .filter(Strategy::is_fixed_rule)
            .collect();
        assert_eq!(fixed, vec![Strategy::Imperative, Strategy::Deduplicated]);
    }
}
