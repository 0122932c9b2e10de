//! Configuration validation.
//!
//! Checks run in a fixed order and every problem found is reported, so a user
//! sees all issues with a command line at once:
//!
//! 1. **Label validation**: every trigger label is non-empty
//! 2. **Rule validation**: no divisibility rule divides by zero
//! 3. **Strategy compatibility**: fixed-rule strategies only run with the
//!    default Fizz/Buzz triggers
//! 4. **Output size**: buffered formats (`json`, `yaml`) are capped at
//!    `MAX_BUFFERED_RESULTS`; `lines` output streams and has no cap
//!
//! The engine itself never validates predicate semantics; these checks exist
//! so that rules typed on a command line fail up front instead of panicking
//! mid-run.
//!
//! # Example
//! ```rust
//! use the_fizzbuzz::config::{validate_config, Config, Strategy, TriggerConfig};
//! use the_fizzbuzz::engine::Rule;
//! use the_fizzbuzz::errors::ValidationError;
//!
//! let config = Config {
//!     strategy: Strategy::Imperative,
//!     triggers: vec![TriggerConfig::new("Never", Rule::DivisibleBy(0))],
//!     ..Config::default()
//! };
//!
//! let errors = validate_config(&config).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert!(matches!(errors[0], ValidationError::ZeroDivisor { .. }));
//! assert!(matches!(errors[1], ValidationError::FixedRuleStrategy { .. }));
//! ```

use crate::config::consts::MAX_BUFFERED_RESULTS;
use crate::config::{Config, OutputFormat};
use crate::engine::Rule;
use crate::errors::ValidationError;
use crate::observability::messages::{validation::*, StructuredLog};

/// Validate a configuration before any evaluator is built.
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid and ready to run
/// * `Err(Vec<ValidationError>)` - Every validation error found
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(label_errors) = validate_labels(config) {
        errors.extend(label_errors);
    }

    if let Err(rule_errors) = validate_rules(config) {
        errors.extend(rule_errors);
    }

    if let Err(strategy_error) = validate_strategy_triggers(config) {
        errors.push(strategy_error);
    }

    if let Err(size_error) = validate_buffered_len(config.format, config.range.len()) {
        errors.push(size_error);
    }

    if errors.is_empty() {
        ConfigValidated {
            strategy: config.strategy.as_str(),
            trigger_count: config.triggers.len(),
            range: &config.range,
        }
        .log();
        Ok(())
    } else {
        for error in &errors {
            ConfigValidationFailed { error }.log();
        }
        Err(errors)
    }
}

/// Fixed-rule strategies ignore triggers, so anything but the defaults is an error.
pub fn validate_strategy_triggers(config: &Config) -> Result<(), ValidationError> {
    if config.strategy.is_fixed_rule() && !config.uses_default_triggers() {
        return Err(ValidationError::FixedRuleStrategy {
            strategy: config.strategy.as_str().to_string(),
            trigger_count: config.triggers.len(),
        });
    }
    Ok(())
}

/// Buffered formats hold every result in memory before writing.
///
/// `len` is passed separately so lazy runs can check their `--take` count.
pub fn validate_buffered_len(format: OutputFormat, len: u64) -> Result<(), ValidationError> {
    if format != OutputFormat::Lines && len > MAX_BUFFERED_RESULTS {
        return Err(ValidationError::RangeTooLargeToBuffer {
            format: format.as_str().to_string(),
            len,
            max: MAX_BUFFERED_RESULTS,
        });
    }
    Ok(())
}

fn validate_labels(config: &Config) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = config
        .triggers
        .iter()
        .enumerate()
        .filter(|(_, trigger)| trigger.label.is_empty())
        .map(|(index, _)| ValidationError::EmptyLabel { index })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_rules(config: &Config) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = config
        .triggers
        .iter()
        .filter(|trigger| trigger.rule == Rule::DivisibleBy(0))
        .map(|trigger| ValidationError::ZeroDivisor {
            label: trigger.label.clone(),
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
