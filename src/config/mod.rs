// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod output;
mod run_config;
mod validation;

pub mod consts;

pub use output::{render, write_lines};
pub use run_config::{default_trigger_configs, Config, OutputFormat, Strategy, TriggerConfig};
pub use validation::{validate_buffered_len, validate_config, validate_strategy_triggers};
