// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // run configuration + validation
pub mod engine;     // triggers, ranges, lazy sequence
pub mod errors;     // error handling
pub mod observability;
pub mod traits;     // unified abstractions
pub mod variants;   // paradigm variants

pub use engine::{range, sequence, FizzBuzzSequence, InclusiveRange, Trigger, TriggerSet};
