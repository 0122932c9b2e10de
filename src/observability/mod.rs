// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for diagnostic and operational
//! logging. Message types are plain structs implementing `Display`, so log text
//! lives in one place instead of being scattered through the evaluators.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::cli` - binary startup and output
//! * `messages::evaluation` - bounded evaluation by a paradigm variant
//! * `messages::sequence` - lazy sequence lifecycle
//! * `messages::validation` - configuration validation results
//!
//! # Usage
//!
//! ```rust
//! use the_fizzbuzz::observability::messages::evaluation::EvaluationStarted;
//!
//! let msg = EvaluationStarted {
//!     variant: "functional",
//!     start: 1,
//!     end: 100,
//!     trigger_count: 2,
//! };
//!
//! tracing::info!("{}", msg);
//! ```
//!
//! The engine functions themselves never log; they stay pure and the
//! evaluators and CLI emit these messages around them.

pub mod messages;
