// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The paradigm variants.
//!
//! Each file restates the same computation in a different style, in the order
//! they are usually taught: imperative, deduplicated, parameterized,
//! functional, lazy, and finally the polished engine call. All of them are
//! [`Evaluator`](crate::traits::Evaluator)s and are interchangeable through
//! [`EvaluatorFactory`].

pub mod deduplicated;
pub mod factory;
pub mod functional;
pub mod imperative;
pub mod lazy;
pub mod parameterized;
pub mod polished;
#[cfg(test)]
mod integration_tests;

pub use deduplicated::DeduplicatedEvaluator;
pub use factory::EvaluatorFactory;
pub use functional::FunctionalEvaluator;
pub use imperative::ImperativeEvaluator;
pub use lazy::LazyEvaluator;
pub use parameterized::ParameterizedEvaluator;
pub use polished::PolishedEvaluator;
