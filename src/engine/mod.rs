// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod bounds;
pub mod evaluate;
pub mod rule;
pub mod sequence;
pub mod trigger;

pub use bounds::{Chunks, InclusiveRange};
pub use evaluate::{classify, evaluate_iter, evaluate_range, range};
pub use rule::Rule;
pub use sequence::{sequence, FizzBuzzSequence};
pub use trigger::{Trigger, TriggerSet};
