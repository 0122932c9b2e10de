pub mod evaluator;
pub mod predicate;

pub use evaluator::Evaluator;
pub use predicate::Predicate;
