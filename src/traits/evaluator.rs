use crate::engine::InclusiveRange;

/// One paradigm's implementation of bounded evaluation.
///
/// Every evaluator must agree with `engine::evaluate_range` for the trigger
/// set it was built with; they differ only in how the work is expressed.
pub trait Evaluator {
    /// Produce one result per integer in `range`, in ascending order.
    ///
    /// The results are held in memory; split long ranges with
    /// `InclusiveRange::chunks` and evaluate one slice at a time.
    fn evaluate(&self, range: &InclusiveRange) -> Vec<String>;

    fn name(&self) -> &'static str;
}
