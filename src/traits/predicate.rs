/// A single-method test applied to each integer in a range.
///
/// Any `Fn(i64) -> bool` closure is a predicate, so ad-hoc triggers can be
/// written inline:
///
/// ```
/// use the_fizzbuzz::traits::Predicate;
///
/// let is_seven = |n: i64| n == 7;
/// assert!(is_seven.evaluate(7));
/// assert!(!is_seven.evaluate(8));
/// ```
///
/// Predicates are expected to be total. The engine never catches a panic
/// raised from `evaluate`.
pub trait Predicate: Send + Sync {
    fn evaluate(&self, value: i64) -> bool;
}

impl<F> Predicate for F
where
    F: Fn(i64) -> bool + Send + Sync,
{
    fn evaluate(&self, value: i64) -> bool {
        self(value)
    }
}
