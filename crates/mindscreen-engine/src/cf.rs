//! Certainty factor combination.

/// Merge two certainty factors supporting the same conclusion:
/// `a ⊕ b = a + b(1 - a)`.
///
/// Commutative and associative up to floating-point rounding. For inputs in
/// `[0, 1]` the result stays in `[0, 1]`, never falls below `a`, and only
/// reaches 1 when one side is 1.
pub fn combine(a: f64, b: f64) -> f64 {
    a + b * (1.0 - a)
}

/// Fold a sequence of contributions. The first contribution seeds the
/// running value; `None` means there was nothing to combine, which is not
/// the same as a combined value of zero.
pub fn combine_all<I>(contributions: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    contributions.into_iter().reduce(combine)
}
