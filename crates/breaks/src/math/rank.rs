//! Nearest-rank order statistics.
//!
//! Discrete percentiles (`percentile_disc`) always return an existing data
//! point: for fraction `p` over `n` sorted values the 1-based rank is
//! `ceil(p * n)`, clamped to `[1, n]`.

/// 1-based nearest rank for the fraction `numerator / denominator` of `n` values.
///
/// Computed in integers so `i / k` fractions never suffer rounding.
#[inline]
pub fn nearest_rank(numerator: usize, denominator: usize, n: usize) -> usize {
    let rank = (numerator * n).div_ceil(denominator);
    rank.clamp(1, n)
}

/// Discrete percentile of sorted `values` at fraction `numerator / denominator`.
///
/// Returns `None` for empty input.
#[inline]
pub fn percentile_disc<T: Copy>(sorted: &[T], numerator: usize, denominator: usize) -> Option<T> {
    if sorted.is_empty() || denominator == 0 {
        return None;
    }
    let rank = nearest_rank(numerator, denominator, sorted.len());
    Some(sorted[rank - 1])
}
