//! Range mapping helpers.

use crate::{CoreError, CoreResult, Decimal01, PositiveCount};

/// Map `x ∈ [0, 1]` onto the integers `0..=k` using `k` equal-width buckets
/// plus the closed top end.
///
/// Computed as `floor(x / (1/k))`.  The division is not exact for every `k`,
/// so the top of the interval is pinned: `x = 1` always yields `k`, and no
/// input yields more than `k`.
///
/// ```
/// use gg_core::{map01_to_0n, Decimal01, PositiveCount};
///
/// let k = PositiveCount::new(13).unwrap();
/// assert_eq!(map01_to_0n(k, Decimal01::ZERO), 0);
/// assert_eq!(map01_to_0n(k, Decimal01::HALF), 6);
/// assert_eq!(map01_to_0n(k, Decimal01::ONE), 13);
/// ```
pub fn map01_to_0n(k: PositiveCount, x: Decimal01) -> usize {
    let k = k.get();
    if x.get() >= 1.0 {
        return k;
    }
    let bucket_width = 1.0 / k as f64;
    ((x.get() / bucket_width).floor() as usize).min(k)
}

/// Linearly map `x` from the range `[a1, a2]` onto `[b1, b2]`.
///
/// `x` is not required to lie inside `[a1, a2]`; the line is extrapolated.
/// Fails when `a1 == a2`.
pub fn linear_transformation(x: f64, (a1, a2): (f64, f64), (b1, b2): (f64, f64)) -> CoreResult<f64> {
    if a1 == a2 {
        return Err(CoreError::DegenerateRange { lower: a1, upper: a2 });
    }
    Ok((x - a1) * (b2 - b1) / (a2 - a1) + b1)
}
