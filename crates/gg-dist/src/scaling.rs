//! Heterogeneity → NLPA exponent.
//!
//! ```text
//! alpha(h) = 2h                       h <  0.5
//! alpha(h) = 1 + (2h - 1) * (n - 1)   h >= 0.5
//! ```
//!
//! Continuous at `h = 0.5` (both branches give 1) and monotonic, mapping
//! `[0, 1]` onto `[0, n]`.

use gg_core::{CoreResult, Decimal0n, Heterogeneity, PositiveCount};

/// Bounded scaling used by the growth pipeline; `nodes` is the target node
/// count of the run.
pub fn scale_nlpa_heterogeneity(nodes: PositiveCount, h: Heterogeneity) -> CoreResult<Decimal0n> {
    let h = h.get();
    if h < 0.5 {
        return Decimal0n::new(2.0 * h);
    }
    let n = nodes.get() as f64;
    Decimal0n::new(1.0 + (n - 1.0) * (2.0 * (h - 0.5)))
}

/// Node-count-free scaling (`2h`, tops out at 2).  Only for callers that
/// have no node count yet.
pub fn scale_nlpa_heterogeneity_unbounded(h: Heterogeneity) -> CoreResult<Decimal0n> {
    Decimal0n::new(2.0 * h.get())
}
