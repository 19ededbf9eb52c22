//! Validated numeric value types.
//!
//! Every type here has exactly one checked constructor (`new`) and a plain
//! accessor (`get`).  Out-of-domain values are rejected with
//! [`CoreError::OutOfRange`]; nothing is clamped.  `NaN` fails every range
//! check.
//!
//! | Type             | Domain        |
//! |------------------|---------------|
//! | [`Decimal01`]    | `[0, 1]`      |
//! | [`Decimal0n`]    | `[0, ∞)`      |
//! | [`Decimal1n`]    | `[1, ∞)`      |
//! | [`Uniform01`]    | `[0, 1)`      |
//! | [`Heterogeneity`]| `[0, 1]`      |
//! | [`Density`]      | `[0, 1]`      |
//! | [`TornDecimal01`]| `[0, 1] \ {0.5}` |
//! | [`PositiveCount`]| `1, 2, 3, …`  |

use std::fmt;
use std::num::NonZeroUsize;

use crate::{CoreError, CoreResult};

/// Generate a range-checked `f64` wrapper.
macro_rules! bounded_decimal {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident;
        what = $what:literal,
        expected = $expected:literal,
        accepts = |$v:ident| $check:expr;
    ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "f64", into = "f64"))]
        $vis struct $name(f64);

        impl $name {
            /// Validate `value` against the type's domain.
            pub fn new(value: f64) -> CoreResult<Self> {
                let $v = value;
                if $check {
                    Ok(Self(value))
                } else {
                    Err(CoreError::OutOfRange {
                        what:     $what,
                        expected: $expected,
                        value,
                    })
                }
            }

            #[inline(always)]
            pub fn get(self) -> f64 {
                self.0
            }
        }

        impl TryFrom<f64> for $name {
            type Error = CoreError;
            fn try_from(value: f64) -> CoreResult<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for f64 {
            #[inline(always)]
            fn from(value: $name) -> f64 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

bounded_decimal! {
    /// A probability-like value in the closed interval `[0, 1]`.
    pub struct Decimal01;
    what = "decimal01",
    expected = "[0, 1]",
    accepts = |v| (0.0..=1.0).contains(&v);
}

bounded_decimal! {
    /// A finite non-negative real, e.g. the NLPA exponent.
    pub struct Decimal0n;
    what = "decimal0n",
    expected = "[0, inf)",
    accepts = |v| v >= 0.0 && v.is_finite();
}

bounded_decimal! {
    /// A finite real no smaller than one.
    pub struct Decimal1n;
    what = "decimal1n",
    expected = "[1, inf)",
    accepts = |v| v >= 1.0 && v.is_finite();
}

bounded_decimal! {
    /// One uniform draw: half-open `[0, 1)`, never exactly 1.
    pub struct Uniform01;
    what = "uniform01",
    expected = "[0, 1)",
    accepts = |v| (0.0..1.0).contains(&v);
}

bounded_decimal! {
    /// User-facing heterogeneity knob.
    pub struct Heterogeneity;
    what = "heterogeneity",
    expected = "[0, 1]",
    accepts = |v| (0.0..=1.0).contains(&v);
}

bounded_decimal! {
    /// User-facing density knob.
    pub struct Density;
    what = "density",
    expected = "[0, 1]",
    accepts = |v| (0.0..=1.0).contains(&v);
}

impl Decimal01 {
    pub const ZERO: Decimal01 = Decimal01(0.0);
    pub const HALF: Decimal01 = Decimal01(0.5);
    pub const ONE: Decimal01 = Decimal01(1.0);
}

impl Decimal0n {
    pub const ZERO: Decimal0n = Decimal0n(0.0);
    pub const ONE: Decimal0n = Decimal0n(1.0);
}

impl Default for Decimal0n {
    /// The NLPA default exponent (linear preferential attachment).
    fn default() -> Self {
        Self::ONE
    }
}

impl Uniform01 {
    pub const ZERO: Uniform01 = Uniform01(0.0);

    /// The closest representable `f64` below 1.0 (`1 - 2^-53`).
    ///
    /// Some reference generators use `1 - 2^-52` (`0.9999999999999998`)
    /// here, so outputs pinned to `MAX` differ from theirs in the last bit.
    pub const MAX: Uniform01 = Uniform01(1.0 - f64::EPSILON / 2.0);

    /// Wrap the output of `rand`'s `Standard` `f64` sampling, which is
    /// `[0, 1)` by construction.
    #[inline]
    pub(crate) fn from_standard(value: f64) -> Uniform01 {
        debug_assert!((0.0..1.0).contains(&value));
        Uniform01(value)
    }
}

impl Heterogeneity {
    /// Used when a caller leaves heterogeneity unset.
    pub const DEFAULT: Heterogeneity = Heterogeneity(0.3);
}

impl Default for Heterogeneity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Density {
    /// Used when a caller leaves density unset.
    pub const DEFAULT: Density = Density(0.5);
}

impl Default for Density {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<Uniform01> for Decimal01 {
    #[inline]
    fn from(value: Uniform01) -> Decimal01 {
        Decimal01(value.0)
    }
}

impl From<Heterogeneity> for Decimal01 {
    #[inline]
    fn from(value: Heterogeneity) -> Decimal01 {
        Decimal01(value.0)
    }
}

impl From<Density> for Decimal01 {
    #[inline]
    fn from(value: Density) -> Decimal01 {
        Decimal01(value.0)
    }
}

// ── TornDecimal01 ─────────────────────────────────────────────────────────────

/// A [`Decimal01`] proven not to equal 0.5.
///
/// Used as a dice-roll bias where the side of 0.5 picks advantage or
/// disadvantage; the neutral value is handled before one of these is built.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
pub struct TornDecimal01(Decimal01);

impl TornDecimal01 {
    pub fn new(value: Decimal01) -> CoreResult<Self> {
        if value.get() == 0.5 {
            Err(CoreError::NeutralBias)
        } else {
            Ok(Self(value))
        }
    }

    #[inline]
    pub fn get(self) -> f64 {
        self.0.get()
    }

    /// `true` when the value lies above 0.5.
    #[inline]
    pub fn is_upper(self) -> bool {
        self.0.get() > 0.5
    }

    /// Distance from 0.5 rescaled to `[0, 1]`: `|k - 0.5| * 2`.
    pub fn magnitude(self) -> CoreResult<Decimal01> {
        Decimal01::new((self.0.get() - 0.5).abs() * 2.0)
    }
}

// ── PositiveCount ─────────────────────────────────────────────────────────────

/// A strictly positive count (node totals, bucket counts).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PositiveCount(NonZeroUsize);

impl PositiveCount {
    pub const ONE: PositiveCount = PositiveCount(NonZeroUsize::MIN);

    pub fn new(value: usize) -> CoreResult<Self> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(CoreError::NotPositive { what: "count" })
    }

    #[inline(always)]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for PositiveCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
