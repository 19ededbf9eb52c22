//! Biased dice roll ("dnd" branching model).
//!
//! Rolling with advantage means rolling several times and keeping the best
//! result; disadvantage keeps the worst.  The bias `K ∈ [0, 1]` generalises
//! that: `K > 0.5` is advantage, `K < 0.5` disadvantage, and the distance from
//! 0.5 decides how many extra rolls are taken (0 to [`MAX_ROLLS`]).
//!
//! For a torn bias the base draw `n` is discarded: only the extra rolls are
//! folded, starting from the unit of the fold (0 for advantage, the closest
//! float below 1 for disadvantage).  A roll count of zero therefore yields
//! the unit itself.
//!
//! `K = 0`, `K = 0.5` and `K = 1` short-circuit to `0`, `n` and
//! [`Uniform01::MAX`] without consuming any randomness.

use gg_core::{
    map01_to_0n, CoreResult, Decimal01, PositiveCount, PrngState, TornDecimal01, Uniform01,
};

use crate::DistResult;

/// Upper bound on extra rolls at the most extreme bias.
pub const MAX_ROLLS: usize = 13;

/// Which end of the unit interval extra rolls pull towards.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Roll {
    Advantage,
    Disadvantage,
}

impl Roll {
    pub fn of(bias: TornDecimal01) -> Roll {
        if bias.is_upper() { Roll::Advantage } else { Roll::Disadvantage }
    }

    /// Identity element of the fold.
    #[inline]
    pub fn unit(self) -> Uniform01 {
        match self {
            Roll::Advantage    => Uniform01::ZERO,
            Roll::Disadvantage => Uniform01::MAX,
        }
    }

    #[inline]
    fn combine(self, a: f64, b: f64) -> f64 {
        match self {
            Roll::Advantage    => a.max(b),
            Roll::Disadvantage => a.min(b),
        }
    }
}

/// Number of extra rolls for a torn bias: `|K - 0.5| * 2` bucketed into
/// `0..=MAX_ROLLS`.
pub fn roll_count(bias: TornDecimal01) -> CoreResult<usize> {
    let buckets = PositiveCount::new(MAX_ROLLS)?;
    Ok(map01_to_0n(buckets, bias.magnitude()?))
}

/// The biased distribution for one bias value.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct BiasedRoll {
    bias: Decimal01,
}

impl BiasedRoll {
    pub fn new(bias: Decimal01) -> Self {
        Self { bias }
    }

    pub fn bias(&self) -> Decimal01 {
        self.bias
    }

    /// Transform the base draw `n`, consuming extra rolls from `state`.
    ///
    /// `n` only survives at `K = 0.5`.
    pub fn apply(&self, n: Uniform01, state: PrngState) -> DistResult<(Uniform01, PrngState)> {
        let k = self.bias.get();
        if k == 0.0 {
            return Ok((Uniform01::ZERO, state));
        }
        if k == 1.0 {
            return Ok((Uniform01::MAX, state));
        }
        if k == 0.5 {
            return Ok((n, state));
        }

        let torn = TornDecimal01::new(self.bias)?;
        let roll = Roll::of(torn);
        let (extra, next) = state.draws(roll_count(torn)?);
        let folded = extra
            .into_iter()
            .fold(roll.unit().get(), |acc, d| roll.combine(acc, d.get()));
        Ok((Uniform01::new(folded)?, next))
    }

    /// Draw the base value from `state`, then [`apply`](Self::apply).
    pub fn draw(&self, state: PrngState) -> DistResult<(Uniform01, PrngState)> {
        let (n, next) = state.next();
        self.apply(n, next)
    }
}
