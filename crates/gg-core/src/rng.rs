//! Deterministic PRNG adapter.
//!
//! # Determinism strategy
//!
//! The generator is xoroshiro128+ and its whole state is two `u64` words.
//! [`PrngState`] is that state as a plain `Copy` value: every draw takes a
//! state by value and returns the value together with the *next* state, so a
//! generation run is a linear chain of states, one per draw.
//!
//! - The same state always yields the same `(value, next_state)` pair.
//! - States can be serialised and later restored with
//!   [`PrngState::from_words`], so a run can be replayed from any recorded
//!   point.
//! - A [`Seed`] expands to an initial state through `rand`'s fixed
//!   `SeedableRng::seed_from_u64` procedure (PCG32 fill), never through OS
//!   entropy.
//!
//! Uniform values are produced with `rand`'s `Standard` `f64` sampling
//! (top 53 bits of the 64-bit output), which is half-open `[0, 1)` by
//! construction.

use std::hash::{Hash, Hasher};

use rand::{Rng, RngCore, SeedableRng};
use rustc_hash::FxHasher;

use crate::{CoreError, CoreResult, Uniform01};

// ── Seed ──────────────────────────────────────────────────────────────────────

/// The sole external entropy input of a generation run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Seed(pub u64);

impl Seed {
    pub fn new(value: u64) -> Self {
        Seed(value)
    }

    /// Hash an arbitrary phrase into a seed with [`FxHasher`].
    ///
    /// `FxHasher` has no per-process random key, so the same phrase maps to
    /// the same seed on every run.  Its output does depend on pointer width:
    /// 32-bit and 64-bit targets derive different seeds from one phrase.  Pass
    /// the numeric [`Seed`] around when runs must match across targets.
    pub fn from_phrase(phrase: &str) -> Self {
        Self::from_phrase_with::<FxHasher>(phrase)
    }

    /// Hash a phrase with a caller-chosen hasher.  The hasher must be
    /// deterministic (no random keys) for runs to be reproducible.
    pub fn from_phrase_with<H: Hasher + Default>(phrase: &str) -> Self {
        let mut hasher = H::default();
        phrase.hash(&mut hasher);
        Seed(hasher.finish())
    }

    #[inline]
    pub fn value(self) -> u64 {
        self.0
    }
}

// ── PrngState ─────────────────────────────────────────────────────────────────

/// Complete, serialisable state of the generator.
///
/// Never all zeros: xoroshiro would emit zeros forever from that state, so
/// [`from_words`](Self::from_words) rejects it and seeding never produces it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[u64; 2]", into = "[u64; 2]"))]
pub struct PrngState([u64; 2]);

impl PrngState {
    /// Expand a seed into the initial state of a run.
    pub fn from_seed(seed: Seed) -> Self {
        Xoroshiro128Plus::seed_from_u64(seed.value()).state()
    }

    /// Restore a previously recorded state.
    pub fn from_words(words: [u64; 2]) -> CoreResult<Self> {
        if words == [0, 0] {
            return Err(CoreError::DegenerateState);
        }
        Ok(PrngState(words))
    }

    /// The raw generator words, suitable for logging or persisting.
    #[inline]
    pub fn words(self) -> [u64; 2] {
        self.0
    }

    /// Draw one uniform value and return it with the successor state.
    pub fn next(self) -> (Uniform01, PrngState) {
        let mut rng = Xoroshiro128Plus::from_state(self);
        let value: f64 = rng.r#gen();
        (Uniform01::from_standard(value), rng.state())
    }

    /// Draw `n` uniform values in sequence.
    pub fn draws(self, n: usize) -> (Vec<Uniform01>, PrngState) {
        let mut state = self;
        let values = (0..n)
            .map(|_| {
                let (value, next) = state.next();
                state = next;
                value
            })
            .collect();
        (values, state)
    }
}

impl TryFrom<[u64; 2]> for PrngState {
    type Error = CoreError;
    fn try_from(words: [u64; 2]) -> CoreResult<Self> {
        Self::from_words(words)
    }
}

impl From<PrngState> for [u64; 2] {
    fn from(state: PrngState) -> [u64; 2] {
        state.0
    }
}

// ── Xoroshiro128Plus ──────────────────────────────────────────────────────────

/// xoroshiro128+ (rotation constants 24/16/37).  Private: callers only see
/// the by-value [`PrngState`] interface.
struct Xoroshiro128Plus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128Plus {
    #[inline]
    fn from_state(state: PrngState) -> Self {
        let [s0, s1] = state.0;
        Self { s0, s1 }
    }

    #[inline]
    fn state(&self) -> PrngState {
        PrngState([self.s0, self.s1])
    }
}

impl RngCore for Xoroshiro128Plus {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let s0 = self.s0;
        let mut s1 = self.s1;
        let result = s0.wrapping_add(s1);
        s1 ^= s0;
        self.s0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.s1 = s1.rotate_left(37);
        result
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xoroshiro128Plus {
    type Seed = [u8; 16];

    fn from_seed(seed: [u8; 16]) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);
        let (s0, s1) = (u64::from_le_bytes(lo), u64::from_le_bytes(hi));
        if s0 == 0 && s1 == 0 {
            // The PCG32 fill of `seed_from_u64(0)` is non-zero.
            return Self::seed_from_u64(0);
        }
        Self { s0, s1 }
    }
}
