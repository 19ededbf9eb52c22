//! `gg-dist` — the sampling distributions behind node selection.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`nlpa`]    | `Nlpa`, `NlpaInput` — weighted pick ∝ (degree + 1)^alpha          |
//! | [`biased`]  | `BiasedRoll`, `Roll` — advantage/disadvantage dice mechanic       |
//! | [`scaling`] | heterogeneity → NLPA exponent                                     |
//! | [`error`]   | `DistError`, `DistResult<T>`                                      |
//!
//! # Design notes
//!
//! Every distribution comes in two forms: a pure form that takes an already
//! drawn [`Uniform01`](gg_core::Uniform01), and a stateful form that draws
//! from a [`PrngState`](gg_core::PrngState) and returns the successor state.
//! Given the same effective draw both forms return the same result.
//!
//! Nothing here knows about graphs.  Degrees arrive through a closure, so the
//! growth crate decides which degree (and which node subset) is sampled.

pub mod biased;
pub mod error;
pub mod nlpa;
pub mod scaling;


pub use biased::{roll_count, BiasedRoll, MAX_ROLLS, Roll};
pub use error::{DistError, DistResult};
pub use nlpa::{FAIRNESS, Nlpa, NlpaInput};
pub use scaling::{scale_nlpa_heterogeneity, scale_nlpa_heterogeneity_unbounded};
