//! `gg-core` — foundational types for the graphgen workspace.
//!
//! This crate is a dependency of every other `gg-*` crate.  It has no `gg-*`
//! dependencies and few external ones (`rand`, `rustc-hash`, `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`ids`]     | `NodeIndex`                                                   |
//! | [`numeric`] | `Decimal01`, `Decimal0n`, `Decimal1n`, `Uniform01`, `TornDecimal01`, `Heterogeneity`, `Density`, `PositiveCount` |
//! | [`range`]   | `map01_to_0n`, `linear_transformation`                        |
//! | [`rng`]     | `Seed`, `PrngState` (pure `state -> (value, state)` adapter)  |
//! | [`error`]   | `CoreError`, `CoreResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod ids;
pub mod numeric;
pub mod range;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::NodeIndex;
pub use numeric::{
    Decimal01, Decimal0n, Decimal1n, Density, Heterogeneity, PositiveCount, TornDecimal01,
    Uniform01,
};
pub use range::{linear_transformation, map01_to_0n};
pub use rng::{PrngState, Seed};
