//! `gg-growth` — grows a directed graph from a seed, one operation at a time.
//!
//! # Run shape
//!
//! ```text
//! Seed ─► PrngState ─┐
//! Settings ─► GrowthTargets + Gravitate
//!                    ▼
//!   loop: link(graph snapshot, targets, gravitate, rng)
//!           Bootstrap  → addNode(0)
//!           Genesis    → addNode(n), addEdge(picked, n)
//!           Abundance  → addEdge(from, to)
//!           Done       → stop
//!         apply ops to the graph, yield (op, progress, rng)
//! ```
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`settings`]  | `SettingsInput`, `Settings`, `BranchingModel`            |
//! | [`targets`]   | `GrowthTargets`, `max_edges`, density → edge count       |
//! | [`gravitate`] | `Gravitate` — NLPA or biased-uniform node pick           |
//! | [`link`]      | `Phase`, `link` — one state machine transition           |
//! | [`stream`]    | `GraphStream`, `GraphStreamItem`, `generate`             |
//! | [`builder`]   | `GraphStreamBuilder`                                     |
//! | [`observer`]  | `GrowthObserver`, `NoopObserver`                         |
//! | [`batch`]     | `generate_batch`                                         |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `generate_batch` runs seeds on Rayon's thread pool.     |
//! | `serde`    | Serde derives on settings and stream items.             |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use gg_core::Seed;
//! use gg_growth::{generate, SettingsInput};
//!
//! let settings = SettingsInput { nodes: Some(50), ..Default::default() }.resolve()?;
//! let done = generate(Seed::from_phrase("seed1"), &settings)?;
//! println!("{} edges", done.progress.total_edges);
//! ```

pub mod batch;
pub mod builder;
pub mod error;
pub mod gravitate;
pub mod link;
pub mod observer;
pub mod settings;
pub mod stream;
pub mod targets;

#[cfg(test)]
mod tests;

pub use batch::generate_batch;
pub use builder::GraphStreamBuilder;
pub use error::{GrowthError, GrowthResult, Invariant};
pub use gravitate::Gravitate;
pub use link::{link, LinkState, Phase};
pub use observer::{GrowthObserver, NoopObserver};
pub use settings::{BranchingModel, Settings, SettingsInput, UnknownBranchingModel};
pub use stream::{generate, generate_with, FinalizedGraph, GraphStream, GraphStreamItem, GraphStreamState};
pub use targets::{max_edges, GrowthTargets};
