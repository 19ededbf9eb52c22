//! `gg-graph` — the graph collaborator seen by the generator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`view`]      | `Direction`, `GraphView` (read side), `GraphSink` (write side), `Graph` |
//! | [`op`]        | `GraphStreamOp` — the only mutations the generator emits   |
//! | [`adjacency`] | `AdjacencyList` — directed out-lists plus in-degree counters |
//!
//! The generator never stores its own copy of the graph.  It reads through
//! [`GraphView`] and describes changes as [`GraphStreamOp`] values; whoever
//! owns the storage applies them through [`GraphSink`].
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `GraphStreamOp`.        |

pub mod adjacency;
pub mod op;
pub mod view;


pub use adjacency::AdjacencyList;
pub use op::GraphStreamOp;
pub use view::{Direction, Graph, GraphSink, GraphView};
