//! `evac-graph` — undirected road graph, BFS routing, and hop-distance matrix.
//!
//! # Crate layout
//!
//! | Module    | Contents                                             |
//! |-----------|--------------------------------------------------------|
//! | [`graph`] | `RoadGraph` (CSR adjacency), `RoadGraphBuilder`       |
//! | [`error`] | `GraphError`, `GraphResult<T>`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.  |

pub mod error;
pub mod graph;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use graph::{RoadGraph, RoadGraphBuilder};
