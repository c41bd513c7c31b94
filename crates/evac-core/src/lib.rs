//! `evac-core` — foundational types for the evacuation simulation/estimation
//! workspace.
//!
//! This crate is a dependency of every other `evac-*` crate. It intentionally
//! has no `evac-*` dependencies and minimal external ones (only `rand`,
//! `thiserror` and `log`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module             | Contents                                   |
//! |--------------------|---------------------------------------------|
//! | [`ids`]            | `AgentId`, `NodeId`, `SensorId`, `GroupId` |
//! | [`behavior_state`]  | `BehaviorState` (E/R/W/X/S)                |
//! | [`time`]           | `Tick`, `SimClock`                         |
//! | [`rng`]            | `SimRng`, the process-wide deterministic RNG |
//! | [`error`]          | `CoreError`, `CoreResult`                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod behavior_state;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use behavior_state::BehaviorState;
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, GroupId, NodeId, SensorId};
pub use rng::SimRng;
pub use time::{SimClock, Tick};
