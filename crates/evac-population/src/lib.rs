//! `evac-population` — agent population: group synthesis and per-agent state.
//!
//! # Crate layout
//!
//! | Module        | Contents                                           |
//! |---------------|-------------------------------------------------------|
//! | [`agent`]     | `Agent`                                             |
//! | [`population`] | `Population`, `PopulationBuilder`, `GroupSizeCounts` |
//! | [`error`]     | `PopulationError`, `PopulationResult<T>`            |

pub mod agent;
pub mod error;
pub mod population;


pub use agent::Agent;
pub use error::{PopulationError, PopulationResult};
pub use population::{GroupSizeCounts, Population, PopulationBuilder};
