//! `evac-observers` — sensor node placement and the noisy binomial
//! measurement model that anonymizes agent locations into per-node counts.
//!
//! # Crate layout
//!
//! | Module    | Contents                                              |
//! |-----------|--------------------------------------------------------|
//! | [`sensors`] | [`Observers`], [`ObserversBuilder`]                   |
//! | [`error`]   | `ObserversError`, `ObserversResult`                   |
//!
//! An `Observers` is the only channel through which the estimator ever sees
//! the population: it never sees agent identities, only anonymous counts at
//! a fixed set of sensor nodes, each independently thinned from the true
//! count by detection probability `P_b`.

pub mod error;
pub mod sensors;


pub use error::{ObserversError, ObserversResult};
pub use sensors::{Observers, ObserversBuilder};
