//! Forage: an arena in which players race to eat scattered food.
//!
//! The simulation itself lives in `forage_core`; this crate adds the
//! session driver that a shell (renderer, UI or the headless binary) uses to
//! start, stop and reset runs.

pub mod app;

pub use forage_core::config::SimConfig;
pub use forage_core::{Claim, SimError, World, WorldSnapshot};
