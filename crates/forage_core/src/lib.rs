//! # Forage Core
//!
//! The deterministic simulation engine behind Forage, a small arena game in
//! which players race to eat scattered food.
//!
//! This crate contains:
//! - World construction from a validated configuration and an injectable RNG
//! - The update step: targeting, movement, jump arcs, consumption, clamping
//! - Read-only snapshots for renderers and score displays
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! The update step is a pure function of the current [`World`] and an
//! elapsed time. Per-player planning reads a consistent view of the food at
//! tick start and may run in parallel; claims are then applied sequentially
//! in ascending player id, so a food item is never eaten twice.
//!
//! ## Example
//!
//! ```
//! use forage_core::config::SimConfig;
//! use forage_core::World;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = SimConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let world = World::new(&config.arena, &mut rng).unwrap();
//!
//! let outcome = world.advance(1.0 / 60.0, &config.movement);
//! assert_eq!(outcome.world.tick(), 1);
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Error types for construction and commands
pub mod error;
/// Performance metrics collection and logging
pub mod metrics;
/// Read-only views of the world for renderers
pub mod snapshot;
/// Spawn layout for players and food
pub mod spawn;
/// Per-tick systems (targeting, movement, consumption)
pub mod systems;
/// The update step
pub mod update;
/// World state container
pub mod world;

pub use error::{Result, SimError};
pub use forage_data::{Color, FoodItem, FoodShape, JumpState, Player, Vec3};
pub use metrics::{init_logging, Metrics};
pub use snapshot::WorldSnapshot;
pub use systems::consumption::Claim;
pub use update::{TickOutcome, TickStatus};
pub use world::World;
