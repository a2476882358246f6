//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `forage.toml` file. Every section has defaults, so a file only needs
//! the values it wants to change.
//!
//! ## Example `forage.toml`
//!
//! ```toml
//! target_fps = 60
//! time_limit_secs = 120.0
//!
//! [arena]
//! player_count = 4
//! food_count = 100
//! map_size = 20.0
//! seed = 42
//!
//! [movement]
//! speed = 5.0
//! pickup_radius = 0.5
//! ```

use crate::error::{ensure_config, Result};
use serde::{Deserialize, Serialize};

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 8;
pub const MAX_FOOD: usize = 500;

/// Height at which players and food rest on the arena floor.
pub const DEFAULT_GROUND_HEIGHT: f64 = 0.5;

/// Arena layout and population.
///
/// Counts are fixed for the whole run; changing them means building a new
/// [`crate::World`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ArenaConfig {
    pub player_count: usize,
    pub food_count: usize,
    /// Half-extent of the square arena on both horizontal axes.
    pub map_size: f64,
    /// Keeps spawned food this far inside the boundary.
    pub food_margin: f64,
    /// Players spawn on a circle of radius `spawn_ring_factor * map_size`.
    pub spawn_ring_factor: f64,
    pub ground_height: f64,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            player_count: 4,
            food_count: 100,
            map_size: 20.0,
            food_margin: 1.0,
            spawn_ring_factor: 0.75,
            ground_height: DEFAULT_GROUND_HEIGHT,
            seed: None,
        }
    }
}

impl ArenaConfig {
    /// Validates counts and arena geometry.
    ///
    /// Out-of-range counts are rejected rather than clamped so the caller can
    /// report the problem.
    pub fn validate(&self) -> Result<()> {
        ensure_config!(
            (MIN_PLAYERS..=MAX_PLAYERS).contains(&self.player_count),
            "Player count {} outside [{MIN_PLAYERS}, {MAX_PLAYERS}]",
            self.player_count
        );
        ensure_config!(
            self.food_count <= MAX_FOOD,
            "Food count {} too large (max {MAX_FOOD})",
            self.food_count
        );
        validate_map_size(self.map_size)?;
        ensure_config!(
            self.food_margin.is_finite() && self.food_margin >= 0.0,
            "Food margin must be finite and non-negative"
        );
        ensure_config!(
            self.spawn_ring_factor.is_finite() && (0.0..=1.0).contains(&self.spawn_ring_factor),
            "Spawn ring factor must be in [0.0, 1.0]"
        );
        ensure_config!(
            self.ground_height.is_finite(),
            "Ground height must be finite"
        );
        Ok(())
    }
}

pub(crate) fn validate_map_size(map_size: f64) -> Result<()> {
    ensure_config!(
        map_size.is_finite() && map_size > 0.0,
        "Map size must be positive and finite, got {map_size}"
    );
    Ok(())
}

/// Tuning for the update step. Shared by every player.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MovementConfig {
    /// Horizontal units per second.
    pub speed: f64,
    /// Horizontal distance below which a player eats its target.
    pub pickup_radius: f64,
    /// Vertical acceleration during a jump. Negative.
    pub gravity: f64,
    /// Initial upward velocity handed out by the shell's jump input.
    pub jump_velocity: f64,
    /// Larger frame times are truncated to this many seconds.
    pub max_delta: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            pickup_radius: 0.5,
            gravity: -25.0,
            jump_velocity: 8.0,
            max_delta: 0.1,
        }
    }
}

impl MovementConfig {
    pub fn validate(&self) -> Result<()> {
        ensure_config!(
            self.speed.is_finite() && self.speed > 0.0,
            "Speed must be positive"
        );
        ensure_config!(
            self.pickup_radius.is_finite() && self.pickup_radius > 0.0,
            "Pickup radius must be positive"
        );
        ensure_config!(
            self.gravity.is_finite() && self.gravity < 0.0,
            "Gravity must be negative"
        );
        ensure_config!(
            self.jump_velocity.is_finite() && self.jump_velocity > 0.0,
            "Jump velocity must be positive"
        );
        ensure_config!(
            self.max_delta.is_finite() && self.max_delta > 0.0,
            "Max delta must be positive"
        );
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub arena: ArenaConfig,
    pub movement: MovementConfig,
    pub target_fps: u64,
    /// Session length enforced by the shell, not by the update step.
    pub time_limit_secs: Option<f64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            movement: MovementConfig::default(),
            target_fps: 60,
            time_limit_secs: None,
        }
    }
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violation as [`crate::SimError::InvalidConfiguration`].
    pub fn validate(&self) -> Result<()> {
        self.arena.validate()?;
        self.movement.validate()?;

        ensure_config!(self.target_fps > 0, "Target FPS must be positive");
        ensure_config!(self.target_fps <= 240, "Target FPS too high (max 240)");
        if let Some(limit) = self.time_limit_secs {
            ensure_config!(
                limit.is_finite() && limit > 0.0,
                "Time limit must be positive"
            );
        }
        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of the gameplay-relevant sections, for comparing runs in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.arena).as_bytes());
        hasher.update(format!("{:?}", self.movement).as_bytes());
        hex::encode(hasher.finalize())
    }
}
