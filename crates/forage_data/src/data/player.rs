use super::geometry::{Color, Vec3};
use serde::{Deserialize, Serialize};

/// Transient vertical motion while a player is airborne.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpState {
    pub vertical_velocity: f64,
}

/// A foraging agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub position: Vec3,
    /// Rotation about the vertical axis, in radians. Visual only.
    pub heading: f64,
    pub velocity: Vec3,
    pub color: Color,
    pub score: u32,
    #[serde(default)]
    pub jump: Option<JumpState>,
}

impl Player {
    /// A grounded, motionless player with no score.
    #[must_use]
    pub fn new(id: u32, position: Vec3, heading: f64, color: Color) -> Self {
        Self {
            id,
            position,
            heading,
            velocity: Vec3::ZERO,
            color,
            score: 0,
            jump: None,
        }
    }

    #[must_use]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_some()
    }
}
