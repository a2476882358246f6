use forage_data::{Player, Vec3};

/// Result of stepping a player toward a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub position: Vec3,
    pub velocity: Vec3,
    /// `None` when the player was already on the target.
    pub heading: Option<f64>,
}

/// Rotation about the vertical axis that faces along `(dx, dz)`.
#[must_use]
pub fn heading_for(dx: f64, dz: f64) -> f64 {
    dx.atan2(dz)
}

/// Moves `position` toward `target` on the horizontal plane by at most
/// `speed * delta`, never past the target. Height is left untouched.
#[must_use]
pub fn step_toward(position: Vec3, target: Vec3, speed: f64, delta: f64) -> Step {
    let dx = target.x - position.x;
    let dz = target.z - position.z;
    let dist = dx.hypot(dz);
    if dist <= f64::EPSILON {
        return Step {
            position,
            velocity: Vec3::ZERO,
            heading: None,
        };
    }

    let travel = (speed * delta).min(dist);
    let (ux, uz) = (dx / dist, dz / dist);
    Step {
        position: Vec3::new(
            position.x + ux * travel,
            position.y,
            position.z + uz * travel,
        ),
        velocity: Vec3::new(ux * travel / delta, 0.0, uz * travel / delta),
        heading: Some(heading_for(dx, dz)),
    }
}

/// Advances an airborne player's vertical arc; lands it on `ground_height`.
pub fn integrate_jump(player: &mut Player, gravity: f64, ground_height: f64, delta: f64) {
    let Some(jump) = player.jump.as_mut() else {
        return;
    };
    jump.vertical_velocity += gravity * delta;
    player.position.y += jump.vertical_velocity * delta;
    if player.position.y <= ground_height {
        player.position.y = ground_height;
        player.jump = None;
    }
}

pub fn clamp_to_arena(position: &mut Vec3, map_size: f64) {
    position.x = position.x.clamp(-map_size, map_size);
    position.z = position.z.clamp(-map_size, map_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use forage_data::{Color, JumpState};

    #[test]
    fn test_step_moves_speed_times_delta() {
        let step = step_toward(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 5.0, 0.1);
        assert!((step.position.x - 0.5).abs() < 1e-12);
        assert_eq!(step.position.z, 0.0);
        assert!((step.velocity.x - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_does_not_overshoot() {
        let step = step_toward(Vec3::ZERO, Vec3::new(0.2, 0.0, 0.0), 5.0, 1.0);
        assert_eq!(step.position.x, 0.2);
    }

    #[test]
    fn test_step_keeps_height() {
        let step = step_toward(Vec3::new(0.0, 2.0, 0.0), Vec3::new(3.0, 0.5, 4.0), 1.0, 1.0);
        assert_eq!(step.position.y, 2.0);
        assert!((step.position.x - 0.6).abs() < 1e-12);
        assert!((step.position.z - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_heading_faces_movement() {
        let east = step_toward(Vec3::ZERO, Vec3::new(1.0, 0.0, 0.0), 1.0, 0.1);
        assert!((east.heading.expect("heading") - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let south = step_toward(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0), 1.0, 0.1);
        assert_eq!(south.heading, Some(0.0));
    }

    #[test]
    fn test_step_on_target_is_still() {
        let step = step_toward(Vec3::new(1.0, 0.5, 1.0), Vec3::new(1.0, 0.5, 1.0), 5.0, 0.1);
        assert_eq!(step.velocity, Vec3::ZERO);
        assert!(step.heading.is_none());
    }

    #[test]
    fn test_jump_lands_on_ground() {
        let mut player = Player::new(0, Vec3::new(0.0, 0.5, 0.0), 0.0, Color::default());
        player.jump = Some(JumpState {
            vertical_velocity: 8.0,
        });
        integrate_jump(&mut player, -25.0, 0.5, 0.05);
        assert!(player.position.y > 0.5);
        assert!(player.is_jumping());

        for _ in 0..100 {
            integrate_jump(&mut player, -25.0, 0.5, 0.05);
        }
        assert_eq!(player.position.y, 0.5);
        assert!(!player.is_jumping());
    }

    #[test]
    fn test_grounded_player_unaffected_by_gravity() {
        let mut player = Player::new(0, Vec3::new(0.0, 0.5, 0.0), 0.0, Color::default());
        integrate_jump(&mut player, -25.0, 0.5, 0.05);
        assert_eq!(player.position.y, 0.5);
    }

    #[test]
    fn test_clamp_to_arena() {
        let mut p = Vec3::new(12.0, 3.0, -9.0);
        clamp_to_arena(&mut p, 8.0);
        assert_eq!(p, Vec3::new(8.0, 3.0, -8.0));
    }
}
