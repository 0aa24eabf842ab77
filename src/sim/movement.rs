//! Player movement integration
//!
//! One call advances the player's kinematic state by one step: intent,
//! friction and acceleration, per-axis wall resolution, then gravity and
//! ground snap. Axes are resolved independently (X then Z) so a diagonal
//! push into a wall slides along it.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::collision::{MoverShape, is_blocked};
use super::terrain::{Obstacle, elevation};
use crate::tuning::Tuning;

/// Held movement keys for this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub run: bool,
}

impl MoveIntent {
    /// Normalized ground-plane direction (x, z); forward is -Z, right is +X
    pub fn direction(&self) -> Vec2 {
        let x = f32::from(u8::from(self.right)) - f32::from(u8::from(self.left));
        let forward = f32::from(u8::from(self.forward)) - f32::from(u8::from(self.back));
        Vec2::new(x, -forward).normalize_or_zero()
    }
}

/// Position, velocity and ground contact of a moving actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Eye position; feet are `standing_height` below
    pub pos: Vec3,
    pub vel: Vec3,
    pub grounded: bool,
}

impl Kinematics {
    pub fn at(pos: Vec3) -> Self {
        Self {
            pos,
            vel: Vec3::ZERO,
            grounded: false,
        }
    }
}

/// Try to start a jump. Only honored while grounded.
pub fn try_jump(body: &mut Kinematics, tuning: &Tuning) -> bool {
    if !body.grounded {
        return false;
    }
    body.vel.y = tuning.jump_velocity;
    body.grounded = false;
    true
}

/// Advance the body by `dt` seconds against the static world
pub fn integrate(
    body: &mut Kinematics,
    intent: &MoveIntent,
    obstacles: &[Obstacle],
    tuning: &Tuning,
    dt: f32,
) {
    let shape = MoverShape::from_tuning(tuning);

    // Friction then acceleration; terminal speed settles at move_speed
    let dir = intent.direction();
    let accel = tuning.friction * tuning.move_speed(intent.run);
    body.vel.x -= body.vel.x * tuning.friction * dt;
    body.vel.z -= body.vel.z * tuning.friction * dt;
    body.vel.x += dir.x * accel * dt;
    body.vel.z += dir.y * accel * dt;

    // X first, with Z held at its current value
    let next_x = body.pos.x + body.vel.x * dt;
    if is_blocked(obstacles, &shape, next_x, body.pos.z, body.pos.y) {
        body.vel.x = 0.0;
    } else {
        body.pos.x = next_x;
    }

    // Z against the already-resolved X
    let next_z = body.pos.z + body.vel.z * dt;
    if is_blocked(obstacles, &shape, body.pos.x, next_z, body.pos.y) {
        body.vel.z = 0.0;
    } else {
        body.pos.z = next_z;
    }

    // Gravity always applies; landing zeroes it again
    body.vel.y -= tuning.gravity * dt;
    let next_y = body.pos.y + body.vel.y * dt;
    let ground = elevation(obstacles, body.pos.x, body.pos.z);

    if next_y - tuning.standing_height <= ground + tuning.ground_snap && body.vel.y <= 0.0 {
        body.pos.y = ground + tuning.standing_height;
        body.vel.y = 0.0;
        body.grounded = true;
    } else {
        body.pos.y = next_y;
        body.grounded = false;
    }
}

/// Current horizontal speed
#[inline]
pub fn horizontal_speed(body: &Kinematics) -> f32 {
    Vec2::new(body.vel.x, body.vel.z).length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn settle(body: &mut Kinematics, obstacles: &[Obstacle], tuning: &Tuning) {
        for _ in 0..10 {
            integrate(body, &MoveIntent::default(), obstacles, tuning, SIM_DT);
        }
    }

    #[test]
    fn test_direction_normalized() {
        let intent = MoveIntent {
            forward: true,
            right: true,
            ..Default::default()
        };
        let dir = intent.direction();
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!(dir.x > 0.0 && dir.y < 0.0);

        let cancel = MoveIntent {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(cancel.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_lands_and_snaps_to_standing_height() {
        let tuning = Tuning::default();
        let mut body = Kinematics::at(Vec3::new(0.0, 2.05, 0.0));
        integrate(&mut body, &MoveIntent::default(), &[], &tuning, SIM_DT);
        assert!(body.grounded);
        assert_eq!(body.pos.y, 2.0);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn test_falls_when_high() {
        let tuning = Tuning::default();
        let mut body = Kinematics::at(Vec3::new(0.0, 10.0, 0.0));
        integrate(&mut body, &MoveIntent::default(), &[], &tuning, SIM_DT);
        assert!(!body.grounded);
        assert!(body.pos.y < 10.0);
        assert!(body.vel.y < 0.0);
    }

    #[test]
    fn test_walk_reaches_walk_speed() {
        let tuning = Tuning::default();
        let mut body = Kinematics::at(Vec3::new(0.0, 2.0, 0.0));
        let intent = MoveIntent {
            forward: true,
            ..Default::default()
        };
        for _ in 0..120 {
            integrate(&mut body, &intent, &[], &tuning, SIM_DT);
        }
        let speed = horizontal_speed(&body);
        assert!((speed - tuning.walk_speed).abs() < 0.05, "speed {speed}");
        assert!(body.pos.z < -5.0);

        // Release: decays quickly, no drift
        for _ in 0..120 {
            integrate(&mut body, &MoveIntent::default(), &[], &tuning, SIM_DT);
        }
        assert!(horizontal_speed(&body) < 0.01);
    }

    #[test]
    fn test_run_is_faster() {
        let tuning = Tuning::default();
        let mut body = Kinematics::at(Vec3::new(0.0, 2.0, 0.0));
        let intent = MoveIntent {
            right: true,
            run: true,
            ..Default::default()
        };
        for _ in 0..120 {
            integrate(&mut body, &intent, &[], &tuning, SIM_DT);
        }
        assert!((horizontal_speed(&body) - tuning.run_speed).abs() < 0.1);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let tuning = Tuning::default();
        let mut body = Kinematics::at(Vec3::new(0.0, 2.0, 0.0));
        settle(&mut body, &[], &tuning);
        assert!(body.grounded);

        assert!(try_jump(&mut body, &tuning));
        assert_eq!(body.vel.y, tuning.jump_velocity);
        assert!(!body.grounded);
        // Mid-air jump is refused
        assert!(!try_jump(&mut body, &tuning));

        integrate(&mut body, &MoveIntent::default(), &[], &tuning, SIM_DT);
        assert!(body.pos.y > 2.0);
        assert!(!body.grounded);
    }

    #[test]
    fn test_slides_along_wall() {
        let tuning = Tuning::default();
        // Wall spanning x in [-4, 4] at z = -3, one unit deep, top 3.0
        let wall = Obstacle::new([0.0, 1.5, -3.0], [8.0, 3.0, 1.0]);
        let obstacles = [wall];
        let mut body = Kinematics::at(Vec3::new(0.0, 2.0, -1.5));
        settle(&mut body, &obstacles, &tuning);

        let intent = MoveIntent {
            forward: true,
            right: true,
            ..Default::default()
        };
        for _ in 0..60 {
            integrate(&mut body, &intent, &obstacles, &tuning, SIM_DT);
        }
        // Stopped short of the wall face (z = -2.5 - radius) but kept moving in x
        assert!(body.pos.z >= -2.0);
        assert!(body.pos.x > 1.0);
    }

    #[test]
    fn test_stands_on_box_top() {
        let tuning = Tuning::default();
        let block = Obstacle::new([10.0, 2.0, 5.0], [6.0, 4.0, 6.0]);
        let obstacles = [block];
        // Dropped from above onto the block
        let mut body = Kinematics::at(Vec3::new(10.0, 8.0, 5.0));
        for _ in 0..120 {
            integrate(&mut body, &MoveIntent::default(), &obstacles, &tuning, SIM_DT);
        }
        assert!(body.grounded);
        assert!((body.pos.y - (block.top() + tuning.standing_height)).abs() < 1e-5);

        // Walking on top is not blocked by the box itself
        let intent = MoveIntent {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            integrate(&mut body, &intent, &obstacles, &tuning, SIM_DT);
        }
        assert!(body.pos.x > 10.0);
    }
}
