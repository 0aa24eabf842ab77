//! Horizontal collision against static obstacles
//!
//! The mover is a vertical cylinder. An obstacle only blocks sideways motion
//! while the mover's feet are below its top; once the feet clear the top the
//! box is ground (see `terrain::elevation`), not a wall.

use super::terrain::Obstacle;
use crate::tuning::Tuning;

/// Collision cylinder and vertical tolerances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoverShape {
    /// Cylinder radius
    pub radius: f32,
    /// Distance from the tracked (eye) position down to the feet
    pub feet_offset: f32,
    /// Feet this close below a top already count as standing on it
    pub top_epsilon: f32,
}

impl MoverShape {
    pub fn from_tuning(tuning: &Tuning) -> Self {
        Self {
            radius: tuning.actor_radius,
            feet_offset: tuning.collision_feet_offset,
            top_epsilon: tuning.collision_top_epsilon,
        }
    }

    /// Whether feet at `current_y - feet_offset` are on or above the obstacle
    #[inline]
    pub fn clears_top(&self, obstacle: &Obstacle, current_y: f32) -> bool {
        current_y - self.feet_offset >= obstacle.top() - self.top_epsilon
    }
}

impl Default for MoverShape {
    fn default() -> Self {
        Self::from_tuning(&Tuning::default())
    }
}

/// Check a single obstacle: strict containment in the inflated footprint
pub fn blocks(obstacle: &Obstacle, shape: &MoverShape, x: f32, z: f32, current_y: f32) -> bool {
    if shape.clears_top(obstacle, current_y) {
        return false;
    }
    let half = obstacle.footprint_half(shape.radius);
    x > obstacle.center.x - half.x
        && x < obstacle.center.x + half.x
        && z > obstacle.center.z - half.y
        && z < obstacle.center.z + half.y
}

/// Returns true if moving to (x, z) at height `current_y` hits any obstacle side
pub fn is_blocked(obstacles: &[Obstacle], shape: &MoverShape, x: f32, z: f32, current_y: f32) -> bool {
    obstacles
        .iter()
        .any(|obstacle| blocks(obstacle, shape, x, z, current_y))
}
