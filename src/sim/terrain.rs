//! Elevation field: procedural island terrain plus standable obstacle tops
//!
//! Everything here is pure. The same (x, z) always yields the same height,
//! which lets entity placement, ground contact and aim points agree.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A static axis-aligned box, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Box center (y is the vertical middle, not the base)
    pub center: Vec3,
    /// Full extents: width (x), height (y), depth (z)
    pub size: Vec3,
}

impl Obstacle {
    pub fn new(center: [f32; 3], size: [f32; 3]) -> Self {
        Self {
            center: Vec3::from(center),
            size: Vec3::from(size),
        }
    }

    /// Height of the top surface
    #[inline]
    pub fn top(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    /// Horizontal half-extents grown by `inflate` on every side
    #[inline]
    pub fn footprint_half(&self, inflate: f32) -> Vec2 {
        Vec2::new(self.size.x / 2.0 + inflate, self.size.z / 2.0 + inflate)
    }

    /// Footprint test with inclusive edges (used for standing on top)
    pub fn footprint_contains(&self, x: f32, z: f32) -> bool {
        let half = self.footprint_half(0.0);
        x >= self.center.x - half.x
            && x <= self.center.x + half.x
            && z >= self.center.z - half.y
            && z <= self.center.z + half.y
    }
}

/// Procedural terrain height with no obstacles
///
/// Two octaves of sine/cosine noise, flattened inside the town and
/// dropping steeply past the island radius to form the shoreline.
pub fn terrain_height(x: f32, z: f32) -> f32 {
    let dist = (x * x + z * z).sqrt();
    let town_falloff = ((dist - TOWN_RADIUS) / TOWN_BLEND).clamp(0.0, 1.0);

    let mut noise = (x * 0.05).sin() * (z * 0.05).cos() * 4.0;
    noise += (x * 0.15 + 10.0).sin() * (z * 0.15 + 10.0).cos() * 1.5;

    let mut height = noise * town_falloff;
    if dist > ISLAND_RADIUS {
        height -= (dist - ISLAND_RADIUS) * SHORE_SLOPE;
    }
    height
}

/// Height of standable ground at (x, z): terrain or the highest obstacle top
pub fn elevation(obstacles: &[Obstacle], x: f32, z: f32) -> f32 {
    obstacles
        .iter()
        .filter(|obstacle| obstacle.footprint_contains(x, z))
        .fold(terrain_height(x, z), |height, obstacle| height.max(obstacle.top()))
}

/// Lift a horizontal position onto the ground plus an offset
#[inline]
pub fn ground_point(obstacles: &[Obstacle], pos: Vec3, offset: f32) -> Vec3 {
    Vec3::new(pos.x, elevation(obstacles, pos.x, pos.z) + offset, pos.z)
}
