//! Shrinking safe zone
//!
//! A circle around the map center that shrinks at a constant rate until it
//! vanishes. Damage outside it is applied on randomly sampled ticks drawn
//! from the session's seeded RNG.

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::horizontal_distance_from_center;

/// Safe zone radius and shrink rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Current radius, never negative, never grows
    pub radius: f32,
    /// Radius lost per second
    pub shrink_rate: f32,
}

impl Zone {
    pub fn new(radius: f32, shrink_rate: f32) -> Self {
        Self {
            radius: radius.max(0.0),
            shrink_rate: shrink_rate.max(0.0),
        }
    }

    /// Shrink by one step, stopping at zero
    pub fn advance(&mut self, dt: f32) {
        if !self.is_closed() {
            self.radius = (self.radius - self.shrink_rate * dt).max(0.0);
        }
    }

    /// Terminal state: nothing left to shrink
    pub fn is_closed(&self) -> bool {
        self.radius <= 0.0
    }

    /// Whether a position is beyond the radius on the ground plane
    pub fn is_outside(&self, pos: Vec3) -> bool {
        horizontal_distance_from_center(pos) > self.radius
    }
}

/// One draw per tick: does zone damage land this tick?
pub fn sample_damage_tick<R: Rng>(rng: &mut R, chance: f32) -> bool {
    rng.random::<f32>() < chance
}
