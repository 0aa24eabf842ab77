//! Hitscan combat resolution
//!
//! A shot hits the first living target (in list order) whose torso lies
//! within weapon range and inside a narrow cone around the aim direction.
//! There is no ray/mesh intersection; cone membership decides the hit.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::terrain::{Obstacle, ground_point};
use super::weapon::ShotProfile;
use crate::tuning::Tuning;

/// A hostile actor standing on the island
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Horizontal placement; the vertical component is taken from the ground
    pub pos: Vec3,
    pub health: u32,
    pub is_dead: bool,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec3, health: u32) -> Self {
        Self {
            id,
            pos,
            health,
            is_dead: health == 0,
        }
    }

    /// Point a shot has to line up with: ground under the enemy plus torso height
    pub fn aim_point(&self, obstacles: &[Obstacle], tuning: &Tuning) -> Vec3 {
        ground_point(obstacles, self.pos, tuning.torso_offset)
    }
}

/// Result of applying damage to one actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Target already dead, nothing changed
    Ignored,
    Wounded { remaining: u32 },
    /// Health reached zero on this hit
    Killed,
}

/// Subtract health, flipping to dead exactly once
pub fn apply_damage(enemy: &mut Enemy, amount: u32) -> DamageOutcome {
    if enemy.is_dead {
        return DamageOutcome::Ignored;
    }
    enemy.health = enemy.health.saturating_sub(amount);
    if enemy.health == 0 {
        enemy.is_dead = true;
        DamageOutcome::Killed
    } else {
        DamageOutcome::Wounded {
            remaining: enemy.health,
        }
    }
}

/// Pick the target a shot from `origin` along `aim` connects with
///
/// First qualifying target in iteration order wins, not the closest.
pub fn select_target(
    origin: Vec3,
    aim: Vec3,
    shot: &ShotProfile,
    targets: &[Enemy],
    obstacles: &[Obstacle],
    tuning: &Tuning,
) -> Option<usize> {
    let aim = aim.normalize_or_zero();
    targets.iter().position(|enemy| {
        if enemy.is_dead {
            return false;
        }
        let to_target = enemy.aim_point(obstacles, tuning) - origin;
        if to_target.length() > shot.range {
            return false;
        }
        to_target.normalize_or_zero().dot(aim) > tuning.aim_cone_cos
    })
}
