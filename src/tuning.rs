//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can ship a JSON override
//! without rebuilding. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure to load or validate tuning or world setup data
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must be within {min}..={max} (got {value})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("weapon `{name}` needs non-zero damage, range and ammo capacity")]
    UnusableWeapon { name: String },
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Movement ===
    /// Walking speed (units/second)
    pub walk_speed: f32,
    /// Running speed (units/second)
    pub run_speed: f32,
    /// Vertical impulse applied on jump (units/second)
    pub jump_velocity: f32,
    /// Downward acceleration (units/second²)
    pub gravity: f32,
    /// Exponential horizontal damping rate (1/second)
    pub friction: f32,
    /// Eye height above the ground when standing
    pub standing_height: f32,
    /// Landing tolerance above the ground
    pub ground_snap: f32,

    // === Collision ===
    /// Radius of the mover's collision cylinder
    pub actor_radius: f32,
    /// Distance from the eye point down to the feet used for side collision
    pub collision_feet_offset: f32,
    /// Feet within this distance below an obstacle top count as standing on it
    pub collision_top_epsilon: f32,

    // === Combat ===
    /// Minimum dot product between aim and target direction for a hit
    pub aim_cone_cos: f32,
    /// Height of the aim point above the target's ground
    pub torso_offset: f32,
    /// Time from reload request to full magazine (ms)
    pub reload_ms: f64,
    /// Recoil accumulator decay (units/second)
    pub recoil_decay: f32,
    /// Camera pitch kick per unit of accumulated recoil per second
    pub recoil_kick_gain: f32,

    // === Loot ===
    /// Maximum eye-to-item distance for a pickup
    pub pickup_radius: f32,
    /// Minimum dot product between look and item direction for a pickup
    pub pickup_facing_cos: f32,
    /// Height of the pickup point above the item's ground
    pub pickup_height: f32,

    // === Safe zone ===
    pub zone_initial_radius: f32,
    /// Radius lost per second
    pub zone_shrink_rate: f32,
    /// Probability that a given tick applies zone damage
    pub zone_damage_chance: f32,
    pub zone_damage_player: u32,
    pub zone_damage_enemy: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 9.0,
            jump_velocity: 6.0,
            gravity: 15.0,
            friction: 10.0,
            standing_height: 2.0,
            ground_snap: 0.1,

            actor_radius: 0.5,
            collision_feet_offset: 1.8,
            collision_top_epsilon: 0.1,

            aim_cone_cos: 0.96,
            torso_offset: 1.0,
            reload_ms: 2000.0,
            recoil_decay: 0.1,
            recoil_kick_gain: 10.0,

            pickup_radius: 3.0,
            pickup_facing_cos: 0.8,
            pickup_height: 0.5,

            zone_initial_radius: 90.0,
            zone_shrink_rate: 0.5,
            zone_damage_chance: 0.05,
            zone_damage_player: 1,
            zone_damage_enemy: 2,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check that every value is usable by the simulation
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("walk_speed", self.walk_speed),
            ("run_speed", self.run_speed),
            ("jump_velocity", self.jump_velocity),
            ("gravity", self.gravity),
            ("friction", self.friction),
            ("standing_height", self.standing_height),
            ("actor_radius", self.actor_radius),
            ("collision_feet_offset", self.collision_feet_offset),
            ("pickup_radius", self.pickup_radius),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive {
                    field,
                    value: f64::from(value),
                });
            }
        }
        if !(self.reload_ms > 0.0) {
            return Err(ConfigError::NotPositive {
                field: "reload_ms",
                value: self.reload_ms,
            });
        }

        let bounded = [
            ("aim_cone_cos", self.aim_cone_cos, -1.0, 1.0),
            ("pickup_facing_cos", self.pickup_facing_cos, -1.0, 1.0),
            ("zone_damage_chance", self.zone_damage_chance, 0.0, 1.0),
            ("ground_snap", self.ground_snap, 0.0, f32::MAX),
            ("collision_top_epsilon", self.collision_top_epsilon, 0.0, f32::MAX),
            ("zone_initial_radius", self.zone_initial_radius, 0.0, f32::MAX),
            ("zone_shrink_rate", self.zone_shrink_rate, 0.0, f32::MAX),
            ("recoil_decay", self.recoil_decay, 0.0, f32::MAX),
        ];
        for (field, value, min, max) in bounded {
            if !(min..=max).contains(&value) {
                return Err(ConfigError::OutOfRange {
                    field,
                    value: f64::from(value),
                    min: f64::from(min),
                    max: f64::from(max),
                });
            }
        }
        Ok(())
    }

    /// Target horizontal speed for the current run state
    #[inline]
    pub fn move_speed(&self, running: bool) -> f32 {
        if running { self.run_speed } else { self.walk_speed }
    }
}
