//! Island Royale - simulation core for a browser battle-royale prototype
//!
//! Core modules:
//! - `sim`: Deterministic simulation (terrain, movement, combat, loot, zone, game state)
//! - `session`: Fixed-timestep driver that turns host frames into sim ticks
//! - `platform`: Host input mapping and browser bindings
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use tuning::{ConfigError, Tuning};

use glam::{Vec2, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, the rate the zone sampling was tuned for)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Host frame deltas above this are clamped (tab switches, breakpoints)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Terrain shape
    pub const TOWN_RADIUS: f32 = 20.0;
    /// Distance over which the flat town blends into full noise
    pub const TOWN_BLEND: f32 = 20.0;
    pub const ISLAND_RADIUS: f32 = 85.0;
    /// Height lost per unit of distance beyond the island radius
    pub const SHORE_SLOPE: f32 = 1.5;

    /// Player spawns at the map center, eye height above the ground
    pub const PLAYER_SPAWN: [f32; 3] = [0.0, 2.0, 0.0];
    pub const PLAYER_MAX_HEALTH: u32 = 100;
    pub const ENEMY_MAX_HEALTH: u32 = 100;

    /// Transient HUD messages
    pub const MESSAGE_TTL_MS: f64 = 3000.0;
    pub const MAX_MESSAGES: usize = 5;
}

/// Horizontal (XZ-plane) projection of a world position
#[inline]
pub fn horizontal(pos: Vec3) -> Vec2 {
    Vec2::new(pos.x, pos.z)
}

/// Distance from the map center measured on the ground plane
#[inline]
pub fn horizontal_distance_from_center(pos: Vec3) -> f32 {
    horizontal(pos).length()
}
