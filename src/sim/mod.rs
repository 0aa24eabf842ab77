//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod combat;
pub mod loot;
pub mod movement;
pub mod setup;
pub mod state;
pub mod terrain;
pub mod tick;
pub mod weapon;
pub mod zone;

pub use combat::{DamageOutcome, Enemy};
pub use loot::{LootContents, LootItem, LootKind};
pub use movement::{Kinematics, MoveIntent};
pub use setup::{EnemySpawn, LootSpawn, WorldSetup};
pub use state::{GameEvent, GamePhase, Message, Player, WorldState};
pub use terrain::{Obstacle, elevation, terrain_height};
pub use tick::{TickInput, tick};
pub use weapon::{FireRejected, Loadout, ReloadRejected, ReloadState, ShotProfile, Weapon};
pub use zone::Zone;
