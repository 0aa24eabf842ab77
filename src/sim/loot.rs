//! Loot pickup eligibility and effects
//!
//! An item can be taken when the player's eye is close to its pickup point
//! and looking roughly at it. The first eligible item in list order wins.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::state::Player;
use super::terrain::{Obstacle, ground_point};
use super::weapon::Weapon;
use crate::tuning::Tuning;

/// What an item gives when picked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LootContents {
    /// Added to the inventory and equipped
    Weapon(Weapon),
    /// Restores health, capped at max
    Medkit { amount: u32 },
    /// Refills the current magazine; the amount is informational only
    AmmoPack { amount: u32 },
}

/// Payload-free tag for events and HUD icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LootKind {
    Weapon,
    Medkit,
    AmmoPack,
}

impl LootContents {
    pub fn kind(&self) -> LootKind {
        match self {
            LootContents::Weapon(_) => LootKind::Weapon,
            LootContents::Medkit { .. } => LootKind::Medkit,
            LootContents::AmmoPack { .. } => LootKind::AmmoPack,
        }
    }
}

/// A loot entity lying on the island
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootItem {
    pub id: u32,
    pub name: String,
    pub pos: Vec3,
    pub contents: LootContents,
}

impl LootItem {
    /// Ground under the item plus the pickup height
    pub fn pickup_point(&self, obstacles: &[Obstacle], tuning: &Tuning) -> Vec3 {
        ground_point(obstacles, self.pos, tuning.pickup_height)
    }
}

/// Index of the item the player would pick up, if any
pub fn select_pickup(
    eye: Vec3,
    look: Vec3,
    items: &[LootItem],
    obstacles: &[Obstacle],
    tuning: &Tuning,
) -> Option<usize> {
    let look = look.normalize_or_zero();
    items.iter().position(|item| {
        let to_item = item.pickup_point(obstacles, tuning) - eye;
        to_item.length() < tuning.pickup_radius
            && to_item.normalize_or_zero().dot(look) > tuning.pickup_facing_cos
    })
}

/// Apply a picked-up item to the player, returning the HUD message
pub fn apply_pickup(player: &mut Player, contents: LootContents) -> String {
    match contents {
        LootContents::Weapon(weapon) => {
            let message = format!("Picked up {}", weapon.name);
            player.loadout.equip(weapon);
            message
        }
        LootContents::Medkit { amount } => {
            player.health = player.health.saturating_add(amount).min(player.max_health);
            "Used Medkit".to_string()
        }
        LootContents::AmmoPack { .. } => {
            player.loadout.refill();
            "Ammo Refilled".to_string()
        }
    }
}
