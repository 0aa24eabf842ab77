//! Fixed startup content for a session
//!
//! Obstacles, enemy spawns and the loot list are defined once and never
//! change during a session. `restart` rebuilds the world from this.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::loot::LootContents;
use super::terrain::Obstacle;
use super::weapon::Weapon;
use crate::consts::*;
use crate::tuning::ConfigError;

/// Where an enemy starts and how much health it has
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub pos: [f32; 3],
    #[serde(default = "default_enemy_health")]
    pub health: u32,
}

fn default_enemy_health() -> u32 {
    ENEMY_MAX_HEALTH
}

/// A loot item placed at session start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LootSpawn {
    pub name: String,
    pub pos: [f32; 3],
    pub contents: LootContents,
}

/// Everything needed to build the initial world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSetup {
    pub obstacles: Vec<Obstacle>,
    pub enemies: Vec<EnemySpawn>,
    pub loot: Vec<LootSpawn>,
    /// Player eye position at spawn
    pub player_spawn: [f32; 3],
    pub player_max_health: u32,
    pub starting_weapon: Weapon,
}

impl Default for WorldSetup {
    /// The island: a small town of boxes and walls around the center
    fn default() -> Self {
        Self {
            obstacles: vec![
                // Concrete block
                Obstacle::new([10.0, 2.0, 5.0], [6.0, 4.0, 6.0]),
                // Tower base
                Obstacle::new([-15.0, 4.0, 10.0], [4.0, 8.0, 4.0]),
                // Crate stack
                Obstacle::new([-5.0, 2.0, -15.0], [3.0, 4.0, 3.0]),
                // Walls
                Obstacle::new([20.0, 1.5, -5.0], [8.0, 3.0, 1.0]),
                Obstacle::new([22.0, 1.5, 5.0], [1.0, 3.0, 8.0]),
            ],
            enemies: [
                [10.0, 1.0, 10.0],
                [-15.0, 1.0, -20.0],
                [20.0, 1.0, -10.0],
                [-5.0, 1.0, 25.0],
            ]
            .into_iter()
            .map(|pos| EnemySpawn {
                pos,
                health: ENEMY_MAX_HEALTH,
            })
            .collect(),
            loot: vec![
                LootSpawn {
                    name: "AK-47".to_string(),
                    pos: [5.0, 0.5, 5.0],
                    contents: LootContents::Weapon(Weapon::rifle()),
                },
                LootSpawn {
                    name: "Medkit".to_string(),
                    pos: [-10.0, 0.5, -5.0],
                    contents: LootContents::Medkit { amount: 50 },
                },
                LootSpawn {
                    name: "Ammo Pack".to_string(),
                    pos: [2.0, 0.5, 8.0],
                    contents: LootContents::AmmoPack { amount: 30 },
                },
            ],
            player_spawn: PLAYER_SPAWN,
            player_max_health: PLAYER_MAX_HEALTH,
            starting_weapon: Weapon::pistol(),
        }
    }
}

impl WorldSetup {
    /// Parse a (possibly partial) setup and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let setup: Self = serde_json::from_str(json)?;
        setup.validate()?;
        Ok(setup)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.player_max_health == 0 {
            return Err(ConfigError::NotPositive {
                field: "player_max_health",
                value: 0.0,
            });
        }
        if !self.starting_weapon.is_usable() {
            return Err(ConfigError::UnusableWeapon {
                name: self.starting_weapon.name.clone(),
            });
        }
        for spawn in &self.loot {
            if let LootContents::Weapon(weapon) = &spawn.contents {
                if !weapon.is_usable() {
                    return Err(ConfigError::UnusableWeapon {
                        name: weapon.name.clone(),
                    });
                }
            }
        }
        for obstacle in &self.obstacles {
            if obstacle.size.min_element() <= 0.0 {
                return Err(ConfigError::NotPositive {
                    field: "obstacle size",
                    value: f64::from(obstacle.size.min_element()),
                });
            }
        }
        Ok(())
    }

    pub fn player_spawn(&self) -> Vec3 {
        Vec3::from(self.player_spawn)
    }
}
