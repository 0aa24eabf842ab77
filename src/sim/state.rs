//! Game state and core simulation types
//!
//! `WorldState` is the only mutable store. Hosts read it as a snapshot after
//! each tick; all writes go through `tick` and the damage entry points here.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::combat::{DamageOutcome, Enemy, apply_damage};
use super::loot::{LootItem, LootKind};
use super::movement::Kinematics;
use super::setup::WorldSetup;
use super::terrain::Obstacle;
use super::weapon::{Loadout, Weapon};
use super::zone::Zone;
use crate::consts::*;
use crate::tuning::Tuning;

/// Session lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Start screen, nothing simulates
    Ready,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Player died; only a restart leaves this phase
    GameOver,
}

/// The player-controlled actor
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub body: Kinematics,
    pub health: u32,
    pub max_health: u32,
    pub loadout: Loadout,
    /// Kills this session
    pub score: u32,
    /// Accumulated camera kick from recent shots
    pub recoil: f32,
}

impl Player {
    pub fn new(eye: Vec3, max_health: u32, weapon: Weapon) -> Self {
        Self {
            body: Kinematics::at(eye),
            health: max_health,
            max_health,
            loadout: Loadout::new(weapon),
            score: 0,
            recoil: 0.0,
        }
    }

    #[inline]
    pub fn eye(&self) -> Vec3 {
        self.body.pos
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.health == 0
    }
}

/// Transient HUD notification; no effect on simulation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub text: String,
    pub expires_at_ms: f64,
}

/// Things that happened during the last tick, for audio/effects hosts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    Started,
    Paused,
    Resumed,
    Jumped,
    /// A round left the barrel; `hit` is the enemy id if one was struck
    ShotFired { hit: Option<u32> },
    EnemyEliminated { id: u32 },
    OutOfAmmo,
    ReloadStarted,
    ReloadFinished,
    WeaponSelected { index: usize },
    LootPicked { id: u32, kind: LootKind },
    /// Zone damage landed this tick
    ZoneDamage { player_hit: bool, enemies_hit: u32 },
    GameOver { score: u32 },
}

/// Complete world state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Virtual clock in milliseconds, advanced only while playing
    pub time_ms: f64,
    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Loot still on the ground, in spawn order
    pub loot: Vec<LootItem>,
    pub zone: Zone,
    /// Active HUD messages, oldest first
    pub messages: Vec<Message>,
    /// Events raised since the host last advanced a frame
    pub events: Vec<GameEvent>,
    /// Camera pitch to apply this frame from recoil
    pub camera_kick: f32,
    #[serde(skip)]
    pub tuning: Tuning,
    #[serde(skip)]
    pub(crate) setup: WorldSetup,
    #[serde(skip)]
    rng: Pcg32,
    /// Next entity ID
    #[serde(skip)]
    next_id: u32,
}

impl WorldState {
    /// The default island with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Tuning::default(), WorldSetup::default())
    }

    /// Build the initial world from explicit tuning and setup
    pub fn with_config(seed: u64, tuning: Tuning, setup: WorldSetup) -> Self {
        let player = Player::new(
            setup.player_spawn(),
            setup.player_max_health,
            setup.starting_weapon.clone(),
        );
        let zone = Zone::new(tuning.zone_initial_radius, tuning.zone_shrink_rate);
        let mut state = Self {
            seed,
            phase: GamePhase::Ready,
            time_ticks: 0,
            time_ms: 0.0,
            player,
            enemies: Vec::new(),
            loot: Vec::new(),
            zone,
            messages: Vec::new(),
            events: Vec::new(),
            camera_kick: 0.0,
            tuning,
            setup,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        };
        state.spawn_entities();
        state
    }

    fn spawn_entities(&mut self) {
        let enemy_spawns = self.setup.enemies.clone();
        for spawn in enemy_spawns {
            let id = self.next_entity_id();
            self.enemies
                .push(Enemy::new(id, Vec3::from(spawn.pos), spawn.health));
        }
        let loot_spawns = self.setup.loot.clone();
        for spawn in loot_spawns {
            let id = self.next_entity_id();
            self.loot.push(LootItem {
                id,
                name: spawn.name,
                pos: Vec3::from(spawn.pos),
                contents: spawn.contents,
            });
        }
    }

    /// Reset every entity, the zone, the clock and the RNG to the initial configuration
    pub fn restart(&mut self) {
        let tuning = self.tuning.clone();
        let setup = self.setup.clone();
        *self = Self::with_config(self.seed, tuning, setup);
        log::info!("Session reset (seed {})", self.seed);
    }

    /// Leave the start screen
    pub fn start(&mut self) {
        if self.phase == GamePhase::Ready {
            self.phase = GamePhase::Playing;
            self.events.push(GameEvent::Started);
            log::info!("Session started (seed {})", self.seed);
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Static obstacles for this session
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.setup.obstacles
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Show a HUD message. Repeating the newest message only extends it.
    pub fn push_message(&mut self, text: impl Into<String>) {
        let text = text.into();
        let expires_at_ms = self.time_ms + MESSAGE_TTL_MS;
        if let Some(last) = self.messages.last_mut() {
            if last.text == text {
                last.expires_at_ms = expires_at_ms;
                return;
            }
        }
        self.messages.push(Message {
            text,
            expires_at_ms,
        });
        if self.messages.len() > MAX_MESSAGES {
            let excess = self.messages.len() - MAX_MESSAGES;
            self.messages.drain(..excess);
        }
    }

    /// Drop messages whose lifetime has passed
    pub fn expire_messages(&mut self) {
        let now = self.time_ms;
        self.messages.retain(|m| m.expires_at_ms > now);
    }

    /// Damage one enemy. The only place enemy health changes.
    ///
    /// A kill awards the player one point exactly once, whatever caused it.
    pub fn damage_enemy(&mut self, index: usize, amount: u32) -> DamageOutcome {
        let Some(enemy) = self.enemies.get_mut(index) else {
            return DamageOutcome::Ignored;
        };
        let outcome = apply_damage(enemy, amount);
        if outcome == DamageOutcome::Killed {
            let id = enemy.id;
            self.player.score += 1;
            self.events.push(GameEvent::EnemyEliminated { id });
            self.push_message("Enemy Eliminated!");
            log::debug!("Enemy {} eliminated, score {}", id, self.player.score);
        }
        outcome
    }

    /// Damage the player. Returns true on the call that ends the game.
    pub fn damage_player(&mut self, amount: u32) -> bool {
        if self.is_game_over() || self.player.is_dead() {
            return false;
        }
        self.player.health = self.player.health.saturating_sub(amount);
        if self.player.is_dead() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.player.score,
            });
            log::info!("Game over with score {}", self.player.score);
            return true;
        }
        false
    }

    /// Enemies still standing
    pub fn alive_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| !e.is_dead).count()
    }
}
