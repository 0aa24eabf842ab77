//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world by one step. Every mutation of
//! `WorldState` during play happens inside `tick`, in a fixed order.

use glam::Vec3;

use super::combat::select_target;
use super::loot::{apply_pickup, select_pickup};
use super::movement::{MoveIntent, integrate, try_jump};
use super::state::{GameEvent, GamePhase, WorldState};
use super::weapon::FireRejected;
use super::zone::sample_damage_tick;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, PartialEq)]
pub struct TickInput {
    /// Held movement keys
    pub movement: MoveIntent,
    /// Look direction supplied by the host camera
    pub aim: Vec3,
    /// Trigger held (automatic fire, gated by fire rate)
    pub shoot: bool,
    /// One-shot: jump
    pub jump: bool,
    /// One-shot: start a reload
    pub reload: bool,
    /// One-shot: pick up what the player is looking at
    pub interact: bool,
    /// One-shot: switch to an inventory slot
    pub select_weapon: Option<usize>,
    /// One-shot: pause toggle
    pub pause: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            movement: MoveIntent::default(),
            aim: Vec3::NEG_Z,
            shoot: false,
            jump: false,
            reload: false,
            interact: false,
            select_weapon: None,
            pause: false,
        }
    }
}

impl TickInput {
    /// Clear one-shot triggers after they have been consumed
    pub fn clear_triggers(&mut self) {
        self.jump = false;
        self.reload = false;
        self.interact = false;
        self.select_weapon = None;
        self.pause = false;
    }
}

/// Advance the game state by one fixed timestep
///
/// Events are appended; the caller clears `state.events` once per host frame.
pub fn tick(state: &mut WorldState, input: &TickInput, dt: f32) {
    state.camera_kick = 0.0;

    // Handle pause toggle
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                state.events.push(GameEvent::Paused);
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
                state.events.push(GameEvent::Resumed);
            }
            _ => {}
        }
    }

    // Only active play advances the world
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    state.time_ms += f64::from(dt) * 1000.0;
    let now = state.time_ms;

    // Scheduled reload completion
    if state.player.loadout.update(now) {
        state.events.push(GameEvent::ReloadFinished);
    }

    if let Some(index) = input.select_weapon {
        if state.player.loadout.select(index) {
            state.events.push(GameEvent::WeaponSelected { index });
        }
    }

    if input.jump && try_jump(&mut state.player.body, &state.tuning) {
        state.events.push(GameEvent::Jumped);
    }

    if input.interact {
        interact(state, input.aim);
    }

    if input.reload {
        reload(state);
    }

    integrate(
        &mut state.player.body,
        &input.movement,
        &state.setup.obstacles,
        &state.tuning,
        dt,
    );

    if input.shoot {
        fire(state, input.aim);
    }

    zone_step(state, dt);

    // Recoil kicks the camera and bleeds off slowly
    if state.player.recoil > 0.0 {
        state.camera_kick = state.player.recoil * dt * state.tuning.recoil_kick_gain;
        state.player.recoil = (state.player.recoil - dt * state.tuning.recoil_decay).max(0.0);
    }

    state.expire_messages();
}

/// Fire the weapon in hand along `aim`
fn fire(state: &mut WorldState, aim: Vec3) {
    let now = state.time_ms;
    let shot = match state.player.loadout.try_fire(now) {
        Ok(shot) => shot,
        Err(FireRejected::OutOfAmmo) => {
            state.push_message("Out of ammo! Press R");
            state.events.push(GameEvent::OutOfAmmo);
            return;
        }
        Err(_) => return,
    };

    state.player.recoil += shot.recoil;
    let target = select_target(
        state.player.eye(),
        aim,
        &shot,
        &state.enemies,
        state.obstacles(),
        &state.tuning,
    );
    let hit = target.map(|index| state.enemies[index].id);
    if let Some(index) = target {
        state.damage_enemy(index, shot.damage);
    }
    state.events.push(GameEvent::ShotFired { hit });
}

/// Idle -> Reloading, refused silently when full or already reloading
fn reload(state: &mut WorldState) {
    let now = state.time_ms;
    let duration = state.tuning.reload_ms;
    if state.player.loadout.request_reload(now, duration).is_ok() {
        state.push_message("Reloading...");
        state.events.push(GameEvent::ReloadStarted);
        log::debug!("Reload started at {now:.0} ms");
    }
}

/// Pick up at most one item the player is looking at
fn interact(state: &mut WorldState, look: Vec3) {
    let Some(index) = select_pickup(
        state.player.eye(),
        look,
        &state.loot,
        state.obstacles(),
        &state.tuning,
    ) else {
        return;
    };

    let item = state.loot.remove(index);
    let kind = item.contents.kind();
    let message = apply_pickup(&mut state.player, item.contents);
    log::debug!("Picked up loot {} ({:?})", item.id, kind);
    state.push_message(message);
    state.events.push(GameEvent::LootPicked { id: item.id, kind });
}

/// Shrink the zone and, on sampled ticks, hurt everyone outside it
fn zone_step(state: &mut WorldState, dt: f32) {
    state.zone.advance(dt);

    let chance = state.tuning.zone_damage_chance;
    if !sample_damage_tick(state.rng_mut(), chance) {
        return;
    }

    let zone = state.zone;
    // Dead actors take no zone damage
    let outside: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| !enemy.is_dead && zone.is_outside(enemy.pos))
        .map(|(index, _)| index)
        .collect();
    let player_hit = !state.player.is_dead() && zone.is_outside(state.player.eye());

    if outside.is_empty() && !player_hit {
        return;
    }
    state.events.push(GameEvent::ZoneDamage {
        player_hit,
        enemies_hit: u32::try_from(outside.len()).unwrap_or(u32::MAX),
    });

    let enemy_damage = state.tuning.zone_damage_enemy;
    for index in outside {
        state.damage_enemy(index, enemy_damage);
    }

    if player_hit {
        state.push_message("OUTSIDE SAFE ZONE!");
        let player_damage = state.tuning.zone_damage_player;
        state.damage_player(player_damage);
    }
}
