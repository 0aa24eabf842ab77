//! Weapons and the per-player ammo/reload state machine
//!
//! `Loadout` owns the inventory, the current slot, the shared magazine and
//! the reload timer. Its fields are private so the ammo bound and the
//! current-slot index can only change through the methods below.

use serde::{Deserialize, Serialize};

/// A weapon definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub damage: u32,
    /// Minimum milliseconds between shots
    pub fire_rate_ms: f64,
    /// Upward camera kick per shot
    pub recoil: f32,
    /// Maximum hit distance
    pub range: f32,
    pub ammo_capacity: u32,
    /// Display color (hex), cosmetic only
    pub color: String,
}

impl Weapon {
    /// Starting sidearm
    pub fn pistol() -> Self {
        Self {
            name: "G18".to_string(),
            damage: 15,
            fire_rate_ms: 400.0,
            recoil: 0.02,
            range: 50.0,
            ammo_capacity: 15,
            color: "#94a3b8".to_string(),
        }
    }

    pub fn rifle() -> Self {
        Self {
            name: "AK-47".to_string(),
            damage: 30,
            fire_rate_ms: 120.0,
            recoil: 0.05,
            range: 200.0,
            ammo_capacity: 30,
            color: "#f59e0b".to_string(),
        }
    }

    /// Damage and capacity must be non-zero for the weapon to be usable
    pub fn is_usable(&self) -> bool {
        self.damage > 0 && self.ammo_capacity > 0 && self.range > 0.0
    }

    /// The numbers a shot needs, detached from the loadout borrow
    pub fn shot(&self) -> ShotProfile {
        ShotProfile {
            damage: self.damage,
            range: self.range,
            recoil: self.recoil,
        }
    }
}

/// Per-shot weapon parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotProfile {
    pub damage: u32,
    pub range: f32,
    pub recoil: f32,
}

/// Reload state machine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ReloadState {
    Idle,
    /// Magazine refills once the clock reaches `completes_at_ms`
    Reloading { completes_at_ms: f64 },
}

/// Why a fire request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireRejected {
    /// Minimum inter-shot interval has not elapsed
    Cooldown,
    OutOfAmmo,
    Reloading,
}

/// Why a reload request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadRejected {
    AlreadyReloading,
    MagazineFull,
}

/// Inventory, current slot, magazine and reload timer
#[derive(Debug, Clone, Serialize)]
pub struct Loadout {
    inventory: Vec<Weapon>,
    current: usize,
    ammo: u32,
    reload: ReloadState,
    last_shot_ms: Option<f64>,
}

impl Loadout {
    /// Start with a single weapon and a full magazine
    pub fn new(starting: Weapon) -> Self {
        let ammo = starting.ammo_capacity;
        Self {
            inventory: vec![starting],
            current: 0,
            ammo,
            reload: ReloadState::Idle,
            last_shot_ms: None,
        }
    }

    /// The weapon in hand. The current index is always valid.
    pub fn current(&self) -> &Weapon {
        &self.inventory[self.current]
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn inventory(&self) -> &[Weapon] {
        &self.inventory
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn is_reloading(&self) -> bool {
        matches!(self.reload, ReloadState::Reloading { .. })
    }

    /// Gate and consume one shot
    ///
    /// Checks in order: fire-rate interval, empty magazine, reload in progress.
    pub fn try_fire(&mut self, now_ms: f64) -> Result<ShotProfile, FireRejected> {
        let weapon = self.current();
        if let Some(last) = self.last_shot_ms {
            if now_ms - last < weapon.fire_rate_ms {
                return Err(FireRejected::Cooldown);
            }
        }
        if self.ammo == 0 {
            return Err(FireRejected::OutOfAmmo);
        }
        if self.is_reloading() {
            return Err(FireRejected::Reloading);
        }

        let shot = weapon.shot();
        self.ammo -= 1;
        self.last_shot_ms = Some(now_ms);
        Ok(shot)
    }

    /// Idle -> Reloading, if the magazine is not already full
    pub fn request_reload(&mut self, now_ms: f64, reload_ms: f64) -> Result<(), ReloadRejected> {
        if self.is_reloading() {
            return Err(ReloadRejected::AlreadyReloading);
        }
        if self.ammo == self.current().ammo_capacity {
            return Err(ReloadRejected::MagazineFull);
        }
        self.reload = ReloadState::Reloading {
            completes_at_ms: now_ms + reload_ms,
        };
        Ok(())
    }

    /// Reloading -> Idle once due. Refills to the weapon in hand at that moment.
    ///
    /// Returns true on the tick the reload completes.
    pub fn update(&mut self, now_ms: f64) -> bool {
        match self.reload {
            ReloadState::Reloading { completes_at_ms } if now_ms >= completes_at_ms => {
                self.ammo = self.current().ammo_capacity;
                self.reload = ReloadState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Add a weapon and switch to it with a full magazine
    ///
    /// An in-progress reload keeps running.
    pub fn equip(&mut self, weapon: Weapon) {
        self.ammo = weapon.ammo_capacity;
        self.inventory.push(weapon);
        self.current = self.inventory.len() - 1;
    }

    /// Switch to an existing slot. Out-of-range slots are ignored.
    ///
    /// The shared magazine is clamped to the new capacity.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.inventory.len() || index == self.current {
            return false;
        }
        self.current = index;
        self.ammo = self.ammo.min(self.current().ammo_capacity);
        true
    }

    /// Fill the magazine of the weapon in hand
    pub fn refill(&mut self) {
        self.ammo = self.current().ammo_capacity;
    }
}
