//! Upgrade store
//!
//! Money and upgrade levels survive restarts. Buying an upgrade returns the
//! new effect so the caller can apply it to the live simulation.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::*;

/// The three upgrade tracks, in store order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UpgradeKind {
    FuelCapacity,
    EnginePower,
    FireRate,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 3] = [
        UpgradeKind::FuelCapacity,
        UpgradeKind::EnginePower,
        UpgradeKind::FireRate,
    ];

    /// Store slot (0..=2) to track
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            UpgradeKind::FuelCapacity => 0,
            UpgradeKind::EnginePower => 1,
            UpgradeKind::FireRate => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::FuelCapacity => "Fuel Capacity",
            UpgradeKind::EnginePower => "Engine Power",
            UpgradeKind::FireRate => "Fire Rate",
        }
    }

    pub fn max_level(&self) -> u32 {
        match self {
            UpgradeKind::FuelCapacity => 5,
            UpgradeKind::EnginePower => 3,
            UpgradeKind::FireRate => 3,
        }
    }

    /// Effect of this track at `level` (1-based)
    pub fn effect(&self, level: u32) -> UpgradeEffect {
        let steps = level.saturating_sub(1);
        match self {
            UpgradeKind::FuelCapacity => {
                UpgradeEffect::FuelCapacity(BASE_FUEL_CAPACITY + 100.0 * steps as f32)
            }
            UpgradeKind::EnginePower => {
                UpgradeEffect::ThrustPower(BASE_THRUST_POWER + 0.05 * steps as f32)
            }
            UpgradeKind::FireRate => {
                UpgradeEffect::ShootCooldown(BASE_SHOOT_COOLDOWN.saturating_sub(3 * steps))
            }
        }
    }
}

/// A simulation parameter change produced by an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum UpgradeEffect {
    /// New tank size (craft is refuelled to it)
    FuelCapacity(f32),
    /// New engine thrust per tick
    ThrustPower(f32),
    /// New ticks between shots (smaller is faster)
    ShootCooldown(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Upgrade {
    pub kind: UpgradeKind,
    /// Price of the next level
    pub cost: u64,
    pub level: u32,
}

impl Upgrade {
    pub fn new(kind: UpgradeKind, cost: u64) -> Self {
        Self {
            kind,
            cost,
            level: 1,
        }
    }

    #[inline]
    pub fn is_maxed(&self) -> bool {
        self.level >= self.kind.max_level()
    }

    pub fn effect(&self) -> UpgradeEffect {
        self.kind.effect(self.level)
    }
}

/// Why a purchase did not go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    StoreClosed,
    InvalidSlot,
    InsufficientFunds,
    MaxLevel,
}

/// Store overlay state plus the player's wallet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub open: bool,
    pub money: u64,
    pub upgrades: [Upgrade; 3],
}

impl Store {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            open: false,
            money: config.starting_money,
            upgrades: [
                Upgrade::new(UpgradeKind::FuelCapacity, config.fuel_upgrade_cost),
                Upgrade::new(UpgradeKind::EnginePower, config.engine_upgrade_cost),
                Upgrade::new(UpgradeKind::FireRate, config.fire_rate_upgrade_cost),
            ],
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn earn(&mut self, amount: u64) {
        self.money = self.money.saturating_add(amount);
    }

    pub fn upgrade(&self, kind: UpgradeKind) -> &Upgrade {
        &self.upgrades[kind.index()]
    }

    pub fn level(&self, kind: UpgradeKind) -> u32 {
        self.upgrade(kind).level
    }

    /// Current value of a track
    pub fn effect(&self, kind: UpgradeKind) -> UpgradeEffect {
        self.upgrade(kind).effect()
    }

    pub fn fuel_capacity(&self) -> f32 {
        match self.effect(UpgradeKind::FuelCapacity) {
            UpgradeEffect::FuelCapacity(capacity) => capacity,
            _ => BASE_FUEL_CAPACITY,
        }
    }

    pub fn thrust_power(&self) -> f32 {
        match self.effect(UpgradeKind::EnginePower) {
            UpgradeEffect::ThrustPower(power) => power,
            _ => BASE_THRUST_POWER,
        }
    }

    pub fn shoot_cooldown(&self) -> u32 {
        match self.effect(UpgradeKind::FireRate) {
            UpgradeEffect::ShootCooldown(ticks) => ticks,
            _ => BASE_SHOOT_COOLDOWN,
        }
    }

    /// Buy the next level in `slot`. On refusal nothing changes.
    pub fn buy(&mut self, slot: usize) -> Result<UpgradeEffect, Refusal> {
        if !self.open {
            return Err(Refusal::StoreClosed);
        }
        let kind = UpgradeKind::from_index(slot).ok_or(Refusal::InvalidSlot)?;
        let money = self.money;
        let upgrade = &mut self.upgrades[kind.index()];
        if upgrade.is_maxed() {
            return Err(Refusal::MaxLevel);
        }
        if money < upgrade.cost {
            return Err(Refusal::InsufficientFunds);
        }

        self.money -= upgrade.cost;
        upgrade.level += 1;
        upgrade.cost = (upgrade.cost as f64 * UPGRADE_COST_GROWTH).floor() as u64;

        log::info!(
            "Bought {} level {} (next cost {}, money left {})",
            kind.name(),
            upgrade.level,
            upgrade.cost,
            self.money
        );
        Ok(upgrade.effect())
    }
}
