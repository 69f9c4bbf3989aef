//! HUD read model
//!
//! Everything the DOM layer shows: fuel, money, outcome message, the
//! game-over overlay flag, speed gauges and the store panel.

use serde::Serialize;

use crate::sim::{GameState, UpgradeKind};

/// Gauge color band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedBand {
    /// Within landing limits (green)
    Safe,
    /// Up to 1.5x the limit (yellow)
    Caution,
    /// Beyond that (red)
    Danger,
}

impl SpeedBand {
    /// Vertical limit is inclusive
    pub fn vertical(speed: f32, limit: f32) -> Self {
        let speed = speed.abs();
        if speed <= limit {
            SpeedBand::Safe
        } else if speed <= limit * 1.5 {
            SpeedBand::Caution
        } else {
            SpeedBand::Danger
        }
    }

    /// Horizontal limit is exclusive
    pub fn horizontal(speed: f32, limit: f32) -> Self {
        let speed = speed.abs();
        if speed < limit {
            SpeedBand::Safe
        } else if speed < limit * 1.5 {
            SpeedBand::Caution
        } else {
            SpeedBand::Danger
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpeedReadout {
    pub vertical: f32,
    pub horizontal: f32,
    pub vertical_band: SpeedBand,
    pub horizontal_band: SpeedBand,
    /// Bar lengths in pixels, capped at 100
    pub vertical_gauge: f32,
    pub horizontal_gauge: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreLine {
    pub slot: usize,
    pub name: &'static str,
    pub level: u32,
    pub max_level: u32,
    pub cost: u64,
    pub affordable: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Hud {
    /// Floored for display
    pub fuel: u32,
    pub fuel_capacity: u32,
    pub money: u64,
    pub message: Option<&'static str>,
    pub show_game_over: bool,
    /// Only present while flying
    pub speeds: Option<SpeedReadout>,
    pub store_open: bool,
    pub store: Vec<StoreLine>,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        let craft = &state.craft;
        let speeds = (!state.is_game_over()).then(|| SpeedReadout {
            vertical: craft.vel.y.abs(),
            horizontal: craft.vel.x.abs(),
            vertical_band: SpeedBand::vertical(craft.vel.y, state.config.max_landing_speed),
            horizontal_band: SpeedBand::horizontal(
                craft.vel.x,
                state.config.max_landing_horizontal_speed,
            ),
            vertical_gauge: (craft.vel.y.abs() * 10.0).min(100.0),
            horizontal_gauge: (craft.vel.x.abs() * 20.0).min(100.0),
        });

        let store = UpgradeKind::ALL
            .iter()
            .map(|&kind| {
                let upgrade = state.store.upgrade(kind);
                StoreLine {
                    slot: kind.index(),
                    name: kind.name(),
                    level: upgrade.level,
                    max_level: kind.max_level(),
                    cost: upgrade.cost,
                    affordable: !upgrade.is_maxed() && state.store.money >= upgrade.cost,
                }
            })
            .collect();

        Self {
            fuel: craft.fuel.floor() as u32,
            fuel_capacity: craft.capacity.floor() as u32,
            money: state.store.money,
            message: state.outcome.map(|o| o.message()),
            show_game_over: state.game_over_shown(),
            speeds,
            store_open: state.store.open,
            store,
        }
    }
}
