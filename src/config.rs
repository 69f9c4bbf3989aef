//! Simulation configuration
//!
//! Every tuning value the simulation reads. Defaults come from `consts`;
//! a JSON file may override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::consts::*;
use crate::error::InitError;

/// A landing pad placement (top-left corner and size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadConfig {
    pub x: f32,
    pub y: f32,
    #[serde(default = "default_pad_width")]
    pub width: f32,
    #[serde(default = "default_pad_height")]
    pub height: f32,
}

fn default_pad_width() -> f32 {
    PAD_WIDTH
}

fn default_pad_height() -> f32 {
    PAD_HEIGHT
}

impl PadConfig {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Simulation tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Only used by the camera, never by the simulation
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Craft physics ===
    pub gravity: f32,
    pub horizontal_speed: f32,
    pub horizontal_drag: f32,
    pub fuel_consumption: f32,
    pub craft_width: f32,
    pub craft_height: f32,
    pub craft_start_x: f32,
    pub craft_start_y: f32,

    // === Landing ===
    pub max_landing_speed: f32,
    pub max_landing_horizontal_speed: f32,
    pub pads: Vec<PadConfig>,

    // === Hostiles ===
    pub max_hostiles: usize,
    pub hostile_spawn_chance: f64,
    pub hostile_fire_chance: f64,
    pub hostile_wander_chance: f64,
    pub hostile_fire_range: f32,
    pub hostile_max_speed: f32,
    /// Fraction of world height hostiles patrol (from the top)
    pub hostile_zone_fraction: f32,
    pub hostile_bounty: u64,

    // === Projectiles ===
    pub player_projectile_speed: f32,
    pub hostile_projectile_speed: f32,

    // === State machine ===
    pub game_over_delay_ticks: u32,

    // === Store ===
    pub fuel_upgrade_cost: u64,
    pub engine_upgrade_cost: u64,
    pub fire_rate_upgrade_cost: u64,
    pub starting_money: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            horizontal_speed: HORIZONTAL_SPEED,
            horizontal_drag: HORIZONTAL_DRAG,
            fuel_consumption: FUEL_CONSUMPTION_RATE,
            craft_width: CRAFT_WIDTH,
            craft_height: CRAFT_HEIGHT,
            craft_start_x: CRAFT_START_X,
            craft_start_y: CRAFT_START_Y,

            max_landing_speed: MAX_LANDING_SPEED,
            max_landing_horizontal_speed: MAX_LANDING_HORIZONTAL_SPEED,
            pads: default_pads(WORLD_WIDTH, WORLD_HEIGHT),

            max_hostiles: MAX_HOSTILES,
            hostile_spawn_chance: HOSTILE_SPAWN_CHANCE,
            hostile_fire_chance: HOSTILE_FIRE_CHANCE,
            hostile_wander_chance: HOSTILE_WANDER_CHANCE,
            hostile_fire_range: HOSTILE_FIRE_RANGE,
            hostile_max_speed: HOSTILE_MAX_SPEED,
            hostile_zone_fraction: HOSTILE_ZONE_FRACTION,
            hostile_bounty: HOSTILE_BOUNTY,

            player_projectile_speed: PLAYER_PROJECTILE_SPEED,
            hostile_projectile_speed: HOSTILE_PROJECTILE_SPEED,

            game_over_delay_ticks: GAME_OVER_DELAY_TICKS,

            fuel_upgrade_cost: FUEL_UPGRADE_COST,
            engine_upgrade_cost: ENGINE_UPGRADE_COST,
            fire_rate_upgrade_cost: FIRE_RATE_UPGRADE_COST,
            starting_money: 0,
        }
    }
}

/// Main pad centered in the world, plus one low pad west and one high pad east
fn default_pads(world_width: f32, world_height: f32) -> Vec<PadConfig> {
    vec![
        PadConfig {
            x: world_width / 2.0 - PAD_WIDTH / 2.0,
            y: world_height - 250.0,
            width: PAD_WIDTH,
            height: PAD_HEIGHT,
        },
        PadConfig {
            x: 300.0,
            y: world_height - 200.0,
            width: PAD_WIDTH,
            height: PAD_HEIGHT,
        },
        PadConfig {
            x: 1950.0,
            y: world_height - 320.0,
            width: PAD_WIDTH,
            height: PAD_HEIGHT,
        },
    ]
}

impl SimConfig {
    /// Parse a (possibly partial) JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, InitError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, InitError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<(), InitError> {
        let dims_ok = |w: f32, h: f32| w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0;
        if !dims_ok(self.world_width, self.world_height) {
            return Err(InitError::InvalidWorld {
                width: self.world_width,
                height: self.world_height,
            });
        }
        if !dims_ok(self.viewport_width, self.viewport_height) {
            return Err(InitError::InvalidWorld {
                width: self.viewport_width,
                height: self.viewport_height,
            });
        }

        if !dims_ok(self.craft_width, self.craft_height) {
            return Err(InitError::InvalidCraft {
                reason: "craft size must be positive",
            });
        }
        if self.craft_width > self.world_width {
            return Err(InitError::InvalidCraft {
                reason: "craft is wider than the world",
            });
        }
        if self.craft_start_y + self.craft_height / 2.0 >= self.world_height {
            return Err(InitError::InvalidCraft {
                reason: "craft starts below the surface",
            });
        }

        if self.pads.is_empty() {
            return Err(InitError::NoLandingPads);
        }
        let world = Rect::new(0.0, 0.0, self.world_width, self.world_height);
        for (index, pad) in self.pads.iter().enumerate() {
            let r = pad.rect();
            let inside = r.w > 0.0
                && r.h > 0.0
                && r.left() >= world.left()
                && r.right() <= world.right()
                && r.top() >= world.top()
                && r.bottom() <= world.bottom();
            if !inside {
                return Err(InitError::PadOutsideWorld { index });
            }
        }

        for (name, value) in [
            ("hostile_spawn_chance", self.hostile_spawn_chance),
            ("hostile_fire_chance", self.hostile_fire_chance),
            ("hostile_wander_chance", self.hostile_wander_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(InitError::InvalidProbability { name, value });
            }
        }

        for (name, value) in [
            ("hostile_max_speed", self.hostile_max_speed),
            ("hostile_fire_range", self.hostile_fire_range),
            ("player_projectile_speed", self.player_projectile_speed),
            ("hostile_projectile_speed", self.hostile_projectile_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(InitError::InvalidTuning { name, value });
            }
        }
        let fraction = self.hostile_zone_fraction;
        if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
            return Err(InitError::InvalidTuning {
                name: "hostile_zone_fraction",
                value: fraction,
            });
        }

        Ok(())
    }

    /// Lowest y a hostile may patrol to
    pub fn hostile_floor(&self) -> f32 {
        self.world_height * self.hostile_zone_fraction
    }

    pub fn pad_rects(&self) -> Vec<Rect> {
        self.pads.iter().map(PadConfig::rect).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world_width, 2400.0);
        assert_eq!(config.pads.len(), 3);
        assert_eq!(config.pads[0].x, 1150.0);
        assert_eq!(config.pads[0].y, 950.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "gravity": 0.1, "max_hostiles": 2 }"#).unwrap();
        assert_eq!(config.gravity, 0.1);
        assert_eq!(config.max_hostiles, 2);
        assert_eq!(config.horizontal_speed, HORIZONTAL_SPEED);
        assert_eq!(config.pads.len(), 3);
    }

    #[test]
    fn test_pad_size_defaults_in_json() {
        let config = SimConfig::from_json(r#"{ "pads": [ { "x": 10.0, "y": 900.0 } ] }"#).unwrap();
        assert_eq!(config.pads[0].width, PAD_WIDTH);
        assert_eq!(config.pads[0].height, PAD_HEIGHT);
    }

    #[test]
    fn test_rejects_empty_pads() {
        let result = SimConfig::from_json(r#"{ "pads": [] }"#);
        assert!(matches!(result, Err(InitError::NoLandingPads)));
    }

    #[test]
    fn test_rejects_pad_outside_world() {
        let mut config = SimConfig::default();
        config.pads.push(PadConfig {
            x: config.world_width - 10.0,
            y: 100.0,
            width: PAD_WIDTH,
            height: PAD_HEIGHT,
        });
        assert!(matches!(
            config.validate(),
            Err(InitError::PadOutsideWorld { index: 3 })
        ));
    }

    #[test]
    fn test_rejects_bad_world_and_probability() {
        let config = SimConfig {
            world_width: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(InitError::InvalidWorld { .. })));

        let config = SimConfig {
            hostile_fire_chance: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InitError::InvalidProbability { name: "hostile_fire_chance", .. })
        ));
    }

    #[test]
    fn test_rejects_bad_speeds_and_range() {
        for json in [
            r#"{ "hostile_max_speed": -1.0 }"#,
            r#"{ "hostile_fire_range": -5.0 }"#,
            r#"{ "player_projectile_speed": -8.0 }"#,
            r#"{ "hostile_projectile_speed": -0.1 }"#,
        ] {
            assert!(
                matches!(SimConfig::from_json(json), Err(InitError::InvalidTuning { .. })),
                "accepted {json}"
            );
        }

        let config = SimConfig {
            hostile_max_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InitError::InvalidTuning { name: "hostile_max_speed", .. })
        ));

        // Stationary hostiles are fine
        let config = SimConfig {
            hostile_max_speed: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_zone_fraction() {
        for fraction in [-0.5, 0.0, 1.5, f32::INFINITY, f32::NAN] {
            let config = SimConfig {
                hostile_zone_fraction: fraction,
                ..Default::default()
            };
            assert!(
                matches!(
                    config.validate(),
                    Err(InitError::InvalidTuning { name: "hostile_zone_fraction", .. })
                ),
                "accepted zone fraction {fraction}"
            );
        }
        let config = SimConfig {
            hostile_zone_fraction: 1.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validated_config_never_panics_spawn() {
        let config = SimConfig {
            hostile_spawn_chance: 1.0,
            hostile_max_speed: 0.0,
            ..Default::default()
        };
        let mut state = crate::sim::GameState::new(config, 7).unwrap();
        for _ in 0..20 {
            crate::sim::tick(&mut state);
        }
        assert!(!state.hostiles.is_empty());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let result = SimConfig::from_json("{ not json");
        assert!(matches!(result, Err(InitError::Config(_))));
    }

    #[test]
    fn test_hostile_floor() {
        let config = SimConfig::default();
        assert!((config.hostile_floor() - 780.0).abs() < 0.001);
    }
}
