//! Mars Lander - a gravity lander arcade game with hostiles and upgrades
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state, store)
//! - `config`: Data-driven tuning loaded from JSON
//! - `camera`: World to screen mapping and camera shake
//! - `hud`: Read model for the DOM/UI layer
//! - `render`: Read model for the renderer

pub mod camera;
pub mod config;
pub mod error;
pub mod hud;
pub mod render;
pub mod sim;

pub use config::{PadConfig, SimConfig};
pub use error::InitError;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default tuning constants. Units are world pixels and ticks (one tick per frame).
pub mod consts {
    /// Nominal ticks per second (one tick per animation frame)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Visible viewport (canvas) dimensions
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 1200.0;
    /// World is three viewports wide and one tall
    pub const WORLD_WIDTH: f32 = VIEWPORT_WIDTH * 3.0;
    pub const WORLD_HEIGHT: f32 = VIEWPORT_HEIGHT;

    /// Downward acceleration applied every tick
    pub const GRAVITY: f32 = 0.05;
    /// Thrust at engine level 1 (upgradable)
    pub const BASE_THRUST_POWER: f32 = 0.15;
    /// Horizontal velocity while a move key is held
    pub const HORIZONTAL_SPEED: f32 = 3.0;
    /// Horizontal drag multiplier when no move key is held
    pub const HORIZONTAL_DRAG: f32 = 0.95;
    /// Below this horizontal speed drag snaps velocity to zero
    pub const HORIZONTAL_SNAP: f32 = 0.1;
    pub const FUEL_CONSUMPTION_RATE: f32 = 0.25;

    /// Landing thresholds
    pub const MAX_LANDING_SPEED: f32 = 4.0;
    pub const MAX_LANDING_HORIZONTAL_SPEED: f32 = 5.0;
    /// Craft bottom must be within this band below the pad top to count as contact
    pub const PAD_CONTACT_BAND: f32 = 10.0;

    /// Craft defaults
    pub const CRAFT_WIDTH: f32 = 40.0;
    pub const CRAFT_HEIGHT: f32 = 60.0;
    pub const CRAFT_START_X: f32 = VIEWPORT_WIDTH / 2.0;
    pub const CRAFT_START_Y: f32 = 400.0;
    pub const BASE_FUEL_CAPACITY: f32 = 300.0;
    pub const BASE_SHOOT_COOLDOWN: u32 = 15;

    /// Landing pad defaults
    pub const PAD_WIDTH: f32 = 100.0;
    pub const PAD_HEIGHT: f32 = 20.0;

    /// Hostile units
    pub const MAX_HOSTILES: usize = 5;
    pub const HOSTILE_SPAWN_CHANCE: f64 = 0.01;
    pub const HOSTILE_FIRE_CHANCE: f64 = 0.005;
    pub const HOSTILE_WANDER_CHANCE: f64 = 0.01;
    pub const HOSTILE_FIRE_RANGE: f32 = 500.0;
    pub const HOSTILE_MAX_SPEED: f32 = 2.0;
    pub const HOSTILE_WIDTH: f32 = 40.0;
    pub const HOSTILE_HEIGHT: f32 = 24.0;
    pub const HOSTILE_HEALTH: i32 = 1;
    /// Hostiles patrol the upper part of the world only
    pub const HOSTILE_ZONE_FRACTION: f32 = 0.65;
    pub const HOSTILE_BOUNTY: u64 = 25;

    /// Projectiles
    pub const PLAYER_PROJECTILE_SPEED: f32 = 8.0;
    pub const PLAYER_PROJECTILE_RADIUS: f32 = 3.0;
    pub const HOSTILE_PROJECTILE_SPEED: f32 = 5.0;
    pub const HOSTILE_PROJECTILE_RADIUS: f32 = 4.0;

    /// Explosions
    pub const EXPLOSION_PARTICLES: usize = 50;
    pub const SHOCKWAVE_MAX_RADIUS: f32 = 60.0;
    pub const SHOCKWAVE_GROWTH: f32 = 2.0;
    pub const PARTICLE_GRAVITY: f32 = 0.05;
    pub const PARTICLE_SHRINK: f32 = 0.05;

    /// Ticks between a failed outcome and the game-over overlay
    pub const GAME_OVER_DELAY_TICKS: u32 = 60;

    /// Base prices in the upgrade store
    pub const FUEL_UPGRADE_COST: u64 = 50;
    pub const ENGINE_UPGRADE_COST: u64 = 80;
    pub const FIRE_RATE_UPGRADE_COST: u64 = 60;
    /// Price multiplier applied after every purchase
    pub const UPGRADE_COST_GROWTH: f64 = 1.5;
}

/// Axis-aligned rectangle in world space (origin top-left, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size centered on `center`
    #[inline]
    pub fn centered(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Point-in-rectangle test (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Strict horizontal overlap (touching edges do not overlap)
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.right() > other.left() && self.left() < other.right()
    }
}
