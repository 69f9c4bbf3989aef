//! Craft, hostile, projectile and landing pad kinematics
//!
//! Velocity and acceleration constants are per tick, not per second.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::config::SimConfig;
use crate::consts::*;

/// Held horizontal input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MoveIntent {
    #[default]
    None,
    Left,
    Right,
}

/// Side of the craft a lateral thruster fires from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// What the renderer needs to know about the craft's engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CraftVisual {
    /// Main engine flame under the craft
    pub main_engine: bool,
    /// Lateral thruster (fires on the side opposite the motion)
    pub side_thruster: Option<Side>,
}

/// The player's lander
#[derive(Debug, Clone)]
pub struct Craft {
    /// Center of the craft
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    /// Remaining fuel, always within [0, capacity]
    pub fuel: f32,
    pub capacity: f32,
    pub engine_on: bool,
    pub move_intent: MoveIntent,
    pub shooting: bool,
    /// Ticks between shots (upgradable)
    pub shoot_cooldown: u32,
    /// Ticks until the next shot is allowed
    pub cooldown_ticks: u32,
    /// Cleared when the craft is destroyed
    pub visible: bool,
}

impl Craft {
    /// Fresh craft at the configured spawn point with a full tank
    pub fn new(config: &SimConfig, capacity: f32, shoot_cooldown: u32) -> Self {
        Self {
            pos: Vec2::new(config.craft_start_x, config.craft_start_y),
            vel: Vec2::ZERO,
            width: config.craft_width,
            height: config.craft_height,
            fuel: capacity,
            capacity,
            engine_on: false,
            move_intent: MoveIntent::None,
            shooting: false,
            shoot_cooldown,
            cooldown_ticks: 0,
            visible: true,
        }
    }

    /// Integrate one tick of gravity, thrust, lateral motion and wall contact
    pub fn update(&mut self, config: &SimConfig, thrust_power: f32) {
        self.vel.y += config.gravity;

        if self.thrusting() {
            self.vel.y -= thrust_power;
            self.fuel = (self.fuel - config.fuel_consumption).max(0.0);
        }

        match self.move_intent {
            MoveIntent::Left => self.vel.x = -config.horizontal_speed,
            MoveIntent::Right => self.vel.x = config.horizontal_speed,
            MoveIntent::None => {
                self.vel.x *= config.horizontal_drag;
                if self.vel.x.abs() < HORIZONTAL_SNAP {
                    self.vel.x = 0.0;
                }
            }
        }

        self.pos += self.vel;

        // Inelastic wall contact
        let half_width = self.width / 2.0;
        if self.pos.x < half_width {
            self.pos.x = half_width;
            self.vel.x = 0.0;
        }
        if self.pos.x > config.world_width - half_width {
            self.pos.x = config.world_width - half_width;
            self.vel.x = 0.0;
        }
    }

    /// Count down the weapon and fire if the trigger is held
    pub fn tick_weapon(&mut self, projectile_speed: f32) -> Option<Projectile> {
        if self.cooldown_ticks > 0 {
            self.cooldown_ticks -= 1;
        }
        if !self.shooting || !self.visible || self.cooldown_ticks > 0 {
            return None;
        }
        self.cooldown_ticks = self.shoot_cooldown;
        let muzzle = Vec2::new(self.pos.x, self.pos.y - self.height / 2.0);
        Some(Projectile::player(muzzle, projectile_speed))
    }

    /// Engine is on and there is fuel to burn
    #[inline]
    pub fn thrusting(&self) -> bool {
        self.engine_on && self.fuel > 0.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.width, self.height)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height / 2.0
    }

    pub fn visual(&self) -> CraftVisual {
        let has_fuel = self.fuel > 0.0;
        let side_thruster = match self.move_intent {
            MoveIntent::Left if has_fuel => Some(Side::Right),
            MoveIntent::Right if has_fuel => Some(Side::Left),
            _ => None,
        };
        CraftVisual {
            main_engine: self.thrusting(),
            side_thruster,
        }
    }
}

/// A static landing pad
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingPad {
    pub rect: Rect,
}

impl LandingPad {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }
}

/// An enemy drone that wanders the upper sky and shoots at the craft
#[derive(Debug, Clone)]
pub struct Hostile {
    /// Center of the unit
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: i32,
    pub width: f32,
    pub height: f32,
}

impl Hostile {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            health: HOSTILE_HEALTH,
            width: HOSTILE_WIDTH,
            height: HOSTILE_HEIGHT,
        }
    }

    /// Random walk inside the patrol zone
    pub fn update(&mut self, rng: &mut Pcg32, config: &SimConfig) {
        if rng.random_bool(config.hostile_wander_chance) {
            self.vel = random_velocity(rng, config.hostile_max_speed);
        }

        self.pos += self.vel;

        // Elastic bounce, only when heading further out
        if (self.pos.x < 0.0 && self.vel.x < 0.0)
            || (self.pos.x > config.world_width && self.vel.x > 0.0)
        {
            self.vel.x = -self.vel.x;
        }
        if (self.pos.y < 0.0 && self.vel.y < 0.0)
            || (self.pos.y > config.hostile_floor() && self.vel.y > 0.0)
        {
            self.vel.y = -self.vel.y;
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.width, self.height)
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }
}

/// Uniform velocity with each axis in [-max, max]
pub fn random_velocity(rng: &mut Pcg32, max: f32) -> Vec2 {
    Vec2::new(rng.random_range(-max..=max), rng.random_range(-max..=max))
}

/// Who fired a projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Owner {
    Player,
    Hostile,
}

/// A bullet moving in a straight line
#[derive(Debug, Clone)]
pub struct Projectile {
    pub pos: Vec2,
    pub vel: Vec2,
    pub owner: Owner,
    /// Cleared on hit; swept at the end of the tick
    pub alive: bool,
}

impl Projectile {
    /// Player shot travelling straight up
    pub fn player(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            vel: Vec2::new(0.0, -speed),
            owner: Owner::Player,
            alive: true,
        }
    }

    /// Hostile shot aimed at `target`
    pub fn aimed(from: Vec2, target: Vec2, speed: f32) -> Self {
        let dir = (target - from).normalize_or_zero();
        Self {
            pos: from,
            vel: dir * speed,
            owner: Owner::Hostile,
            alive: true,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    pub fn radius(&self) -> f32 {
        match self.owner {
            Owner::Player => PLAYER_PROJECTILE_RADIUS,
            Owner::Hostile => HOSTILE_PROJECTILE_RADIUS,
        }
    }

    /// 0xRRGGBB
    pub fn color(&self) -> u32 {
        match self.owner {
            Owner::Player => 0xFFFF00,
            Owner::Hostile => 0xFF3333,
        }
    }

    pub fn out_of_bounds(&self, world_width: f32, world_height: f32) -> bool {
        self.pos.x < 0.0
            || self.pos.x > world_width
            || self.pos.y < 0.0
            || self.pos.y > world_height
    }
}
