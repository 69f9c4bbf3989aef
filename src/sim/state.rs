//! Game state and the win/lose state machine
//!
//! `GameState` owns every entity collection. Removing an entity from its
//! collection is the only way it is destroyed.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Craft, Hostile, LandingPad, MoveIntent, Projectile};
use super::explosion::Explosion;
use super::store::{Store, UpgradeEffect, UpgradeKind};
use crate::config::SimConfig;
use crate::error::InitError;

/// State machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Craft under player control
    Flying,
    /// Craft lost, waiting before the overlay appears
    GameOverPending { ticks: u32 },
    /// Overlay visible, waiting for restart
    GameOver,
}

/// Which landing speed limits were exceeded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailReason {
    BothAxes,
    Vertical,
    Horizontal,
}

/// How a flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Landed { pad: usize },
    LandingFailed(FailReason),
    Crashed,
    Destroyed,
}

impl Outcome {
    /// Judge a pad contact from the craft velocity at that tick
    pub fn from_touchdown(
        pad: usize,
        vel: Vec2,
        max_vertical: f32,
        max_horizontal: f32,
    ) -> Self {
        let vertical_ok = vel.y.abs() <= max_vertical;
        let horizontal_ok = vel.x.abs() < max_horizontal;
        match (vertical_ok, horizontal_ok) {
            (true, true) => Outcome::Landed { pad },
            (false, false) => Outcome::LandingFailed(FailReason::BothAxes),
            (false, true) => Outcome::LandingFailed(FailReason::Vertical),
            (true, false) => Outcome::LandingFailed(FailReason::Horizontal),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Landed { .. })
    }

    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Landed { .. } => "Success! You landed safely!",
            Outcome::LandingFailed(FailReason::BothAxes) => {
                "Game Over! Speed too high in both directions!"
            }
            Outcome::LandingFailed(FailReason::Vertical) => "Game Over! Vertical speed too high!",
            Outcome::LandingFailed(FailReason::Horizontal) => {
                "Game Over! Horizontal speed too high!"
            }
            Outcome::Crashed => "Game Over! You crashed into the surface!",
            Outcome::Destroyed => "Game Over! Your lander was destroyed!",
        }
    }
}

/// Input commands. Each is a synchronous mutation picked up by the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    SetEngine(bool),
    SetMoveIntent(MoveIntent),
    SetShooting(bool),
    ToggleStore,
    /// Store slot 0..=2
    BuyUpgrade(usize),
    Restart,
}

/// Things that happened during the last tick, for audio and camera shake
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ExplosionSpawned { pos: Vec2 },
    HostileDestroyed { bounty: u64 },
    Finished(Outcome),
    GameOverShown,
}

/// Flat view of the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionFlags {
    pub game_over: bool,
    pub success: bool,
    pub delayed_game_over_pending: bool,
    pub delay_tick_counter: u32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: SimConfig,
    /// Seed the RNG was created from
    pub seed: u64,
    pub(crate) rng: Pcg32,
    /// Ticks since initialization (not reset on restart)
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Set once the current flight has ended
    pub outcome: Option<Outcome>,
    /// Engine thrust per tick, raised by the engine upgrade
    pub thrust_power: f32,
    pub craft: Craft,
    pub pads: Vec<LandingPad>,
    pub hostiles: Vec<Hostile>,
    pub projectiles: Vec<Projectile>,
    pub explosions: Vec<Explosion>,
    pub store: Store,
    /// Events from the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, InitError> {
        config.validate()?;

        let store = Store::new(&config);
        let craft = Craft::new(&config, store.fuel_capacity(), store.shoot_cooldown());
        let pads = config
            .pad_rects()
            .into_iter()
            .map(LandingPad::new)
            .collect();

        log::info!("Simulation initialized with seed {seed}");
        Ok(Self {
            thrust_power: store.thrust_power(),
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            phase: GamePhase::Flying,
            outcome: None,
            craft,
            pads,
            hostiles: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            store,
            events: Vec::new(),
        })
    }

    /// Any phase other than Flying
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase != GamePhase::Flying
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.outcome.is_some_and(|o| o.is_success())
    }

    /// The overlay should be visible
    #[inline]
    pub fn game_over_shown(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn session(&self) -> SessionFlags {
        let (pending, counter) = match self.phase {
            GamePhase::GameOverPending { ticks } => (true, ticks),
            _ => (false, 0),
        };
        SessionFlags {
            game_over: self.is_game_over(),
            success: self.is_success(),
            delayed_game_over_pending: pending,
            delay_tick_counter: counter,
        }
    }

    /// Apply one input command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetEngine(on) => self.craft.engine_on = on,
            Command::SetMoveIntent(intent) => self.craft.move_intent = intent,
            Command::SetShooting(on) => self.craft.shooting = on,
            Command::ToggleStore => {
                self.store.toggle();
                log::debug!("Store {}", if self.store.open { "opened" } else { "closed" });
            }
            Command::BuyUpgrade(slot) => match self.store.buy(slot) {
                Ok(effect) => self.apply_upgrade(effect),
                Err(reason) => log::debug!("Purchase of slot {slot} refused: {reason:?}"),
            },
            Command::Restart => {
                if self.is_game_over() {
                    self.restart();
                } else {
                    log::warn!("Restart ignored while flying");
                }
            }
        }
    }

    /// Push a purchased effect into the live simulation
    pub fn apply_upgrade(&mut self, effect: UpgradeEffect) {
        match effect {
            UpgradeEffect::FuelCapacity(capacity) => {
                self.craft.capacity = capacity;
                self.craft.fuel = capacity;
            }
            UpgradeEffect::ThrustPower(power) => self.thrust_power = power,
            UpgradeEffect::ShootCooldown(ticks) => {
                self.craft.shoot_cooldown = ticks;
                self.craft.cooldown_ticks = self.craft.cooldown_ticks.min(ticks);
            }
        }
    }

    /// New flight. Money and upgrade levels carry over.
    pub fn restart(&mut self) {
        self.craft = Craft::new(
            &self.config,
            self.store.fuel_capacity(),
            self.store.shoot_cooldown(),
        );
        self.thrust_power = self.store.thrust_power();
        self.hostiles.clear();
        self.projectiles.clear();
        self.explosions.clear();
        self.events.clear();
        self.outcome = None;
        self.phase = GamePhase::Flying;
        log::info!(
            "Restarted (money {}, fuel capacity {})",
            self.store.money,
            self.craft.capacity
        );
    }

    pub fn spawn_explosion(&mut self, pos: Vec2) {
        let explosion = Explosion::spawn(&mut self.rng, pos);
        self.explosions.push(explosion);
        self.events.push(GameEvent::ExplosionSpawned { pos });
    }

    /// End the flight. Failures blow up the craft and start the overlay delay.
    pub fn finish(&mut self, outcome: Outcome) {
        if self.is_game_over() {
            return;
        }
        self.outcome = Some(outcome);
        self.events.push(GameEvent::Finished(outcome));

        if outcome.is_success() {
            log::info!("{}", outcome.message());
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOverShown);
        } else {
            log::info!("{} ({:?})", outcome.message(), outcome);
            self.spawn_explosion(self.craft.pos);
            self.craft.visible = false;
            self.phase = GamePhase::GameOverPending { ticks: 0 };
        }
    }

    /// Store level shortcut
    pub fn upgrade_level(&self, kind: UpgradeKind) -> u32 {
        self.store.level(kind)
    }
}
