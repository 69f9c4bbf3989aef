//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, per-tick constants
//! - Seeded RNG only
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod entities;
pub mod explosion;
pub mod spawn;
pub mod state;
pub mod store;
pub mod tick;

pub use entities::{Craft, CraftVisual, Hostile, LandingPad, MoveIntent, Owner, Projectile, Side};
pub use explosion::{Explosion, Particle};
pub use state::{Command, FailReason, GameEvent, GamePhase, GameState, Outcome, SessionFlags};
pub use store::{Refusal, Store, Upgrade, UpgradeEffect, UpgradeKind};
pub use tick::{tick, tick_with};
