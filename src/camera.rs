//! Camera following the craft, plus a short screen shake after explosions
//!
//! Lives on the renderer side: reads the simulation, never writes to it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameEvent, GameState};

/// Fraction of the remaining distance covered each tick
pub const FOLLOW_SPEED: f32 = 0.05;
/// Shake lasts about half a second
pub const SHAKE_DURATION_TICKS: u32 = 30;
/// A new offset is picked every few ticks
pub const SHAKE_INTERVAL_TICKS: u32 = 3;
/// Peak-to-peak shake amplitude in screen pixels
pub const SHAKE_INTENSITY: f32 = 7.0;

/// Transient screen offset, independent of the simulation
#[derive(Debug, Clone)]
pub struct CameraShake {
    ticks_left: u32,
    offset: Vec2,
    rng: Pcg32,
}

impl CameraShake {
    pub fn new(seed: u64) -> Self {
        Self {
            ticks_left: 0,
            offset: Vec2::ZERO,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Start (or restart) the shake
    pub fn trigger(&mut self) {
        self.ticks_left = SHAKE_DURATION_TICKS;
    }

    pub fn update(&mut self) {
        if self.ticks_left == 0 {
            self.offset = Vec2::ZERO;
            return;
        }
        if self.ticks_left % SHAKE_INTERVAL_TICKS == 0 {
            let half = SHAKE_INTENSITY / 2.0;
            self.offset = Vec2::new(
                self.rng.random_range(-half..half),
                self.rng.random_range(-half..half),
            );
        }
        self.ticks_left -= 1;
        if self.ticks_left == 0 {
            self.offset = Vec2::ZERO;
        }
    }

    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }
}

/// Top-left corner of the visible viewport in world space
#[derive(Debug, Clone)]
pub struct Camera {
    pub pos: Vec2,
    pub viewport: Vec2,
    pub shake: CameraShake,
}

impl Camera {
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u64) -> Self {
        Self {
            pos: Vec2::ZERO,
            viewport: Vec2::new(viewport_width, viewport_height),
            shake: CameraShake::new(seed),
        }
    }

    /// Ease toward centering `target`, keeping the surface in view
    pub fn follow(&mut self, target: Vec2) {
        let desired = target - self.viewport / 2.0;
        self.pos += (desired - self.pos) * FOLLOW_SPEED;

        let max_y = self.viewport.y * 0.4;
        let min_y = -self.viewport.y * 0.1;
        self.pos.y = self.pos.y.clamp(min_y, max_y);
    }

    /// Per-frame update: track the craft while flying and shake on explosions
    pub fn update(&mut self, state: &GameState) {
        if !state.is_game_over() {
            self.follow(state.craft.pos);
        }
        if state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::ExplosionSpawned { .. }))
        {
            self.shake.trigger();
        }
        self.shake.update();
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.pos
    }

    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::sim::Outcome;

    #[test]
    fn test_follow_eases() {
        let mut camera = Camera::new(800.0, 1200.0, 0);
        camera.follow(Vec2::new(1400.0, 600.0));
        // Desired top-left is (1000, 0): 5% of the way
        assert!((camera.pos.x - 50.0).abs() < 1e-4);
        assert_eq!(camera.pos.y, 0.0);
    }

    #[test]
    fn test_follow_clamps_vertical() {
        let mut camera = Camera::new(800.0, 1200.0, 0);
        for _ in 0..1_000 {
            camera.follow(Vec2::new(400.0, 5_000.0));
        }
        assert!((camera.pos.y - 480.0).abs() < 1e-3);

        for _ in 0..1_000 {
            camera.follow(Vec2::new(400.0, -5_000.0));
        }
        assert!((camera.pos.y + 120.0).abs() < 1e-3);
    }

    #[test]
    fn test_screen_world_round_trip() {
        let mut camera = Camera::new(800.0, 1200.0, 0);
        camera.pos = Vec2::new(120.0, -40.0);
        let world = Vec2::new(500.0, 300.0);
        assert_eq!(camera.screen_to_world(camera.world_to_screen(world)), world);
    }

    #[test]
    fn test_shake_runs_and_stops() {
        let mut shake = CameraShake::new(9);
        shake.trigger();
        let mut saw_offset = false;
        for _ in 0..SHAKE_DURATION_TICKS {
            shake.update();
            let o = shake.offset();
            assert!(o.x.abs() <= SHAKE_INTENSITY / 2.0 && o.y.abs() <= SHAKE_INTENSITY / 2.0);
            saw_offset |= o != Vec2::ZERO;
        }
        assert!(saw_offset);
        assert!(!shake.is_active());
        assert_eq!(shake.offset(), Vec2::ZERO);
    }

    #[test]
    fn test_explosion_triggers_shake_without_touching_sim() {
        let mut state = GameState::new(SimConfig::default(), 1).unwrap();
        let mut camera = Camera::new(800.0, 1200.0, 1);
        state.finish(Outcome::Crashed);
        let craft_pos = state.craft.pos;
        camera.update(&state);
        assert!(camera.shake.is_active());
        assert_eq!(state.craft.pos, craft_pos);
    }
}
