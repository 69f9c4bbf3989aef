//! Explosions: a burst of falling sparks plus an expanding shockwave ring
//!
//! Purely visual. Explosions never feed back into collisions or the state machine.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Spark colors (0xRRGGBB)
pub const EXPLOSION_PALETTE: [u32; 5] = [0xFF5500, 0xFF0000, 0xFFFF00, 0xFF9500, 0xFFFFFF];

/// A single spark
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: u32,
    /// 1.0 at birth, dead at or below 0
    pub life: f32,
    /// Life lost per tick
    pub decay: f32,
}

impl Particle {
    pub fn new(rng: &mut Pcg32, pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-3.0..3.0), rng.random_range(-3.0..3.0)),
            size: rng.random_range(2.0..7.0),
            color: EXPLOSION_PALETTE[rng.random_range(0..EXPLOSION_PALETTE.len())],
            life: 1.0,
            decay: rng.random_range(0.02..0.05),
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life -= self.decay;
        self.size = (self.size - PARTICLE_SHRINK).max(0.0);
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

#[derive(Debug, Clone)]
pub struct Explosion {
    pub pos: Vec2,
    pub particles: Vec<Particle>,
    pub shockwave_radius: f32,
    pub shockwave_max_radius: f32,
    /// Fades from 1 to 0 as the ring reaches its max radius
    pub shockwave_alpha: f32,
    active: bool,
}

impl Explosion {
    pub fn spawn(rng: &mut Pcg32, pos: Vec2) -> Self {
        let particles = (0..EXPLOSION_PARTICLES)
            .map(|_| Particle::new(rng, pos))
            .collect();
        Self {
            pos,
            particles,
            shockwave_radius: 0.0,
            shockwave_max_radius: SHOCKWAVE_MAX_RADIUS,
            shockwave_alpha: 1.0,
            active: true,
        }
    }

    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.update();
        }
        let all_dead = !self.particles.iter().any(Particle::is_alive);

        if !self.shockwave_done() {
            self.shockwave_radius =
                (self.shockwave_radius + SHOCKWAVE_GROWTH).min(self.shockwave_max_radius);
            self.shockwave_alpha = 1.0 - self.shockwave_radius / self.shockwave_max_radius;
        }

        self.active = !all_dead || !self.shockwave_done();
    }

    #[inline]
    pub fn shockwave_done(&self) -> bool {
        self.shockwave_radius >= self.shockwave_max_radius
    }

    /// Kept alive while any spark lives or the ring is still expanding
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }
}
