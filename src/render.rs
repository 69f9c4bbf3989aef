//! Renderer read model
//!
//! The simulation never draws. Each frame the host turns the state into a
//! flat list of sprites in draw order and hands them to its own backend.

use glam::Vec2;
use serde::Serialize;

use crate::Rect;
use crate::sim::{
    Craft, CraftVisual, Explosion, GameState, Hostile, LandingPad, Owner, Projectile,
};

/// Shockwave ring color (0xRRGGBB)
pub const SHOCKWAVE_COLOR: u32 = 0xFFFFFF;

/// One thing to draw, in world coordinates
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Sprite {
    Pad {
        rect: Rect,
    },
    Craft {
        rect: Rect,
        visual: CraftVisual,
    },
    Hostile {
        rect: Rect,
        health: i32,
    },
    Projectile {
        pos: Vec2,
        radius: f32,
        color: u32,
        owner: Owner,
    },
    Particle {
        pos: Vec2,
        size: f32,
        color: u32,
        alpha: f32,
    },
    Shockwave {
        pos: Vec2,
        radius: f32,
        color: u32,
        alpha: f32,
    },
}

/// Drawing backend (canvas, wgpu, terminal, a test recorder...)
pub trait RenderSink {
    fn draw(&mut self, sprite: &Sprite);
}

impl RenderSink for Vec<Sprite> {
    fn draw(&mut self, sprite: &Sprite) {
        self.push(sprite.clone());
    }
}

/// Anything that knows how to describe itself to a sink
pub trait Drawable {
    fn position(&self) -> Vec2;
    fn draw(&self, sink: &mut dyn RenderSink);
}

impl Drawable for LandingPad {
    fn position(&self) -> Vec2 {
        self.rect.center()
    }

    fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw(&Sprite::Pad { rect: self.rect });
    }
}

impl Drawable for Craft {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn draw(&self, sink: &mut dyn RenderSink) {
        if !self.visible {
            return;
        }
        sink.draw(&Sprite::Craft {
            rect: self.bounds(),
            visual: self.visual(),
        });
    }
}

impl Drawable for Hostile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw(&Sprite::Hostile {
            rect: self.bounds(),
            health: self.health,
        });
    }
}

impl Drawable for Projectile {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn draw(&self, sink: &mut dyn RenderSink) {
        sink.draw(&Sprite::Projectile {
            pos: self.pos,
            radius: self.radius(),
            color: self.color(),
            owner: self.owner,
        });
    }
}

impl Drawable for Explosion {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn draw(&self, sink: &mut dyn RenderSink) {
        if !self.shockwave_done() {
            sink.draw(&Sprite::Shockwave {
                pos: self.pos,
                radius: self.shockwave_radius,
                color: SHOCKWAVE_COLOR,
                alpha: self.shockwave_alpha,
            });
        }
        for p in self.particles.iter().filter(|p| p.is_alive()) {
            sink.draw(&Sprite::Particle {
                pos: p.pos,
                size: p.size,
                color: p.color,
                alpha: p.life.clamp(0.0, 1.0),
            });
        }
    }
}

/// Draw the whole scene: pads, craft, hostiles, projectiles, explosions
pub fn render(state: &GameState, sink: &mut dyn RenderSink) {
    for pad in &state.pads {
        pad.draw(sink);
    }
    state.craft.draw(sink);
    for hostile in &state.hostiles {
        hostile.draw(sink);
    }
    for projectile in &state.projectiles {
        projectile.draw(sink);
    }
    for explosion in &state.explosions {
        explosion.draw(sink);
    }
}

/// Convenience: collect the scene into a sprite list
pub fn sprites(state: &GameState) -> Vec<Sprite> {
    let mut out = Vec::new();
    render(state, &mut out);
    out
}
