//! Hit tests
//!
//! Everything here is axis-aligned: projectiles are points, units and
//! pads are rectangles.

use glam::Vec2;

use super::entities::{Craft, Hostile, LandingPad, Projectile};
use crate::Rect;
use crate::consts::PAD_CONTACT_BAND;

/// Projectile center inside a rectangle
#[inline]
pub fn point_in_rect(point: Vec2, rect: &Rect) -> bool {
    rect.contains(point)
}

pub fn projectile_hits_hostile(projectile: &Projectile, hostile: &Hostile) -> bool {
    point_in_rect(projectile.pos, &hostile.bounds())
}

pub fn projectile_hits_craft(projectile: &Projectile, craft: &Craft) -> bool {
    point_in_rect(projectile.pos, &craft.bounds())
}

/// Craft overlaps the pad horizontally and its bottom edge sits in the
/// contact band at the top of the pad
pub fn touches_pad(craft: &Rect, pad: &Rect) -> bool {
    craft.overlaps_x(pad)
        && craft.bottom() >= pad.top()
        && craft.bottom() <= pad.top() + PAD_CONTACT_BAND
}

/// Index of the first pad in list order the craft is touching
pub fn find_landing_pad(craft: &Craft, pads: &[LandingPad]) -> Option<usize> {
    let bounds = craft.bounds();
    pads.iter().position(|pad| touches_pad(&bounds, &pad.rect))
}

/// Craft bottom has reached the world floor
pub fn hits_ground(craft: &Craft, world_height: f32) -> bool {
    craft.bottom() >= world_height
}
