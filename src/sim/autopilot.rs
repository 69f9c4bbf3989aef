//! Idle/demo mode - the computer flies the lander
//!
//! Produces the same commands a player would. Used by the headless runner
//! and handy for soak tests.

use super::entities::MoveIntent;
use super::state::{Command, GameState};

/// Horizontal distance from the pad center that counts as "over the pad"
const ALIGN_TOLERANCE: f32 = 20.0;
/// Descent speed to hold while approaching the pad
const CRUISE_DESCENT: f32 = 2.5;
/// Descent speed to hold on final approach
const FINAL_DESCENT: f32 = 1.5;
/// Height above the pad where final approach starts
const FINAL_APPROACH: f32 = 150.0;
/// Height above the pad to keep while traversing
const TRAVERSE_CLEARANCE: f32 = 120.0;
/// Fastest climb while regaining clearance
const MAX_CLIMB: f32 = -1.0;
/// Hostiles closer than this horizontally are worth shooting at
const FIRE_WINDOW: f32 = 40.0;

/// Commands for the next tick. Empty once the flight is over.
pub fn commands(state: &GameState) -> Vec<Command> {
    if state.is_game_over() {
        return Vec::new();
    }

    let craft = &state.craft;
    let Some(pad) = state
        .pads
        .iter()
        .filter(|p| p.rect.top() >= craft.bottom())
        .min_by(|a, b| {
            let da = (a.rect.center().x - craft.pos.x).abs();
            let db = (b.rect.center().x - craft.pos.x).abs();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        // Below every pad: nothing sensible left to do but brake
        return vec![
            Command::SetMoveIntent(MoveIntent::None),
            Command::SetEngine(craft.vel.y > 0.0),
            Command::SetShooting(false),
        ];
    };

    // Where the craft coasts to if the move keys are released now
    let drag = state.config.horizontal_drag;
    let coast = if drag < 1.0 {
        craft.vel.x * drag / (1.0 - drag)
    } else {
        0.0
    };
    let dx = pad.rect.center().x - (craft.pos.x + coast);
    let height_above_pad = pad.rect.top() - craft.bottom();
    let aligned = dx.abs() <= ALIGN_TOLERANCE;

    let intent = if aligned {
        MoveIntent::None
    } else if dx < 0.0 {
        MoveIntent::Left
    } else {
        MoveIntent::Right
    };

    let engine = if aligned {
        let target = if height_above_pad < FINAL_APPROACH {
            FINAL_DESCENT
        } else {
            CRUISE_DESCENT
        };
        craft.vel.y > target
    } else {
        // Hold altitude until the coast point is over the pad
        craft.vel.y > 0.0 || (height_above_pad < TRAVERSE_CLEARANCE && craft.vel.y > MAX_CLIMB)
    };

    let shoot = state.hostiles.iter().any(|h| {
        h.pos.y < craft.pos.y
            && (h.pos.x - craft.pos.x).abs() < FIRE_WINDOW
            && h.pos.distance(craft.pos) < state.config.hostile_fire_range
    });

    vec![
        Command::SetMoveIntent(intent),
        Command::SetEngine(engine),
        Command::SetShooting(shoot),
    ]
}
