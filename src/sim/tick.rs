//! Simulation tick
//!
//! One tick per animation frame, no fixed-timestep decoupling. Order:
//! explosions, game-over delay, physics, weapons, collisions, sweep,
//! pad and floor contact, then spawn (only while still flying).

use super::collision::{
    find_landing_pad, hits_ground, projectile_hits_craft, projectile_hits_hostile,
};
use super::entities::Owner;
use super::spawn::{hostile_fire, spawn_hostiles};
use super::state::{Command, GameEvent, GamePhase, GameState, Outcome};

/// Apply queued commands, then advance one tick
pub fn tick_with(state: &mut GameState, commands: &[Command]) {
    for &command in commands {
        state.apply(command);
    }
    tick(state);
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) {
    state.events.clear();
    state.time_ticks += 1;

    // Explosions keep animating in every phase
    for explosion in &mut state.explosions {
        explosion.update();
    }
    state.explosions.retain(|e| e.is_active());

    match state.phase {
        GamePhase::GameOverPending { ticks } => {
            let ticks = ticks + 1;
            if ticks > state.config.game_over_delay_ticks {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOverShown);
                log::info!("Game over shown after {ticks} ticks");
            } else {
                state.phase = GamePhase::GameOverPending { ticks };
            }
            return;
        }
        GamePhase::GameOver => return,
        GamePhase::Flying => {}
    }

    // --- Physics ---
    state.craft.update(&state.config, state.thrust_power);
    for hostile in &mut state.hostiles {
        hostile.update(&mut state.rng, &state.config);
    }
    for projectile in &mut state.projectiles {
        projectile.update();
    }

    // --- Weapons ---
    if let Some(shot) = state.craft.tick_weapon(state.config.player_projectile_speed) {
        state.projectiles.push(shot);
    }
    hostile_fire(
        &state.hostiles,
        &state.craft,
        &mut state.rng,
        &state.config,
        &mut state.projectiles,
    );

    // --- Collisions ---
    resolve_player_hits(state);
    resolve_hostile_hits(state);

    // --- Sweep ---
    let (width, height) = (state.config.world_width, state.config.world_height);
    state
        .projectiles
        .retain(|p| p.alive && !p.out_of_bounds(width, height));
    state.hostiles.retain(|h| h.is_alive());

    // --- Pad and floor contact ---
    if state.is_game_over() {
        return;
    }
    if let Some(pad) = find_landing_pad(&state.craft, &state.pads) {
        let vel = state.craft.vel;
        log::info!(
            "Touchdown on pad {pad}: vertical {:.2} (max {}), horizontal {:.2} (max {})",
            vel.y,
            state.config.max_landing_speed,
            vel.x,
            state.config.max_landing_horizontal_speed
        );
        let outcome = Outcome::from_touchdown(
            pad,
            vel,
            state.config.max_landing_speed,
            state.config.max_landing_horizontal_speed,
        );
        state.finish(outcome);
    } else if hits_ground(&state.craft, state.config.world_height) {
        state.finish(Outcome::Crashed);
    }
    if state.is_game_over() {
        return;
    }

    // --- Spawn ---
    spawn_hostiles(&mut state.hostiles, &mut state.rng, &state.config);
}

/// Player shots against hostiles. Each shot damages at most one unit.
fn resolve_player_hits(state: &mut GameState) {
    let mut destroyed = Vec::new();

    for projectile in state
        .projectiles
        .iter_mut()
        .filter(|p| p.alive && p.owner == Owner::Player)
    {
        let Some(hostile) = state
            .hostiles
            .iter_mut()
            .find(|h| h.is_alive() && projectile_hits_hostile(projectile, h))
        else {
            continue;
        };

        projectile.alive = false;
        hostile.health -= 1;
        if !hostile.is_alive() {
            destroyed.push(hostile.pos);
        }
    }

    for pos in destroyed {
        let bounty = state.config.hostile_bounty;
        state.store.earn(bounty);
        state.events.push(GameEvent::HostileDestroyed { bounty });
        state.spawn_explosion(pos);
        log::debug!("Hostile destroyed at {pos:?}, money {}", state.store.money);
    }
}

/// Hostile shots against the craft
fn resolve_hostile_hits(state: &mut GameState) {
    if !state.craft.visible || state.is_game_over() {
        return;
    }

    let hit = state
        .projectiles
        .iter_mut()
        .filter(|p| p.alive && p.owner == Owner::Hostile)
        .find(|p| projectile_hits_craft(p, &state.craft));

    if let Some(projectile) = hit {
        projectile.alive = false;
        state.finish(Outcome::Destroyed);
    }
}
