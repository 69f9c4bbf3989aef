//! Hostile spawn and fire policies

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::entities::{Craft, Hostile, Projectile, random_velocity};
use crate::config::SimConfig;

/// World edge a hostile enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnEdge {
    Top,
    Left,
    Right,
}

impl SpawnEdge {
    pub fn random(rng: &mut Pcg32) -> Self {
        match rng.random_range(0..3) {
            0 => SpawnEdge::Top,
            1 => SpawnEdge::Left,
            _ => SpawnEdge::Right,
        }
    }
}

/// Build a hostile on `edge`, heading into the world
pub fn hostile_at_edge(rng: &mut Pcg32, config: &SimConfig, edge: SpawnEdge) -> Hostile {
    let max = config.hostile_max_speed;
    let mut vel = random_velocity(rng, max);
    let pos = match edge {
        SpawnEdge::Top => {
            vel.y = vel.y.abs();
            Vec2::new(rng.random_range(0.0..=config.world_width), 0.0)
        }
        SpawnEdge::Left => {
            vel.x = vel.x.abs();
            Vec2::new(0.0, rng.random_range(0.0..=config.hostile_floor()))
        }
        SpawnEdge::Right => {
            vel.x = -vel.x.abs();
            Vec2::new(
                config.world_width,
                rng.random_range(0.0..=config.hostile_floor()),
            )
        }
    };
    Hostile::new(pos, vel)
}

/// One spawn roll per tick while below the ceiling. Returns true if a unit spawned.
pub fn spawn_hostiles(hostiles: &mut Vec<Hostile>, rng: &mut Pcg32, config: &SimConfig) -> bool {
    if hostiles.len() >= config.max_hostiles {
        return false;
    }
    if !rng.random_bool(config.hostile_spawn_chance) {
        return false;
    }
    let edge = SpawnEdge::random(rng);
    let hostile = hostile_at_edge(rng, config, edge);
    log::debug!("Hostile spawned at {:?} edge {:?}", edge, hostile.pos);
    hostiles.push(hostile);
    true
}

/// Every live hostile rolls to fire; a hit roll shoots at the craft if it is
/// visible and in range
pub fn hostile_fire(
    hostiles: &[Hostile],
    craft: &Craft,
    rng: &mut Pcg32,
    config: &SimConfig,
    out: &mut Vec<Projectile>,
) {
    for hostile in hostiles.iter().filter(|h| h.is_alive()) {
        if !rng.random_bool(config.hostile_fire_chance) {
            continue;
        }
        if craft.visible && hostile.pos.distance(craft.pos) < config.hostile_fire_range {
            out.push(Projectile::aimed(
                hostile.pos,
                craft.pos,
                config.hostile_projectile_speed,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::entities::Owner;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_respects_ceiling() {
        let config = SimConfig {
            hostile_spawn_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(11);
        let mut hostiles = Vec::new();
        for _ in 0..50 {
            spawn_hostiles(&mut hostiles, &mut rng, &config);
            assert!(hostiles.len() <= MAX_HOSTILES);
        }
        assert_eq!(hostiles.len(), MAX_HOSTILES);
    }

    #[test]
    fn test_spawn_zero_chance() {
        let config = SimConfig {
            hostile_spawn_chance: 0.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(12);
        let mut hostiles = Vec::new();
        for _ in 0..100 {
            assert!(!spawn_hostiles(&mut hostiles, &mut rng, &config));
        }
    }

    #[test]
    fn test_edges_head_inward() {
        let config = SimConfig::default();
        let mut rng = Pcg32::seed_from_u64(13);
        for _ in 0..50 {
            let h = hostile_at_edge(&mut rng, &config, SpawnEdge::Top);
            assert_eq!(h.pos.y, 0.0);
            assert!(h.vel.y >= 0.0);

            let h = hostile_at_edge(&mut rng, &config, SpawnEdge::Left);
            assert_eq!(h.pos.x, 0.0);
            assert!(h.vel.x >= 0.0);
            assert!(h.pos.y <= config.hostile_floor());

            let h = hostile_at_edge(&mut rng, &config, SpawnEdge::Right);
            assert_eq!(h.pos.x, config.world_width);
            assert!(h.vel.x <= 0.0);
        }
    }

    #[test]
    fn test_all_edges_reachable() {
        let mut rng = Pcg32::seed_from_u64(14);
        let mut seen = [false; 3];
        for _ in 0..100 {
            match SpawnEdge::random(&mut rng) {
                SpawnEdge::Top => seen[0] = true,
                SpawnEdge::Left => seen[1] = true,
                SpawnEdge::Right => seen[2] = true,
            }
        }
        assert_eq!(seen, [true; 3]);
    }

    #[test]
    fn test_fire_range_and_visibility() {
        let config = SimConfig {
            hostile_fire_chance: 1.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(15);
        let mut craft = Craft::new(&config, BASE_FUEL_CAPACITY, BASE_SHOOT_COOLDOWN);
        let near = Hostile::new(craft.pos + Vec2::new(300.0, 0.0), Vec2::ZERO);
        let far = Hostile::new(craft.pos + Vec2::new(600.0, 0.0), Vec2::ZERO);

        let mut shots = Vec::new();
        hostile_fire(&[near.clone(), far], &craft, &mut rng, &config, &mut shots);
        assert_eq!(shots.len(), 1);
        assert_eq!(shots[0].owner, Owner::Hostile);
        assert!(shots[0].vel.x < 0.0);
        assert!((shots[0].vel.length() - HOSTILE_PROJECTILE_SPEED).abs() < 1e-5);

        craft.visible = false;
        shots.clear();
        hostile_fire(&[near], &craft, &mut rng, &config, &mut shots);
        assert!(shots.is_empty());
    }
}
