//! Property tests for the simulation invariants

use glam::Vec2;
use mars_lander::SimConfig;
use mars_lander::sim::{
    Command, Craft, Explosion, FailReason, GameState, Hostile, MoveIntent, Outcome, Projectile,
    UpgradeKind, tick_with,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn quiet_config() -> SimConfig {
    SimConfig {
        hostile_spawn_chance: 0.0,
        ..Default::default()
    }
}

fn intent() -> impl Strategy<Value = MoveIntent> {
    prop_oneof![
        Just(MoveIntent::None),
        Just(MoveIntent::Left),
        Just(MoveIntent::Right),
    ]
}

proptest! {
    #[test]
    fn prop_gravity_only_adds_gravity(vy in -10.0f32..10.0, x in 100.0f32..2000.0) {
        let config = SimConfig::default();
        let mut craft = Craft::new(&config, 300.0, 15);
        craft.pos.x = x;
        craft.vel.y = vy;
        craft.update(&config, 0.15);
        prop_assert!((craft.vel.y - (vy + config.gravity)).abs() < 1e-5);
    }

    #[test]
    fn prop_fuel_never_increases_or_goes_negative(
        fuel in 0.0f32..2.0,
        inputs in prop::collection::vec((any::<bool>(), intent()), 1..200),
    ) {
        let mut state = GameState::new(quiet_config(), 5).unwrap();
        state.craft.fuel = fuel;
        let mut last = fuel;
        for (engine, intent) in inputs {
            tick_with(&mut state, &[Command::SetEngine(engine), Command::SetMoveIntent(intent)]);
            prop_assert!(state.craft.fuel <= last);
            prop_assert!(state.craft.fuel >= 0.0);
            last = state.craft.fuel;
        }
    }

    #[test]
    fn prop_touchdown_classification(vx in -10.0f32..10.0, vy in -10.0f32..10.0) {
        let outcome = Outcome::from_touchdown(0, Vec2::new(vx, vy), 4.0, 5.0);
        let vertical_ok = vy.abs() <= 4.0;
        let horizontal_ok = vx.abs() < 5.0;
        let expected = match (vertical_ok, horizontal_ok) {
            (true, true) => Outcome::Landed { pad: 0 },
            (false, false) => Outcome::LandingFailed(FailReason::BothAxes),
            (false, true) => Outcome::LandingFailed(FailReason::Vertical),
            (true, false) => Outcome::LandingFailed(FailReason::Horizontal),
        };
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn prop_refused_purchase_changes_nothing(
        money in 0u64..400,
        slot in 0usize..5,
        open in any::<bool>(),
    ) {
        let mut state = GameState::new(quiet_config(), 5).unwrap();
        state.store.money = money;
        state.store.open = open;
        let before = state.store.clone();
        let capacity = state.craft.capacity;
        if state.store.buy(slot).is_err() {
            prop_assert_eq!(state.store.money, before.money);
            prop_assert_eq!(&state.store.upgrades, &before.upgrades);
            prop_assert_eq!(state.craft.capacity, capacity);
        } else {
            prop_assert!(state.store.money < before.money || before.upgrades[slot].cost == 0);
        }
    }

    #[test]
    fn prop_restart_keeps_money_and_levels(
        money in 0u64..1_000,
        buys in prop::collection::vec(0usize..3, 0..8),
    ) {
        let mut state = GameState::new(quiet_config(), 5).unwrap();
        state.store.money = money;
        state.apply(Command::ToggleStore);
        for slot in buys {
            state.apply(Command::BuyUpgrade(slot));
        }
        let money = state.store.money;
        let levels: Vec<u32> = UpgradeKind::ALL.iter().map(|&k| state.upgrade_level(k)).collect();

        state.hostiles.push(Hostile::new(Vec2::new(500.0, 200.0), Vec2::new(1.0, 0.5)));
        state.projectiles.push(Projectile::player(Vec2::new(400.0, 300.0), 8.0));
        state
            .projectiles
            .push(Projectile::aimed(Vec2::new(500.0, 200.0), state.craft.pos, 5.0));
        state.finish(Outcome::Crashed);
        prop_assert!(!state.explosions.is_empty());
        state.apply(Command::Restart);

        prop_assert!(!state.is_game_over());
        prop_assert!(state.hostiles.is_empty());
        prop_assert!(state.projectiles.is_empty());
        prop_assert!(state.explosions.is_empty());
        prop_assert!(state.craft.visible);
        prop_assert_eq!(state.outcome, None);
        prop_assert_eq!(state.store.money, money);
        let after: Vec<u32> = UpgradeKind::ALL.iter().map(|&k| state.upgrade_level(k)).collect();
        prop_assert_eq!(after, levels);
        prop_assert_eq!(state.craft.fuel, state.store.fuel_capacity());
    }

    #[test]
    fn prop_explosions_always_finish(
        seed in any::<u64>(),
        x in 0.0f32..2400.0,
        y in 0.0f32..1200.0,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut explosion = Explosion::spawn(&mut rng, Vec2::new(x, y));
        let mut ticks = 0;
        while explosion.is_active() {
            explosion.update();
            ticks += 1;
            prop_assert!(ticks <= 60, "explosion still active after {} ticks", ticks);
        }
    }

    #[test]
    fn prop_hostile_count_bounded(seed in any::<u64>()) {
        let config = SimConfig {
            hostile_spawn_chance: 1.0,
            hostile_fire_chance: 0.0,
            ..Default::default()
        };
        let max = config.max_hostiles;
        let mut state = GameState::new(config, seed).unwrap();
        state.craft.pos.y = 100.0;
        for _ in 0..60 {
            tick_with(&mut state, &[Command::SetEngine(true)]);
            prop_assert!(state.hostiles.len() <= max);
        }
    }
}
