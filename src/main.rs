//! Mars Lander entry point
//!
//! Native builds run a headless demo: the autopilot flies a few sessions,
//! spends its bounty in the store between them, and prints the final HUD
//! as JSON. The browser build drives the library from its own glue.
//!
//! Usage: `mars-lander [config.json] [--seed N] [--sessions N]`

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::process::ExitCode;

    use mars_lander::camera::Camera;
    use mars_lander::consts::TICKS_PER_SECOND;
    use mars_lander::hud::Hud;
    use mars_lander::render;
    use mars_lander::sim::{Command, GameState, UpgradeKind, autopilot, tick_with};
    use mars_lander::{InitError, SimConfig};

    /// Give up on a session after two simulated minutes
    const MAX_SESSION_TICKS: u64 = TICKS_PER_SECOND as u64 * 120;

    struct Args {
        config_path: Option<String>,
        seed: u64,
        sessions: u32,
    }

    fn parse_args() -> Args {
        let mut args = Args {
            config_path: None,
            seed: 0x4D41_5253,
            sessions: 3,
        };
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--seed" => match iter.next().and_then(|v| v.parse().ok()) {
                    Some(seed) => args.seed = seed,
                    None => log::warn!("--seed expects a number, keeping {}", args.seed),
                },
                "--sessions" => match iter.next().and_then(|v| v.parse().ok()) {
                    Some(n) => args.sessions = n,
                    None => log::warn!("--sessions expects a number, keeping {}", args.sessions),
                },
                _ => args.config_path = Some(arg),
            }
        }
        args
    }

    fn load_config(path: Option<&str>) -> Result<SimConfig, InitError> {
        match path {
            Some(path) => SimConfig::load(path),
            None => Ok(SimConfig::default()),
        }
    }

    /// Fly until the game-over overlay shows (or the session times out)
    fn fly(state: &mut GameState, camera: &mut Camera) {
        let start = state.time_ticks;
        while !state.game_over_shown() {
            if state.time_ticks - start >= MAX_SESSION_TICKS {
                log::warn!("Session timed out after {} ticks", MAX_SESSION_TICKS);
                break;
            }
            let commands = autopilot::commands(state);
            tick_with(state, &commands);
            camera.update(state);
        }
    }

    /// Spend money on the cheapest affordable upgrades, cheapest first
    fn shop(state: &mut GameState) {
        state.apply(Command::ToggleStore);
        loop {
            let cheapest = UpgradeKind::ALL
                .iter()
                .map(|&kind| state.store.upgrade(kind))
                .filter(|u| !u.is_maxed() && u.cost <= state.store.money)
                .min_by_key(|u| u.cost)
                .map(|u| u.kind);
            let Some(kind) = cheapest else { break };
            state.apply(Command::BuyUpgrade(kind.index()));
        }
        state.apply(Command::ToggleStore);
    }

    pub fn run() -> ExitCode {
        let args = parse_args();
        let config = match load_config(args.config_path.as_deref()) {
            Ok(config) => config,
            Err(err) => {
                log::error!("Failed to load config: {}", err);
                return ExitCode::FAILURE;
            }
        };
        let (vw, vh) = (config.viewport_width, config.viewport_height);
        let mut state = match GameState::new(config, args.seed) {
            Ok(state) => state,
            Err(err) => {
                log::error!("Failed to start simulation: {}", err);
                return ExitCode::FAILURE;
            }
        };
        let mut camera = Camera::new(vw, vh, args.seed);

        log::info!(
            "Mars Lander (headless) seed={} sessions={}",
            args.seed,
            args.sessions
        );

        let mut landings = 0;
        for session in 1..=args.sessions {
            fly(&mut state, &mut camera);
            let message = state.outcome.map(|o| o.message()).unwrap_or("No result");
            log::info!(
                "Session {}: {} (t={} ticks, money={}, sprites={})",
                session,
                message,
                state.time_ticks,
                state.store.money,
                render::sprites(&state).len()
            );
            if state.is_success() {
                landings += 1;
            }
            if session < args.sessions {
                shop(&mut state);
                state.apply(Command::Restart);
            }
        }
        log::info!("{}/{} sessions landed", landings, args.sessions);

        match serde_json::to_string_pretty(&Hud::from_state(&state)) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("Failed to serialize HUD: {}", err);
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    env_logger::init();
    headless::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The browser build uses the library directly
}
