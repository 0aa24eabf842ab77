//! Island Royale entry point
//!
//! The browser build is driven from JS through `platform::web`. Natively this
//! runs a short scripted session headless and logs what happened, which is
//! handy for checking tuning files.
//!
//! Usage: `island-royale [seed] [tuning.json] [setup.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Island Royale (native) starting...");

    if let Err(e) = native::run(std::env::args().skip(1).collect()) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::fs;

    use glam::Vec3;
    use island_royale::Session;
    use island_royale::consts::*;
    use island_royale::sim::GameEvent;

    /// Frames per simulated second of the script
    const FRAME_DT: f32 = SIM_DT;

    pub fn run(args: Vec<String>) -> Result<(), Box<dyn Error>> {
        let seed = match args.first() {
            Some(arg) => arg.parse::<u64>()?,
            None => 1,
        };
        let tuning = args.get(1).map(fs::read_to_string).transpose()?;
        let setup = args.get(2).map(fs::read_to_string).transpose()?;

        let mut session = Session::from_json(seed, tuning.as_deref(), setup.as_deref())?;
        log::info!("Session built with seed: {}", seed);
        session.start();

        // Settle onto the ground
        play(&mut session, 0.5);

        // Face the nearest enemy and hold the trigger
        let Some(target) = session.snapshot().enemies.first().map(|e| e.pos) else {
            log::warn!("No enemies in this setup");
            return Ok(());
        };
        let eye = session.snapshot().player.eye();
        let aim = Vec3::new(target.x, 1.0, target.z) - eye;
        island_royale::platform::set_aim(session.input_mut(), aim);
        island_royale::platform::mouse_button(
            session.input_mut(),
            island_royale::platform::MOUSE_PRIMARY,
            true,
        );
        play(&mut session, 3.0);
        island_royale::platform::release_all(session.input_mut());

        // Top up and walk forward for a bit
        island_royale::platform::key_down(session.input_mut(), "KeyR");
        island_royale::platform::key_down(session.input_mut(), "KeyW");
        play(&mut session, 2.5);
        island_royale::platform::key_up(session.input_mut(), "KeyW");

        let state = session.snapshot();
        log::info!(
            "After {} ticks: health {}, score {}, ammo {}/{}, zone radius {:.2}",
            state.time_ticks,
            state.player.health,
            state.player.score,
            state.player.loadout.ammo(),
            state.player.loadout.current().ammo_capacity,
            state.zone.radius,
        );
        for message in &state.messages {
            log::info!("HUD: {}", message.text);
        }
        Ok(())
    }

    /// Feed fixed frames for `seconds`, logging notable events
    fn play(session: &mut Session, seconds: f32) {
        let frames = (seconds / FRAME_DT).round() as u32;
        for _ in 0..frames {
            session.advance(FRAME_DT);
            for event in &session.snapshot().events {
                match event {
                    GameEvent::EnemyEliminated { id } => log::info!("Enemy {id} eliminated"),
                    GameEvent::GameOver { score } => log::info!("Game over, score {score}"),
                    GameEvent::ReloadFinished => log::info!("Reload finished"),
                    _ => log::debug!("{event:?}"),
                }
            }
        }
    }
}
