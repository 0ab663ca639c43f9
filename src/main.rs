//! Kickoff entry point
//!
//! Headless native runner: loads settings, plays a scripted match through the
//! fixed-rate loop and logs what happens.
//!
//! Usage: `kickoff [config.json] [ticks] [--fast]`

use std::path::PathBuf;

use kickoff::Settings;
use kickoff::game_loop::{Game, run_loop};
use kickoff::platform::{ManualClock, ScriptedInput, SystemClock};
use kickoff::render::LogRenderer;

fn main() {
    env_logger::init();
    log::info!("Kickoff (headless) starting...");

    let mut config: Option<PathBuf> = None;
    let mut ticks: Option<usize> = None;
    let mut fast = false;
    for arg in std::env::args().skip(1) {
        if arg == "--fast" {
            fast = true;
        } else if let Ok(n) = arg.parse::<usize>() {
            ticks = Some(n);
        } else {
            config = Some(PathBuf::from(arg));
        }
    }

    let settings = Settings::load_or_default(config.as_deref());
    let mut game = Game::new(&settings);
    let mut input = ScriptedInput::demo();
    if let Some(n) = ticks {
        input.truncate(n);
    }
    log::info!("Playing {} scripted frames", input.remaining());
    let mut renderer = LogRenderer::new();

    let summary = if fast {
        run_loop(&mut game, &mut input, &mut renderer, &mut ManualClock::new())
    } else {
        run_loop(&mut game, &mut input, &mut renderer, &mut SystemClock::new())
    };

    log::info!(
        "Finished: {} frames, {} goals, {}",
        summary.frames,
        summary.goals(),
        game.state.score.scoreboard_text()
    );
}
