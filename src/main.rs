//! Wall Dash entry point
//!
//! No windowing backend is wired into this build; the binary runs the full
//! game loop headless with the autopilot at the controls, which exercises
//! countdown, rounds, the difficulty schedule, and session close end to end.

use std::time::Duration;

use wall_dash::app::{AppConfig, run_session};
use wall_dash::platform::headless::{ManualClock, NullCanvas, NullText, ScriptedEvents};

fn main() {
    env_logger::init();
    log::info!("Wall Dash starting...");
    log::info!("no windowing backend in this build - running autopilot demo session");

    let seed: u64 = rand::random();
    let config = AppConfig {
        seed,
        // Headless: the manual clock supplies frame time, no pacing needed
        frame_delay: Duration::ZERO,
        autopilot: true,
        // Roughly a minute of simulated play
        max_frames: Some(3750),
    };

    let clock = ManualClock::with_step(16);
    let mut events = ScriptedEvents::default();
    let mut canvas = NullCanvas;
    let mut text = NullText;

    let score = run_session(config, &clock, &mut events, &mut canvas, &mut text);
    log::info!("demo session finished with score {score} (seed {seed})");
}
