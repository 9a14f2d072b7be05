//! Host frame loop
//!
//! One cooperative tick per frame: sample the clock once, drain input,
//! advance the simulation, compose the frame, pace with a fixed delay. The
//! delay is scheduling only; elapsed game time always comes from consecutive
//! clock samples.

use std::time::Duration;

use crate::platform::{Canvas, Clock, Event, EventSource, TextPainter};
use crate::sim::state::GameState;
use crate::sim::tick::{TickInput, tick};
use crate::ui;

/// Session parameters
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub seed: u64,
    /// Frame pacing delay; zero for headless runs
    pub frame_delay: Duration,
    /// Let the demo pilot pick the matching wall each round
    pub autopilot: bool,
    /// Bound for demo/smoke runs; `None` plays until game over
    pub max_frames: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            frame_delay: Duration::from_millis(crate::consts::FRAME_DELAY_MS),
            autopilot: false,
            max_frames: None,
        }
    }
}

/// Run one session to completion. Returns the final score.
pub fn run_session(
    config: AppConfig,
    clock: &impl Clock,
    events: &mut impl EventSource,
    canvas: &mut impl Canvas,
    text: &mut impl TextPainter,
) -> u32 {
    log::info!("session starting (seed {})", config.seed);

    let mut state = GameState::new(config.seed, clock.now_ms());
    let mut last_ms = clock.now_ms();
    let mut frames: u64 = 0;

    loop {
        let now_ms = clock.now_ms();
        let dt = now_ms.saturating_sub(last_ms) as f32 / 1000.0;
        last_ms = now_ms;

        // Drain this tick's events: any quit wins, only the first direction
        // intent is kept
        let mut input = TickInput {
            autopilot: config.autopilot,
            ..Default::default()
        };
        while let Some(event) = events.poll_event() {
            match event {
                Event::Quit => input.quit = true,
                Event::Key(dir) => {
                    if input.direction.is_none() {
                        input.direction = Some(dir);
                    }
                }
            }
        }

        tick(&mut state, &input, now_ms, dt);
        ui::draw_frame(&state, canvas, text);

        if state.should_close(now_ms) {
            break;
        }

        frames += 1;
        if config.max_frames.is_some_and(|max| frames >= max) {
            log::debug!("frame cap reached after {frames} frames");
            break;
        }

        if !config.frame_delay.is_zero() {
            std::thread::sleep(config.frame_delay);
        }
    }

    log::info!("session over, final score {}", state.score);
    state.score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::platform::headless::{ManualClock, NullText, RecordingCanvas, ScriptedEvents};
    use crate::sim::player::Direction;

    fn demo_config(seed: u64) -> AppConfig {
        AppConfig {
            seed,
            frame_delay: Duration::ZERO,
            autopilot: false,
            max_frames: None,
        }
    }

    #[test]
    fn test_session_ends_on_quit() {
        let clock = ManualClock::with_step(16);
        let mut events = ScriptedEvents::new([Event::Quit]);
        let mut canvas = RecordingCanvas::new();

        let score = run_session(
            demo_config(1),
            &clock,
            &mut events,
            &mut canvas,
            &mut NullText,
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn test_wrong_wall_ends_after_linger() {
        let clock = ManualClock::with_step(16);
        // Spam one direction; whichever round comes up, either the move hits
        // (round continues) or the session ends. With no further input after
        // the first move, a hit leads to an eventual timeout.
        let mut events = ScriptedEvents::new([Event::Key(Direction::Up)]);
        let mut canvas = RecordingCanvas::new();

        let score = run_session(
            demo_config(3),
            &clock,
            &mut events,
            &mut canvas,
            &mut NullText,
        );
        assert!(score <= 1);
    }

    #[test]
    fn test_autopilot_session_hits_frame_cap() {
        let clock = ManualClock::with_step(16);
        let mut events = ScriptedEvents::default();
        let mut canvas = RecordingCanvas::new();

        // Countdown is 4 s = 250 frames at 16 ms; leave ~40 s of play
        let config = AppConfig {
            seed: 11,
            frame_delay: Duration::ZERO,
            autopilot: true,
            max_frames: Some(2750),
        };
        let score = run_session(config, &clock, &mut events, &mut canvas, &mut NullText);

        // The autopilot never misses; with ~316 ms per round it clears well
        // past the first two difficulty steps
        assert!(score >= 10, "autopilot only scored {score}");
    }

    #[test]
    fn test_timeout_session_scores_zero() {
        let clock = ManualClock::with_step(16);
        let mut events = ScriptedEvents::default();
        let mut canvas = RecordingCanvas::new();

        let score = run_session(
            demo_config(5),
            &clock,
            &mut events,
            &mut canvas,
            &mut NullText,
        );
        assert_eq!(score, 0);

        // Timer budget plus countdown and linger bound the session length:
        // the clock advanced once per frame plus the initial samples
        let elapsed = clock.now_ms();
        let min_expected =
            4 * COUNTDOWN_STEP_MS + (INITIAL_ROUND_TIME * 1000.0) as u64 + GAME_OVER_LINGER_MS;
        assert!(elapsed >= min_expected);
    }
}
