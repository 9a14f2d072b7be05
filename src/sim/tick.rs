//! Per-frame state advance
//!
//! One synchronous `tick` per rendered frame, in a fixed order: quit check,
//! countdown/timer advance, motion interpolation, round resolution, blink
//! feedback. Elapsed time comes from clock samples taken by the host, never
//! from the frame delay.

use super::player::Direction;
use super::state::{GamePhase, GameState};

/// Input gathered by the host for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// At most one direction intent per tick; consumed only while idle in
    /// `Playing`
    pub direction: Option<Direction>,
    /// External quit signal; ends the session immediately
    pub quit: bool,
    /// Demo mode: synthesize a matching direction whenever idle
    pub autopilot: bool,
}

/// Advance the game state by one tick. `now_ms` is the tick's single clock
/// sample; `dt` is the elapsed seconds since the previous tick.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: u64, dt: f32) {
    if input.quit {
        state.request_quit(now_ms);
        return;
    }

    match state.phase {
        GamePhase::Countdown => {
            // Gameplay input is ignored until "Go!" has run its second
            state.advance_countdown(now_ms);
        }

        GamePhase::Playing | GamePhase::Moving => {
            state.time_left -= dt;

            // Timeout wins over any same-tick movement completion
            if state.time_left <= 0.0 {
                state.time_left = 0.0;
                state.enter_game_over(now_ms);
            } else {
                if state.phase == GamePhase::Playing && !state.player.is_moving() {
                    let dir = input.direction.or_else(|| {
                        input
                            .autopilot
                            .then(|| state.round.matching_direction())
                    });
                    if let Some(dir) = dir {
                        state.player.arm(dir, now_ms);
                        state.phase = GamePhase::Moving;
                    }
                }

                if state.phase == GamePhase::Moving {
                    state.player.advance(now_ms);
                    if state.player.is_complete(now_ms) {
                        // An unarmed direction cannot occur here; map it to a
                        // miss rather than panicking
                        let hit = state
                            .player
                            .direction()
                            .map(|d| state.round.is_hit(d))
                            .unwrap_or(false);
                        if hit {
                            state.resolve_success();
                        } else {
                            state.enter_game_over(now_ms);
                        }
                    }
                }
            }
        }

        GamePhase::GameOver => {}
    }

    // Blink feedback runs every tick, independent of phase
    let low = state.gauge_low();
    state.blink.update(now_ms, low);
}
