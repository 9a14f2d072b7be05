//! Game state and core session types
//!
//! Everything the state machine mutates lives here, owned by one explicit
//! session object. No globals.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::round::Round;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-game ritual: "3", "2", "1", "Go!" for one second each
    Countdown,
    /// Waiting for one directional input
    Playing,
    /// Move animation in flight; the round timer keeps running
    Moving,
    /// Terminal; no further score or timer mutation
    GameOver,
}

/// Shrinking round time budget. Every fifth success tightens the budget by a
/// fixed step down to a hard floor; the budget never grows within a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultySchedule {
    successes: u32,
    max_time: f32,
}

impl Default for DifficultySchedule {
    fn default() -> Self {
        Self {
            successes: 0,
            max_time: INITIAL_ROUND_TIME,
        }
    }
}

impl DifficultySchedule {
    pub fn record_success(&mut self) {
        self.successes += 1;
        if self.successes.is_multiple_of(SUCCESSES_PER_STEP) {
            self.max_time = (self.max_time - ROUND_TIME_STEP).max(MIN_ROUND_TIME);
        }
    }

    /// Current round time budget in seconds.
    pub fn max_time(&self) -> f32 {
        self.max_time
    }

    pub fn successes(&self) -> u32 {
        self.successes
    }
}

/// Gauge blink feedback. Runs every tick regardless of phase; the flag only
/// toggles while the gauge fill is at or below half width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlinkTimer {
    pub on: bool,
    last_toggle_ms: u64,
}

impl BlinkTimer {
    pub fn update(&mut self, now_ms: u64, low: bool) {
        if low && now_ms.saturating_sub(self.last_toggle_ms) >= BLINK_INTERVAL_MS {
            self.on = !self.on;
            self.last_toggle_ms = now_ms;
        }
    }
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    #[serde(skip, default = "fresh_rng")]
    rng: Pcg32,
    /// Successful rounds this session
    pub score: u32,
    pub schedule: DifficultySchedule,
    /// Remaining seconds in the current round, clamped at zero
    pub time_left: f32,
    pub phase: GamePhase,
    /// Countdown step: 3, 2, 1, then 0 for "Go!"
    pub countdown_step: u8,
    step_started_ms: u64,
    /// Set once, on the transition into `GameOver`
    pub game_over_at_ms: Option<u64>,
    quit_requested: bool,
    pub blink: BlinkTimer,
    pub player: Player,
    pub round: Round,
}

impl GameState {
    /// Create a new session. `now_ms` anchors the countdown ritual.
    pub fn new(seed: u64, now_ms: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = Round::generate(&mut rng);
        Self {
            seed,
            rng,
            score: 0,
            schedule: DifficultySchedule::default(),
            time_left: INITIAL_ROUND_TIME,
            phase: GamePhase::Countdown,
            countdown_step: 3,
            step_started_ms: now_ms,
            game_over_at_ms: None,
            quit_requested: false,
            blink: BlinkTimer::default(),
            player: Player::new(),
            round,
        }
    }

    /// Fire-once terminal transition.
    pub(crate) fn enter_game_over(&mut self, now_ms: u64) {
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::GameOver;
            self.game_over_at_ms = Some(now_ms);
        }
    }

    pub(crate) fn request_quit(&mut self, now_ms: u64) {
        self.quit_requested = true;
        self.enter_game_over(now_ms);
    }

    /// Advance the countdown ritual; called only while in `Countdown`.
    pub(crate) fn advance_countdown(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.step_started_ms) < COUNTDOWN_STEP_MS {
            return;
        }
        if self.countdown_step > 0 {
            self.countdown_step -= 1;
            self.step_started_ms = now_ms;
        } else {
            // "Go!" second elapsed; the round timer starts now
            self.time_left = self.schedule.max_time();
            self.phase = GamePhase::Playing;
        }
    }

    /// Label for the current countdown step.
    pub fn countdown_label(&self) -> &'static str {
        match self.countdown_step {
            3 => "3",
            2 => "2",
            1 => "1",
            _ => "Go!",
        }
    }

    /// Resolve a successful round: bump score, tighten the schedule, reset
    /// the player and timer, roll a fresh round.
    pub(crate) fn resolve_success(&mut self) {
        self.score += 1;
        self.schedule.record_success();
        self.player.reset_to_center();
        self.time_left = self.schedule.max_time();
        self.round = Round::generate(&mut self.rng);
        self.phase = GamePhase::Playing;
    }

    /// Gauge fill fraction, 0..=1.
    pub fn gauge_fraction(&self) -> f32 {
        (self.time_left / self.schedule.max_time()).clamp(0.0, 1.0)
    }

    /// True once the gauge would fill at or below half width.
    pub fn gauge_low(&self) -> bool {
        self.gauge_fraction() <= 0.5
    }

    /// Whether the host loop should end the session: immediately on quit,
    /// otherwise a fixed linger after entering game over.
    pub fn should_close(&self, now_ms: u64) -> bool {
        if self.quit_requested {
            return true;
        }
        match self.game_over_at_ms {
            Some(at) => now_ms.saturating_sub(at) >= GAME_OVER_LINGER_MS,
            None => false,
        }
    }
}
