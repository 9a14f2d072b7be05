//! Wall Dash - a four-wall color reaction game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, rounds, game state machine)
//! - `platform`: Clock/input/canvas collaborator contracts + headless backend
//! - `ui`: Pure scene composition (game state -> draw calls)
//! - `app`: Host frame loop

pub mod app;
pub mod platform;
pub mod sim;
pub mod ui;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (pixels)
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;
    /// Thickness of the four colored wall slabs
    pub const WALL_THICKNESS: i32 = 50;

    /// Player collision radius
    pub const PLAYER_RADIUS: i32 = 15;
    /// Duration of one center-to-wall move animation
    pub const MOVE_DURATION_MS: u64 = 300;

    /// Round time budget at session start (seconds)
    pub const INITIAL_ROUND_TIME: f32 = 3.0;
    /// Hard floor for the round time budget
    pub const MIN_ROUND_TIME: f32 = 1.5;
    /// Budget reduction applied at each difficulty step
    pub const ROUND_TIME_STEP: f32 = 0.2;
    /// Number of successes between difficulty steps
    pub const SUCCESSES_PER_STEP: u32 = 5;

    /// Timer gauge dimensions
    pub const GAUGE_WIDTH: i32 = 150;
    pub const GAUGE_HEIGHT: i32 = 20;
    /// Gauge blink cadence once the fill is at or below half width
    pub const BLINK_INTERVAL_MS: u64 = 200;

    /// Duration of each countdown step ("3", "2", "1", "Go!")
    pub const COUNTDOWN_STEP_MS: u64 = 1000;
    /// How long the game-over screen lingers before the session closes
    pub const GAME_OVER_LINGER_MS: u64 = 2000;

    /// Frame pacing delay (~60 FPS); pacing only, never used as elapsed time
    pub const FRAME_DELAY_MS: u64 = 16;
}

/// Center of the arena in window coordinates
#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::new(
        consts::WINDOW_WIDTH as f32 / 2.0,
        consts::WINDOW_HEIGHT as f32 / 2.0,
    )
}
