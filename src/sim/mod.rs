//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, elapsed time from clock samples
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod color;
pub mod player;
pub mod round;
pub mod state;
pub mod tick;

pub use color::{Color, PALETTE};
pub use player::{Direction, Player};
pub use round::{Round, Wall};
pub use state::{BlinkTimer, DifficultySchedule, GamePhase, GameState};
pub use tick::{TickInput, tick};
