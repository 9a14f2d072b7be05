//! Player motion model
//!
//! The player is a circle at the arena center that animates in a straight
//! line to the inner edge of one wall. Motion is a deterministic function of
//! the clock: armed once, interpolated per tick, clamped at the target.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::arena_center;
use crate::consts::*;

/// A directional move intent. There is deliberately no "none" member; an
/// absent direction is `Option::None` so it can never reach collision logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Motion state. A completed move stays `Moving` until the player is reset;
/// the state machine decides when new input becomes legal again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum Motion {
    Idle,
    Moving {
        dir: Direction,
        start: Vec2,
        target: Vec2,
        started_ms: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    motion: Motion,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: arena_center(),
            motion: Motion::Idle,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the player back at the arena center and clear any motion.
    pub fn reset_to_center(&mut self) {
        self.pos = arena_center();
        self.motion = Motion::Idle;
    }

    /// Arm a move toward the wall facing `dir`. No-op while a motion is in
    /// progress. The target projects the current position onto the inner
    /// wall boundary, offset by the player radius, preserving the off-axis
    /// coordinate.
    pub fn arm(&mut self, dir: Direction, now_ms: u64) {
        if self.is_moving() {
            return;
        }

        let inset = (WALL_THICKNESS + PLAYER_RADIUS) as f32;
        let target = match dir {
            Direction::Up => Vec2::new(self.pos.x, inset),
            Direction::Down => Vec2::new(self.pos.x, WINDOW_HEIGHT as f32 - inset),
            Direction::Left => Vec2::new(inset, self.pos.y),
            Direction::Right => Vec2::new(WINDOW_WIDTH as f32 - inset, self.pos.y),
        };

        self.motion = Motion::Moving {
            dir,
            start: self.pos,
            target,
            started_ms: now_ms,
        };
    }

    /// Advance the interpolation to `now_ms`. No effect when idle; idempotent
    /// once the animation duration has elapsed (t is clamped to 1).
    pub fn advance(&mut self, now_ms: u64) {
        if let Motion::Moving {
            start,
            target,
            started_ms,
            ..
        } = self.motion
        {
            let elapsed = now_ms.saturating_sub(started_ms);
            let t = (elapsed as f32 / MOVE_DURATION_MS as f32).clamp(0.0, 1.0);
            self.pos = start.lerp(target, t);
        }
    }

    /// True iff a motion is armed. Completion does not clear this.
    pub fn is_moving(&self) -> bool {
        !matches!(self.motion, Motion::Idle)
    }

    /// True iff a motion is armed and its full duration has elapsed. Exactly
    /// at the boundary counts as complete.
    pub fn is_complete(&self, now_ms: u64) -> bool {
        match self.motion {
            Motion::Idle => false,
            Motion::Moving { started_ms, .. } => {
                now_ms.saturating_sub(started_ms) >= MOVE_DURATION_MS
            }
        }
    }

    /// The armed direction, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self.motion {
            Motion::Idle => None,
            Motion::Moving { dir, .. } => Some(dir),
        }
    }
}
