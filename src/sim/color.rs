//! Color palette and collision-relevant color comparison

use rand::Rng;
use serde::{Deserialize, Serialize};

/// An RGBA color. Derived `PartialEq` compares all four channels; gameplay
/// comparisons go through [`Color::rgb_matches`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Collision equality: RGB channels only, alpha ignored. Overlays always
    /// draw at full opacity, so a palette entry gaining a translucent variant
    /// must not change collision semantics.
    pub fn rgb_matches(&self, other: Color) -> bool {
        self.r == other.r && self.g == other.g && self.b == other.b
    }

    /// Draw one color uniformly at random from the wall palette.
    pub fn random_from_palette<R: Rng>(rng: &mut R) -> Color {
        PALETTE[rng.random_range(0..PALETTE.len())]
    }
}

pub const RED: Color = Color::rgb(255, 0, 0);
pub const BLUE: Color = Color::rgb(0, 0, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const GREEN: Color = Color::rgb(0, 255, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// The wall/directive palette. Small enough to stay discriminable at a glance.
pub const PALETTE: [Color; 4] = [RED, BLUE, YELLOW, GREEN];
