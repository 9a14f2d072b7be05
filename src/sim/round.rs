//! Round configuration: directive color and the four wall colors

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::player::Direction;

/// The four arena walls, in the order they are stored in [`Round::walls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Top,
    Bottom,
    Left,
    Right,
}

impl Wall {
    pub const ALL: [Wall; 4] = [Wall::Top, Wall::Bottom, Wall::Left, Wall::Right];
}

impl From<Direction> for Wall {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Wall::Top,
            Direction::Down => Wall::Bottom,
            Direction::Left => Wall::Left,
            Direction::Right => Wall::Right,
        }
    }
}

/// One round's coloring: the directive the player must chase plus the color
/// of each wall. At least one wall always carries the directive color;
/// additional incidental matches are allowed and count as hits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub directive: Color,
    pub walls: [Color; 4],
}

impl Round {
    /// Generate a fresh round: pick the directive, color all four walls
    /// independently, then force one uniformly-chosen wall to the directive.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let directive = Color::random_from_palette(rng);
        let mut walls = [
            Color::random_from_palette(rng),
            Color::random_from_palette(rng),
            Color::random_from_palette(rng),
            Color::random_from_palette(rng),
        ];
        walls[rng.random_range(0..walls.len())] = directive;
        Round { directive, walls }
    }

    pub fn wall_color(&self, wall: Wall) -> Color {
        self.walls[wall as usize]
    }

    /// True iff the wall the player moved toward carries the directive color.
    pub fn is_hit(&self, dir: Direction) -> bool {
        self.wall_color(Wall::from(dir)).rgb_matches(self.directive)
    }

    /// First direction whose wall matches the directive. Generation
    /// guarantees one exists; used by the autopilot and scenario tests.
    pub fn matching_direction(&self) -> Direction {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .find(|d| self.is_hit(*d))
        .unwrap_or(Direction::Up)
    }
}
