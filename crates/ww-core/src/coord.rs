//! Grid coordinates and movement directions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An integer grid coordinate. `y` grows downwards, so "up" is `y - 1`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// The world origin, where every board is centered.
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true for the world origin.
    pub fn is_origin(self) -> bool {
        self == Self::ORIGIN
    }

    /// The neighbouring coordinate one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.vector();
        Self::new(self.x + dx, self.y + dy)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the four cardinal movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// `W` key.
    Up,
    /// `A` key.
    Left,
    /// `S` key.
    Down,
    /// `D` key.
    Right,
}

impl Direction {
    /// All directions in W, A, S, D order.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Unit vector `(dx, dy)` for this direction.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Left => (-1, 0),
            Self::Down => (0, 1),
            Self::Right => (1, 0),
        }
    }

    /// Parse a WASD key (case-insensitive) or a direction word.
    pub fn parse(s: &str) -> CoreResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "w" | "up" => Ok(Self::Up),
            "a" | "left" => Ok(Self::Left),
            "s" | "down" => Ok(Self::Down),
            "d" | "right" => Ok(Self::Right),
            _ => Err(CoreError::UnknownDirection(s.trim().to_string())),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Left => "left",
            Self::Down => "down",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_parses_case_insensitively() {
        assert_eq!(Direction::parse("W"), Ok(Direction::Up));
        assert_eq!(Direction::parse("w"), Ok(Direction::Up));
        assert_eq!(Direction::parse("A"), Ok(Direction::Left));
        assert_eq!(Direction::parse("s"), Ok(Direction::Down));
        assert_eq!(Direction::parse(" D "), Ok(Direction::Right));
        assert_eq!(Direction::parse("right"), Ok(Direction::Right));
    }

    #[test]
    fn unknown_direction_is_rejected() {
        assert_eq!(
            Direction::parse("X"),
            Err(CoreError::UnknownDirection("X".to_string()))
        );
    }

    #[test]
    fn vectors_match_screen_axes() {
        assert_eq!(Direction::Up.vector(), (0, -1));
        assert_eq!(Direction::Left.vector(), (-1, 0));
        assert_eq!(Direction::Down.vector(), (0, 1));
        assert_eq!(Direction::Right.vector(), (1, 0));
    }

    #[test]
    fn step_applies_vector() {
        let c = Coord::new(5, 5);
        assert_eq!(c.step(Direction::Right), Coord::new(6, 5));
        assert_eq!(c.step(Direction::Up), Coord::new(5, 4));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(-3, 2).to_string(), "(-3, 2)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
