//! Text notation for twists and whole-puzzle rotations.
//!
//! - `R`, `U'`, `3F`: turn one layer, counted from the named side starting
//!   at 1. No suffix is clockwise seen from that side, `'` is
//!   counter-clockwise.
//! - `x`, `y'`, `z`: rotate the whole puzzle about the right, up or front
//!   side.

use std::fmt;
use std::str::FromStr;

use crate::cube::Cube;
use crate::error::{CubeError, Result};
use crate::geometry::{Direction, Face};
use crate::layers::LayerMask;

/// A parsed notation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Turn a single layer, 0-based from `face`.
    Layer {
        face: Face,
        layer: usize,
        direction: Direction,
    },
    /// Rotate the whole puzzle about `face`.
    Rotation { face: Face, direction: Direction },
}

impl Turn {
    /// Applies this turn to `cube`, recording layer turns in its history.
    pub fn apply(&self, cube: &mut Cube) -> Result<()> {
        match *self {
            Turn::Layer {
                face,
                layer,
                direction,
            } => {
                let layers = LayerMask::single(cube.size(), layer)?;
                cube.twist_relative_to_face(face, layers, direction)
            }
            Turn::Rotation { face, direction } => {
                cube.rotate_whole_relative_to_face(face, direction);
                Ok(())
            }
        }
    }
}

impl FromStr for Turn {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || CubeError::InvalidTurn(s.to_string());

        let (body, direction) = match s.strip_suffix('\'') {
            Some(body) => (body, Direction::CounterClockwise),
            None => (s, Direction::Clockwise),
        };

        let mut chars = body.chars();
        let letter = chars.next_back().ok_or_else(invalid)?;
        let prefix = chars.as_str();

        let rotation_face = match letter {
            'x' => Some(Face::Right),
            'y' => Some(Face::Up),
            'z' => Some(Face::Front),
            _ => None,
        };
        if let Some(face) = rotation_face {
            if !prefix.is_empty() {
                return Err(invalid());
            }
            return Ok(Turn::Rotation { face, direction });
        }

        let face = Face::from_letter(letter)
            .filter(|_| letter.is_ascii_uppercase())
            .ok_or_else(invalid)?;
        let layer = if prefix.is_empty() {
            0
        } else {
            let number: usize = prefix.parse().map_err(|_| invalid())?;
            number.checked_sub(1).ok_or_else(invalid)?
        };

        Ok(Turn::Layer {
            face,
            layer,
            direction,
        })
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (direction, body) = match *self {
            Turn::Layer {
                face,
                layer,
                direction,
            } => {
                let prefix = if layer == 0 {
                    String::new()
                } else {
                    (layer + 1).to_string()
                };
                (direction, format!("{prefix}{}", face.letter()))
            }
            Turn::Rotation { face, direction } => {
                let letter = match face {
                    Face::Right | Face::Left => 'x',
                    Face::Up | Face::Down => 'y',
                    Face::Front | Face::Back => 'z',
                };
                // rotations about the opposite side run the other way
                let direction = match face {
                    Face::Right | Face::Up | Face::Front => direction,
                    Face::Left | Face::Down | Face::Back => direction.inverse(),
                };
                (direction, letter.to_string())
            }
        };
        f.write_str(&body)?;
        if direction == Direction::CounterClockwise {
            f.write_str("'")?;
        }
        Ok(())
    }
}

/// Parses a whitespace-separated sequence of turns.
pub fn parse_sequence(s: &str) -> Result<Vec<Turn>> {
    s.split_whitespace().map(str::parse).collect()
}
