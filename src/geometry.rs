//! Axis-aligned quarter-turn geometry.
//!
//! All orientation math is done on small integer matrices. A quarter turn
//! about a coordinate axis only ever permutes basis vectors and flips their
//! signs, so composing any number of turns stays exact.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rustc_hash::FxHashSet;

use crate::error::CubeError;

/// An integer column vector.
pub type Vector = [i8; 3];

/// An integer 3x3 matrix, stored row-major.
pub type Matrix = [[i8; 3]; 3];

/// The identity matrix.
pub const IDENTITY: Matrix = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];

/// One of the three coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the axis number (0, 1, or 2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the two remaining axes in ascending order.
    #[inline]
    pub const fn others(self) -> (Axis, Axis) {
        match self {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        }
    }

    /// Returns the positive unit vector along this axis.
    pub const fn unit(self) -> Vector {
        let mut v = [0; 3];
        v[self as usize] = 1;
        v
    }
}

impl TryFrom<usize> for Axis {
    type Error = CubeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::X),
            1 => Ok(Axis::Y),
            2 => Ok(Axis::Z),
            _ => Err(CubeError::InvalidAxis(value)),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Direction of a quarter turn.
///
/// `CounterClockwise` (0) is the positive, right-handed turn seen from the
/// positive end of the axis looking back at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    CounterClockwise = 0,
    Clockwise = 1,
}

impl Direction {
    /// Returns the direction number (0 or 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the opposite direction.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Direction::CounterClockwise => Direction::Clockwise,
            Direction::Clockwise => Direction::CounterClockwise,
        }
    }
}

impl TryFrom<usize> for Direction {
    type Error = CubeError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Direction::CounterClockwise),
            1 => Ok(Direction::Clockwise),
            _ => Err(CubeError::InvalidDirection(value)),
        }
    }
}

/// Which end of an axis something lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns `+1` or `-1`.
    #[inline]
    pub const fn value(self) -> i8 {
        match self {
            Sign::Positive => 1,
            Sign::Negative => -1,
        }
    }
}

/// A semantic face name, independent of how the puzzle is currently held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Right,
    Left,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Right,
        Face::Left,
        Face::Front,
        Face::Back,
    ];

    /// Returns the axis and end of that axis this face lies on in the
    /// unrotated frame.
    pub const fn axis_sign(self) -> (Axis, Sign) {
        match self {
            Face::Right => (Axis::X, Sign::Positive),
            Face::Left => (Axis::X, Sign::Negative),
            Face::Up => (Axis::Y, Sign::Positive),
            Face::Down => (Axis::Y, Sign::Negative),
            Face::Front => (Axis::Z, Sign::Positive),
            Face::Back => (Axis::Z, Sign::Negative),
        }
    }

    /// Inverse of [`Face::axis_sign`].
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Face {
        match (axis, sign) {
            (Axis::X, Sign::Positive) => Face::Right,
            (Axis::X, Sign::Negative) => Face::Left,
            (Axis::Y, Sign::Positive) => Face::Up,
            (Axis::Y, Sign::Negative) => Face::Down,
            (Axis::Z, Sign::Positive) => Face::Front,
            (Axis::Z, Sign::Negative) => Face::Back,
        }
    }

    /// Returns the outward unit normal of this face.
    pub const fn vector(self) -> Vector {
        let (axis, sign) = self.axis_sign();
        let mut v = [0; 3];
        v[axis as usize] = sign.value();
        v
    }

    /// Returns the face on the other side of the cube.
    pub const fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Returns the single-letter name used in turn notation.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Parses a notation letter (case-insensitive).
    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|face| face.letter() == letter.to_ascii_uppercase())
    }

    /// Returns the lowercase full name of this face.
    pub const fn name(self) -> &'static str {
        match self {
            Face::Up => "up",
            Face::Down => "down",
            Face::Right => "right",
            Face::Left => "left",
            Face::Front => "front",
            Face::Back => "back",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Face {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next()) {
            if let Some(face) = Face::from_letter(letter) {
                return Ok(face);
            }
        }
        Face::ALL
            .into_iter()
            .find(|face| face.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CubeError::UnknownFace(s.to_string()))
    }
}

/// Builds the quarter-turn matrix about `axis`.
///
/// The 2x2 block on the two remaining axes is `[[0,-1],[1,0]]` when
/// `axis + direction` is even and its transpose otherwise. The parity rule
/// makes direction 0 the positive right-handed turn for every axis.
pub const fn rotation_matrix(axis: Axis, direction: Direction) -> Matrix {
    let block: [[i8; 2]; 2] = if (axis.index() + direction.index()) % 2 == 0 {
        [[0, -1], [1, 0]]
    } else {
        [[0, 1], [-1, 0]]
    };
    let (a, b) = axis.others();
    let (a, b) = (a.index(), b.index());

    let mut m = IDENTITY;
    m[a][a] = block[0][0];
    m[a][b] = block[0][1];
    m[b][a] = block[1][0];
    m[b][b] = block[1][1];
    m
}

/// Computes `m * v`.
#[inline]
pub fn mul_vec(m: &Matrix, v: Vector) -> Vector {
    let mut out = [0; 3];
    for (row, value) in m.iter().zip(&mut out) {
        *value = row[0] * v[0] + row[1] * v[1] + row[2] * v[2];
    }
    out
}

/// Computes `a * b`.
pub fn mul(a: &Matrix, b: &Matrix) -> Matrix {
    let mut out = [[0; 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            out[r][c] = (0..3).map(|i| a[r][i] * b[i][c]).sum();
        }
    }
    out
}

/// Returns the transpose of `m`.
pub fn transpose(m: &Matrix) -> Matrix {
    let mut out = [[0; 3]; 3];
    for r in 0..3 {
        for c in 0..3 {
            out[c][r] = m[r][c];
        }
    }
    out
}

/// Returns the determinant of `m`.
pub fn determinant(m: &Matrix) -> i32 {
    let m = m.map(|row| row.map(i32::from));
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Returns the axis and sign of a signed basis vector, or `None` if `v` is
/// not one.
pub fn axis_sign_of(v: Vector) -> Option<(Axis, Sign)> {
    let mut found = None;
    for (axis, &component) in Axis::ALL.iter().zip(&v) {
        let sign = match component {
            0 => continue,
            1 => Sign::Positive,
            -1 => Sign::Negative,
            _ => return None,
        };
        if found.is_some() {
            return None;
        }
        found = Some((*axis, sign));
    }
    found
}

/// Generates every orientation reachable by composing quarter turns.
///
/// Starts from the identity and closes over the six quarter-turn generators.
/// The result is the rotation group of the cube: 24 matrices, identity first.
pub fn all_orientations() -> Vec<Matrix> {
    let generators: Vec<Matrix> = Axis::ALL
        .into_iter()
        .flat_map(|axis| {
            [Direction::CounterClockwise, Direction::Clockwise]
                .map(|direction| rotation_matrix(axis, direction))
        })
        .collect();

    let mut seen: FxHashSet<Matrix> = FxHashSet::default();
    let mut orientations = Vec::new();
    let mut queue = VecDeque::from([IDENTITY]);

    while let Some(current) = queue.pop_front() {
        if !seen.insert(current) {
            continue;
        }
        orientations.push(current);
        for generator in &generators {
            let next = mul(generator, &current);
            if !seen.contains(&next) {
                queue.push_back(next);
            }
        }
    }

    orientations
}
