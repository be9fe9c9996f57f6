//! Text notation for slice moves.
//!
//! A token is a slice letter optionally followed by a turn suffix:
//!
//! | letter | slice | letter | slice | letter | slice |
//! |--------|-------|--------|-------|--------|-------|
//! | `R`    | x = 1 | `U`    | y = 1 | `F`    | z = 1 |
//! | `M`    | x = 0 | `E`    | y = 0 | `S`    | z = 0 |
//! | `L`    | x = -1| `D`    | y = -1| `B`    | z = -1|
//!
//! No suffix turns clockwise (looking down the positive axis), `'` turns
//! counter-clockwise, and `2` turns clockwise twice. Note that the direction
//! is tied to the axis, not to the face, so `L` and `R` turn the same way.

use std::fmt;

use crate::animation::Clock;
use crate::cube::Cube;
use crate::geometry::Axis;

/// A single quarter turn of one slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub axis: Axis,
    pub layer: i32,
    pub clockwise: bool,
}

impl Move {
    pub const fn new(axis: Axis, layer: i32, clockwise: bool) -> Self {
        Self {
            axis,
            layer,
            clockwise,
        }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            clockwise: !self.clockwise,
            ..self
        }
    }

    /// Slice letter for this move.
    pub const fn letter(self) -> char {
        match (self.axis, self.layer) {
            (Axis::X, 1) => 'R',
            (Axis::X, 0) => 'M',
            (Axis::X, _) => 'L',
            (Axis::Y, 1) => 'U',
            (Axis::Y, 0) => 'E',
            (Axis::Y, _) => 'D',
            (Axis::Z, 1) => 'F',
            (Axis::Z, 0) => 'S',
            (Axis::Z, _) => 'B',
        }
    }

    /// Looks up the slice named by `letter`, turning clockwise.
    pub fn from_letter(letter: char) -> Option<Self> {
        let (axis, layer) = match letter {
            'R' => (Axis::X, 1),
            'M' => (Axis::X, 0),
            'L' => (Axis::X, -1),
            'U' => (Axis::Y, 1),
            'E' => (Axis::Y, 0),
            'D' => (Axis::Y, -1),
            'F' => (Axis::Z, 1),
            'S' => (Axis::Z, 0),
            'B' => (Axis::Z, -1),
            _ => return None,
        };
        Some(Self::new(axis, layer, true))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())?;
        if !self.clockwise {
            write!(f, "'")?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    #[error("empty move")]
    Empty,
    #[error("unknown slice {0:?}")]
    UnknownSlice(char),
    #[error("bad turn suffix {suffix:?} in {token:?}")]
    BadSuffix { token: String, suffix: String },
}

/// Parses one token, expanding `X2` into two quarter turns.
pub fn parse_token(token: &str) -> Result<Vec<Move>, MoveParseError> {
    let mut chars = token.chars();
    let letter = chars.next().ok_or(MoveParseError::Empty)?;
    let quarter = Move::from_letter(letter).ok_or(MoveParseError::UnknownSlice(letter))?;
    match chars.as_str() {
        "" => Ok(vec![quarter]),
        "'" => Ok(vec![quarter.inverse()]),
        "2" => Ok(vec![quarter; 2]),
        suffix => Err(MoveParseError::BadSuffix {
            token: token.to_string(),
            suffix: suffix.to_string(),
        }),
    }
}

/// Parses a whitespace-separated move sequence.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveParseError> {
    let mut moves = Vec::new();
    for token in s.split_whitespace() {
        moves.extend(parse_token(token)?);
    }
    Ok(moves)
}

/// Formats moves separated by spaces.
pub fn format_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<C: Clock> Cube<C> {
    /// Issues `mv` as a slice move. Same gating as [`Cube::rotate_slice`].
    pub fn apply(&mut self, mv: Move) -> bool {
        self.rotate_slice(mv.axis, mv.layer, mv.clockwise)
    }
}
