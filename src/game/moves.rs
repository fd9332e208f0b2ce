use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;

use super::piece::PShape;

/// A piece shape to drop into a column. The absence of a move is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub column: usize,
    pub shape: PShape,
}

impl Move {
    pub fn new(column: usize, shape: PShape) -> Self {
        Move { column, shape }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.shape.letter(), self.column)
    }
}

/// Parses `<shape><column>` notation, e.g. `r3` or `S0`.
impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let shape = match chars.next().map(|c| c.to_ascii_lowercase()) {
            Some('r') => PShape::Round,
            Some('s') => PShape::Square,
            _ => return Err(MoveError::Parse(s.to_string())),
        };
        let column = chars
            .as_str()
            .parse::<usize>()
            .map_err(|_| MoveError::Parse(s.to_string()))?;
        Ok(Move { column, shape })
    }
}
