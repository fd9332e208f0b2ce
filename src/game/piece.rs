use std::fmt;

use super::player::PColor;

/// Piece kind. Each player wins with one shape but may drop both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PShape {
    Round,
    Square,
}

impl PShape {
    /// Shapes in move enumeration order.
    pub const ALL: [PShape; 2] = [PShape::Round, PShape::Square];

    pub(crate) fn index(self) -> usize {
        match self {
            PShape::Round => 0,
            PShape::Square => 1,
        }
    }

    /// The player who wins with this shape.
    pub fn owner(self) -> PColor {
        match self {
            PShape::Round => PColor::White,
            PShape::Square => PColor::Red,
        }
    }

    /// Single-letter notation used by [`Move`](super::Move).
    pub fn letter(self) -> char {
        match self {
            PShape::Round => 'r',
            PShape::Square => 's',
        }
    }
}

impl fmt::Display for PShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PShape::Round => f.write_str("Round"),
            PShape::Square => f.write_str("Square"),
        }
    }
}

/// A board position. Row 0 is the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PColor,
    pub shape: PShape,
}

impl Piece {
    pub fn new(color: PColor, shape: PShape) -> Self {
        Piece { color, shape }
    }

    pub fn is(&self, color: PColor, shape: PShape) -> bool {
        self.color == color && self.shape == shape
    }
}

impl fmt::Display for Piece {
    /// `w`/`W` for white round/square, `r`/`R` for red round/square.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match (self.color, self.shape) {
            (PColor::White, PShape::Round) => 'w',
            (PColor::White, PShape::Square) => 'W',
            (PColor::Red, PShape::Round) => 'r',
            (PColor::Red, PShape::Square) => 'R',
        };
        write!(f, "{c}")
    }
}
