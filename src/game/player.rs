use std::fmt;

use super::piece::PShape;

/// Player identity, which is also the color of the pieces they drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PColor {
    White,
    Red,
}

impl PColor {
    /// Get the other player
    pub fn other(self) -> PColor {
        match self {
            PColor::White => PColor::Red,
            PColor::Red => PColor::White,
        }
    }

    /// The shape this player wins with.
    pub fn shape(self) -> PShape {
        match self {
            PColor::White => PShape::Round,
            PColor::Red => PShape::Square,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PColor::White => 0,
            PColor::Red => 1,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            PColor::White => "White",
            PColor::Red => "Red",
        }
    }
}

impl fmt::Display for PColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PColor::White.other(), PColor::Red);
        assert_eq!(PColor::Red.other(), PColor::White);
    }

    #[test]
    fn test_player_shape() {
        assert_eq!(PColor::White.shape(), PShape::Round);
        assert_eq!(PColor::Red.shape(), PShape::Square);
        assert_ne!(PColor::White.shape(), PColor::Red.shape());
    }

    #[test]
    fn test_player_name() {
        assert_eq!(PColor::White.name(), "White");
        assert_eq!(PColor::Red.to_string(), "Red");
    }
}
