//! ColorShapeLinks game logic: pieces, moves, and a mutable board with
//! move/undo and win detection over precomputed win corridors.

mod board;
mod moves;
mod piece;
mod player;

pub use crate::error::MoveError;
pub use board::{Board, GameOutcome};
pub use moves::Move;
pub use piece::{PShape, Piece, Pos};
pub use player::PColor;
