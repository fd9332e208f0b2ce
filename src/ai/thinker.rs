use crate::game::{Board, Move, MoveError};

use super::cancel::CancellationToken;

/// Universal interface for all AI players.
pub trait Thinker: Send {
    /// Choose a move for the side to move on `board`.
    ///
    /// The board may be mutated while thinking but is restored before
    /// returning. `Ok(None)` means no move was selected, either because none
    /// is legal or because `token` tripped before any was evaluated.
    fn think(
        &mut self,
        board: &mut Board,
        token: &CancellationToken,
    ) -> Result<Option<Move>, MoveError>;

    /// Return the thinker's display name.
    fn name(&self) -> &str;
}
