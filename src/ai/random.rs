use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, GameOutcome, Move, MoveError};

use super::cancel::CancellationToken;
use super::thinker::Thinker;

/// A one-ply thinker: plays an immediate win if there is one, otherwise a
/// random move that does not complete a line for the opponent.
pub struct RandomFallbackThinker {
    rng: StdRng,
}

impl RandomFallbackThinker {
    pub fn new() -> Self {
        RandomFallbackThinker {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        RandomFallbackThinker {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFallbackThinker {
    fn default() -> Self {
        Self::new()
    }
}

impl Thinker for RandomFallbackThinker {
    fn think(
        &mut self,
        board: &mut Board,
        _token: &CancellationToken,
    ) -> Result<Option<Move>, MoveError> {
        let color = board.turn();
        let moves = board.legal_moves();
        let mut non_losing = Vec::with_capacity(moves.len());

        for &mv in &moves {
            board.do_move(mv.shape, mv.column)?;
            let outcome = board.check_winner();
            board.undo_move()?;

            match outcome {
                Some(GameOutcome::Winner(winner)) if winner == color => return Ok(Some(mv)),
                Some(GameOutcome::Winner(_)) => {}
                _ => non_losing.push(mv),
            }
        }

        let pool = if non_losing.is_empty() { &moves } else { &non_losing };
        if pool.is_empty() {
            return Ok(None);
        }
        let idx = self.rng.random_range(0..pool.len());
        Ok(Some(pool[idx]))
    }

    fn name(&self) -> &str {
        "RandomFallback"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::game::PShape;

    fn board_from(moves: &[&str]) -> Board {
        let moves: Vec<Move> = moves.iter().map(|m| m.parse().unwrap()).collect();
        Board::from_moves(&MatchConfig::default(), &moves).unwrap()
    }

    #[test]
    fn test_selects_legal_action() {
        let mut agent = RandomFallbackThinker::new();
        let mut board = Board::new();
        let legal = board.legal_moves();
        let token = CancellationToken::new();

        for _ in 0..100 {
            let mv = agent.think(&mut board, &token).unwrap().unwrap();
            assert!(legal.contains(&mv), "Move {} is not legal", mv);
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut board = board_from(&["r1", "s1", "r2", "s2", "r3", "s3"]);
        let before = board.clone();
        let mut agent = RandomFallbackThinker::seeded(1);
        let mv = agent
            .think(&mut board, &CancellationToken::new())
            .unwrap()
            .unwrap();
        assert_eq!(mv, Move::new(0, PShape::Round));
        assert_eq!(board, before);
    }

    #[test]
    fn test_avoids_completing_opponent_line() {
        // Red squares on (0,0..2): a white square on (0,3) would hand Red the game
        let mut board = board_from(&["r6", "s0", "r6", "s1", "r5", "s2"]);
        let token = CancellationToken::new();
        for seed in 0..50 {
            let mut agent = RandomFallbackThinker::seeded(seed);
            let mv = agent.think(&mut board, &token).unwrap().unwrap();
            assert_ne!(mv, Move::new(3, PShape::Square));
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut board = Board::new();
        let token = CancellationToken::new();
        let a = RandomFallbackThinker::seeded(9).think(&mut board, &token).unwrap();
        let b = RandomFallbackThinker::seeded(9).think(&mut board, &token).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_plays_full_game() {
        let mut agent1 = RandomFallbackThinker::seeded(3);
        let mut agent2 = RandomFallbackThinker::seeded(4);
        let mut board = Board::new();
        let token = CancellationToken::new();

        let mut turn = 0;
        while board.check_winner().is_none() {
            let mv = if turn % 2 == 0 {
                agent1.think(&mut board, &token)
            } else {
                agent2.think(&mut board, &token)
            }
            .unwrap()
            .unwrap();
            board.do_move(mv.shape, mv.column).unwrap();
            turn += 1;
        }

        assert!(board.check_winner().is_some());
    }

    #[test]
    fn test_name() {
        let agent = RandomFallbackThinker::new();
        assert_eq!(agent.name(), "RandomFallback");
    }
}
