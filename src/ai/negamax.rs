use crate::game::{Board, GameOutcome, Move, MoveError, PColor, PShape};

use super::cancel::CancellationToken;
use super::heuristic::{CorridorHeuristic, Heuristic};
use super::thinker::Thinker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched before falling back to the heuristic.
    pub max_depth: usize,
    /// Alpha-beta cutoffs. Disabling them searches the full tree and yields
    /// the same move and score.
    pub pruning: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_depth: 3,
            pruning: true,
        }
    }
}

/// A move together with its negamax score. `mv` is `None` at leaves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub mv: Option<Move>,
    pub score: f64,
}

impl ScoredMove {
    fn leaf(score: f64) -> Self {
        ScoredMove { mv: None, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome {
    Complete(ScoredMove),
    /// The token tripped. `partial` holds the best root move among those
    /// searched to completion, if any were.
    Cancelled { partial: Option<ScoredMove> },
}

impl SearchOutcome {
    pub fn best_move(&self) -> Option<Move> {
        match self {
            SearchOutcome::Complete(best) => best.mv,
            SearchOutcome::Cancelled { partial } => partial.and_then(|best| best.mv),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchOutcome::Cancelled { .. })
    }
}

/// Counters for the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub evaluations: u64,
    pub cutoffs: u64,
}

/// Why a subtree stopped early.
enum Abort {
    Cancelled(Option<ScoredMove>),
    Board(MoveError),
}

impl From<MoveError> for Abort {
    fn from(e: MoveError) -> Self {
        Abort::Board(e)
    }
}

/// Negamax thinker with alpha-beta pruning.
pub struct NegamaxThinker {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl NegamaxThinker {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristic(config, Box::new(CorridorHeuristic::default()))
    }

    pub fn with_heuristic(config: SearchConfig, heuristic: Box<dyn Heuristic>) -> Self {
        NegamaxThinker {
            config,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search for the best move for `turn`, which must be the side to move.
    ///
    /// The board is left exactly as it was found, whether the search
    /// completes, is cancelled or fails.
    pub fn search(
        &mut self,
        board: &mut Board,
        turn: PColor,
        token: &CancellationToken,
    ) -> Result<SearchOutcome, MoveError> {
        debug_assert_eq!(turn, board.turn(), "search turn must be the side to move");
        self.stats = SearchStats::default();

        let outcome =
            match self.negamax(board, token, turn, 0, f64::NEG_INFINITY, f64::INFINITY) {
                Ok(best) => SearchOutcome::Complete(best),
                Err(Abort::Cancelled(partial)) => SearchOutcome::Cancelled { partial },
                Err(Abort::Board(e)) => return Err(e),
            };

        log::debug!(
            "negamax depth {}: {:?} | nodes: {} | evals: {} | cutoffs: {}",
            self.config.max_depth,
            outcome,
            self.stats.nodes,
            self.stats.evaluations,
            self.stats.cutoffs,
        );
        Ok(outcome)
    }

    fn negamax(
        &mut self,
        board: &mut Board,
        token: &CancellationToken,
        turn: PColor,
        depth: usize,
        mut alpha: f64,
        beta: f64,
    ) -> Result<ScoredMove, Abort> {
        self.stats.nodes += 1;

        if token.is_cancelled() {
            return Err(Abort::Cancelled(None));
        }

        if let Some(outcome) = board.check_winner() {
            let score = match outcome {
                GameOutcome::Winner(winner) if winner == turn => f64::INFINITY,
                GameOutcome::Winner(_) => f64::NEG_INFINITY,
                GameOutcome::Draw => 0.0,
            };
            return Ok(ScoredMove::leaf(score));
        }

        if depth == self.config.max_depth {
            self.stats.evaluations += 1;
            return Ok(ScoredMove::leaf(self.heuristic.evaluate(board, turn)));
        }

        let mut best = ScoredMove::leaf(f64::NEG_INFINITY);

        for col in 0..board.cols() {
            if board.is_column_full(col) {
                continue;
            }
            for shape in PShape::ALL {
                if board.piece_count(turn, shape) == 0 {
                    continue;
                }

                board.do_move(shape, col)?;
                let child = self.negamax(board, token, turn.other(), depth + 1, -beta, -alpha);
                board.undo_move()?;

                let score = match child {
                    Ok(child) => -child.score,
                    // Only the root keeps what it has fully searched
                    Err(Abort::Cancelled(_)) if depth == 0 => {
                        return Err(Abort::Cancelled(best.mv.map(|_| best)));
                    }
                    Err(abort) => return Err(abort),
                };

                if depth == 0 {
                    log::trace!("root move {} scored {}", Move::new(col, shape), score);
                }

                // A lost position still reports a legal move
                if score > best.score || best.mv.is_none() {
                    best = ScoredMove {
                        mv: Some(Move::new(col, shape)),
                        score,
                    };
                }

                if score > alpha {
                    alpha = score;
                }

                if self.config.pruning && alpha >= beta {
                    self.stats.cutoffs += 1;
                    return Ok(best);
                }
            }
        }

        Ok(best)
    }
}

impl Thinker for NegamaxThinker {
    fn think(
        &mut self,
        board: &mut Board,
        token: &CancellationToken,
    ) -> Result<Option<Move>, MoveError> {
        let turn = board.turn();
        Ok(self.search(board, turn, token)?.best_move())
    }

    fn name(&self) -> &str {
        "Negamax"
    }
}
