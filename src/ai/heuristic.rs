use crate::game::{Board, PColor, Pos};

/// Trait for evaluating a board position from a player's perspective.
///
/// Implementations used by [`NegamaxThinker`](super::NegamaxThinker) must be
/// antisymmetric: `evaluate(b, p) == -evaluate(b, p.other())`, and must return
/// finite values so that decided games always dominate.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: PColor) -> f64;
}

/// How much of a corridor's structure the heuristic looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicLevel {
    /// Weighted piece counting only.
    PieceCount,
    /// Adds escalating bonuses for runs of the player's shape.
    RunLength,
    /// Run bonuses only for runs that still have room to become a win,
    /// doubled when open at both ends.
    #[default]
    OpenSpace,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    pub level: HeuristicLevel,
    pub color_weight: f64,
    pub shape_weight: f64,
    pub run_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        HeuristicConfig {
            level: HeuristicLevel::default(),
            color_weight: 1.0,
            shape_weight: 2.0,
            run_weight: 1.0,
        }
    }
}

/// Default heuristic: scans every win corridor and scores the pieces in it.
///
/// A piece of the player's color adds `color_weight`, one of the other color
/// subtracts it; likewise `shape_weight` for the player's winning shape, which
/// weighs more because a shape line beats a color line.
pub struct CorridorHeuristic {
    config: HeuristicConfig,
}

impl CorridorHeuristic {
    pub fn new(config: HeuristicConfig) -> Self {
        CorridorHeuristic { config }
    }

    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// One side's claim on a corridor. A corridor is worth
    /// `side(player) - side(opponent)`, which keeps the total antisymmetric.
    fn side_score(&self, board: &Board, corridor: &[Pos], player: PColor) -> f64 {
        let shape = player.shape();
        let mut score = 0.0;

        for &pos in corridor {
            if let Some(piece) = board.piece_at(pos) {
                if piece.color == player {
                    score += self.config.color_weight;
                }
                if piece.shape == shape {
                    score += self.config.shape_weight;
                }
            }
        }

        if self.config.level == HeuristicLevel::PieceCount {
            return score;
        }

        let favorable = |i: usize| board.piece_at(corridor[i]).is_some_and(|p| p.shape == shape);
        let mut i = 0;
        while i < corridor.len() {
            if !favorable(i) {
                i += 1;
                continue;
            }
            let start = i;
            while i < corridor.len() && favorable(i) {
                i += 1;
            }
            score += self.run_bonus(board, corridor, start, i);
        }

        score
    }

    /// Bonus for the run occupying `corridor[start..end]`.
    fn run_bonus(&self, board: &Board, corridor: &[Pos], start: usize, end: usize) -> f64 {
        let run = end - start;
        if run < 2 {
            return 0.0;
        }
        let win = board.win_sequence();
        let mut bonus = self.config.run_weight * 4f64.powi(run.min(win - 1) as i32 - 1);

        if self.config.level == HeuristicLevel::OpenSpace {
            let is_empty = |pos: &&Pos| board.piece_at(**pos).is_none();
            let before = corridor[..start].iter().rev().take_while(is_empty).count();
            let after = corridor[end..].iter().take_while(is_empty).count();
            if run + before + after < win {
                return 0.0;
            }
            if before > 0 && after > 0 {
                bonus *= 2.0;
            }
        }

        bonus
    }
}

impl Default for CorridorHeuristic {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Heuristic for CorridorHeuristic {
    fn evaluate(&self, board: &Board, player: PColor) -> f64 {
        let opponent = player.other();
        let mut score = 0.0;
        for corridor in board.win_corridors() {
            score += self.side_score(board, corridor, player)
                - self.side_score(board, corridor, opponent);
        }
        score
    }
}
