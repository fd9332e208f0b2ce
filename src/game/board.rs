use std::fmt;
use std::sync::Arc;

use crate::config::MatchConfig;
use crate::error::MoveError;

use super::moves::Move;
use super::piece::{PShape, Piece, Pos};
use super::player::PColor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(PColor),
    Draw,
}

/// A ColorShapeLinks board: a gravity grid where each player drops pieces of
/// either shape. A line of `win_sequence` equal shapes wins for the owner of
/// that shape; failing that, a line of equal colors wins for that color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    win_sequence: usize,
    /// Row-major, row 0 at the bottom.
    cells: Vec<Option<Piece>>,
    heights: Vec<usize>,
    /// Remaining pieces indexed by `[color][shape]`.
    remaining: [[usize; 2]; 2],
    history: Vec<Pos>,
    turn: PColor,
    win_corridors: Arc<[Box<[Pos]>]>,
}

impl Board {
    /// Create an empty board with the default match configuration
    pub fn new() -> Self {
        Self::with_config(&MatchConfig::default())
    }

    /// Create an empty board for the given match configuration. The
    /// configuration is expected to have passed validation.
    pub fn with_config(config: &MatchConfig) -> Self {
        let per_player = [config.round_pieces, config.square_pieces];
        Board {
            rows: config.rows,
            cols: config.cols,
            win_sequence: config.win_sequence,
            cells: vec![None; config.rows * config.cols],
            heights: vec![0; config.cols],
            remaining: [per_player, per_player],
            history: Vec::with_capacity(config.rows * config.cols),
            turn: PColor::White,
            win_corridors: build_win_corridors(config.rows, config.cols, config.win_sequence)
                .into(),
        }
    }

    /// Create a board and replay `moves` on it, alternating sides from White.
    pub fn from_moves(config: &MatchConfig, moves: &[Move]) -> Result<Self, MoveError> {
        let mut board = Self::with_config(config);
        for mv in moves {
            board.do_move(mv.shape, mv.column)?;
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_sequence(&self) -> usize {
        self.win_sequence
    }

    /// The side to move
    pub fn turn(&self) -> PColor {
        self.turn
    }

    /// Number of pieces dropped so far
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Get the piece at a specific position. Row 0 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Option<Piece> {
        self.cells[row * self.cols + col]
    }

    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.get(pos.row, pos.col)
    }

    /// Every row, column and diagonal long enough to hold a winning line.
    pub fn win_corridors(&self) -> &[Box<[Pos]>] {
        &self.win_corridors
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        col >= self.cols || self.heights[col] >= self.rows
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.history.len() >= self.rows * self.cols
    }

    /// Pieces of the given kind `color` still holds.
    pub fn piece_count(&self, color: PColor, shape: PShape) -> usize {
        self.remaining[color.index()][shape.index()]
    }

    /// Legal moves for the side to move, by column and then shape.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(self.cols * 2);
        for col in 0..self.cols {
            if self.is_column_full(col) {
                continue;
            }
            for shape in PShape::ALL {
                if self.piece_count(self.turn, shape) > 0 {
                    moves.push(Move::new(col, shape));
                }
            }
        }
        moves
    }

    /// Drop a piece of the side to move into `col` and pass the turn.
    /// Returns the position where the piece landed.
    pub fn do_move(&mut self, shape: PShape, col: usize) -> Result<Pos, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn {
                column: col,
                cols: self.cols,
            });
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }
        let color = self.turn;
        let left = &mut self.remaining[color.index()][shape.index()];
        if *left == 0 {
            return Err(MoveError::NoPiecesLeft { color, shape });
        }
        *left -= 1;

        let pos = Pos::new(self.heights[col], col);
        self.cells[pos.row * self.cols + col] = Some(Piece::new(color, shape));
        self.heights[col] += 1;
        self.history.push(pos);
        self.turn = color.other();
        Ok(pos)
    }

    /// Take back the last move, returning the piece that was removed.
    pub fn undo_move(&mut self) -> Result<Piece, MoveError> {
        let pos = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        let piece = self.cells[pos.row * self.cols + pos.col]
            .take()
            .ok_or(MoveError::NothingToUndo)?;
        self.heights[pos.col] -= 1;
        self.remaining[piece.color.index()][piece.shape.index()] += 1;
        self.turn = piece.color;
        Ok(piece)
    }

    /// Determine whether the game is over.
    ///
    /// Shape lines take precedence over color lines. If both players own a
    /// line of the same precedence the game is drawn, as is a game where the
    /// board is full or the side to move has run out of pieces.
    pub fn check_winner(&self) -> Option<GameOutcome> {
        let mut shape_lines = [false; 2];
        let mut color_lines = [false; 2];

        for corridor in self.win_corridors.iter() {
            let mut shape_run: Option<(PShape, usize)> = None;
            let mut color_run: Option<(PColor, usize)> = None;

            for &pos in corridor.iter() {
                let Some(piece) = self.piece_at(pos) else {
                    shape_run = None;
                    color_run = None;
                    continue;
                };

                let shape_len = match shape_run {
                    Some((shape, n)) if shape == piece.shape => n + 1,
                    _ => 1,
                };
                let color_len = match color_run {
                    Some((color, n)) if color == piece.color => n + 1,
                    _ => 1,
                };
                shape_run = Some((piece.shape, shape_len));
                color_run = Some((piece.color, color_len));

                if shape_len >= self.win_sequence {
                    shape_lines[piece.shape.owner().index()] = true;
                }
                if color_len >= self.win_sequence {
                    color_lines[piece.color.index()] = true;
                }
            }
        }

        line_owner(shape_lines)
            .or_else(|| line_owner(color_lines))
            .or_else(|| {
                let out_of_pieces = PShape::ALL
                    .iter()
                    .all(|&shape| self.piece_count(self.turn, shape) == 0);
                (self.is_full() || out_of_pieces).then_some(GameOutcome::Draw)
            })
    }
}

fn line_owner(lines: [bool; 2]) -> Option<GameOutcome> {
    match lines {
        [true, true] => Some(GameOutcome::Draw),
        [true, false] => Some(GameOutcome::Winner(PColor::White)),
        [false, true] => Some(GameOutcome::Winner(PColor::Red)),
        [false, false] => None,
    }
}

/// Walk from `start` in direction `(d_row, d_col)` until leaving the grid.
fn walk(rows: usize, cols: usize, start: Pos, d_row: isize, d_col: isize) -> Vec<Pos> {
    let mut line = Vec::new();
    let (mut r, mut c) = (start.row as isize, start.col as isize);
    while r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
        line.push(Pos::new(r as usize, c as usize));
        r += d_row;
        c += d_col;
    }
    line
}

fn build_win_corridors(rows: usize, cols: usize, win_sequence: usize) -> Vec<Box<[Pos]>> {
    let mut lines: Vec<Vec<Pos>> = Vec::new();

    // Horizontal
    for row in 0..rows {
        lines.push(walk(rows, cols, Pos::new(row, 0), 0, 1));
    }

    // Vertical
    for col in 0..cols {
        lines.push(walk(rows, cols, Pos::new(0, col), 1, 0));
    }

    // Diagonal (bottom-left to top-right, /)
    for col in 0..cols {
        lines.push(walk(rows, cols, Pos::new(0, col), 1, 1));
    }
    for row in 1..rows {
        lines.push(walk(rows, cols, Pos::new(row, 0), 1, 1));
    }

    // Diagonal (bottom-right to top-left, \)
    for col in 0..cols {
        lines.push(walk(rows, cols, Pos::new(0, col), 1, -1));
    }
    for row in 1..rows {
        lines.push(walk(rows, cols, Pos::new(row, cols - 1), 1, -1));
    }

    lines
        .into_iter()
        .filter(|line| line.len() >= win_sequence)
        .map(Vec::into_boxed_slice)
        .collect()
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Top row first, `.` for empty cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for col in 0..self.cols {
                match self.get(row, col) {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
