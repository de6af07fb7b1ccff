//! Game state: turn tracking and terminal-state detection
//!
//! Wraps a [`Board`] with a whose-turn indicator and a memoized terminal
//! status. The status is re-evaluated once per move, so search nodes read
//! it for free instead of rescanning the board.

use crate::board::{Board, Coord, Mark};
use crate::error::GameError;

/// Terminal status of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

/// A board plus turn and terminal-status tracking.
///
/// X always moves first. Once the status leaves `InProgress`, no further
/// moves are accepted.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: Mark,
    status: GameStatus,
}

impl GameState {
    /// Create a fresh game on an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` unless `1 <= size <= 5`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self {
            board: Board::new(size)?,
            turn: Mark::X,
            status: GameStatus::InProgress,
        })
    }

    /// Wrap an existing board, computing the status with a full scan.
    ///
    /// Checks `has_line` for every occupied cell under both players,
    /// short-circuiting on the first win; a full board with no winner is a
    /// draw. Used for positions set up outside normal play (tests, resumed
    /// games).
    #[must_use]
    pub fn from_board(board: Board, turn: Mark) -> Self {
        let status = Self::scan_status(&board);
        Self {
            board,
            turn,
            status,
        }
    }

    fn scan_status(board: &Board) -> GameStatus {
        for idx in 0..board.size().pow(3) {
            let c = Coord::from_index(idx, board.size());
            let mark = board.get(c);
            if mark != Mark::Empty && board.has_line(mark, c) {
                return GameStatus::Won(mark);
            }
        }
        if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The winning player, if any. `None` covers both in-progress games
    /// and draws; check [`GameState::status`] to distinguish them.
    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::Won(mark) => Some(mark),
            _ => None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// The player to move, or `None` once the game is terminal.
    #[inline]
    pub fn current_player(&self) -> Option<Mark> {
        if self.is_terminal() {
            None
        } else {
            Some(self.turn)
        }
    }

    /// Apply a move for the player to move, then re-evaluate the status
    /// and advance the turn.
    ///
    /// A freshly completed line must pass through the placed cell, so the
    /// win check is a single `has_line` through the move rather than a
    /// full-board scan.
    ///
    /// # Errors
    ///
    /// `GameOver` if the game already ended, `OutOfBounds` / `CellOccupied`
    /// from the board.
    pub fn make_move(&mut self, mv: Coord) -> Result<(), GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.board.apply(mv, self.turn)?;
        if self.board.has_line(self.turn, mv) {
            self.status = GameStatus::Won(self.turn);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        }
        self.turn = self.turn.opponent();
        Ok(())
    }

    /// Revert the most recent move, restoring turn and status.
    ///
    /// Only valid in strict stack discipline: the argument must be the last
    /// move applied via [`GameState::make_move`]. Search relies on this to
    /// backtrack on a single working copy.
    pub fn unmake_move(&mut self, mv: Coord) {
        self.board.undo(mv);
        self.turn = self.turn.opponent();
        // The position before the move was necessarily in progress
        self.status = GameStatus::InProgress;
    }
}
