//! Minimax search with alpha-beta pruning and forward pruning
//!
//! The searcher explores the game tree depth-first down to a fixed depth,
//! evaluating leaves with the full-board line scorer. Two distinct pruning
//! mechanisms apply at every node:
//!
//! - **Alpha-beta pruning** is exact: it skips siblings that cannot change
//!   the node value, so root scores are identical to plain minimax.
//! - **Forward pruning** is a speed/completeness trade: before expansion,
//!   only the top `max(1, floor(fraction × |moves|))` candidates ranked by
//!   the per-move extension scorer are kept. A fraction of 1.0 disables it.
//!
//! Search backtracks on a single working copy of the state with strict
//! apply/undo discipline; no board is shared across sibling branches.
//!
//! # Example
//!
//! ```
//! use qubic::eval::{Evaluator, Heuristic};
//! use qubic::game::GameState;
//! use qubic::board::Mark;
//! use qubic::search::Searcher;
//!
//! let state = GameState::new(3).unwrap();
//! let mut searcher = Searcher::new(2, 1.0, Evaluator::new(Heuristic::Line, 0));
//!
//! let result = searcher.search(&state, Mark::X).unwrap();
//! if let Some(best) = result.best_move {
//!     println!("Best move: {best}");
//! }
//! ```

use crate::board::{Board, Coord, Mark};
use crate::error::GameError;
use crate::eval::Evaluator;
use crate::game::GameState;

/// Infinity bound for the alpha-beta window
const INF: i32 = i32::MAX;

/// Search result: the score of the principal line and the move that
/// starts it. `best_move` is `None` (the sentinel) when the position is
/// terminal or the depth limit is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation of the position from the searching player's perspective
    pub score: i32,
    /// Best move found, if any
    pub best_move: Option<Coord>,
    /// Total nodes expanded
    pub nodes: u64,
}

/// Depth-limited minimax searcher with alpha-beta and forward pruning.
///
/// Holds the evaluator (leaf scoring + move ranking) and the pruning
/// configuration. A searcher is reusable across moves and games.
#[derive(Debug, Clone)]
pub struct Searcher {
    max_depth: u8,
    prune_fraction: f32,
    evaluator: Evaluator,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Search horizon; depth 0 returns the static score
    /// * `prune_fraction` - Fraction of ranked candidates kept at every
    ///   node, in (0, 1]; 1.0 disables forward pruning
    /// * `evaluator` - Leaf scorer and move-ranking heuristic
    #[must_use]
    pub fn new(max_depth: u8, prune_fraction: f32, evaluator: Evaluator) -> Self {
        Self {
            max_depth,
            prune_fraction,
            evaluator,
            nodes: 0,
        }
    }

    /// Search from `state` for the best move of `player`.
    ///
    /// Runs maximizing minimax over a private clone of the state; the
    /// input is never mutated. On a terminal or depth-zero position the
    /// result carries the static score and a sentinel (`None`) move —
    /// callers treat that as "no move available" and fall back.
    ///
    /// # Errors
    ///
    /// Propagates board errors from move application; with a consistent
    /// state this does not happen, and the caller's fallback path handles
    /// it if it ever does.
    pub fn search(&mut self, state: &GameState, player: Mark) -> Result<SearchResult, GameError> {
        self.nodes = 0;
        let mut work = state.clone();
        let (score, best_move) =
            self.minimax(&mut work, self.max_depth, -INF, INF, true, player)?;
        Ok(SearchResult {
            score,
            best_move,
            nodes: self.nodes,
        })
    }

    /// Recursive minimax step. `depth` counts down to 0; `maximizing`
    /// alternates each ply; `player` is the root perspective used for all
    /// leaf evaluation and move ranking.
    fn minimax(
        &mut self,
        state: &mut GameState,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        player: Mark,
    ) -> Result<(i32, Option<Coord>), GameError> {
        self.nodes += 1;

        let moves = state.board().legal_moves();
        if depth == 0 || moves.is_empty() || state.is_terminal() {
            return Ok((self.evaluator.leaf_score(state.board(), player), None));
        }

        let moves = self.prune_moves(state.board(), moves, player);
        // First candidate is the default: a move is always returned even
        // if every branch scores equal or worse (first-seen wins ties)
        let mut best_move = moves[0];

        if maximizing {
            let mut best = -INF;
            for &mv in &moves {
                state.make_move(mv)?;
                let (score, _) = self.minimax(state, depth - 1, alpha, beta, false, player)?;
                state.unmake_move(mv);

                if score > best {
                    best = score;
                    best_move = mv;
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best, Some(best_move)))
        } else {
            let mut best = INF;
            for &mv in &moves {
                state.make_move(mv)?;
                let (score, _) = self.minimax(state, depth - 1, alpha, beta, true, player)?;
                state.unmake_move(mv);

                if score < best {
                    best = score;
                    best_move = mv;
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            Ok((best, Some(best_move)))
        }
    }

    /// Forward-pruning filter: keep the top `max(1, floor(fraction × n))`
    /// moves ranked by the per-move heuristic, descending. The sort is
    /// stable, so ties keep the deterministic base traversal order.
    ///
    /// Ranking always uses the root player's perspective, at minimizing
    /// nodes too (inherited behavior, kept deliberately).
    fn prune_moves(&mut self, board: &Board, moves: Vec<Coord>, player: Mark) -> Vec<Coord> {
        if self.prune_fraction >= 1.0 {
            return moves;
        }

        let mut scored: Vec<(Coord, i32)> = moves
            .into_iter()
            .map(|mv| {
                let score = self.evaluator.rank_score(board, mv, player);
                (mv, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let keep = ((scored.len() as f32) * self.prune_fraction).floor() as usize;
        scored.truncate(keep.max(1));
        scored.into_iter().map(|(mv, _)| mv).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{line_score, Heuristic};

    fn line_searcher(depth: u8, fraction: f32) -> Searcher {
        Searcher::new(depth, fraction, Evaluator::new(Heuristic::Line, 0))
    }

    /// Reference implementation: plain minimax, no alpha-beta, no forward
    /// pruning. Alpha-beta must return the same root value.
    fn plain_minimax(state: &mut GameState, depth: u8, maximizing: bool, player: Mark) -> i32 {
        let moves = state.board().legal_moves();
        if depth == 0 || moves.is_empty() || state.is_terminal() {
            return line_score(state.board(), player);
        }
        let mut best = if maximizing { -INF } else { INF };
        for mv in moves {
            state.make_move(mv).unwrap();
            let score = plain_minimax(state, depth - 1, !maximizing, player);
            state.unmake_move(mv);
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }
        best
    }

    #[test]
    fn test_depth_zero_returns_static_score() {
        let mut state = GameState::new(3).unwrap();
        state.make_move(Coord::new(0, 0, 0)).unwrap();

        let mut searcher = line_searcher(0, 1.0);
        let result = searcher.search(&state, Mark::O).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, line_score(state.board(), Mark::O));
    }

    #[test]
    fn test_terminal_root_returns_sentinel() {
        let mut board = Board::new(3).unwrap();
        for i in 0..3 {
            board.apply(Coord::new(i, i, 0), Mark::X).unwrap();
        }
        let state = GameState::from_board(board, Mark::O);
        assert!(state.is_terminal());

        let mut searcher = line_searcher(3, 1.0);
        let result = searcher.search(&state, Mark::O).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, line_score(state.board(), Mark::O));
    }

    #[test]
    fn test_full_board_returns_sentinel() {
        let mut board = Board::new(1).unwrap();
        board.apply(Coord::new(0, 0, 0), Mark::X).unwrap();
        let state = GameState::from_board(board, Mark::O);

        let mut searcher = line_searcher(2, 1.0);
        let result = searcher.search(&state, Mark::O).unwrap();
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_finds_winning_move() {
        let mut board = Board::new(3).unwrap();
        board.apply(Coord::new(0, 0, 0), Mark::X).unwrap();
        board.apply(Coord::new(1, 0, 0), Mark::X).unwrap();
        board.apply(Coord::new(0, 2, 2), Mark::O).unwrap();
        board.apply(Coord::new(1, 2, 2), Mark::O).unwrap();
        let state = GameState::from_board(board, Mark::X);

        let mut searcher = line_searcher(2, 1.0);
        let result = searcher.search(&state, Mark::X).unwrap();
        assert_eq!(result.best_move, Some(Coord::new(2, 0, 0)));
        assert!(result.nodes > 1);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let mut board = Board::new(3).unwrap();
        board.apply(Coord::new(0, 0, 0), Mark::O).unwrap();
        board.apply(Coord::new(1, 0, 0), Mark::O).unwrap();
        board.apply(Coord::new(2, 2, 2), Mark::X).unwrap();
        let state = GameState::from_board(board, Mark::X);

        // Depth 2: X sees that any non-blocking move lets O complete
        let mut searcher = line_searcher(2, 1.0);
        let result = searcher.search(&state, Mark::X).unwrap();
        assert_eq!(result.best_move, Some(Coord::new(2, 0, 0)));
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        // Same scores with and without cutoffs, at several depths
        let mut board = Board::new(3).unwrap();
        board.apply(Coord::new(0, 0, 0), Mark::X).unwrap();
        board.apply(Coord::new(1, 1, 1), Mark::O).unwrap();
        board.apply(Coord::new(2, 0, 1), Mark::X).unwrap();
        board.apply(Coord::new(0, 1, 2), Mark::O).unwrap();
        let state = GameState::from_board(board, Mark::X);

        for depth in 1..=3 {
            let mut searcher = line_searcher(depth, 1.0);
            let pruned = searcher.search(&state, Mark::X).unwrap();
            let reference = plain_minimax(&mut state.clone(), depth, true, Mark::X);
            assert_eq!(
                pruned.score, reference,
                "alpha-beta changed the root value at depth {depth}"
            );
        }
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax_small_board() {
        let mut state = GameState::new(2).unwrap();
        state.make_move(Coord::new(0, 0, 0)).unwrap();

        for depth in 1..=4 {
            let mut searcher = line_searcher(depth, 1.0);
            let pruned = searcher.search(&state, Mark::O).unwrap();
            let reference = plain_minimax(&mut state.clone(), depth, true, Mark::O);
            assert_eq!(pruned.score, reference);
        }
    }

    #[test]
    fn test_tie_break_keeps_first_legal_move() {
        // All 8 cells of an empty 2x2x2 board are symmetric, so every
        // branch scores the same; the first traversal-order move wins
        let state = GameState::new(2).unwrap();
        let mut searcher = line_searcher(1, 1.0);
        let result = searcher.search(&state, Mark::X).unwrap();
        assert_eq!(result.best_move, Some(Coord::new(0, 0, 0)));
    }

    #[test]
    fn test_prune_keeps_fraction_of_moves() {
        let board = Board::new(3).unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 27);

        let mut searcher = line_searcher(3, 0.3);
        let kept = searcher.prune_moves(&board, moves, Mark::X);
        assert_eq!(kept.len(), 8); // floor(27 * 0.3)
    }

    #[test]
    fn test_prune_keeps_at_least_one_move() {
        let mut board = Board::new(2).unwrap();
        for mv in board.legal_moves().into_iter().skip(1) {
            board.apply(mv, Mark::X).unwrap();
        }
        let moves = board.legal_moves();
        assert_eq!(moves.len(), 1);

        let mut searcher = line_searcher(3, 0.1);
        let kept = searcher.prune_moves(&board, moves, Mark::O);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_prune_ranks_extension_first() {
        let mut board = Board::new(3).unwrap();
        board.apply(Coord::new(0, 0, 0), Mark::X).unwrap();
        board.apply(Coord::new(1, 0, 0), Mark::X).unwrap();

        let mut searcher = line_searcher(3, 0.1);
        let kept = searcher.prune_moves(&board, board.legal_moves(), Mark::X);
        // floor(25 * 0.1) = 2 survivors; the winning completion ranks first
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0], Coord::new(2, 0, 0));
    }

    #[test]
    fn test_prune_preserves_base_order_on_ties() {
        // Empty board: every move ranks 0, so the filter must keep the
        // z-major traversal prefix unchanged
        let board = Board::new(3).unwrap();
        let moves = board.legal_moves();
        let expected: Vec<Coord> = moves.iter().copied().take(8).collect();

        let mut searcher = line_searcher(3, 0.3);
        let kept = searcher.prune_moves(&board, moves, Mark::X);
        assert_eq!(kept, expected);
    }

    #[test]
    fn test_forward_pruning_disabled_at_one() {
        let board = Board::new(3).unwrap();
        let moves = board.legal_moves();
        let mut searcher = line_searcher(3, 1.0);
        let kept = searcher.prune_moves(&board, moves.clone(), Mark::X);
        assert_eq!(kept, moves);
    }

    #[test]
    fn test_input_state_not_mutated() {
        let mut state = GameState::new(3).unwrap();
        state.make_move(Coord::new(1, 1, 1)).unwrap();
        let snapshot = state.board().clone();

        let mut searcher = line_searcher(3, 0.5);
        let _ = searcher.search(&state, Mark::O).unwrap();
        assert_eq!(state.board(), &snapshot);
        assert_eq!(state.current_player(), Some(Mark::O));
    }

    #[test]
    fn test_random_heuristic_search_is_reproducible() {
        let mut state = GameState::new(3).unwrap();
        state.make_move(Coord::new(0, 0, 0)).unwrap();

        let mut a = Searcher::new(2, 0.5, Evaluator::new(Heuristic::Random, 9));
        let mut b = Searcher::new(2, 0.5, Evaluator::new(Heuristic::Random, 9));
        assert_eq!(
            a.search(&state, Mark::O).unwrap(),
            b.search(&state, Mark::O).unwrap()
        );
    }
}
