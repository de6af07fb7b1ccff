//! Move selection driver with validated configuration and random fallback
//!
//! [`MoveSelector`] is the top-level entry point: it runs one full-depth
//! search for the player to move, validates the returned move against the
//! legal-move set, and applies it. A sentinel result, an out-of-set move,
//! or any engine error triggers the documented recovery path — a uniformly
//! random legal move, logged as a fallback — so a single engine fault
//! never crashes the game loop.
//!
//! # Example
//!
//! ```
//! use qubic::{EngineConfig, GameState, MoveSelector};
//!
//! let config = EngineConfig {
//!     max_depth: 2,
//!     ..EngineConfig::default()
//! };
//! let mut state = GameState::new(config.board_size).unwrap();
//! let mut selector = MoveSelector::new(&config).unwrap();
//!
//! let mv = selector.play(&mut state).unwrap();
//! println!("Engine played {mv}");
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Coord, MAX_BOARD_SIZE};
use crate::error::GameError;
use crate::eval::{Evaluator, Heuristic};
use crate::game::GameState;
use crate::search::Searcher;

/// Engine configuration surface.
///
/// Recognized options per the engine interface: board size in [1, 5],
/// non-negative search depth, forward-pruning fraction in (0, 1] (1.0
/// disables forward pruning), and the evaluator variant. The seed drives
/// both the random heuristic and fallback selection, keeping games
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub board_size: usize,
    pub max_depth: u8,
    pub prune_fraction: f32,
    pub heuristic: Heuristic,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: 3,
            max_depth: 3,
            prune_fraction: 1.0,
            heuristic: Heuristic::Line,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Validate all options.
    ///
    /// # Errors
    ///
    /// `InvalidSize` for a board size outside [1, 5], `InvalidConfig` for
    /// a pruning fraction outside (0, 1].
    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidSize(self.board_size));
        }
        if !(self.prune_fraction > 0.0 && self.prune_fraction <= 1.0) {
            return Err(GameError::InvalidConfig(format!(
                "prune_fraction must be in (0, 1], got {}",
                self.prune_fraction
            )));
        }
        Ok(())
    }
}

/// Top-level move selector: search driver plus fallback policy.
pub struct MoveSelector {
    searcher: Searcher,
    rng: StdRng,
}

impl MoveSelector {
    /// Build a selector from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the configuration's validation error, if any.
    pub fn new(config: &EngineConfig) -> Result<Self, GameError> {
        config.validate()?;
        let evaluator = Evaluator::new(config.heuristic, config.seed);
        Ok(Self {
            searcher: Searcher::new(config.max_depth, config.prune_fraction, evaluator),
            // Separate stream from the evaluator's RNG
            rng: StdRng::seed_from_u64(config.seed ^ 0x9e37_79b9_7f4a_7c15),
        })
    }

    /// Select a move for the player to move, without applying it.
    ///
    /// Runs a full-depth search and validates the result. A sentinel,
    /// an illegal move, or an engine error falls back to a uniformly
    /// random legal move (logged); the selection itself never fails while
    /// a legal move exists.
    ///
    /// # Errors
    ///
    /// `NoLegalMoves` if the game is terminal or the board is full.
    pub fn get_move(&mut self, state: &GameState) -> Result<Coord, GameError> {
        let player = state.current_player().ok_or(GameError::NoLegalMoves)?;
        let legal = state.board().legal_moves();
        if legal.is_empty() {
            return Err(GameError::NoLegalMoves);
        }

        match self.searcher.search(state, player) {
            Ok(result) => match result.best_move {
                Some(mv) if legal.contains(&mv) => Ok(mv),
                Some(mv) => {
                    log::warn!(
                        "search returned illegal move for {player}: {}; \
                         falling back to random move",
                        GameError::InvalidSearchResult(mv)
                    );
                    Ok(self.random_move(&legal))
                }
                None => {
                    log::warn!(
                        "search returned sentinel move for {player}; \
                         falling back to random move"
                    );
                    Ok(self.random_move(&legal))
                }
            },
            Err(err) => {
                log::warn!("search failed for {player}: {err}; falling back to random move");
                Ok(self.random_move(&legal))
            }
        }
    }

    /// Select a move and apply it via [`GameState::make_move`].
    ///
    /// # Errors
    ///
    /// `NoLegalMoves` from selection; board errors from application
    /// (unreachable for moves drawn from the legal set).
    pub fn play(&mut self, state: &mut GameState) -> Result<Coord, GameError> {
        let mv = self.get_move(state)?;
        state.make_move(mv)?;
        Ok(mv)
    }

    fn random_move(&mut self, legal: &[Coord]) -> Coord {
        legal[self.rng.gen_range(0..legal.len())]
    }
}
