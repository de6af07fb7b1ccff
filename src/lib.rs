//! 3D Tic-Tac-Toe (Qubic) AI engine
//!
//! An adversarial search engine for N×N×N tic-tac-toe (1 ≤ N ≤ 5) with
//! 13 winning-line directions per cell: 3 axes, 6 face diagonals, and
//! 4 space diagonals.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: 3D grid representation and geometric queries (legal moves,
//!   line-through-cell win test)
//! - [`game`]: Turn tracking and terminal-state detection on top of the board
//! - [`eval`]: Static position evaluation and the per-move ranking heuristic
//! - [`search`]: Depth-limited minimax with alpha-beta and forward pruning
//! - [`engine`]: Move selection driver with random fallback on engine failure
//!
//! # Quick Start
//!
//! ```
//! use qubic::{Coord, EngineConfig, GameState, MoveSelector};
//!
//! let config = EngineConfig {
//!     board_size: 3,
//!     max_depth: 2,
//!     ..EngineConfig::default()
//! };
//!
//! let mut state = GameState::new(config.board_size).unwrap();
//! let mut selector = MoveSelector::new(&config).unwrap();
//!
//! // X opens, the engine answers for O
//! state.make_move(Coord::new(1, 1, 1)).unwrap();
//! let reply = selector.play(&mut state).unwrap();
//! println!("O plays at ({}, {}, {})", reply.x, reply.y, reply.z);
//! ```
//!
//! # Search
//!
//! The searcher runs minimax with alpha-beta pruning up to a fixed depth,
//! evaluating leaves with the full-board line scorer. Before expanding a
//! node it optionally keeps only the top fraction of candidate moves ranked
//! by the cheaper per-move extension scorer (forward pruning). Alpha-beta
//! never changes root values; forward pruning trades completeness for speed.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Coord, Mark, DIRECTIONS, MAX_BOARD_SIZE};
pub use engine::{EngineConfig, MoveSelector};
pub use error::GameError;
pub use eval::{Evaluator, Heuristic};
pub use game::{GameState, GameStatus};
pub use search::{SearchResult, Searcher};
