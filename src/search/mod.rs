//! Search algorithms for the 3D tic-tac-toe engine
//!
//! Contains the depth-limited minimax search with alpha-beta pruning and
//! the forward-pruning candidate filter.

pub mod alphabeta;

pub use alphabeta::{SearchResult, Searcher};
