//! Scoring weights for the per-move ranking heuristic
//!
//! Flat rewards keyed on the run length a candidate move would create.
//! These feed the forward-pruning filter only; leaf evaluation uses the
//! exponential full-board scorer in [`super::heuristic`].

/// Flat rewards per run length for move ranking
pub struct RunScore;

impl RunScore {
    /// Two in a row
    pub const TWO: i32 = 10;
    /// Three in a row
    pub const THREE: i32 = 50;
    /// Four in a row
    pub const FOUR: i32 = 200;
    /// Five or more in a row
    pub const FIVE: i32 = 1_000;
    /// Bonus when the move itself completes a full-length line
    pub const WIN: i32 = 1_000;
}

/// Reward for a single direction's run length
#[inline]
pub fn run_reward(len: usize) -> i32 {
    match len {
        2 => RunScore::TWO,
        3 => RunScore::THREE,
        4 => RunScore::FOUR,
        l if l >= 5 => RunScore::FIVE,
        _ => 0,
    }
}
