//! Static heuristic scoring of board positions
//!
//! Two scorers with different jobs:
//!
//! - [`line_score`] is the authoritative full-board evaluation used for
//!   leaf values in search. It walks every length-N run in the grid and
//!   rewards k own pieces on an otherwise uncontested run with `10^k`
//!   (opponent runs symmetrically negative, mixed runs zero). Runs are
//!   visited once per starting cell, so a single physical line contributes
//!   from several starting points; that redundancy is part of the
//!   established scoring scale.
//! - [`extension_score`] is the cheap per-move scorer used only to rank
//!   candidate moves for forward pruning. It measures how far a
//!   hypothetical placement would extend existing runs of the player's
//!   pieces.
//!
//! The two functions are intentionally different and not guaranteed to
//! agree on move quality; see `DESIGN.md`.

use crate::board::{Board, Coord, Mark, DIRECTIONS};

use super::patterns::{run_reward, RunScore};

/// Full-board evaluation from `player`'s perspective.
///
/// For every cell and every of the 13 directions, the length-N run
/// starting at that cell is classified by composition (runs leaving the
/// board are skipped):
///
/// - only `player` pieces and empties, k pieces → `+10^k`
/// - only opponent pieces and empties, k pieces → `−10^k`
/// - both players present → 0 (dead line)
///
/// The exponential reward makes one strong run dominate many weak ones;
/// a completed line scores `10^N` and towers over everything else.
#[must_use]
pub fn line_score(board: &Board, player: Mark) -> i32 {
    let opponent = player.opponent();
    let size = board.size();
    let mut score = 0;

    for idx in 0..size.pow(3) {
        let start = Coord::from_index(idx, size);
        for &(dx, dy, dz) in &DIRECTIONS {
            let mut own = 0u32;
            let mut theirs = 0u32;
            let mut in_bounds = true;

            for step in 0..size as i32 {
                let x = i32::from(start.x) + step * dx;
                let y = i32::from(start.y) + step * dy;
                let z = i32::from(start.z) + step * dz;
                if !Coord::is_valid(size, x, y, z) {
                    in_bounds = false;
                    break;
                }
                match board.get(Coord::new(x as u8, y as u8, z as u8)) {
                    m if m == player => own += 1,
                    m if m == opponent => theirs += 1,
                    _ => {}
                }
            }

            if !in_bounds {
                continue;
            }
            if theirs == 0 && own > 0 {
                score += 10_i32.pow(own);
            } else if own == 0 && theirs > 0 {
                score -= 10_i32.pow(theirs);
            }
        }
    }

    score
}

/// Rank a candidate move by how far it extends `player`'s existing runs.
///
/// For each direction the run length is the hypothetical placement plus
/// the consecutive own pieces reachable forward and backward from `mv`;
/// each length maps to a flat reward (2→10, 3→50, 4→200, ≥5→1000). A move
/// that completes a full-length line earns a single extra
/// [`RunScore::WIN`] bonus. The board is not mutated: `run_length` counts
/// the through-cell unconditionally, which is exactly the
/// place-then-count result.
#[must_use]
pub fn extension_score(board: &Board, mv: Coord, player: Mark) -> i32 {
    let mut score = 0;
    let mut winning = false;

    for &dir in &DIRECTIONS {
        let run = board.run_length(player, mv, dir);
        if run >= board.size() {
            winning = true;
        }
        score += run_reward(run);
    }

    if winning {
        score += RunScore::WIN;
    }
    score
}
