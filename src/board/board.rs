//! 3D grid with geometric queries (legal moves, line-through-cell test)

use std::fmt;

use super::{Coord, Mark, DIRECTIONS, MAX_BOARD_SIZE};
use crate::error::GameError;

/// N×N×N board holding per-cell occupancy.
///
/// Cells are stored flat in z-major order (z outermost, then y, then x),
/// which is also the serialization order of [`Board::to_flat`] and the
/// traversal order of [`Board::legal_moves`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board of the given size.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSize` unless `1 <= size <= 5`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![Mark::Empty; size * size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get the mark at a coordinate. Coordinates must be in bounds.
    #[inline]
    pub fn get(&self, c: Coord) -> Mark {
        debug_assert!(Coord::is_valid(
            self.size,
            i32::from(c.x),
            i32::from(c.y),
            i32::from(c.z)
        ));
        self.cells[c.to_index(self.size)]
    }

    #[inline]
    fn contains(&self, c: Coord) -> bool {
        Coord::is_valid(self.size, i32::from(c.x), i32::from(c.y), i32::from(c.z))
    }

    /// Enumerate all empty cells in z-major traversal order.
    ///
    /// The order is fixed and deterministic: it is the base ordering before
    /// any ranking or pruning, and determines tie-break results in search.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        let mut moves = Vec::with_capacity(self.cells.len());
        for z in 0..self.size {
            for y in 0..self.size {
                for x in 0..self.size {
                    let c = Coord::new(x as u8, y as u8, z as u8);
                    if self.get(c) == Mark::Empty {
                        moves.push(c);
                    }
                }
            }
        }
        moves
    }

    /// Place a mark on an empty in-bounds cell.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if the coordinate is outside [0, N) on any axis,
    /// `CellOccupied` if the target cell is not empty.
    pub fn apply(&mut self, mv: Coord, mark: Mark) -> Result<(), GameError> {
        if !self.contains(mv) {
            return Err(GameError::OutOfBounds(mv));
        }
        if self.get(mv) != Mark::Empty {
            return Err(GameError::CellOccupied(mv));
        }
        let idx = mv.to_index(self.size);
        self.cells[idx] = mark;
        Ok(())
    }

    /// Reset a cell to empty. Used by search to backtrack without
    /// reallocating the board.
    pub fn undo(&mut self, mv: Coord) {
        debug_assert!(self.contains(mv));
        let idx = mv.to_index(self.size);
        self.cells[idx] = Mark::Empty;
    }

    /// Length of the maximal consecutive run of `mark` through `through`
    /// along `dir`, counted in both senses. `through` itself counts as 1
    /// regardless of its contents, so callers can score hypothetical
    /// placements on an empty cell.
    pub fn run_length(&self, mark: Mark, through: Coord, dir: (i32, i32, i32)) -> usize {
        let (dx, dy, dz) = dir;
        let mut count = 1;

        // Forward
        let (mut x, mut y, mut z) = (
            i32::from(through.x) + dx,
            i32::from(through.y) + dy,
            i32::from(through.z) + dz,
        );
        while Coord::is_valid(self.size, x, y, z)
            && self.get(Coord::new(x as u8, y as u8, z as u8)) == mark
        {
            count += 1;
            x += dx;
            y += dy;
            z += dz;
        }

        // Backward
        let (mut x, mut y, mut z) = (
            i32::from(through.x) - dx,
            i32::from(through.y) - dy,
            i32::from(through.z) - dz,
        );
        while Coord::is_valid(self.size, x, y, z)
            && self.get(Coord::new(x as u8, y as u8, z as u8)) == mark
        {
            count += 1;
            x -= dx;
            y -= dy;
            z -= dz;
        }

        count
    }

    /// True iff a full-length line of `mark` passes through `through`.
    ///
    /// Checks all 13 directions bidirectionally. A run of N same-mark cells
    /// along any direction necessarily lies entirely in bounds, so reaching
    /// `size` is exactly the winning-line condition.
    #[must_use]
    pub fn has_line(&self, mark: Mark, through: Coord) -> bool {
        if mark == Mark::Empty || self.get(through) != mark {
            return false;
        }
        DIRECTIONS
            .iter()
            .any(|&dir| self.run_length(mark, through, dir) >= self.size)
    }

    /// Number of occupied cells
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Mark::Empty).count()
    }

    /// True iff no legal moves remain
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Mark::Empty)
    }

    /// Serialize to a flat list of N³ cell values in z-major order:
    /// 0 = empty, 1 = X, 2 = O.
    #[must_use]
    pub fn to_flat(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|&c| match c {
                Mark::Empty => 0,
                Mark::X => 1,
                Mark::O => 2,
            })
            .collect()
    }

    /// Reconstruct a board from the flat z-major cell list.
    ///
    /// # Errors
    ///
    /// `InvalidSize` if the size is out of range, `InvalidConfig` if the
    /// cell list has the wrong length or contains a value outside {0, 1, 2}.
    pub fn from_flat(size: usize, flat: &[u8]) -> Result<Self, GameError> {
        let mut board = Self::new(size)?;
        if flat.len() != size * size * size {
            return Err(GameError::InvalidConfig(format!(
                "expected {} cells, got {}",
                size * size * size,
                flat.len()
            )));
        }
        for (idx, &v) in flat.iter().enumerate() {
            board.cells[idx] = match v {
                0 => Mark::Empty,
                1 => Mark::X,
                2 => Mark::O,
                other => {
                    return Err(GameError::InvalidConfig(format!(
                        "invalid cell value {other}"
                    )))
                }
            };
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for z in 0..self.size {
            writeln!(f, "Layer {z}:")?;
            for y in 0..self.size {
                for x in 0..self.size {
                    if x > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{}", self.get(Coord::new(x as u8, y as u8, z as u8)))?;
                }
                writeln!(f)?;
            }
            if z + 1 < self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
