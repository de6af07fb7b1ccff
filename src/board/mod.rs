//! Board representation for 3D tic-tac-toe

pub mod board;


// Re-exports
pub use board::Board;

use std::fmt;

/// Maximum supported board size (N×N×N with N ≤ 5)
pub const MAX_BOARD_SIZE: usize = 5;

/// The 13 canonical line directions through a cell: 3 axes, 6 face
/// diagonals, 4 space diagonals. Each is checked in both senses, which
/// covers every winning line of length N through any cell.
pub const DIRECTIONS: [(i32, i32, i32); 13] = [
    (1, 0, 0),
    (0, 1, 0),
    (0, 0, 1), // axes
    (1, 1, 0),
    (1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (0, 1, 1),
    (0, 1, -1), // face diagonals
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1), // space diagonals
];

/// Cell contents / player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    /// Get the opposing mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
            Mark::Empty => Mark::Empty,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        };
        write!(f, "{c}")
    }
}

/// A cell coordinate (x, y, z), each in [0, N)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl Coord {
    #[inline]
    pub fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Flat index in z-major order (z outermost, then y, then x)
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        (self.z as usize * size + self.y as usize) * size + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            x: (idx % size) as u8,
            y: (idx / size % size) as u8,
            z: (idx / (size * size)) as u8,
        }
    }

    /// Bounds test over signed offsets, for stepping along directions
    #[inline]
    pub fn is_valid(size: usize, x: i32, y: i32, z: i32) -> bool {
        let n = size as i32;
        x >= 0 && x < n && y >= 0 && y < n && z >= 0 && z < n
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.z, self.y, self.x).cmp(&(other.z, other.y, other.x))
    }
}
