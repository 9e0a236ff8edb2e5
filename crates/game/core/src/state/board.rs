use arrayvec::ArrayVec;

use super::{Cell, Direction};
use crate::error::InvalidInput;

/// Square playing field `[0, size) × [0, size)`.
///
/// Searches allocate dense `size²` tables, so the side length is capped at
/// [`Board::MAX_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    size: i32,
}

impl Board {
    /// Largest accepted side length (about 16M cells per search table).
    pub const MAX_SIZE: i32 = 4096;

    /// Creates a board of the given side length.
    ///
    /// # Errors
    ///
    /// - [`InvalidInput::NonPositiveBoardSize`] when `size <= 0`
    /// - [`InvalidInput::BoardTooLarge`] when `size > Board::MAX_SIZE`
    pub fn new(size: i32) -> Result<Self, InvalidInput> {
        if size <= 0 {
            return Err(InvalidInput::NonPositiveBoardSize { size });
        }
        if size > Self::MAX_SIZE {
            return Err(InvalidInput::BoardTooLarge {
                size,
                max: Self::MAX_SIZE,
            });
        }
        Ok(Self { size })
    }

    pub const fn size(&self) -> i32 {
        self.size
    }

    /// Total number of cells on the board.
    pub const fn cell_count(&self) -> usize {
        (self.size as usize) * (self.size as usize)
    }

    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.size && cell.y < self.size
    }

    /// Row-major index of an in-bounds cell, used by the dense search tables.
    #[inline]
    pub(crate) fn index_of(&self, cell: Cell) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.size as usize + cell.x as usize)
    }

    /// In-bounds 4-neighbours of `cell`, in [`Direction::ALL`] order.
    pub fn neighbors(&self, cell: Cell) -> ArrayVec<Cell, 4> {
        Direction::ALL
            .into_iter()
            .map(|direction| cell.step(direction))
            .filter(|&next| self.contains(next))
            .collect()
    }

    /// Renders the board as a `grid[y][x]` tile matrix.
    ///
    /// Body cells outside the board are skipped. The goal is written last, so
    /// it wins when it overlaps a body cell.
    pub fn encode(&self, body: &[Cell], goal: Cell) -> Vec<Vec<Tile>> {
        let side = self.size as usize;
        let mut grid = vec![vec![Tile::Empty; side]; side];

        for &cell in body {
            if self.contains(cell) {
                grid[cell.y as usize][cell.x as usize] = Tile::Body;
            }
        }
        if self.contains(goal) {
            grid[goal.y as usize][goal.x as usize] = Tile::Goal;
        }

        grid
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoard {
    size: i32,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = InvalidInput;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Self::new(raw.size)
    }
}

/// Content of a cell in an encoded board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Body,
    Goal,
}
