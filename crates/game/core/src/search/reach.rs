//! Reachability queries: flood-fill area and path existence.

use super::grid::{ObstacleMap, Traversal, breadth_first};
use crate::state::{Board, Cell};

/// Cells reachable from a start cell, start included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reachable {
    board: Board,
    cells: Vec<Cell>,
    visited: Vec<bool>,
}

impl Reachable {
    /// Number of reachable cells, including the start.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Reachable cells in breadth-first order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.board
            .index_of(cell)
            .is_some_and(|idx| self.visited[idx])
    }
}

/// Flood-fills from `start` over in-bounds cells not in `obstacles`.
///
/// `exempt` (typically the goal) is removed from the obstacle set first. The
/// start cell is always part of the area, even when it is itself an obstacle
/// such as the head of the body.
pub fn reachable(start: Cell, board: Board, obstacles: &[Cell], exempt: Option<Cell>) -> Reachable {
    let exempt: &[Cell] = match &exempt {
        Some(cell) => std::slice::from_ref(cell),
        None => &[],
    };
    let map = ObstacleMap::new(board, obstacles, exempt);
    let flood = breadth_first(&map, start, Traversal::Exhaust);

    Reachable {
        board,
        cells: flood.order,
        visited: flood.visited,
    }
}

/// Returns true if `target` can be reached from `start`.
///
/// Both endpoints are exempt from `obstacles`. `start == target` on the board
/// is a trivial zero-step path.
pub fn path_exists(start: Cell, target: Cell, board: Board, obstacles: &[Cell]) -> bool {
    if !board.contains(target) {
        return false;
    }
    let map = ObstacleMap::new(board, obstacles, &[start, target]);
    breadth_first(&map, start, Traversal::StopAt(target)).found
}
