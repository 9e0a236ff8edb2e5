//! Grid searches over a board with a body-shaped obstacle set.
//!
//! Every query builds one [`grid::ObstacleMap`] and walks it with either the
//! shared breadth-first primitive (reachability, path existence) or A*
//! (shortest path). Start and target exemptions are applied when the map is
//! built, never inside the traversal.
mod astar;
mod grid;
mod reach;

pub use astar::{Path, shortest_path};
pub use reach::{Reachable, path_exists, reachable};

use crate::env::SearchOracle;
use crate::safety;
use crate::state::{Board, Cell};

/// [`SearchOracle`] backed by the grid algorithms in this crate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridSearch;

impl SearchOracle for GridSearch {
    fn reachable(
        &self,
        start: Cell,
        board: Board,
        obstacles: &[Cell],
        exempt: Option<Cell>,
    ) -> Reachable {
        reachable(start, board, obstacles, exempt)
    }

    fn path_exists(&self, start: Cell, target: Cell, board: Board, obstacles: &[Cell]) -> bool {
        path_exists(start, target, board, obstacles)
    }

    fn shortest_path(
        &self,
        start: Cell,
        goal: Cell,
        board: Board,
        obstacles: &[Cell],
    ) -> Option<Path> {
        shortest_path(start, goal, board, obstacles)
    }

    fn is_collision(&self, next_cell: Cell, board: Board, body: &[Cell]) -> bool {
        safety::is_collision(next_cell, board, body)
    }

    fn is_isolated(
        &self,
        head: Cell,
        goal: Cell,
        fallback_target: Cell,
        board: Board,
        body: &[Cell],
    ) -> bool {
        safety::is_isolated(head, goal, fallback_target, board, body)
    }
}
