use crate::search::{Path, Reachable};
use crate::state::{Board, Cell, Direction, DirectionSet};

/// Search capabilities the cost model and policy depend on.
///
/// Implementations must be pure: identical arguments yield identical results.
/// [`crate::GridSearch`] is the production implementation; tests substitute
/// fakes to pin individual cost terms.
pub trait SearchOracle {
    fn reachable(
        &self,
        start: Cell,
        board: Board,
        obstacles: &[Cell],
        exempt: Option<Cell>,
    ) -> Reachable;

    fn path_exists(&self, start: Cell, target: Cell, board: Board, obstacles: &[Cell]) -> bool;

    fn shortest_path(
        &self,
        start: Cell,
        goal: Cell,
        board: Board,
        obstacles: &[Cell],
    ) -> Option<Path>;

    fn is_collision(&self, next_cell: Cell, board: Board, body: &[Cell]) -> bool;

    fn is_isolated(
        &self,
        head: Cell,
        goal: Cell,
        fallback_target: Cell,
        board: Board,
        body: &[Cell],
    ) -> bool;

    /// Directions whose next head does not collide, scanned in
    /// [`Direction::ALL`] order.
    fn safe_directions(&self, head: Cell, board: Board, body: &[Cell]) -> DirectionSet {
        Direction::ALL
            .into_iter()
            .filter(|&direction| !self.is_collision(head.step(direction), board, body))
            .collect()
    }
}

impl<T: SearchOracle + ?Sized> SearchOracle for &T {
    fn reachable(
        &self,
        start: Cell,
        board: Board,
        obstacles: &[Cell],
        exempt: Option<Cell>,
    ) -> Reachable {
        (**self).reachable(start, board, obstacles, exempt)
    }

    fn path_exists(&self, start: Cell, target: Cell, board: Board, obstacles: &[Cell]) -> bool {
        (**self).path_exists(start, target, board, obstacles)
    }

    fn shortest_path(
        &self,
        start: Cell,
        goal: Cell,
        board: Board,
        obstacles: &[Cell],
    ) -> Option<Path> {
        (**self).shortest_path(start, goal, board, obstacles)
    }

    fn is_collision(&self, next_cell: Cell, board: Board, body: &[Cell]) -> bool {
        (**self).is_collision(next_cell, board, body)
    }

    fn is_isolated(
        &self,
        head: Cell,
        goal: Cell,
        fallback_target: Cell,
        board: Board,
        body: &[Cell],
    ) -> bool {
        (**self).is_isolated(head, goal, fallback_target, board, body)
    }

    fn safe_directions(&self, head: Cell, board: Board, body: &[Cell]) -> DirectionSet {
        (**self).safe_directions(head, board, body)
    }
}
