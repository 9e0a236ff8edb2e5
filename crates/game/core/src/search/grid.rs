//! Obstacle lookup and the breadth-first traversal shared by every BFS query.

use std::collections::VecDeque;

use crate::state::{Board, Cell};

/// Dense blocked-cell table for one query.
///
/// Built once per search so membership tests inside the traversal are O(1)
/// instead of a scan over the body.
pub(crate) struct ObstacleMap {
    board: Board,
    blocked: Vec<bool>,
}

impl ObstacleMap {
    /// Marks every in-bounds obstacle as blocked, then clears the exempt cells.
    ///
    /// Exemptions model a query's own start or target never blocking itself
    /// (e.g. the tail vacating its cell while the head advances).
    pub(crate) fn new(board: Board, obstacles: &[Cell], exempt: &[Cell]) -> Self {
        let mut blocked = vec![false; board.cell_count()];

        for &cell in obstacles {
            if let Some(idx) = board.index_of(cell) {
                blocked[idx] = true;
            }
        }
        for &cell in exempt {
            if let Some(idx) = board.index_of(cell) {
                blocked[idx] = false;
            }
        }

        Self { board, blocked }
    }

    pub(crate) fn board(&self) -> Board {
        self.board
    }

    /// True if `cell` is on the board and not blocked.
    #[inline]
    pub(crate) fn is_open(&self, cell: Cell) -> bool {
        self.board
            .index_of(cell)
            .is_some_and(|idx| !self.blocked[idx])
    }
}

/// What a breadth-first traversal is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Traversal {
    /// Visit every reachable cell.
    Exhaust,
    /// Stop as soon as the given cell is dequeued.
    StopAt(Cell),
}

/// Result of [`breadth_first`].
pub(crate) struct Flood {
    /// Visited cells in dequeue order, starting with the origin.
    pub(crate) order: Vec<Cell>,
    /// Row-major visited flags.
    pub(crate) visited: Vec<bool>,
    /// Whether the `StopAt` target was reached.
    pub(crate) found: bool,
}

/// Breadth-first traversal from `start` over open cells, 4-connected.
///
/// `start` is always expanded, even if it is itself blocked in `map`; it is
/// the cell the query departs from. Each cell is visited at most once. A
/// start outside the board yields an empty flood.
pub(crate) fn breadth_first(map: &ObstacleMap, start: Cell, mode: Traversal) -> Flood {
    let board = map.board();
    let mut visited = vec![false; board.cell_count()];
    let mut order = Vec::new();

    let Some(start_idx) = board.index_of(start) else {
        return Flood {
            order,
            visited,
            found: false,
        };
    };

    let mut queue = VecDeque::new();
    visited[start_idx] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);

        if mode == Traversal::StopAt(current) {
            return Flood {
                order,
                visited,
                found: true,
            };
        }

        for next in board.neighbors(current) {
            if !map.is_open(next) {
                continue;
            }
            let Some(idx) = board.index_of(next) else {
                continue;
            };
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            queue.push_back(next);
        }
    }

    Flood {
        order,
        visited,
        found: false,
    }
}
