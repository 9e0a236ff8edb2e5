//! A* shortest path on the 4-connected grid.
//!
//! Every step costs 1 and the Manhattan distance never overestimates the
//! remaining steps, so the first time the goal is popped its step count is
//! minimal. Ties in `f` prefer the lower `g`, then the smaller cell, which
//! keeps the returned path identical across runs.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::grid::ObstacleMap;
use crate::state::{Board, Cell};

/// Cells from start to goal, both included. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(Vec<Cell>);

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Number of cells on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a path holds at least its start cell.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of edges (moves) on the path.
    pub fn steps(&self) -> usize {
        self.0.len() - 1
    }

    pub fn start(&self) -> Cell {
        self.0[0]
    }

    pub fn goal(&self) -> Cell {
        self.0[self.0.len() - 1]
    }
}

/// Frontier priority: `(f = g + h, g, cell)`, smallest first.
type FrontierKey = Reverse<(u32, u32, Cell)>;

/// Minimum-step path from `start` to `goal` avoiding `obstacles`.
///
/// `start` and `goal` are exempt from `obstacles`. Returns `None` when either
/// endpoint is off the board or the frontier empties first.
pub fn shortest_path(start: Cell, goal: Cell, board: Board, obstacles: &[Cell]) -> Option<Path> {
    let start_idx = board.index_of(start)?;
    let goal_idx = board.index_of(goal)?;
    if start_idx == goal_idx {
        return Some(Path(vec![start]));
    }

    let map = ObstacleMap::new(board, obstacles, &[start, goal]);
    let cell_count = board.cell_count();
    let mut best_g = vec![u32::MAX; cell_count];
    let mut came_from: Vec<Option<Cell>> = vec![None; cell_count];
    let mut closed = vec![false; cell_count];
    let mut frontier: BinaryHeap<FrontierKey> = BinaryHeap::new();

    best_g[start_idx] = 0;
    frontier.push(Reverse((start.manhattan_distance(goal), 0, start)));

    while let Some(Reverse((_, g, current))) = frontier.pop() {
        let Some(idx) = board.index_of(current) else {
            continue;
        };
        // Stale entry: a cheaper route to `current` was already expanded.
        if closed[idx] || g > best_g[idx] {
            continue;
        }
        if idx == goal_idx {
            return Some(reconstruct(&came_from, board, start, goal));
        }
        closed[idx] = true;

        for next in board.neighbors(current) {
            if !map.is_open(next) {
                continue;
            }
            let Some(next_idx) = board.index_of(next) else {
                continue;
            };
            let next_g = g + 1;
            if next_g < best_g[next_idx] {
                best_g[next_idx] = next_g;
                came_from[next_idx] = Some(current);
                let f = next_g + next.manhattan_distance(goal);
                frontier.push(Reverse((f, next_g, next)));
            }
        }
    }

    None
}

fn reconstruct(came_from: &[Option<Cell>], board: Board, start: Cell, goal: Cell) -> Path {
    let mut cells = vec![goal];
    let mut current = goal;

    while current != start {
        let parent = board
            .index_of(current)
            .and_then(|idx| came_from[idx]);
        match parent {
            Some(prev) => {
                cells.push(prev);
                current = prev;
            }
            None => break,
        }
    }

    cells.reverse();
    Path(cells)
}
