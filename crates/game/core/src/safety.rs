//! Safety predicates built on the grid model.
//!
//! These are hard gates evaluated before any scoring: a move whose next head
//! collides is never scored, and isolation feeds the trap penalty.

use crate::search::path_exists;
use crate::state::{Board, Cell};

/// Returns true if moving the head onto `next_cell` ends the game.
///
/// A collision is leaving the board or entering any body cell except the
/// tail, which vacates its cell on the same tick.
pub fn is_collision(next_cell: Cell, board: Board, body: &[Cell]) -> bool {
    if !board.contains(next_cell) {
        return true;
    }
    let without_tail = body.split_last().map_or(&[][..], |(_, rest)| rest);
    without_tail.contains(&next_cell)
}

/// Returns true if `head` reaches neither `goal` nor `fallback_target`.
///
/// The fallback is conventionally the tail: as long as the head can follow
/// its own tail it is not trapped.
pub fn is_isolated(
    head: Cell,
    goal: Cell,
    fallback_target: Cell,
    board: Board,
    body: &[Cell],
) -> bool {
    !path_exists(head, goal, board, body) && !path_exists(head, fallback_target, board, body)
}
