//! Error types for game-core.
//!
//! Only malformed input is an error here. An unreachable target is reported
//! as `None`/`false` by the searches, and a board with no safe move is handled
//! by the planner's fallback, so neither shows up in this module.

use crate::state::Cell;

/// Snapshot data rejected before any search runs.
///
/// Callers must validate (or handle these) before scoring; every operation
/// that accepts a validated [`crate::Snapshot`] is total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidInput {
    /// Board side length is zero or negative.
    #[error("board size {size} must be positive")]
    NonPositiveBoardSize { size: i32 },

    /// Board side length exceeds [`crate::Board::MAX_SIZE`].
    #[error("board size {size} exceeds the maximum of {max}")]
    BoardTooLarge { size: i32, max: i32 },

    /// Body has no cells, so there is no head to move.
    #[error("body must contain at least one cell")]
    EmptyBody,

    /// Head lies outside the board.
    #[error("head {head} is outside a board of size {size}")]
    HeadOutOfBounds { head: Cell, size: i32 },

    /// Goal lies outside the board.
    #[error("goal {goal} is outside a board of size {size}")]
    GoalOutOfBounds { goal: Cell, size: i32 },
}

impl InvalidInput {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveBoardSize { .. } => "INPUT_NON_POSITIVE_BOARD_SIZE",
            Self::BoardTooLarge { .. } => "INPUT_BOARD_TOO_LARGE",
            Self::EmptyBody => "INPUT_EMPTY_BODY",
            Self::HeadOutOfBounds { .. } => "INPUT_HEAD_OUT_OF_BOUNDS",
            Self::GoalOutOfBounds { .. } => "INPUT_GOAL_OUT_OF_BOUNDS",
        }
    }
}
