//! Move scoring for the planner.
//!
//! Every candidate direction gets a [`MoveCost`]: lower is better and
//! [`MoveCost::Infinite`] marks a move that collides on the next tick. Finite
//! costs are the sum of four terms kept apart in a [`CostBreakdown`] so a
//! decision can be explained after the fact.
//!
//! ## Cost terms
//!
//! - **turn**: 0 straight, `turn` weight for a perpendicular turn, and
//!   `reversal_units × turn` for reversing into the neck
//! - **path**: steps from the current head to the goal through this move, or
//!   the no-path penalty when the goal is cut off
//! - **goal_bonus**: negative bonus when the move lands on the goal
//! - **isolation**: trap penalty when the post-move head reaches neither goal
//!   nor tail and sits in a small pocket

mod cost;

pub use cost::CostModel;

use std::fmt;

use game_core::{Cell, Direction};

/// Cost of one candidate move, totally ordered with `Infinite` above every
/// finite value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveCost {
    Finite(i64),
    /// Hard veto: the move leaves the board or hits the body.
    Infinite,
}

impl MoveCost {
    pub const fn is_infinite(self) -> bool {
        matches!(self, Self::Infinite)
    }

    pub const fn finite(self) -> Option<i64> {
        match self {
            Self::Finite(value) => Some(value),
            Self::Infinite => None,
        }
    }
}

impl From<i64> for MoveCost {
    fn from(value: i64) -> Self {
        Self::Finite(value)
    }
}

impl fmt::Display for MoveCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(value) => write!(f, "{value}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Signed contribution of each cost term. The sum is the finite cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBreakdown {
    pub turn: i64,
    pub path: i64,
    /// Zero or negative.
    pub goal_bonus: i64,
    pub isolation: i64,
}

impl CostBreakdown {
    pub const fn total(&self) -> i64 {
        self.turn
            .saturating_add(self.path)
            .saturating_add(self.goal_bonus)
            .saturating_add(self.isolation)
    }
}

/// Scored candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveEvaluation {
    pub candidate: Direction,
    pub next_head: Cell,
    pub cost: MoveCost,
    /// `None` for vetoed moves, which are never scored term by term.
    pub breakdown: Option<CostBreakdown>,
}

impl MoveEvaluation {
    pub const fn vetoed(candidate: Direction, next_head: Cell) -> Self {
        Self {
            candidate,
            next_head,
            cost: MoveCost::Infinite,
            breakdown: None,
        }
    }

    pub const fn scored(candidate: Direction, next_head: Cell, breakdown: CostBreakdown) -> Self {
        Self {
            candidate,
            next_head,
            cost: MoveCost::Finite(breakdown.total()),
            breakdown: Some(breakdown),
        }
    }
}
