//! Validated, read-only view of the board handed to the planner each tick.
//!
//! The environment owns the live game. Every decision works on a
//! [`Snapshot`] copied out of it, so nothing computed here can leak back into
//! the running game or survive past a single tick.

use super::{Board, Cell, Direction};
use crate::error::InvalidInput;

/// Occupied cells of the agent, head first and tail last.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Cell>"))]
pub struct Body(Vec<Cell>);

impl Body {
    /// # Errors
    ///
    /// Returns [`InvalidInput::EmptyBody`] if `cells` is empty.
    pub fn new(cells: Vec<Cell>) -> Result<Self, InvalidInput> {
        if cells.is_empty() {
            return Err(InvalidInput::EmptyBody);
        }
        Ok(Self(cells))
    }

    pub fn head(&self) -> Cell {
        self.0[0]
    }

    pub fn tail(&self) -> Cell {
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a body holds at least its head.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    /// Hypothetical body after the head moves to `next_head`.
    ///
    /// The tail is dropped unless `grows` is set (the move eats the goal).
    pub fn advanced(&self, next_head: Cell, grows: bool) -> Body {
        let keep = if grows { self.0.len() } else { self.0.len() - 1 };
        let mut cells = Vec::with_capacity(keep + 1);
        cells.push(next_head);
        cells.extend_from_slice(&self.0[..keep]);
        Body(cells)
    }
}

impl TryFrom<Vec<Cell>> for Body {
    type Error = InvalidInput;

    fn try_from(cells: Vec<Cell>) -> Result<Self, Self::Error> {
        Self::new(cells)
    }
}

impl AsRef<[Cell]> for Body {
    fn as_ref(&self) -> &[Cell] {
        &self.0
    }
}

/// Everything the planner needs to choose one move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSnapshot"))]
pub struct Snapshot {
    board: Board,
    body: Body,
    goal: Cell,
    direction: Direction,
}

impl Snapshot {
    /// Validates raw environment data into a snapshot.
    ///
    /// # Errors
    ///
    /// - [`InvalidInput::NonPositiveBoardSize`] if `size <= 0`
    /// - [`InvalidInput::EmptyBody`] if `body` is empty
    /// - [`InvalidInput::HeadOutOfBounds`] if the head is off the board
    /// - [`InvalidInput::GoalOutOfBounds`] if the goal is off the board
    pub fn new(
        size: i32,
        body: Vec<Cell>,
        goal: Cell,
        direction: Direction,
    ) -> Result<Self, InvalidInput> {
        Self::from_parts(Board::new(size)?, Body::new(body)?, goal, direction)
    }

    fn from_parts(
        board: Board,
        body: Body,
        goal: Cell,
        direction: Direction,
    ) -> Result<Self, InvalidInput> {
        let size = board.size();
        let head = body.head();
        if !board.contains(head) {
            return Err(InvalidInput::HeadOutOfBounds { head, size });
        }
        if !board.contains(goal) {
            return Err(InvalidInput::GoalOutOfBounds { goal, size });
        }

        Ok(Self {
            board,
            body,
            goal,
            direction,
        })
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn head(&self) -> Cell {
        self.body.head()
    }

    pub fn tail(&self) -> Cell {
        self.body.tail()
    }
}

/// Wire shape of a [`Snapshot`]; board and body validate themselves on the
/// way in, the bounds checks run in `TryFrom`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSnapshot {
    board: Board,
    body: Body,
    goal: Cell,
    direction: Direction,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSnapshot> for Snapshot {
    type Error = InvalidInput;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        Self::from_parts(raw.board, raw.body, raw.goal, raw.direction)
    }
}
