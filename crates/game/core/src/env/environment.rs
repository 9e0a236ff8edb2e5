use crate::error::InvalidInput;
use crate::state::{Cell, Direction, Snapshot};

/// Read-only view of the live game owned by the caller.
///
/// The planner never mutates the environment: it copies a [`Snapshot`] out,
/// decides, and hands a [`Direction`] back for the environment to apply.
pub trait Environment {
    fn board_size(&self) -> i32;

    /// Body cells, head first.
    fn body(&self) -> &[Cell];

    fn goal(&self) -> Cell;

    /// Heading the agent moved in on the previous tick.
    fn direction(&self) -> Direction;

    /// Copies the current state into a validated snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] when the environment reports an empty body, a
    /// non-positive size, or a head or goal outside the board.
    fn snapshot(&self) -> Result<Snapshot, InvalidInput> {
        Snapshot::new(
            self.board_size(),
            self.body().to_vec(),
            self.goal(),
            self.direction(),
        )
    }
}
