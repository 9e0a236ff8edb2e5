//! Grid model: cells, headings, the board and per-tick snapshots.
mod board;
mod common;
mod snapshot;

pub use board::{Board, Tile};
pub use common::{Cell, Direction, DirectionSet, RelativeTurn};
pub use snapshot::{Body, Snapshot};
