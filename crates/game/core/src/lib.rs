//! Deterministic grid model and search primitives for the snake planner.
//!
//! `game-core` defines the board, body and snapshot types together with the
//! pure algorithms the planner scores moves with: reachability, A* shortest
//! path, safety predicates and an open-loop rollout. Nothing here performs
//! I/O or keeps state between calls; the decision layer lives in `agent`.
pub mod env;
pub mod error;
pub mod rollout;
pub mod safety;
pub mod search;
pub mod state;

pub use env::{Environment, SearchOracle};
pub use error::InvalidInput;
pub use rollout::{Rollout, RolloutRewards, simulate};
pub use safety::{is_collision, is_isolated};
pub use search::{GridSearch, Path, Reachable, path_exists, reachable, shortest_path};
pub use state::{Body, Board, Cell, Direction, DirectionSet, RelativeTurn, Snapshot, Tile};
