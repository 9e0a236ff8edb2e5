//! Collaborator traits at the edge of the core.
//!
//! [`Environment`] is the live game the planner reads from; [`SearchOracle`]
//! is the set of grid searches the planner scores with. Both are read-only.
mod environment;
mod oracle;

pub use environment::Environment;
pub use oracle::SearchOracle;
