//! Move planner for the snake agent.
//!
//! Scores each candidate direction with [`CostModel`] and lets [`PolicyAgent`]
//! pick the cheapest safe one. Grid searches come from `game-core` through the
//! [`game_core::SearchOracle`] trait.
pub mod config;
pub mod policy;
pub mod scoring;

pub use config::{CostWeights, PolicyConfig};
pub use policy::PolicyAgent;
pub use scoring::{CostBreakdown, CostModel, MoveCost, MoveEvaluation};
