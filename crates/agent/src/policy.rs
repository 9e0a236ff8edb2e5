//! Move selection (filter lethal moves, score the rest, take the minimum).
//!
//! The policy is stateless: each call works on one [`Snapshot`] and keeps
//! nothing afterwards, so identical snapshots always yield the same move.
//!
//! # Tie-break
//!
//! Candidates are visited in [`Direction::ALL`] order (UP, DOWN, LEFT, RIGHT)
//! and a later candidate only wins with a strictly lower cost, so the first
//! minimum in that order is chosen.

use game_core::{
    Direction, DirectionSet, Environment, GridSearch, InvalidInput, SearchOracle, Snapshot,
};

use crate::config::PolicyConfig;
use crate::scoring::{CostModel, MoveEvaluation};

/// Greedy one-step planner over the cost model.
#[derive(Clone, Debug)]
pub struct PolicyAgent<O = GridSearch> {
    model: CostModel<O>,
}

impl PolicyAgent<GridSearch> {
    pub const fn new(config: PolicyConfig) -> Self {
        Self {
            model: CostModel::new(config.weights),
        }
    }
}

impl Default for PolicyAgent<GridSearch> {
    fn default() -> Self {
        Self::new(PolicyConfig::default())
    }
}

impl<O: SearchOracle> PolicyAgent<O> {
    pub const fn with_oracle(config: PolicyConfig, oracle: O) -> Self {
        Self {
            model: CostModel::with_oracle(config.weights, oracle),
        }
    }

    pub const fn model(&self) -> &CostModel<O> {
        &self.model
    }

    /// Directions whose next head does not collide.
    pub fn safe_moves(&self, snapshot: &Snapshot) -> DirectionSet {
        self.model.oracle().safe_directions(
            snapshot.head(),
            snapshot.board(),
            snapshot.body().cells(),
        )
    }

    /// Scores every safe move, in [`Direction::ALL`] order.
    pub fn evaluate_all(&self, snapshot: &Snapshot) -> Vec<MoveEvaluation> {
        self.safe_moves(snapshot)
            .directions()
            .map(|direction| self.model.evaluate(snapshot, direction))
            .collect()
    }

    /// Picks the minimum-cost safe move.
    ///
    /// With no safe move the current heading is returned unchanged; the
    /// environment then observes the collision.
    pub fn choose_best_move(&self, snapshot: &Snapshot) -> Direction {
        tracing::debug!("PolicyAgent: evaluating moves from {}", snapshot.head());

        let mut best: Option<MoveEvaluation> = None;
        for evaluation in self.evaluate_all(snapshot) {
            match evaluation.breakdown {
                Some(terms) => tracing::debug!(
                    "  Move {}: cost={} (turn={}, path={}, bonus={}, isolation={})",
                    evaluation.candidate,
                    evaluation.cost,
                    terms.turn,
                    terms.path,
                    terms.goal_bonus,
                    terms.isolation
                ),
                None => tracing::trace!("  Move {}: vetoed", evaluation.candidate),
            }

            if best.is_none_or(|current| evaluation.cost < current.cost) {
                best = Some(evaluation);
            }
        }

        match best {
            Some(chosen) => {
                tracing::debug!(
                    "PolicyAgent: best move = {} (cost={})",
                    chosen.candidate,
                    chosen.cost
                );
                chosen.candidate
            }
            None => self.fallback_move(snapshot),
        }
    }

    /// Reads the environment, validates it and chooses a move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInput`] if the environment reports an invalid state.
    pub fn decide<E: Environment + ?Sized>(&self, env: &E) -> Result<Direction, InvalidInput> {
        let snapshot = env.snapshot()?;
        Ok(self.choose_best_move(&snapshot))
    }

    /// Last resort when the safe set is empty: rescans for the first
    /// non-colliding direction, else keeps the current heading.
    ///
    /// With a pure oracle the rescan finds nothing the first scan missed; it
    /// only matters for oracles whose answers change between calls.
    fn fallback_move(&self, snapshot: &Snapshot) -> Direction {
        match self.safe_moves(snapshot).directions().next() {
            Some(direction) => direction,
            None => {
                tracing::warn!(
                    "PolicyAgent: no safe move from {}, keeping heading {}",
                    snapshot.head(),
                    snapshot.direction()
                );
                snapshot.direction()
            }
        }
    }
}
