//! Composite move cost.

use game_core::{Direction, GridSearch, RelativeTurn, SearchOracle, Snapshot};

use super::{CostBreakdown, MoveCost, MoveEvaluation};
use crate::config::CostWeights;

/// Scores candidate moves against a snapshot.
///
/// Generic over the search backend so tests can pin individual terms with a
/// fake [`SearchOracle`].
#[derive(Clone, Debug)]
pub struct CostModel<O = GridSearch> {
    weights: CostWeights,
    oracle: O,
}

impl CostModel<GridSearch> {
    pub const fn new(weights: CostWeights) -> Self {
        Self {
            weights,
            oracle: GridSearch,
        }
    }
}

impl Default for CostModel<GridSearch> {
    fn default() -> Self {
        Self::new(CostWeights::default())
    }
}

impl<O: SearchOracle> CostModel<O> {
    pub const fn with_oracle(weights: CostWeights, oracle: O) -> Self {
        Self { weights, oracle }
    }

    pub const fn weights(&self) -> &CostWeights {
        &self.weights
    }

    pub const fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Turn term for moving in `candidate` while heading `current`.
    pub fn turn_term(&self, current: Direction, candidate: Direction) -> i64 {
        let units = match candidate.relative_to(current) {
            Some(RelativeTurn::Straight) => 0,
            Some(RelativeTurn::Left | RelativeTurn::Right) => 1,
            None => self.weights.reversal_units,
        };
        units.saturating_mul(self.weights.turn)
    }

    /// Total cost of moving in `candidate`.
    pub fn cost(&self, snapshot: &Snapshot, candidate: Direction) -> MoveCost {
        self.evaluate(snapshot, candidate).cost
    }

    /// Scores `candidate` term by term.
    ///
    /// A colliding move short-circuits to [`MoveCost::Infinite`] before any
    /// search runs; no other path yields an infinite cost.
    pub fn evaluate(&self, snapshot: &Snapshot, candidate: Direction) -> MoveEvaluation {
        let board = snapshot.board();
        let body = snapshot.body();
        let goal = snapshot.goal();
        let next_head = snapshot.head().step(candidate);

        if self.oracle.is_collision(next_head, board, body.cells()) {
            return MoveEvaluation::vetoed(candidate, next_head);
        }

        let turn = self.turn_term(snapshot.direction(), candidate);

        // Path cells run from `next_head` to the goal, so their count is the
        // number of moves from the current head.
        let (path, goal_bonus) = match self
            .oracle
            .shortest_path(next_head, goal, board, body.cells())
        {
            Some(found) => {
                let moves = i64::try_from(found.len()).unwrap_or(i64::MAX);
                let bonus = if moves == 1 { -self.weights.goal_bonus } else { 0 };
                (moves, bonus)
            }
            None => (self.weights.no_path_penalty, 0),
        };

        let grows = next_head == goal;
        let after = body.advanced(next_head, grows);
        let mut isolation = 0;
        if self
            .oracle
            .is_isolated(next_head, goal, after.tail(), board, after.cells())
        {
            let area = self
                .oracle
                .reachable(next_head, board, after.cells(), Some(goal))
                .count();
            let threshold = after.len().saturating_mul(self.weights.isolation_area_factor);
            if area < threshold {
                isolation = self.weights.isolation_penalty;
            }
        }

        MoveEvaluation::scored(
            candidate,
            next_head,
            CostBreakdown {
                turn,
                path,
                goal_bonus,
                isolation,
            },
        )
    }
}
