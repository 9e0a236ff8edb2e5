//! Open-loop N-step rollout of a fixed action sequence.
//!
//! The rollout plays moves on a private copy of the snapshot without any
//! planning: once the supplied actions run out, the last heading is held.

use crate::safety::is_collision;
use crate::state::{Body, Cell, Direction, Snapshot};

/// Reward table applied per simulated step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RolloutRewards {
    /// Added once when a move collides; the rollout stops there.
    pub collision: i64,
    /// Added when the head lands on the goal.
    pub goal: i64,
    /// Added for every completed move.
    pub step: i64,
}

impl RolloutRewards {
    pub const DEFAULT_COLLISION: i64 = -100;
    pub const DEFAULT_GOAL: i64 = 10;
    pub const DEFAULT_STEP: i64 = -1;
}

impl Default for RolloutRewards {
    fn default() -> Self {
        Self {
            collision: Self::DEFAULT_COLLISION,
            goal: Self::DEFAULT_GOAL,
            step: Self::DEFAULT_STEP,
        }
    }
}

/// Outcome of [`simulate`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rollout {
    pub body: Body,
    /// Goal left on the board; `None` once it has been eaten.
    pub goal: Option<Cell>,
    pub direction: Direction,
    pub reward: i64,
    /// Moves completed without collision.
    pub steps_played: usize,
    pub terminated: bool,
}

/// Plays up to `steps` moves from `snapshot`.
///
/// Move `i` uses `actions[i]` while available and then repeats the latest
/// heading. The goal is not regenerated once eaten. The snapshot itself is
/// left untouched.
pub fn simulate(
    snapshot: &Snapshot,
    actions: &[Direction],
    steps: usize,
    rewards: &RolloutRewards,
) -> Rollout {
    let board = snapshot.board();
    let mut body = snapshot.body().clone();
    let mut goal = Some(snapshot.goal());
    let mut direction = snapshot.direction();
    let mut reward = 0;
    let mut steps_played = 0;
    let mut terminated = false;

    for i in 0..steps {
        let action = actions.get(i).copied().unwrap_or(direction);
        let next_head = body.head().step(action);

        if is_collision(next_head, board, body.cells()) {
            reward += rewards.collision;
            terminated = true;
            break;
        }

        let eats = goal == Some(next_head);
        body = body.advanced(next_head, eats);
        if eats {
            reward += rewards.goal;
            goal = None;
        }

        reward += rewards.step;
        direction = action;
        steps_played += 1;
    }

    Rollout {
        body,
        goal,
        direction,
        reward,
        steps_played,
        terminated,
    }
}
