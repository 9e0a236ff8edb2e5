//! Policy configuration and environment loaders.
use std::env;

/// Tunable weights of the move cost model.
///
/// The defaults are untuned heuristics carried over as-is; treat them as
/// policy knobs, not rules of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CostWeights {
    /// Multiplier applied to every turn unit (perpendicular turn = 1 unit).
    pub turn: i64,
    /// Turn units charged for reversing into the neck, before `turn`.
    pub reversal_units: i64,
    /// Subtracted when the move lands on the goal.
    pub goal_bonus: i64,
    /// Added instead of a path length when the goal is unreachable.
    pub no_path_penalty: i64,
    /// Added when the move looks like it seals the head into a small pocket.
    pub isolation_penalty: i64,
    /// A pocket is small when its area is below `factor × body length`.
    pub isolation_area_factor: usize,
}

impl CostWeights {
    pub const DEFAULT_TURN: i64 = 5;
    pub const DEFAULT_REVERSAL_UNITS: i64 = 1_000_000;
    pub const DEFAULT_GOAL_BONUS: i64 = 100;
    pub const DEFAULT_NO_PATH_PENALTY: i64 = 1_000;
    pub const DEFAULT_ISOLATION_PENALTY: i64 = 500;
    pub const DEFAULT_ISOLATION_AREA_FACTOR: usize = 2;
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            turn: Self::DEFAULT_TURN,
            reversal_units: Self::DEFAULT_REVERSAL_UNITS,
            goal_bonus: Self::DEFAULT_GOAL_BONUS,
            no_path_penalty: Self::DEFAULT_NO_PATH_PENALTY,
            isolation_penalty: Self::DEFAULT_ISOLATION_PENALTY,
            isolation_area_factor: Self::DEFAULT_ISOLATION_AREA_FACTOR,
        }
    }
}

/// Configuration for [`crate::PolicyAgent`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    pub weights: CostWeights,
}

impl PolicyConfig {
    pub const fn new(weights: CostWeights) -> Self {
        Self { weights }
    }

    /// Construct configuration from process environment variables.
    ///
    /// - `SNAKE_TURN_WEIGHT`
    /// - `SNAKE_REVERSAL_UNITS`
    /// - `SNAKE_GOAL_BONUS`
    /// - `SNAKE_NO_PATH_PENALTY`
    /// - `SNAKE_ISOLATION_PENALTY`
    /// - `SNAKE_ISOLATION_AREA_FACTOR`
    ///
    /// Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let weights = &mut config.weights;

        if let Some(turn) = read_var(&lookup, "SNAKE_TURN_WEIGHT") {
            weights.turn = turn;
        }
        if let Some(units) = read_var(&lookup, "SNAKE_REVERSAL_UNITS") {
            weights.reversal_units = units;
        }
        if let Some(bonus) = read_var(&lookup, "SNAKE_GOAL_BONUS") {
            weights.goal_bonus = bonus;
        }
        if let Some(penalty) = read_var(&lookup, "SNAKE_NO_PATH_PENALTY") {
            weights.no_path_penalty = penalty;
        }
        if let Some(penalty) = read_var(&lookup, "SNAKE_ISOLATION_PENALTY") {
            weights.isolation_penalty = penalty;
        }
        if let Some(factor) = read_var(&lookup, "SNAKE_ISOLATION_AREA_FACTOR") {
            weights.isolation_area_factor = factor;
        }

        config
    }
}

fn read_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    lookup(key)?.trim().parse().ok()
}
