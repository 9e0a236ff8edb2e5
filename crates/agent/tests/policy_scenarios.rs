mod support;

use agent::{CostModel, CostWeights, MoveCost, PolicyAgent, PolicyConfig};
use game_core::{Cell, Direction, Environment, InvalidInput, RelativeTurn, is_collision};
use support::{Pcg, init_tracing, snapshot};

#[test]
fn wall_move_costs_infinity() {
    init_tracing();
    let model = CostModel::new(CostWeights::default());
    let start = snapshot(10, &[(0, 0), (0, 1)], (5, 5), Direction::Up);
    assert_eq!(model.cost(&start, Direction::Up), MoveCost::Infinite);
}

#[test]
fn straight_goal_capture_costs_minus_ninety_nine() {
    let model = CostModel::new(CostWeights::default());
    let start = snapshot(10, &[(1, 1), (1, 2)], (0, 1), Direction::Left);
    assert_eq!(model.cost(&start, Direction::Left), MoveCost::Finite(-99));
}

#[test]
fn turning_goal_capture_costs_minus_ninety_four() {
    let model = CostModel::new(CostWeights::default());
    let start = snapshot(10, &[(1, 1), (1, 2)], (0, 1), Direction::Up);
    assert_eq!(model.cost(&start, Direction::Left), MoveCost::Finite(-94));
}

#[test]
fn turn_costs_follow_relative_turns() {
    let model = CostModel::new(CostWeights::default());
    for current in Direction::ALL {
        assert_eq!(model.turn_term(current, current.turned(RelativeTurn::Straight)), 0);
        assert_eq!(model.turn_term(current, current.turned(RelativeTurn::Left)), 5);
        assert_eq!(model.turn_term(current, current.turned(RelativeTurn::Right)), 5);
        assert!(model.turn_term(current, current.opposite()) >= 1_000_000);
    }
}

#[test]
fn enclosed_head_falls_back_to_current_heading() {
    init_tracing();
    let agent = PolicyAgent::new(PolicyConfig::default());
    // 3x3 board filled by the body; every neighbour of the head is a middle
    // segment and the tail is not adjacent.
    let start = snapshot(
        3,
        &[
            (1, 1),
            (1, 0),
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 2),
            (2, 2),
            (2, 1),
            (2, 0),
        ],
        (0, 0),
        Direction::Left,
    );

    assert!(agent.safe_moves(&start).is_empty());
    assert!(agent.evaluate_all(&start).is_empty());
    assert_eq!(agent.choose_best_move(&start), Direction::Left);
}

#[test]
fn prefers_following_the_tail_out_of_a_pocket() {
    let agent = PolicyAgent::new(PolicyConfig::default());
    // Head in a dead-end corridor; the only exit is the cell the tail leaves.
    let start = snapshot(
        4,
        &[(0, 0), (1, 0), (1, 1), (0, 1)],
        (3, 3),
        Direction::Left,
    );
    let safe: Vec<_> = agent.safe_moves(&start).directions().collect();
    assert_eq!(safe, vec![Direction::Down]);
    assert_eq!(agent.choose_best_move(&start), Direction::Down);
}

#[test]
fn avoids_sealing_itself_away_from_the_goal() {
    let agent = PolicyAgent::new(PolicyConfig::default());
    // Moving UP keeps a route to the goal; RIGHT walks into a closed pocket.
    let start = snapshot(
        5,
        &[(1, 2), (1, 3), (2, 3), (3, 3), (3, 2), (3, 1), (2, 1)],
        (0, 0),
        Direction::Up,
    );
    let evaluations = agent.evaluate_all(&start);
    let right = evaluations
        .iter()
        .find(|evaluation| evaluation.candidate == Direction::Right)
        .unwrap();
    assert_eq!(right.breakdown.unwrap().path, 1_000);
    assert_ne!(agent.choose_best_move(&start), Direction::Right);
}

/// Minimal game loop used to drive the agent over many ticks.
struct Game {
    size: i32,
    body: Vec<Cell>,
    goal: Cell,
    direction: Direction,
    rng: Pcg,
}

impl Game {
    fn new(seed: u64) -> Self {
        Self {
            size: 10,
            body: vec![Cell::new(5, 5), Cell::new(5, 6)],
            goal: Cell::new(2, 2),
            direction: Direction::Up,
            rng: Pcg::new(seed),
        }
    }

    /// Applies a move; returns false when the game ends.
    fn step(&mut self, direction: Direction) -> bool {
        let board = game_core::Board::new(self.size).unwrap();
        let next = self.body[0].step(direction);
        if is_collision(next, board, &self.body) {
            return false;
        }
        self.body.insert(0, next);
        if next == self.goal {
            let free: Vec<Cell> = support::all_cells(self.size)
                .filter(|cell| !self.body.contains(cell))
                .collect();
            if free.is_empty() {
                return false;
            }
            self.goal = free[self.rng.below(free.len() as u32) as usize];
        } else {
            self.body.pop();
        }
        self.direction = direction;
        true
    }
}

impl Environment for Game {
    fn board_size(&self) -> i32 {
        self.size
    }

    fn body(&self) -> &[Cell] {
        &self.body
    }

    fn goal(&self) -> Cell {
        self.goal
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

#[test]
fn never_picks_a_lethal_move_while_a_safe_one_exists() {
    init_tracing();
    let agent = PolicyAgent::new(PolicyConfig::default());
    let mut game = Game::new(99);

    for _ in 0..300 {
        let snapshot = game.snapshot().unwrap();
        let safe = agent.safe_moves(&snapshot);
        let chosen = agent.decide(&game).unwrap();
        if safe.is_empty() {
            assert_eq!(chosen, game.direction);
            break;
        }
        assert!(safe.contains_direction(chosen));

        let alive = game.step(chosen);
        let board_full = game.body.len() as i32 == game.size * game.size;
        assert!(alive || board_full);
        if !alive {
            break;
        }
    }
}

#[test]
fn decide_rejects_invalid_environments() {
    let agent = PolicyAgent::new(PolicyConfig::default());
    let mut game = Game::new(1);
    game.goal = Cell::new(10, 0);
    assert_eq!(
        agent.decide(&game),
        Err(InvalidInput::GoalOutOfBounds {
            goal: Cell::new(10, 0),
            size: 10
        })
    );

    game.body.clear();
    assert_eq!(agent.decide(&game), Err(InvalidInput::EmptyBody));
}
