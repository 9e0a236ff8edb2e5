//! Shared fixtures for the agent integration tests.
#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use game_core::{Board, Cell, Direction, Snapshot};

/// Installs a test-writer subscriber once; `RUST_LOG` controls verbosity.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn cells(raw: &[(i32, i32)]) -> Vec<Cell> {
    raw.iter().copied().map(Cell::from).collect()
}

pub fn snapshot(
    size: i32,
    body: &[(i32, i32)],
    goal: (i32, i32),
    direction: Direction,
) -> Snapshot {
    Snapshot::new(size, cells(body), Cell::from(goal), direction).unwrap()
}

/// PCG-XSH-RR stream used to generate reproducible boards.
pub struct Pcg {
    state: u64,
}

impl Pcg {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self {
            state: seed.wrapping_add(Self::INCREMENT),
        };
        rng.next_u32();
        rng
    }

    pub fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = old
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((old >> 18) ^ old) >> 27) as u32;
        let rot = (old >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform-ish value in `[0, bound)`.
    pub fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound.max(1)
    }

    pub fn cell(&mut self, size: i32) -> Cell {
        Cell::new(self.below(size as u32) as i32, self.below(size as u32) as i32)
    }

    pub fn direction(&mut self) -> Direction {
        Direction::ALL[self.below(4) as usize]
    }
}

/// Random board for property checks.
pub struct Scenario {
    pub board: Board,
    pub body: Vec<Cell>,
    pub goal: Cell,
    pub direction: Direction,
}

impl Scenario {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.board.size(), self.body.clone(), self.goal, self.direction).unwrap()
    }
}

/// Self-avoiding random walk body plus a free goal cell.
pub fn random_scenario(rng: &mut Pcg) -> Scenario {
    let size = 3 + rng.below(8) as i32;
    let board = Board::new(size).unwrap();
    let target_len = 1 + rng.below((size * size / 2) as u32) as usize;

    let mut body = vec![rng.cell(size)];
    let mut occupied: HashSet<Cell> = body.iter().copied().collect();
    while body.len() < target_len {
        let Some(&last) = body.last() else { break };
        let open: Vec<Cell> = board
            .neighbors(last)
            .into_iter()
            .filter(|cell| !occupied.contains(cell))
            .collect();
        if open.is_empty() {
            break;
        }
        let next = open[rng.below(open.len() as u32) as usize];
        occupied.insert(next);
        body.push(next);
    }

    let free: Vec<Cell> = all_cells(size)
        .filter(|cell| !occupied.contains(cell))
        .collect();
    let goal = if free.is_empty() {
        body[body.len() - 1]
    } else {
        free[rng.below(free.len() as u32) as usize]
    };

    let direction = match body.get(1) {
        Some(&neck) => Direction::ALL
            .into_iter()
            .find(|&dir| neck.step(dir) == body[0])
            .unwrap_or(Direction::Up),
        None => rng.direction(),
    };

    Scenario {
        board,
        body,
        goal,
        direction,
    }
}

/// Random scattered obstacles, not necessarily a connected body.
pub fn random_obstacles(rng: &mut Pcg, size: i32) -> Vec<Cell> {
    let count = rng.below((size * size) as u32) as usize;
    (0..count).map(|_| rng.cell(size)).collect()
}

pub fn all_cells(size: i32) -> impl Iterator<Item = Cell> {
    (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
}

/// Depth-first flood fill over open cells; `start` is always included when
/// on the board.
pub fn reference_flood(start: Cell, size: i32, blocked: &HashSet<Cell>) -> HashSet<Cell> {
    let inside = |cell: Cell| cell.x >= 0 && cell.y >= 0 && cell.x < size && cell.y < size;
    let mut seen = HashSet::new();
    if !inside(start) {
        return seen;
    }
    let mut stack = vec![start];
    seen.insert(start);
    while let Some(cell) = stack.pop() {
        for dir in Direction::ALL {
            let next = cell.step(dir);
            if inside(next) && !blocked.contains(&next) && seen.insert(next) {
                stack.push(next);
            }
        }
    }
    seen
}

/// Plain BFS step distance between two cells, or `None` when disconnected.
pub fn reference_distance(
    start: Cell,
    goal: Cell,
    size: i32,
    blocked: &HashSet<Cell>,
) -> Option<usize> {
    let inside = |cell: Cell| cell.x >= 0 && cell.y >= 0 && cell.x < size && cell.y < size;
    if !inside(start) || !inside(goal) {
        return None;
    }
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((cell, dist)) = queue.pop_front() {
        if cell == goal {
            return Some(dist);
        }
        for dir in Direction::ALL {
            let next = cell.step(dir);
            if inside(next) && !blocked.contains(&next) && seen.insert(next) {
                queue.push_back((next, dist + 1));
            }
        }
    }
    None
}
