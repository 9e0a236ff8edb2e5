use std::fmt;

/// Discrete grid cell expressed in board coordinates.
///
/// `x` grows to the right and `y` grows downward; `(0, 0)` is the top-left
/// corner of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring cell one step in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (L1) distance: `|dx| + |dy|`.
    #[inline]
    pub fn manhattan_distance(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Absolute heading on the board.
///
/// Declaration order (`UP`, `DOWN`, `LEFT`, `RIGHT`) is the canonical
/// iteration and tie-break order used throughout the planner.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit offset of a single step.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Absolute heading after applying a relative turn to `self`.
    pub const fn turned(self, turn: RelativeTurn) -> Self {
        match (self, turn) {
            (_, RelativeTurn::Straight) => self,
            (Direction::Up, RelativeTurn::Left) => Direction::Left,
            (Direction::Up, RelativeTurn::Right) => Direction::Right,
            (Direction::Down, RelativeTurn::Left) => Direction::Right,
            (Direction::Down, RelativeTurn::Right) => Direction::Left,
            (Direction::Left, RelativeTurn::Left) => Direction::Down,
            (Direction::Left, RelativeTurn::Right) => Direction::Up,
            (Direction::Right, RelativeTurn::Left) => Direction::Up,
            (Direction::Right, RelativeTurn::Right) => Direction::Down,
        }
    }

    /// Relative turn that takes `current` to `self`, or `None` for a reversal.
    pub fn relative_to(self, current: Direction) -> Option<RelativeTurn> {
        RelativeTurn::ALL
            .into_iter()
            .find(|&turn| current.turned(turn) == self)
    }

    const fn flag(self) -> DirectionSet {
        match self {
            Direction::Up => DirectionSet::UP,
            Direction::Down => DirectionSet::DOWN,
            Direction::Left => DirectionSet::LEFT,
            Direction::Right => DirectionSet::RIGHT,
        }
    }
}

/// Turn relative to the current heading.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum RelativeTurn {
    Straight,
    Left,
    Right,
}

impl RelativeTurn {
    pub const ALL: [RelativeTurn; 3] = [
        RelativeTurn::Straight,
        RelativeTurn::Left,
        RelativeTurn::Right,
    ];
}

bitflags::bitflags! {
    /// Compact set of directions, e.g. the moves that avoid an immediate collision.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct DirectionSet: u8 {
        const UP = 1 << 0;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

impl DirectionSet {
    pub fn insert_direction(&mut self, direction: Direction) {
        self.insert(direction.flag());
    }

    pub fn contains_direction(&self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Iterates members in [`Direction::ALL`] order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL
            .into_iter()
            .filter(move |direction| self.contains(direction.flag()))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::empty();
        for direction in iter {
            set.insert_direction(direction);
        }
        set
    }
}
