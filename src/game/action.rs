use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Direction the snake can face or be steered towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No requested direction. Never a facing while the snake moves.
    Stationary,
}

impl Direction {
    /// Cardinal directions in clockwise order
    pub const CARDINALS: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Index of this direction in `CARDINALS`, `None` for `Stationary`
    pub fn cycle_index(self) -> Option<usize> {
        Self::CARDINALS.iter().position(|&d| d == self)
    }

    /// Rotate by `steps` quarter turns (positive is clockwise)
    pub fn rotated(self, steps: i32) -> Direction {
        match self.cycle_index() {
            Some(idx) => {
                let next = (idx as i32 + steps).rem_euclid(Self::CARDINALS.len() as i32);
                Self::CARDINALS[next as usize]
            }
            None => Direction::Stationary,
        }
    }

    pub fn clockwise(self) -> Direction {
        self.rotated(1)
    }

    pub fn counter_clockwise(self) -> Direction {
        self.rotated(-1)
    }

    /// The reverse direction
    pub fn opposite(self) -> Direction {
        self.rotated(2)
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self != Direction::Stationary && self.opposite() == other
    }

    /// Unit delta (dx, dy) for moving in this direction; y grows downwards
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Stationary => (0, 0),
        }
    }
}

/// Turn relative to the current facing, as chosen by an agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Turn {
    Straight,
    Clockwise,
    CounterClockwise,
}

impl Turn {
    /// Decode a one-hot `[straight, clockwise, counter_clockwise]` vector.
    pub fn from_one_hot(slots: [u8; 3]) -> Result<Turn, GameError> {
        match slots {
            [1, 0, 0] => Ok(Turn::Straight),
            [0, 1, 0] => Ok(Turn::Clockwise),
            [0, 0, 1] => Ok(Turn::CounterClockwise),
            _ => Err(GameError::InvalidAction { slots }),
        }
    }

    /// Facing after applying this turn to `facing`
    pub fn apply(self, facing: Direction) -> Direction {
        match self {
            Turn::Straight => facing,
            Turn::Clockwise => facing.clockwise(),
            Turn::CounterClockwise => facing.counter_clockwise(),
        }
    }
}

/// Input for one game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Absolute direction from the keyboard. `Stationary` keeps the current facing.
    Steer(Direction),
    /// Relative turn from an action vector
    Turn(Turn),
}

impl Action {
    /// Keep moving the way the snake already faces
    pub const CONTINUE: Action = Action::Steer(Direction::Stationary);
}

impl Default for Action {
    fn default() -> Self {
        Action::CONTINUE
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Steer(direction)
    }
}

impl From<Turn> for Action {
    fn from(turn: Turn) -> Self {
        Action::Turn(turn)
    }
}
