use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::action::{Action, Direction};
use super::food::Food;

/// A lattice point on the playfield, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `distance` pixels in a direction
    pub fn moved_in_direction(&self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * distance, dy * distance)
    }
}

/// Bounds and cell size of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: i32,
    pub height: i32,
    pub block_size: i32,
}

impl Playfield {
    pub fn new(width: i32, height: i32, block_size: i32) -> Self {
        Self {
            width,
            height,
            block_size,
        }
    }

    /// True if `pos` lies in `[0, width) x [0, height)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// The centre, snapped down to the lattice
    pub fn center(&self) -> Position {
        let snap = |v: i32| (v / 2) / self.block_size * self.block_size;
        Position::new(snap(self.width), snap(self.height))
    }

    /// Cell coordinates (column, row) of a lattice point
    pub fn cell_of(&self, pos: Position) -> (i32, i32) {
        (pos.x / self.block_size, pos.y / self.block_size)
    }
}

/// The lead segment, carrying the facing direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Head {
    pub position: Position,
    pub facing: Direction,
    /// Where the head was before its last move; new body segments start here
    pub previous: Position,
}

impl Head {
    pub fn new(position: Position, facing: Direction) -> Self {
        Self {
            position,
            facing,
            previous: position,
        }
    }

    /// Direction the head will travel for `action`
    ///
    /// Steering straight back into the neck is ignored, as is `Stationary`;
    /// both keep the current facing.
    pub fn resolve(&self, action: Action) -> Direction {
        match action {
            Action::Steer(Direction::Stationary) => self.facing,
            Action::Steer(requested) if self.facing.is_opposite(requested) => self.facing,
            Action::Steer(requested) => requested,
            Action::Turn(turn) => turn.apply(self.facing),
        }
    }

    /// Move one block in `direction` and face that way
    pub fn advance(&mut self, direction: Direction, block_size: i32) {
        self.previous = self.position;
        if direction == Direction::Stationary {
            return;
        }
        self.position = self.position.moved_in_direction(direction, block_size);
        self.facing = direction;
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    pub head: Head,
    /// Body segments from tail (front) to neck (back), head excluded
    pub body: VecDeque<Position>,
}

impl Snake {
    /// A bodiless snake at `start` facing right
    pub fn new(start: Position) -> Self {
        Self {
            head: Head::new(start, Direction::Right),
            body: VecDeque::new(),
        }
    }

    /// Build a snake from explicit segments, tail first
    pub fn with_body(head: Head, body: impl IntoIterator<Item = Position>) -> Self {
        Self {
            head,
            body: body.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Position {
        self.head.position
    }

    pub fn facing(&self) -> Direction {
        self.head.facing
    }

    pub fn body_len(&self) -> usize {
        self.body.len()
    }

    /// Head first, then body from neck to tail
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head.position).chain(self.body.iter().rev().copied())
    }

    pub fn move_head(&mut self, action: Action, block_size: i32) {
        let direction = self.head.resolve(action);
        self.head.advance(direction, block_size);
    }

    /// Drop the tail and lay a segment where the head just was
    pub fn shift_body(&mut self) {
        if self.body.pop_front().is_some() {
            self.body.push_back(self.head.previous);
        }
    }

    /// Lengthen by one segment where the head just was
    pub fn grow(&mut self) {
        self.body.push_back(self.head.previous);
    }

    pub fn is_eating(&self, food: &Food) -> bool {
        self.head.position == food.position
    }

    pub fn hits_wall_at(&self, pos: Position, field: &Playfield) -> bool {
        !field.contains(pos)
    }

    /// True if a body segment occupies `pos`. The head is never counted.
    pub fn hits_self_at(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    pub fn collides_at(&self, pos: Position, field: &Playfield) -> bool {
        self.hits_self_at(pos) || self.hits_wall_at(pos, field)
    }

    /// Collision test for the head's current cell
    pub fn is_colliding(&self, field: &Playfield) -> bool {
        self.collides_at(self.head.position, field)
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOverCause {
    Wall,
    SelfCollision,
    /// Too many steps for the current length
    StepBudget,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub playfield: Playfield,
    pub steps: u32,
    /// Reward of the most recent step only, not a running total. Zeroed at
    /// the start of every step, then set by eating or by game over.
    pub reward: f32,
    pub is_alive: bool,
    pub cause: Option<GameOverCause>,
}

impl GameState {
    pub fn new(snake: Snake, food: Food, playfield: Playfield) -> Self {
        Self {
            snake,
            food,
            playfield,
            steps: 0,
            reward: 0.0,
            is_alive: true,
            cause: None,
        }
    }

    /// Score is the number of body segments, i.e. food eaten
    pub fn score(&self) -> usize {
        self.snake.body_len()
    }

    pub fn is_game_over(&self) -> bool {
        !self.is_alive
    }
}
