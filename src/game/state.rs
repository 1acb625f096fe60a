use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::{action::Direction, food::Food, grid::Grid};

/// A position on the game grid
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

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What happened when the snake tried to take a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The step was committed
    Moved { new_head: Position, ate_food: bool },
    /// The candidate head collided; the snake was left untouched
    Blocked(CollisionType),
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at the front
    segments: VecDeque<Position>,
    /// Direction applied on the last committed step
    direction: Direction,
    /// Latest accepted turn, applied on the next step
    pending_direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction.
    /// The body trails behind the head, opposite to `direction`.
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut segments = VecDeque::with_capacity(length.max(1));
        segments.push_back(head);

        let back = direction.opposite();
        for _ in 1..length {
            let prev = segments[segments.len() - 1];
            segments.push_back(prev.moved_in_direction(back));
        }

        Self {
            segments,
            direction,
            pending_direction: direction,
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    /// Iterate segments from head to tail
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.segments.iter()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Check if position is occupied by any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.iter().any(|segment| *segment == pos)
    }

    /// Where the head would land on the next step, using the pending direction
    pub fn compute_next_head(&self) -> Position {
        self.head().moved_in_direction(self.pending_direction)
    }

    /// Classify a collision of `candidate` against the walls and the current body.
    ///
    /// The whole pre-move body counts, including the head and the tail cell that
    /// would be vacated on a plain move.
    pub fn collision_with(&self, candidate: Position, grid: &Grid) -> Option<CollisionType> {
        if !grid.in_bounds(candidate) {
            return Some(CollisionType::Wall);
        }

        if self.occupies(candidate) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    pub fn detect_collision(&self, candidate: Position, grid: &Grid) -> bool {
        self.collision_with(candidate, grid).is_some()
    }

    /// Take one step, growing by a segment if the new head lands on `food`.
    ///
    /// A collision leaves the snake exactly as it was and is reported back; the
    /// caller decides what that means for the game.
    pub fn advance(&mut self, grid: &Grid, food: Position) -> Advance {
        let new_head = self.compute_next_head();

        if let Some(collision) = self.collision_with(new_head, grid) {
            return Advance::Blocked(collision);
        }

        self.direction = self.pending_direction;
        self.segments.push_front(new_head);

        let ate_food = new_head == food;
        if !ate_food {
            self.segments.pop_back();
        }

        Advance::Moved { new_head, ate_food }
    }

    /// Queue a turn for the next step.
    ///
    /// Reversals are judged against the direction actually applied on the last
    /// step, so two quick presses inside one tick cannot fold the snake onto its
    /// neck. Returns whether the turn was accepted.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.direction.is_opposite(direction) {
            return false;
        }

        self.pending_direction = direction;
        true
    }
}

/// Top-level phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub score: u32,
    pub ticks: u32,
    pub phase: Phase,
}

impl GameState {
    /// Create a new game state
    pub fn new(snake: Snake, food: Food) -> Self {
        Self {
            snake,
            food,
            score: 0,
            ticks: 0,
            phase: Phase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Read-only copy of everything a renderer needs
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().copied().collect(),
            food: self.food.position(),
            score: self.score,
            ticks: self.ticks,
            direction: self.snake.direction(),
            phase: self.phase,
        }
    }
}

/// Detached view of a game, head first in `segments`
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub segments: Vec<Position>,
    pub food: Position,
    pub score: u32,
    pub ticks: u32,
    pub direction: Direction,
    pub phase: Phase,
}

impl Snapshot {
    pub fn head(&self) -> Position {
        self.segments[0]
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}
