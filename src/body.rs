use std::collections::VecDeque;

use crate::config::GridSize;
use crate::grid::Position;
use crate::input::Direction;
use crate::motion::Velocity;

/// A direction change the head made at `trigger`, waiting to be replayed.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Turn {
    pub trigger: Position,
    pub direction: Direction,
}

/// One trailing cell of the snake.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BodySegment {
    pub position: Position,
    pub direction: Direction,
    pub velocity: Velocity,
    turns: VecDeque<Turn>,
}

impl BodySegment {
    /// Creates a segment with an empty turn queue.
    #[must_use]
    pub fn new(position: Position, direction: Direction, velocity: Velocity) -> Self {
        Self {
            position,
            direction,
            velocity,
            turns: VecDeque::new(),
        }
    }

    /// Queues a turn behind every turn already pending.
    pub fn push_turn(&mut self, turn: Turn) {
        self.turns.push_back(turn);
    }

    /// Replaces the pending turns, used when a new tail takes over the path.
    pub fn set_turns(&mut self, turns: VecDeque<Turn>) {
        self.turns = turns;
    }

    #[must_use]
    pub fn turns(&self) -> &VecDeque<Turn> {
        &self.turns
    }

    /// Moves by the ramp, wraps onto the board, then replays a due turn.
    pub fn advance(&mut self, bounds: GridSize) {
        let cells = self.velocity.step();
        self.position = self.position.moved(self.direction, cells).wrapped(bounds);
        self.follow();
    }

    /// Adopts the oldest pending turn once the segment stands on its trigger.
    pub fn follow(&mut self) {
        let Some(next) = self.turns.front() else {
            return;
        };

        if next.trigger == self.position {
            self.direction = next.direction;
            self.turns.pop_front();
        }
    }
}
