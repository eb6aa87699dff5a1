use rand::Rng;
use rand::seq::SliceRandom;

use crate::body::{BodySegment, Turn};
use crate::config::{GridSize, SPAWN_CELL};
use crate::grid::Position;
use crate::input::{Direction, direction_change_is_valid};
use crate::motion::Velocity;

/// The head and the ordered chain of body segments trailing it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    pub position: Position,
    pub direction: Direction,
    pub velocity: Velocity,
    body: Vec<BodySegment>,
}

impl Snake {
    /// Creates a bodyless snake at `start` heading `direction`.
    #[must_use]
    pub fn new(start: Position, direction: Direction) -> Self {
        Self {
            position: start,
            direction,
            velocity: Velocity::default(),
            body: Vec::new(),
        }
    }

    /// Creates a snake from a head and an existing chain of segments, neck first.
    #[must_use]
    pub fn from_segments(head: Position, direction: Direction, body: Vec<BodySegment>) -> Self {
        Self {
            position: head,
            direction,
            velocity: Velocity::default(),
            body,
        }
    }

    /// Creates a bodyless snake on the spawn cell with a freshly drawn direction.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let direction = *Direction::ALL.choose(rng).unwrap_or(&Direction::Right);
        Self::new(Position::new(SPAWN_CELL.0, SPAWN_CELL.1), direction)
    }

    /// Turns the head and queues the turn on every body segment.
    ///
    /// Returns false and changes nothing unless `direction` is perpendicular
    /// to the current heading.
    pub fn turn(&mut self, direction: Direction) -> bool {
        if !direction_change_is_valid(self.direction, direction) {
            return false;
        }

        let turn = Turn {
            trigger: self.position,
            direction,
        };
        for segment in &mut self.body {
            segment.push_turn(turn);
        }

        self.direction = direction;
        true
    }

    /// Advances the head, then every segment from the neck to the tail.
    pub fn advance(&mut self, bounds: GridSize) {
        let cells = self.velocity.step();
        self.position = self.position.moved(self.direction, cells).wrapped(bounds);

        for segment in &mut self.body {
            segment.advance(bounds);
        }
    }

    /// Appends one segment behind the current tail.
    pub fn grow(&mut self, bounds: GridSize) {
        let Some(tail) = self.body.last() else {
            self.body.push(BodySegment::new(
                self.position.behind(self.direction).wrapped(bounds),
                self.direction,
                self.velocity,
            ));
            return;
        };

        let mut segment = BodySegment::new(
            tail.position.behind(tail.direction).wrapped(bounds),
            tail.direction,
            self.velocity,
        );
        segment.set_turns(tail.turns().clone());
        self.body.push(segment);
    }

    /// Removes and returns the tail segment.
    pub fn shed_tail(&mut self) -> Option<BodySegment> {
        self.body.pop()
    }

    /// Returns true if the head shares a cell with any body segment.
    #[must_use]
    pub fn head_overlaps_body(&self) -> bool {
        self.body
            .iter()
            .any(|segment| segment.position == self.position)
    }

    /// Returns true if the head or any segment occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.position == position
            || self
                .body
                .iter()
                .any(|segment| segment.position == position)
    }

    /// Returns the body segments from neck to tail.
    #[must_use]
    pub fn body(&self) -> &[BodySegment] {
        &self.body
    }

    /// Returns the number of body segments, excluding the head.
    #[must_use]
    pub fn body_len(&self) -> usize {
        self.body.len()
    }
}
