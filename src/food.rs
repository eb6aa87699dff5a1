use log::warn;
use rand::Rng;

use crate::config::{APPLE_SPAWN_ATTEMPTS, GridSize};
use crate::grid::Position;
use crate::snake::Snake;

/// Picks a cell for the next apple that the snake does not occupy.
///
/// Draws uniformly over the board and redraws on a hit. After
/// `APPLE_SPAWN_ATTEMPTS` misses it picks uniformly among the free cells
/// instead, and returns `None` only when the snake covers the whole board.
#[must_use]
pub fn spawn_apple<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    snake: &Snake,
) -> Option<Position> {
    for _ in 0..APPLE_SPAWN_ATTEMPTS {
        let candidate = random_cell(rng, bounds);
        if !snake.occupies(candidate) {
            return Some(candidate);
        }
    }

    let position = free_cell(rng, bounds, snake);
    if position.is_none() {
        warn!(
            "no free cell for an apple on the {}x{} board",
            bounds.width, bounds.height
        );
    }
    position
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize) -> Position {
    Position::new(
        rng.gen_range(0..i32::from(bounds.width)),
        rng.gen_range(0..i32::from(bounds.height)),
    )
}

fn free_cell<R: Rng + ?Sized>(rng: &mut R, bounds: GridSize, snake: &Snake) -> Option<Position> {
    let mut candidates = Vec::with_capacity(bounds.total_cells());

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position::new(x, y);
            if !snake.occupies(position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..candidates.len());
    Some(candidates[index])
}
