use crate::config::GridSize;
use crate::input::Direction;

/// Grid position in logical cell coordinates.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns true when the position lies inside the bounds.
    #[must_use]
    pub fn is_within_bounds(self, bounds: GridSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(bounds.width)
            && self.y < i32::from(bounds.height)
    }

    /// Returns this position snapped back onto the board on both axes.
    #[must_use]
    pub fn wrapped(self, bounds: GridSize) -> Self {
        Self {
            x: wrap_index(self.x, i32::from(bounds.width)),
            y: wrap_index(self.y, i32::from(bounds.height)),
        }
    }

    /// Returns the position `cells` steps away along `direction`.
    #[must_use]
    pub fn moved(self, direction: Direction, cells: i32) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx * cells,
            y: self.y + dy * cells,
        }
    }

    /// Returns the neighbouring cell on the side opposite to `direction`.
    #[must_use]
    pub fn behind(self, direction: Direction) -> Self {
        self.moved(direction.opposite(), 1)
    }
}

/// Snaps an index that overshot one edge onto the opposite edge.
///
/// Entities move at most one cell per frame, so only `size` and `-1` ever
/// need handling; indices already on the board are returned unchanged.
#[must_use]
pub fn wrap_index(index: i32, size: i32) -> i32 {
    if index >= size {
        0
    } else if index < 0 {
        size - 1
    } else {
        index
    }
}
