use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::TURN_DEBOUNCE;

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit cell offset `(dx, dy)`; y grows downwards.
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Quit,
}

impl Key {
    /// Returns the movement direction for arrow keys.
    #[must_use]
    pub fn direction(self) -> Option<Direction> {
        match self {
            Self::Up => Some(Direction::Up),
            Self::Down => Some(Direction::Down),
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
            Self::Space | Self::Quit => None,
        }
    }
}

/// Raw input events reported by the presentation layer each frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyPress(Key),
}

/// Returns whether a direction change is legal: only perpendicular turns.
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    current.is_horizontal() != next.is_horizontal()
}

/// Maps a terminal key event to a game input. Unknown keys map to `None`.
#[must_use]
pub fn map_key_event(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputEvent::Quit);
    }

    let key = match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Key::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Key::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Key::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Key::Right,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Key::Quit,
        _ => return None,
    };

    Some(InputEvent::KeyPress(key))
}

/// Rate limiter for direction changes, driven by the game clock.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TurnDebounce {
    last_turn_at: Option<Duration>,
}

impl TurnDebounce {
    /// Creates a debounce whose first window opens at game time `now`.
    #[must_use]
    pub fn starting_at(now: Duration) -> Self {
        Self {
            last_turn_at: Some(now),
        }
    }

    /// Returns true when a direction change may be applied at game time `now`.
    #[must_use]
    pub fn is_ready(self, now: Duration) -> bool {
        match self.last_turn_at {
            Some(last) => now.saturating_sub(last) >= TURN_DEBOUNCE,
            None => true,
        }
    }

    /// Restarts the window at game time `now`.
    pub fn record(&mut self, now: Duration) {
        self.last_turn_at = Some(now);
    }
}
