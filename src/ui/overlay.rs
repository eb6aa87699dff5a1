use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthStr;

use crate::config::GAME_OVER_ROW;

/// Draws the game-over text centered on a fixed board row.
pub fn render_game_over(frame: &mut Frame<'_>, inner: Rect, text: &str) {
    if inner.height == 0 {
        return;
    }

    let y = inner.y + GAME_OVER_ROW.min(inner.height - 1);
    let x = centered_x(inner, text);
    frame.buffer_mut().set_string(
        x,
        y,
        text,
        Style::new()
            .fg(Color::White)
            .bg(Color::Red)
            .add_modifier(Modifier::BOLD),
    );
}

/// Left column that centers `text` in `area`, by display width.
#[must_use]
pub fn centered_x(area: Rect, text: &str) -> u16 {
    let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
    area.x + area.width.saturating_sub(width) / 2
}
