use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::{GRID, GridSize};
use crate::game::Snapshot;
use crate::grid::Position;
use crate::input::Direction;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::overlay::render_game_over;

/// Terminal columns used to draw one board cell, keeping cells square-ish.
pub const CELL_WIDTH: u16 = 2;

const GLYPH_BODY: &str = "██";
const GLYPH_APPLE: &str = "()";

/// Renders the full game frame from one snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, hud_info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, hud_info);

    let board = board_rect(play_area, GRID);
    let block = Block::bordered()
        .title(" trail-snake ")
        .border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    if let Some(apple) = snapshot.apple {
        draw_cell(frame, inner, apple, GLYPH_APPLE, Style::new().fg(Color::Red));
    }

    let body_style = Style::new().fg(Color::Green);
    for segment in &snapshot.body {
        draw_cell(frame, inner, *segment, GLYPH_BODY, body_style);
    }

    draw_cell(
        frame,
        inner,
        snapshot.head,
        head_glyph(snapshot.direction),
        Style::new()
            .fg(Color::Black)
            .bg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    );

    if let Some(text) = snapshot.overlay {
        render_game_over(frame, inner, text);
    }
}

/// Centers a bordered board of `bounds` cells inside `area`.
#[must_use]
pub fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds.width * CELL_WIDTH + 2;
    let height = bounds.height + 2;

    let [column] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [board] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(column);
    board
}

fn draw_cell(frame: &mut Frame<'_>, inner: Rect, position: Position, glyph: &str, style: Style) {
    let Some((x, y)) = cell_to_terminal(inner, position) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, glyph, style);
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^^",
        Direction::Down => "vv",
        Direction::Left => "<<",
        Direction::Right => ">>",
    }
}

/// Maps a board cell to the terminal column/row of its left half.
fn cell_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(GRID) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_WIDTH) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    use crate::config::{GRID, RestartPolicy};
    use crate::game::Snapshot;
    use crate::grid::Position;
    use crate::input::Direction;
    use crate::ui::hud::HudInfo;

    use super::{board_rect, cell_to_terminal, render};

    fn snapshot(game_over: bool) -> Snapshot {
        Snapshot {
            score: 7,
            best_score: 9,
            game_over,
            death_animating: false,
            head: Position::new(10, 10),
            direction: Direction::Right,
            body: vec![Position::new(9, 10), Position::new(8, 10)],
            apple: (!game_over).then_some(Position::new(2, 3)),
            overlay: game_over.then_some("YOU LOST HAHA =)))"),
            events: Vec::new(),
            quit: false,
        }
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(snapshot: &Snapshot) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 28)).expect("test terminal");
        let info = HudInfo {
            restart_policy: RestartPolicy::KeepSnake,
        };
        terminal
            .draw(|frame| render(frame, snapshot, &info))
            .expect("draw should succeed");
        screen_text(terminal.backend().buffer())
    }

    #[test]
    fn board_fits_grid_and_border() {
        let board = board_rect(Rect::new(0, 0, 60, 26), GRID);

        assert_eq!(board.width, 42);
        assert_eq!(board.height, 22);
        assert_eq!(board.x, 9);
    }

    #[test]
    fn cells_are_two_columns_wide() {
        let inner = Rect::new(1, 1, 40, 20);

        assert_eq!(cell_to_terminal(inner, Position::new(0, 0)), Some((1, 1)));
        assert_eq!(cell_to_terminal(inner, Position::new(19, 19)), Some((39, 20)));
        assert_eq!(cell_to_terminal(inner, Position::new(20, 0)), None);
        assert_eq!(cell_to_terminal(inner, Position::new(-1, 0)), None);
    }

    #[test]
    fn playing_frame_shows_score_snake_and_apple() {
        let text = draw(&snapshot(false));

        assert!(text.contains("Score 7"));
        assert!(text.contains(">>"));
        assert!(text.contains("()"));
        assert!(!text.contains("YOU LOST"));
    }

    #[test]
    fn lost_frame_shows_overlay() {
        let text = draw(&snapshot(true));

        assert!(text.contains("YOU LOST HAHA =)))"));
        assert!(!text.contains("()"));
    }
}
