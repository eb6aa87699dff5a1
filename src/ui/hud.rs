use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::RestartPolicy;
use crate::game::Snapshot;

/// Session values the HUD shows next to the frame snapshot.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    pub restart_policy: RestartPolicy,
}

/// Renders the score row above and the key help row below, returning the
/// area left for the board.
#[must_use]
pub fn render_hud(
    frame: &mut Frame<'_>,
    area: Rect,
    snapshot: &Snapshot,
    info: &HudInfo,
) -> Rect {
    let [score_area, play_area, help_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(score_line(snapshot.score, snapshot.best_score))
            .alignment(Alignment::Center),
        score_area,
    );
    frame.render_widget(
        Paragraph::new(Line::from(help_text(snapshot.game_over, info.restart_policy)))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        help_area,
    );

    play_area
}

fn score_line(score: u32, best_score: u32) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("Score {score}"),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            format!("Best {best_score}"),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

fn help_text(game_over: bool, policy: RestartPolicy) -> &'static str {
    match (game_over, policy) {
        (false, _) => "arrows/WASD turn   q quit",
        (true, RestartPolicy::KeepSnake) => "space play on   q quit",
        (true, RestartPolicy::Respawn) => "space new snake   q quit",
    }
}
