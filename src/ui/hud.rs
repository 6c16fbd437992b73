use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::env::{EnvStatus, EpisodeStats};

/// Values displayed by the status row.
#[derive(Debug, Clone)]
pub struct HudInfo {
    /// Short label of the driving mode, e.g. `play` or `watch`.
    pub mode: &'static str,
    pub episode: u64,
    pub stats: EpisodeStats,
    pub status: EnvStatus,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, info: &HudInfo) -> Rect {
    let [play_area, status_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::styled(format!("{} ", info.mode), label),
        Span::styled(format!("episode {}", info.episode), value),
        Span::styled("  steps ", label),
        Span::styled(info.stats.steps.to_string(), value),
        Span::styled("  apples ", label),
        Span::styled(info.stats.apples.to_string(), value),
        Span::styled("  reward ", label),
        Span::styled(info.stats.total_reward.to_string(), value),
        Span::styled("  length ", label),
        Span::styled(info.stats.length.to_string(), value),
    ]);

    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Left),
        status_area,
    );

    play_area
}
