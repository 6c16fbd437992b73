use std::time::Duration;

use clap::ValueEnum;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Block;

use crate::config::{FRAME_INTERVAL_MS, GridSize};
use crate::env::EnvStatus;
use crate::game::GameState;
use crate::snake::Position;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::render_episode_over_menu;

/// Terminal columns per grid cell, so cells come out roughly square.
const CELL_WIDTH: u16 = 2;

const BACKGROUND: Color = Color::White;
const SNAKE_BODY: Color = Color::Red;
const SNAKE_HEAD: Color = Color::LightRed;
const APPLE: Color = Color::Green;

/// How frames are produced for a running environment.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum RenderMode {
    /// Draw every frame, paced to 30 fps.
    Human,
    /// Draw every frame as fast as the caller steps.
    Test,
    /// Draw nothing.
    Train,
}

impl RenderMode {
    #[must_use]
    pub fn draws(self) -> bool {
        self != Self::Train
    }

    /// Minimum wall time per frame, if frames are paced.
    #[must_use]
    pub fn frame_budget(self) -> Option<Duration> {
        match self {
            Self::Human => Some(Duration::from_millis(FRAME_INTERVAL_MS)),
            Self::Test | Self::Train => None,
        }
    }

    /// Time left to wait once a frame took `elapsed`; zero when unpaced.
    #[must_use]
    pub fn frame_wait(self, elapsed: Duration) -> Duration {
        self.frame_budget()
            .map_or(Duration::ZERO, |budget| budget.saturating_sub(elapsed))
    }
}

/// Renders the full frame from immutable game state.
pub fn render(frame: &mut Frame<'_>, game: &GameState, hud_info: &HudInfo) {
    let area = frame.area();
    let play_area = render_hud(frame, area, hud_info);

    let bounds = game.bounds();
    let board_area = centered_board(play_area, bounds);
    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);
    frame
        .buffer_mut()
        .set_style(inner, Style::new().bg(BACKGROUND));

    render_snake(frame, inner, game);
    render_apple(frame, inner, game);

    if hud_info.status == EnvStatus::Terminated {
        render_episode_over_menu(frame, play_area, hud_info);
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, game: &GameState) {
    let head = game.snake().head();
    for cell in game.snake().cells() {
        let color = if cell == head { SNAKE_HEAD } else { SNAKE_BODY };
        fill_cell(frame, inner, game.bounds(), cell, color);
    }
}

fn render_apple(frame: &mut Frame<'_>, inner: Rect, game: &GameState) {
    fill_cell(frame, inner, game.bounds(), game.apple(), APPLE);
}

fn fill_cell(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, position: Position, color: Color) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, position) else {
        return;
    };

    let width = CELL_WIDTH.min(inner.right() - x);
    frame
        .buffer_mut()
        .set_style(Rect::new(x, y, width, 1), Style::new().bg(color));
}

fn centered_board(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
