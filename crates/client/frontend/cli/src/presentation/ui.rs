//! UI rendering entry point.
//!
//! Routes each application mode to its screen: the start menu, the level view
//! (HUD, map and message log, with a pause overlay) or the level summary.
use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use client_frontend_core::{LevelView, MessageLog, Viewport};
use game_core::LevelPhase;

use crate::{
    presentation::{
        terminal::Tui,
        theme::{RatatuiTheme, TILE_WIDTH},
        widgets,
    },
    state::{AppMode, AppState, PlayState},
};

const HUD_HEIGHT: u16 = 3;

/// Rendering context containing all state and configuration needed for UI rendering.
pub struct RenderContext<'a> {
    pub app_state: &'a AppState,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| match &ctx.app_state.mode {
        AppMode::Menu => {
            widgets::start_screen::render(
                frame,
                frame.area(),
                &ctx.app_state.menu,
                ctx.app_state.notice.as_deref(),
                &theme,
            );
        }
        AppMode::Playing(play) => render_level(frame, ctx, play, &theme),
        AppMode::Finished(summary) => {
            widgets::summary::render(frame, frame.area(), summary, ctx.messages, &theme);
        }
    })?;

    Ok(())
}

fn render_level(frame: &mut Frame, ctx: &RenderContext, play: &PlayState, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HUD_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(ctx.message_panel_height),
        ])
        .split(frame.area());

    let map_block = widgets::maze::block();
    let map_inner = map_block.inner(chunks[1]);
    let viewport = Viewport::new(
        usize::from(map_inner.width / TILE_WIDTH),
        usize::from(map_inner.height),
    );
    let view = LevelView::capture(play.session.name(), play.session.level(), viewport);

    widgets::hud::render(frame, chunks[0], &view.hud, theme);
    widgets::maze::render(frame, chunks[1], map_block, &view.map, theme);
    widgets::messages::render(frame, chunks[2], ctx.messages, theme);

    if view.hud.phase == LevelPhase::Paused {
        widgets::popup::render_paused(frame, chunks[1], theme);
    }
}
