//! Light-limited map around the player.
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::MapView;

use crate::presentation::theme::RatatuiTheme;

/// Frame around the map; callers size the viewport from its inner area.
pub fn block() -> Block<'static> {
    Block::default().borders(Borders::ALL).title(" Maze ")
}

pub fn render(frame: &mut Frame, area: Rect, block: Block<'_>, map: &MapView, theme: &RatatuiTheme) {
    let lines: Vec<Line> = map
        .lines()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|glyph| {
                    let (symbol, style) = theme.glyph(*glyph);
                    Span::styled(symbol, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
