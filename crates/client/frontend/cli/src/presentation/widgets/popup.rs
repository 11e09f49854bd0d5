//! Centered modal boxes drawn over other widgets.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

/// Overlay shown while the level is paused.
pub fn render_paused(frame: &mut Frame, area: Rect, theme: &RatatuiTheme) {
    let popup = centered(area, 30, 5);
    let text = vec![
        Line::from(Span::styled("> Resume <", theme.selected())),
        Line::from(Span::styled("m / Enter to continue", theme.locked())),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" Paused ")),
        popup,
    );
}

/// Rectangle of at most `width` x `height` cells centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered(area, 30, 5);
        assert_eq!((popup.width, popup.height), (30, 5));
        assert_eq!(popup.x, 25);
        assert!(popup.y >= 9 && popup.bottom() <= 15);

        let tiny = centered(Rect::new(0, 0, 10, 3), 30, 5);
        assert_eq!((tiny.width, tiny.height), (10, 3));
    }
}
