//! Start menu: level selection with locked entries.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::{MessageLevel, StartMenu};

use crate::presentation::{theme::RatatuiTheme, widgets::popup};

const TITLE: &str = "M A Z E   L I G H T";

pub fn render(
    frame: &mut Frame,
    area: Rect,
    menu: &StartMenu,
    notice: Option<&str>,
    theme: &RatatuiTheme,
) {
    let height = menu.items().len() as u16 + 8;
    let panel = popup::centered(area, 40, height);

    let mut lines = vec![
        Line::from(Span::styled(TITLE, theme.title())),
        Line::default(),
    ];
    for (index, item) in menu.items().iter().enumerate() {
        let line = if item.locked {
            Span::styled(format!("  {} (locked)  ", item.label), theme.locked())
        } else if index == menu.selected() {
            Span::styled(format!("> {} <", item.label), theme.selected())
        } else {
            Span::raw(format!("  {}  ", item.label))
        };
        lines.push(Line::from(line));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "up/down select, Enter start, q quit",
        theme.locked(),
    )));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(panel);

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        chunks[0],
    );

    if let Some(notice) = notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice, theme.message(MessageLevel::Error)))
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
}
