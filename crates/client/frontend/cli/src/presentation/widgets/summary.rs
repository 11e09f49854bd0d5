//! Level result screen with the coin score and a `Continue` entry.
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use client_frontend_core::MessageLog;
use game_core::LevelPhase;

use crate::presentation::{theme::RatatuiTheme, widgets};
use crate::state::Summary;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    summary: &Summary,
    messages: &MessageLog,
    theme: &RatatuiTheme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(9), Constraint::Length(8)])
        .split(area);

    let (headline, color) = match summary.outcome {
        LevelPhase::Won => ("You escaped the maze!", Color::LightGreen),
        _ => ("The souleaters got you.", Color::LightRed),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(vec![
            Span::raw("Score: "),
            Span::styled(
                summary.coins.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
    ];
    if let Some(unlocked) = &summary.unlocked {
        lines.push(Line::from(format!("Unlocked {unlocked}")));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled("> Continue <", theme.selected())));

    let panel = widgets::popup::centered(chunks[0], 40, lines.len() as u16 + 2);
    let title = format!(" {} ", summary.level_name);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(title)),
        panel,
    );

    widgets::messages::render(frame, chunks[1], messages, theme);
}
