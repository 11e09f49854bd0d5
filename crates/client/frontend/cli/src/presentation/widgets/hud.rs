//! Health bar, coin counter and light indicator.
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};

use client_frontend_core::HudView;

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, hud: &HudView, theme: &RatatuiTheme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Health "))
        .gauge_style(theme.health(hud.health_ratio()))
        .ratio(hud.health_ratio())
        .label(format!("{}/{}", hud.health, hud.max_health));
    frame.render_widget(gauge, chunks[0]);

    let light = if hud.light_on {
        Span::styled("on", Style::default().fg(Color::LightYellow))
    } else {
        Span::styled("off", Style::default().fg(Color::DarkGray))
    };
    let status = Line::from(vec![
        Span::styled("Coins: ", Style::default().fg(Color::White)),
        Span::styled(hud.coins.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("   "),
        Span::styled("Light: ", Style::default().fg(Color::White)),
        light,
        Span::raw("   "),
        Span::styled("Radius: ", Style::default().fg(Color::White)),
        Span::raw(format!("{:.0}", hud.visible_radius)),
    ]);
    let title = format!(" {} ", hud.level_name);
    let paragraph = Paragraph::new(status).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, theme.title())),
    );
    frame.render_widget(paragraph, chunks[1]);
}
