//! Glyph and color scheme for the terminal UI.
use client_frontend_core::{Glyph, MessageLevel};
use game_core::{Facing, Mode};
use ratatui::style::{Color, Modifier, Style};

/// Every map tile is drawn two terminal cells wide to keep tiles square.
pub const TILE_WIDTH: u16 = 2;

/// Ratatui styling rules shared by all widgets.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    /// Symbol and style for one map tile.
    pub fn glyph(&self, glyph: Glyph) -> (&'static str, Style) {
        match glyph {
            Glyph::Hidden => ("  ", Style::default()),
            Glyph::Floor => (" .", Style::default().fg(Color::DarkGray)),
            Glyph::Wall => ("██", Style::default().fg(Color::Gray)),
            Glyph::Player => (
                "@@",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Glyph::Enemy(status) => {
                let symbol = match (status.mode, status.facing) {
                    (Mode::Idle, _) => "ee",
                    (Mode::Moving, Facing::Left) => "<E",
                    (Mode::Moving, Facing::Right) => "E>",
                    (Mode::Attacking, _) => "E!",
                };
                let style = match status.mode {
                    Mode::Idle => Style::default().fg(Color::Magenta),
                    Mode::Moving => Style::default().fg(Color::LightRed),
                    Mode::Attacking => Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                };
                (symbol, style)
            }
            Glyph::GoldCoin => ("$$", Style::default().fg(Color::Yellow)),
            Glyph::SilverCoin => ("$$", Style::default().fg(Color::White)),
            Glyph::Flower => ("**", Style::default().fg(Color::LightMagenta)),
            Glyph::Goal => (
                "[]",
                Style::default()
                    .fg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD),
            ),
            Glyph::Hit => (
                "xx",
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }

    /// Health gauge color; shifts toward red as health drops.
    pub fn health(&self, ratio: f64) -> Style {
        let color = if ratio > 0.6 {
            Color::Green
        } else if ratio > 0.3 {
            Color::Yellow
        } else {
            Color::Red
        };
        Style::default().fg(color)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn locked(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
