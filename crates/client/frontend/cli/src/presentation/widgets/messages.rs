//! Message log panel.
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use client_frontend_core::MessageLog;

use crate::presentation::theme::RatatuiTheme;

/// Renders the newest messages that fit, oldest first.
pub fn render(frame: &mut Frame, area: Rect, messages: &MessageLog, theme: &RatatuiTheme) {
    let visible = usize::from(area.height.saturating_sub(2));
    let mut items: Vec<ListItem> = messages
        .recent(visible)
        .map(|entry| {
            let mut spans = Vec::with_capacity(2);
            if let Some(timestamp) = entry.timestamp {
                spans.push(Span::styled(
                    format!("[{:>6.1}s] ", timestamp as f64 / 1000.0),
                    theme.locked(),
                ));
            }
            spans.push(Span::styled(entry.text.as_str(), theme.message(entry.level)));
            ListItem::new(Line::from(spans))
        })
        .collect();
    items.reverse();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Messages "));
    frame.render_widget(list, area);
}
