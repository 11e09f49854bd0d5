//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use crate::event::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Draws the current application state.
    pub(in crate::event) fn render(&self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            app_state: &self.app_state,
            messages: self.app_state.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
