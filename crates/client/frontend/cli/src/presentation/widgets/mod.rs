//! Ratatui widgets composing the terminal screens.

pub mod hud;
pub mod maze;
pub mod messages;
pub mod popup;
pub mod start_screen;
pub mod summary;
