//! Terminal UI frontend for Maze Light.
//!
//! [`CliFrontend`] implements [`client_frontend_core::Frontend`]: it owns the
//! runtime for the lifetime of the UI, drives one level session at a time at
//! the configured frame rate and renders it with `ratatui`.

mod app;
mod config;
mod event;
mod input;
pub mod logging;
pub mod presentation;
mod state;

pub use app::CliFrontend;
pub use config::{CliConfig, InputConfig, UiConfig};

// Re-export for convenience (used in main.rs)
pub use client_frontend_core::FrontendConfig;
