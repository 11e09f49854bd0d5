//! Application state for mode management and UI context.
use game_core::LevelPhase;
use runtime::{GameEvent, Session, Topic};
use tokio::sync::broadcast;

use client_frontend_core::{MessageConsumer, StartMenu};

/// Top-level application mode determining input handling and UI layout.
#[derive(Debug)]
pub enum AppMode {
    /// Level selection.
    Menu,
    /// A level is running or paused.
    Playing(Box<PlayState>),
    /// A level ended; waiting for the player to continue.
    Finished(Summary),
}

/// A running level plus the event streams narrating it.
#[derive(Debug)]
pub struct PlayState {
    pub session: Session,
    pub subscriptions: Vec<(Topic, broadcast::Receiver<GameEvent>)>,
}

/// Result screen shown after a level ends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub level_name: String,
    pub outcome: LevelPhase,
    pub coins: u32,
    /// Name of the level unlocked by this win.
    pub unlocked: Option<String>,
}

/// Mutable application state tracking the current mode.
#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub menu: StartMenu,
    pub consumer: MessageConsumer,
    /// Error from the last failed level start, shown on the menu.
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(menu: StartMenu, consumer: MessageConsumer) -> Self {
        Self {
            mode: AppMode::Menu,
            menu,
            consumer,
            notice: None,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.mode {
            AppMode::Playing(play) => Some(&play.session),
            _ => None,
        }
    }
}
