//! Keyboard handling per application mode.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent};
use game_core::{InputState, LevelPhase};
use tokio::time::Duration;

use client_frontend_core::MenuChoice;

use crate::event::EventLoop;
use crate::input::KeyAction;
use crate::state::AppMode;

impl EventLoop {
    /// Handles every queued terminal event without blocking.
    ///
    /// Returns true once the player asked to exit.
    pub(in crate::event) fn drain_input(&mut self) -> Result<bool> {
        while term_event::poll(Duration::ZERO)? {
            if let TermEvent::Key(key) = term_event::read()? {
                if self.handle_key(key) {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let action = self.input.handle_key(key);
        match self.app_state.mode {
            AppMode::Menu => self.handle_menu_key(action),
            AppMode::Playing(_) => {
                self.handle_level_key(action);
                false
            }
            AppMode::Finished(_) => {
                if matches!(action, KeyAction::Confirm | KeyAction::Quit) {
                    self.app_state.mode = AppMode::Menu;
                }
                false
            }
        }
    }

    fn handle_menu_key(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Press(direction) if direction == InputState::UP => {
                self.app_state.menu.select_previous();
            }
            KeyAction::Press(direction) if direction == InputState::DOWN => {
                self.app_state.menu.select_next();
            }
            KeyAction::Confirm => match self.app_state.menu.confirm() {
                Some(MenuChoice::Level(index)) => self.start_level(index),
                Some(MenuChoice::Exit) => return true,
                None => {}
            },
            _ => {}
        }
        false
    }

    fn handle_level_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Press(direction) => self.held.press(direction, Instant::now()),
            KeyAction::Release(direction) => self.held.release(direction),
            KeyAction::ToggleLight => self.held.trigger(InputState::LIGHT),
            KeyAction::TogglePause => self.held.trigger(InputState::PAUSE),
            KeyAction::Confirm => {
                let paused = self
                    .app_state
                    .session()
                    .is_some_and(|session| session.phase() == LevelPhase::Paused);
                if paused {
                    self.held.trigger(InputState::PAUSE);
                }
            }
            KeyAction::Quit => self.abandon_level(),
            KeyAction::None => {}
        }
    }
}
