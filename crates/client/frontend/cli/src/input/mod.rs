//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use game_core::InputState;

mod held;
pub use held::HeldKeys;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// A movement key went down (or auto-repeated).
    Press(InputState),
    /// A movement key went up; only sent by terminals reporting releases.
    Release(InputState),
    ToggleLight,
    TogglePause,
    Confirm,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into commands.
///
/// Arrows or WASD move, space toggles the light, `m` pauses, Enter confirms
/// and `q` or Esc quits.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind == KeyEventKind::Release {
            return match direction_of(key.code) {
                Some(direction) => KeyAction::Release(direction),
                None => KeyAction::None,
            };
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = direction_of(key.code) {
            return KeyAction::Press(direction);
        }

        // Toggles and menu commands fire on the initial press only.
        if key.kind == KeyEventKind::Repeat {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Enter => KeyAction::Confirm,
            KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
                'q' => KeyAction::Quit,
                ' ' => KeyAction::ToggleLight,
                'm' => KeyAction::TogglePause,
                _ => KeyAction::None,
            },
            _ => KeyAction::None,
        }
    }
}

fn direction_of(code: KeyCode) -> Option<InputState> {
    let direction = match code {
        KeyCode::Up => InputState::UP,
        KeyCode::Down => InputState::DOWN,
        KeyCode::Left => InputState::LEFT,
        KeyCode::Right => InputState::RIGHT,
        KeyCode::Char(ch) => match ch.to_ascii_lowercase() {
            'w' => InputState::UP,
            's' => InputState::DOWN,
            'a' => InputState::LEFT,
            'd' => InputState::RIGHT,
            _ => return None,
        },
        _ => return None,
    };
    Some(direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        key_with(code, KeyEventKind::Press)
    }

    fn key_with(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_and_wasd_move() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Up)), KeyAction::Press(InputState::UP));
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('A'))),
            KeyAction::Press(InputState::LEFT)
        );
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char('d'), KeyEventKind::Repeat)),
            KeyAction::Press(InputState::RIGHT)
        );
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Down, KeyEventKind::Release)),
            KeyAction::Release(InputState::DOWN)
        );
    }

    #[test]
    fn toggles_ignore_auto_repeat() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char(' '))), KeyAction::ToggleLight);
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char(' '), KeyEventKind::Repeat)),
            KeyAction::None
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('m'))), KeyAction::TogglePause);
        assert_eq!(
            handler.handle_key(key_with(KeyCode::Char('m'), KeyEventKind::Release)),
            KeyAction::None
        );
    }

    #[test]
    fn quit_and_confirm_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), KeyAction::Confirm);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c), KeyAction::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Tab)), KeyAction::None);
    }
}
