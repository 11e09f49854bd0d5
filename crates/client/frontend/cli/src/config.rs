//! CLI-specific configuration for terminal UI.
use std::env;
use std::time::Duration;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    pub input: InputConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_MESSAGE_PANEL_HEIGHT` - Message panel height in lines (default: 8)
    /// - `MAZE_KEY_HOLD_MS` - How long a movement key counts as held after a press (default: 150)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("MAZE_MESSAGE_PANEL_HEIGHT") {
            config.ui.message_panel_height = height.max(3);
        }
        if let Some(hold_ms) = read_env::<u64>("MAZE_KEY_HOLD_MS") {
            config.input.key_hold = Duration::from_millis(hold_ms.max(1));
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of message panel in lines (including borders).
    pub message_panel_height: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            message_panel_height: 8,
        }
    }
}

/// Keyboard handling configuration.
#[derive(Clone, Debug)]
pub struct InputConfig {
    /// Terminals without key-release reporting only send presses and
    /// auto-repeats, so a movement key stays held for this long after its
    /// latest press.
    pub key_hold: Duration,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            key_hold: Duration::from_millis(150),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
