//! Client configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `levels.ron` and `levels/`.
    pub data_dir: PathBuf,
    /// Log directory name; generated from the start time when absent.
    pub session_id: Option<String>,
    /// Overrides the configured frame duration (milliseconds per frame).
    pub frame_ms: Option<u64>,
    pub event_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            session_id: None,
            frame_ms: None,
            event_buffer: runtime::EventBus::DEFAULT_CAPACITY,
        }
    }
}

impl ClientConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MAZE_DATA_DIR` - Content directory (default: `data`)
    /// - `MAZE_SESSION_ID` - Session identifier for the log directory (default: auto-generated)
    /// - `MAZE_FRAME_MS` - Frame duration override in milliseconds
    /// - `MAZE_EVENT_BUFFER` - Events buffered per topic (default: 256)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("MAZE_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.session_id = env::var("MAZE_SESSION_ID").ok().filter(|id| !id.is_empty());

        config.frame_ms = read_env::<u64>("MAZE_FRAME_MS").map(|ms| ms.max(1));

        if let Some(capacity) = read_env::<usize>("MAZE_EVENT_BUFFER") {
            config.event_buffer = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
