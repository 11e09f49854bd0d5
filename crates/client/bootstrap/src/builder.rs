//! Builds the runtime and config bundle used by front-ends.
use anyhow::{Context, Result};
use runtime::Runtime;

use crate::config::ClientConfig;

/// Builder that assembles the runtime from client configuration.
#[derive(Debug, Default)]
pub struct RuntimeBuilder {
    config: ClientConfig,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads content from the configured data directory.
    pub fn build(self) -> Result<RuntimeSetup> {
        let mut builder = Runtime::builder()
            .data_dir(self.config.data_dir.clone())
            .event_buffer_size(self.config.event_buffer);

        if let Some(frame_ms) = self.config.frame_ms {
            builder = builder.frame_duration(frame_ms);
        }

        let runtime = builder.build().with_context(|| {
            format!(
                "failed to load game content from {}",
                self.config.data_dir.display()
            )
        })?;

        tracing::debug!(
            levels = runtime.catalog().len(),
            frame_duration = runtime.config().frame_duration,
            "runtime assembled"
        );

        Ok(RuntimeSetup {
            config: self.config,
            runtime,
        })
    }
}

pub struct RuntimeSetup {
    pub config: ClientConfig,
    pub runtime: Runtime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_data_dir_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            data_dir: dir.path().join("nowhere"),
            ..ClientConfig::default()
        };

        let err = match RuntimeBuilder::new().config(config).build() {
            Ok(_) => panic!("expected content error"),
            Err(err) => err,
        };
        assert!(format!("{err:#}").contains("nowhere"));
    }

    #[test]
    fn frame_override_reaches_the_runtime() {
        let data = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data");
        let config = ClientConfig {
            data_dir: data,
            frame_ms: Some(33),
            ..ClientConfig::default()
        };

        let setup = RuntimeBuilder::new().config(config).build().unwrap();
        assert_eq!(setup.runtime.config().frame_duration, 33);
        assert_eq!(setup.runtime.catalog().len(), 3);
    }
}
