//! Content factory for loading everything a session needs from a data directory.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, LevelLayout};

use crate::loaders::{CatalogLoader, ConfigLoader, LevelCatalog, LevelLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional)
/// ├── levels.ron
/// └── levels/
///     ├── level_0.ron
///     └── level_1.ron
/// ```
#[derive(Debug, Clone)]
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, falling back to defaults when absent.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the level catalog from `levels.ron`.
    pub fn load_catalog(&self) -> LoadResult<LevelCatalog> {
        CatalogLoader::load(&self.data_dir.join("levels.ron"))
    }

    /// Load a level layout from `levels/{file}`.
    pub fn load_level(&self, file: &str) -> LoadResult<LevelLayout> {
        LevelLoader::load(&self.data_dir.join("levels").join(file))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn missing_catalog_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
        assert!(err.to_string().contains("levels.ron"));
    }
}
