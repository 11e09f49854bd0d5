//! Content loaders for reading game data from files.
//!
//! Each loader reads one file format and converts it into `game-core` types.
//! [`ContentFactory`] ties them to the conventional data directory layout.

pub mod catalog;
pub mod config;
pub mod factory;
pub mod level;

pub use catalog::{CatalogLoader, LevelCatalog, LevelEntry};
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use level::{LevelLoader, compile_rows, tile_for};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
