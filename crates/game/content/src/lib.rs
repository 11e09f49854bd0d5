//! Data-driven content definitions and loaders.
//!
//! This crate provides loaders for the RON/TOML files describing Maze Light:
//! - Game configuration overrides (TOML)
//! - The ordered level catalog with unlock rules (RON)
//! - Level layouts drawn as character grids (RON)
//!
//! Loaders produce `game-core` types directly; nothing here runs game rules.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CatalogLoader, ConfigLoader, ContentFactory, LevelCatalog, LevelEntry, LevelLoader,
    LoadResult, compile_rows, tile_for,
};
