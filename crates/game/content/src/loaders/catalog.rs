//! Level catalog loader.
//!
//! `levels.ron` lists the playable levels in menu order:
//!
//! ```ron
//! [
//!     (name: "Training Level", file: "level_0.ron", unlock: 1),
//!     (name: "Level 1", file: "level_1.ron", unlock: 2),
//! ]
//! ```
//!
//! `unlock` is the highest level index made available by winning the entry.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One playable level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub name: String,
    /// Layout file name, relative to the `levels/` directory.
    pub file: String,
    pub unlock: usize,
}

/// Ordered list of levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCatalog {
    entries: Vec<LevelEntry>,
}

impl LevelCatalog {
    /// Builds a catalog, checking that every unlock target exists.
    pub fn new(entries: Vec<LevelEntry>) -> LoadResult<Self> {
        if entries.is_empty() {
            anyhow::bail!("Level catalog is empty");
        }
        for (index, entry) in entries.iter().enumerate() {
            if entry.unlock >= entries.len() {
                anyhow::bail!(
                    "Level {} ({}) unlocks level {}, but only {} levels exist",
                    index,
                    entry.name,
                    entry.unlock,
                    entries.len()
                );
            }
        }
        Ok(Self { entries })
    }

    pub fn get(&self, index: usize) -> Option<&LevelEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelEntry> {
        self.entries.iter()
    }
}

/// Loader for the level catalog from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    pub fn load(path: &Path) -> LoadResult<LevelCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<LevelCatalog> {
        let entries: Vec<LevelEntry> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level catalog RON: {}", e))?;
        LevelCatalog::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_entries_in_order() {
        let catalog = CatalogLoader::parse(
            r#"[
                (name: "Training Level", file: "level_0.ron", unlock: 1),
                (name: "Level 1", file: "level_1.ron", unlock: 1),
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).map(|e| e.name.as_str()), Some("Training Level"));
        assert_eq!(catalog.get(1).map(|e| e.unlock), Some(1));
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn rejects_unlock_past_the_end() {
        let err = CatalogLoader::parse(r#"[(name: "Only", file: "a.ron", unlock: 3)]"#)
            .unwrap_err();
        assert!(err.to_string().contains("unlocks level 3"));
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(CatalogLoader::parse("[]").is_err());
    }
}
