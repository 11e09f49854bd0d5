//! Level layout loader.
//!
//! Levels are drawn as character grids in RON files:
//!
//! ```ron
//! (
//!     rows: [
//!         "#######",
//!         "#P.f.G#",
//!         "#######",
//!     ],
//! )
//! ```
//!
//! Each character is compiled into a code on one of the five layout layers;
//! every other layer is left empty at that cell.

use std::path::Path;

use game_core::{EMPTY_TILE, LayerKind, LevelLayout, TileLayer};
use serde::Deserialize;

use crate::loaders::{LoadResult, read_file};

/// Level file structure for RON files.
#[derive(Debug, Clone, Deserialize)]
struct LevelRon {
    rows: Vec<String>,
}

/// Maps a grid character to the layer and code it places.
///
/// Returns `Some(None)` for empty cells and `None` for unknown characters.
pub fn tile_for(ch: char) -> Option<Option<(LayerKind, i32)>> {
    let tile = match ch {
        '.' | ' ' => None,
        '#' => Some((LayerKind::Walls, 0)),
        'P' => Some((LayerKind::Player, 0)),
        'G' => Some((LayerKind::Player, 1)),
        'f' => Some((LayerKind::Flowers, 0)),
        'g' => Some((LayerKind::Coins, 0)),
        's' => Some((LayerKind::Coins, 1)),
        'E' => Some((LayerKind::Enemies, 0)),
        _ => return None,
    };
    Some(tile)
}

/// Compiles character rows into a [`LevelLayout`].
pub fn compile_rows<S: AsRef<str>>(rows: &[S]) -> LoadResult<LevelLayout> {
    let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
    let height = rows.len();
    if width == 0 {
        anyhow::bail!("Level has no cells");
    }

    let mut layers: [Vec<Vec<i32>>; 5] =
        std::array::from_fn(|_| vec![vec![EMPTY_TILE; width]; height]);

    for (row, line) in rows.iter().enumerate() {
        let line = line.as_ref();
        let found = line.chars().count();
        if found != width {
            anyhow::bail!("Row {} has {} cells, expected {}", row, found, width);
        }
        for (col, ch) in line.chars().enumerate() {
            let tile = tile_for(ch).ok_or_else(|| {
                anyhow::anyhow!("Unknown tile character {:?} at ({}, {})", ch, col, row)
            })?;
            if let Some((kind, code)) = tile {
                layers[kind as usize][row][col] = code;
            }
        }
    }

    let [walls, player, flowers, coins, enemies] = &layers;
    let layout = LevelLayout::from_layers(
        TileLayer::from_rows(LayerKind::Walls, walls)?,
        TileLayer::from_rows(LayerKind::Player, player)?,
        TileLayer::from_rows(LayerKind::Flowers, flowers)?,
        TileLayer::from_rows(LayerKind::Coins, coins)?,
        TileLayer::from_rows(LayerKind::Enemies, enemies)?,
    )?;
    Ok(layout)
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level layout from a RON file.
    pub fn load(path: &Path) -> LoadResult<LevelLayout> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level {}: {}", path.display(), e))
    }

    /// Parses RON text into a [`LevelLayout`].
    pub fn parse(content: &str) -> LoadResult<LevelLayout> {
        let data: LevelRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;
        compile_rows(&data.rows)
    }
}
