//! Layered tile layouts and their validation errors.
//!
//! A layout is a stack of equally sized integer grids, one per layer. Each
//! cell holds a tile code or [`EMPTY_TILE`]. The meaning of a code depends on
//! the layer it appears in:
//!
//! | layer     | codes                               |
//! |-----------|-------------------------------------|
//! | walls     | any code `>= 0` is a wall           |
//! | player    | `0` player spawn, `1` goal          |
//! | flowers   | any code `>= 0` is a flower         |
//! | coins     | `0` gold coin, other codes silver   |
//! | enemies   | `0` souleater                       |
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::error::{ErrorSeverity, GameError};

/// Cell value marking an empty cell.
pub const EMPTY_TILE: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum LayerKind {
    Walls,
    Player,
    Flowers,
    Coins,
    Enemies,
}

/// Grid cell coordinate (column, row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: usize,
    pub row: usize,
}

impl Cell {
    pub const fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has no cells")]
    Empty,

    #[error("{layer} row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        layer: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{layer} layer is {found_width}x{found_height}, expected {width}x{height}")]
    LayerSizeMismatch {
        layer: &'static str,
        width: usize,
        height: usize,
        found_width: usize,
        found_height: usize,
    },

    #[error("unknown tile code {code} in {layer} layer at {cell}")]
    UnknownTile {
        layer: &'static str,
        code: i32,
        cell: Cell,
    },

    #[error("layout has no player spawn")]
    MissingPlayer,

    #[error("layout has a second player spawn at {second} (first at {first})")]
    DuplicatePlayer { first: Cell, second: Cell },

    #[error("layout has no goal")]
    MissingGoal,
}

impl GameError for LayoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty => "LAYOUT_EMPTY",
            Self::RaggedRow { .. } => "LAYOUT_RAGGED_ROW",
            Self::LayerSizeMismatch { .. } => "LAYOUT_LAYER_SIZE_MISMATCH",
            Self::UnknownTile { .. } => "LAYOUT_UNKNOWN_TILE",
            Self::MissingPlayer => "LAYOUT_MISSING_PLAYER",
            Self::DuplicatePlayer { .. } => "LAYOUT_DUPLICATE_PLAYER",
            Self::MissingGoal => "LAYOUT_MISSING_GOAL",
        }
    }
}

/// One rectangular grid of tile codes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileLayer {
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

impl TileLayer {
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY_TILE; width * height],
        }
    }

    /// Builds a layer from rows of codes; every row must have the same length.
    pub fn from_rows(kind: LayerKind, rows: &[Vec<i32>]) -> Result<Self, LayoutError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if width == 0 {
            return Err(LayoutError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, codes) in rows.iter().enumerate() {
            if codes.len() != width {
                return Err(LayoutError::RaggedRow {
                    layer: kind.into(),
                    row,
                    expected: width,
                    found: codes.len(),
                });
            }
            cells.extend_from_slice(codes);
        }

        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, cell: Cell) -> Option<i32> {
        if cell.col >= self.width || cell.row >= self.height {
            return None;
        }
        self.cells.get(cell.row * self.width + cell.col).copied()
    }

    /// Writes `code` at `cell`; out-of-range cells are ignored.
    pub fn set(&mut self, cell: Cell, code: i32) {
        if cell.col < self.width && cell.row < self.height {
            self.cells[cell.row * self.width + cell.col] = code;
        }
    }

    /// Non-empty cells in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Cell, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, code)| **code != EMPTY_TILE)
            .map(|(index, code)| (Cell::new(index % self.width, index / self.width), *code))
    }
}

/// The five layers describing a level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelLayout {
    walls: TileLayer,
    player: TileLayer,
    flowers: TileLayer,
    coins: TileLayer,
    enemies: TileLayer,
}

impl LevelLayout {
    /// Creates a layout whose layers are all empty.
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            walls: TileLayer::empty(width, height),
            player: TileLayer::empty(width, height),
            flowers: TileLayer::empty(width, height),
            coins: TileLayer::empty(width, height),
            enemies: TileLayer::empty(width, height),
        }
    }

    /// Assembles a layout from separately parsed layers, which must share one size.
    pub fn from_layers(
        walls: TileLayer,
        player: TileLayer,
        flowers: TileLayer,
        coins: TileLayer,
        enemies: TileLayer,
    ) -> Result<Self, LayoutError> {
        let layout = Self {
            walls,
            player,
            flowers,
            coins,
            enemies,
        };
        let (width, height) = (layout.walls.width, layout.walls.height);
        if width == 0 || height == 0 {
            return Err(LayoutError::Empty);
        }
        for kind in LayerKind::iter() {
            let layer = layout.layer(kind);
            if layer.width != width || layer.height != height {
                return Err(LayoutError::LayerSizeMismatch {
                    layer: kind.into(),
                    width,
                    height,
                    found_width: layer.width,
                    found_height: layer.height,
                });
            }
        }
        Ok(layout)
    }

    pub fn width(&self) -> usize {
        self.walls.width
    }

    pub fn height(&self) -> usize {
        self.walls.height
    }

    pub fn layer(&self, kind: LayerKind) -> &TileLayer {
        match kind {
            LayerKind::Walls => &self.walls,
            LayerKind::Player => &self.player,
            LayerKind::Flowers => &self.flowers,
            LayerKind::Coins => &self.coins,
            LayerKind::Enemies => &self.enemies,
        }
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> &mut TileLayer {
        match kind {
            LayerKind::Walls => &mut self.walls,
            LayerKind::Player => &mut self.player,
            LayerKind::Flowers => &mut self.flowers,
            LayerKind::Coins => &mut self.coins,
            LayerKind::Enemies => &mut self.enemies,
        }
    }

    pub fn set(&mut self, kind: LayerKind, cell: Cell, code: i32) {
        self.layer_mut(kind).set(cell, code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let rows = vec![vec![0, 0, 0], vec![0, 0]];
        let err = TileLayer::from_rows(LayerKind::Walls, &rows).unwrap_err();
        assert_eq!(
            err,
            LayoutError::RaggedRow {
                layer: "walls",
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(err.error_code(), "LAYOUT_RAGGED_ROW");
    }

    #[test]
    fn occupied_skips_empty_cells() {
        let rows = vec![vec![-1, 3], vec![0, -1]];
        let layer = TileLayer::from_rows(LayerKind::Coins, &rows).unwrap();
        let cells: Vec<_> = layer.occupied().collect();
        assert_eq!(cells, vec![(Cell::new(1, 0), 3), (Cell::new(0, 1), 0)]);
    }

    #[test]
    fn mismatched_layers_are_rejected() {
        let err = LevelLayout::from_layers(
            TileLayer::empty(4, 4),
            TileLayer::empty(4, 4),
            TileLayer::empty(3, 4),
            TileLayer::empty(4, 4),
            TileLayer::empty(4, 4),
        )
        .unwrap_err();
        assert!(matches!(err, LayoutError::LayerSizeMismatch { layer: "flowers", .. }));
    }
}
