//! Light-limited map snapshot centered on the player.
use game_core::{EnemyStatus, Level, PickupKind, Rect, Vec2};

/// What a map cell shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    /// Outside the light, or outside the level.
    Hidden,
    Floor,
    Wall,
    Player,
    Enemy(EnemyStatus),
    GoldCoin,
    SilverCoin,
    Flower,
    Goal,
    /// A hit effect is playing here.
    Hit,
}

/// Size of the visible window in tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub columns: usize,
    pub rows: usize,
}

impl Viewport {
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

/// Grid of glyphs for the tiles inside the viewport.
///
/// The camera keeps the player's tile at the center. With the light on every
/// tile whose center lies within the player's visible radius is revealed;
/// with the light off only the player is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    columns: usize,
    rows: usize,
    /// Level tile shown in the top-left viewport cell (may be negative).
    origin: (isize, isize),
    cells: Vec<Glyph>,
}

impl MapView {
    pub fn build(level: &Level, viewport: Viewport) -> Self {
        let columns = viewport.columns.max(1);
        let rows = viewport.rows.max(1);
        let tile = level.config().tile_size;
        let player = level.player();
        let (player_col, player_row) = tile_of(player.position(), tile);
        let origin = (
            player_col - (columns / 2) as isize,
            player_row - (rows / 2) as isize,
        );

        let mut view = Self {
            columns,
            rows,
            origin,
            cells: vec![Glyph::Hidden; columns * rows],
        };

        if player.light_on() {
            let (width, height) = level.dimensions();
            let mut walls = vec![false; width * height];
            for rect in level.wall_tiles() {
                if let Some(index) = grid_index(rect, tile, width, height) {
                    walls[index] = true;
                }
            }

            let radius = player.visible_radius();
            for row in 0..rows {
                for col in 0..columns {
                    let (level_col, level_row) = (origin.0 + col as isize, origin.1 + row as isize);
                    if level_col < 0
                        || level_row < 0
                        || level_col as usize >= width
                        || level_row as usize >= height
                    {
                        continue;
                    }
                    let center = Vec2::new(
                        (level_col as f32 + 0.5) * tile,
                        (level_row as f32 + 0.5) * tile,
                    );
                    if center.distance(player.position()) > radius {
                        continue;
                    }
                    let index = level_row as usize * width + level_col as usize;
                    view.cells[row * columns + col] =
                        if walls[index] { Glyph::Wall } else { Glyph::Floor };
                }
            }

            for pickup in level.pickups() {
                let glyph = match pickup.kind {
                    PickupKind::GoldCoin => Glyph::GoldCoin,
                    PickupKind::SilverCoin => Glyph::SilverCoin,
                    PickupKind::Flower => Glyph::Flower,
                    PickupKind::Goal => Glyph::Goal,
                };
                view.reveal(tile_of(pickup.position(), tile), glyph);
            }
            for enemy in level.enemies() {
                view.reveal(tile_of(enemy.position(), tile), Glyph::Enemy(enemy.status()));
            }
            for particle in level.particles() {
                view.reveal(tile_of(particle.position(), tile), Glyph::Hit);
            }
        }

        view.place((player_col, player_row), Glyph::Player);
        view
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn get(&self, col: usize, row: usize) -> Glyph {
        if col >= self.columns || row >= self.rows {
            return Glyph::Hidden;
        }
        self.cells[row * self.columns + col]
    }

    /// Rows of glyphs, top to bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[Glyph]> {
        self.cells.chunks(self.columns)
    }

    fn slot(&self, (col, row): (isize, isize)) -> Option<usize> {
        let col = col - self.origin.0;
        let row = row - self.origin.1;
        if col < 0 || row < 0 || col as usize >= self.columns || row as usize >= self.rows {
            return None;
        }
        Some(row as usize * self.columns + col as usize)
    }

    /// Overwrites a cell only if the light already reached it.
    fn reveal(&mut self, tile: (isize, isize), glyph: Glyph) {
        if let Some(slot) = self.slot(tile)
            && self.cells[slot] != Glyph::Hidden
        {
            self.cells[slot] = glyph;
        }
    }

    fn place(&mut self, tile: (isize, isize), glyph: Glyph) {
        if let Some(slot) = self.slot(tile) {
            self.cells[slot] = glyph;
        }
    }
}

fn tile_of(position: Vec2, tile: f32) -> (isize, isize) {
    (
        (position.x / tile).floor() as isize,
        (position.y / tile).floor() as isize,
    )
}

fn grid_index(rect: &Rect, tile: f32, width: usize, height: usize) -> Option<usize> {
    let (col, row) = tile_of(rect.center(), tile);
    if col < 0 || row < 0 || col as usize >= width || row as usize >= height {
        return None;
    }
    Some(row as usize * width + col as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Cell, GameConfig, InputState, LayerKind, LevelLayout, Tick};

    /// 20x3 corridor: player at column 1, goal at column 18, enemy at column 3.
    fn level() -> Level {
        let mut layout = LevelLayout::empty(20, 3);
        for col in 0..20 {
            layout.set(LayerKind::Walls, Cell::new(col, 0), 0);
            layout.set(LayerKind::Walls, Cell::new(col, 2), 0);
        }
        layout.set(LayerKind::Walls, Cell::new(0, 1), 0);
        layout.set(LayerKind::Walls, Cell::new(19, 1), 0);
        layout.set(LayerKind::Player, Cell::new(1, 1), 0);
        layout.set(LayerKind::Player, Cell::new(18, 1), 1);
        layout.set(LayerKind::Enemies, Cell::new(3, 1), 0);
        Level::build(&layout, &GameConfig::default()).unwrap()
    }

    #[test]
    fn light_reveals_tiles_within_radius() {
        let view = MapView::build(&level(), Viewport::new(11, 5));

        // Player tile (1, 1) sits at the viewport center (5, 2).
        assert_eq!(view.get(5, 2), Glyph::Player);
        assert_eq!(view.get(4, 2), Glyph::Wall);
        assert_eq!(view.get(6, 2), Glyph::Floor);
        assert!(matches!(view.get(7, 2), Glyph::Enemy(_)));
        // 220px radius covers three tiles to the right, not four.
        assert_eq!(view.get(8, 2), Glyph::Floor);
        assert_eq!(view.get(9, 2), Glyph::Hidden);
        // Left of the level edge.
        assert_eq!(view.get(0, 2), Glyph::Hidden);
    }

    #[test]
    fn darkness_shows_only_the_player() {
        let mut level = level();
        level.step(InputState::LIGHT, Tick(16));
        assert!(!level.player().light_on());

        let view = MapView::build(&level, Viewport::new(11, 5));
        let visible: Vec<_> = view
            .lines()
            .flatten()
            .filter(|g| **g != Glyph::Hidden)
            .collect();
        assert_eq!(visible, vec![&Glyph::Player]);
    }
}
