//! Loads the data directory shipped with the repository and builds every level.
use std::path::PathBuf;

use game_content::ContentFactory;
use game_core::{Level, LevelPhase};

fn shipped() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data"))
}

#[test]
fn shipped_config_matches_defaults() {
    let config = shipped().load_config().unwrap();
    assert_eq!(config, game_core::GameConfig::default());
}

#[test]
fn every_catalog_level_builds() {
    let factory = shipped();
    let config = factory.load_config().unwrap();
    let catalog = factory.load_catalog().unwrap();
    assert_eq!(catalog.len(), 3);

    for entry in catalog.iter() {
        let layout = factory.load_level(&entry.file).unwrap();
        let level = Level::build(&layout, &config)
            .unwrap_or_else(|e| panic!("{} failed to build: {e}", entry.name));
        assert_eq!(level.phase(), LevelPhase::Running);
        assert!(!level.enemies().is_empty(), "{} has no enemies", entry.name);
    }
}

#[test]
fn loads_level_files_from_a_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("levels")).unwrap();
    std::fs::write(
        dir.path().join("levels.ron"),
        r#"[(name: "Tiny", file: "tiny.ron", unlock: 0)]"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("levels/tiny.ron"),
        "(rows: [\"#####\", \"#P.G#\", \"#####\"])",
    )
    .unwrap();

    let factory = ContentFactory::new(dir.path());
    let catalog = factory.load_catalog().unwrap();
    let entry = catalog.get(0).unwrap();
    let layout = factory.load_level(&entry.file).unwrap();

    assert_eq!((layout.width(), layout.height()), (5, 3));
}
