//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Every field is optional; missing fields keep their [`GameConfig::default`] value.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses TOML text into a [`GameConfig`].
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        validate(&config)?;
        let frame_duration = config.frame_duration;
        Ok(config.with_frame_duration(frame_duration))
    }
}

/// Rejects values the simulation cannot run with.
///
/// `animation_speed` must be positive or attack animations never wrap.
fn validate(config: &GameConfig) -> LoadResult<()> {
    positive("tile_size", config.tile_size)?;
    positive("animation_speed", config.animation_speed)?;

    non_negative("enemy.speed", config.enemy.speed)?;
    non_negative("enemy.attack_radius", config.enemy.attack_radius)?;
    non_negative("enemy.notice_radius", config.enemy.notice_radius)?;
    finite("enemy.hitbox_inflate", config.enemy.hitbox_inflate.0)?;
    finite("enemy.hitbox_inflate", config.enemy.hitbox_inflate.1)?;

    non_negative("player.speed", config.player.speed)?;
    non_negative("player.visible_radius", config.player.visible_radius)?;
    non_negative("player.visible_factor", config.player.visible_factor)?;
    finite("player.hitbox_inflate", config.player.hitbox_inflate.0)?;
    finite("player.hitbox_inflate", config.player.hitbox_inflate.1)?;

    finite("pickups.flower_visibility", config.pickups.flower_visibility)?;
    finite("pickups.flower_speed", config.pickups.flower_speed)?;
    Ok(())
}

fn finite(name: &str, value: f32) -> LoadResult<()> {
    anyhow::ensure!(value.is_finite(), "{name} must be a finite number, got {value}");
    Ok(())
}

fn positive(name: &str, value: f32) -> LoadResult<()> {
    finite(name, value)?;
    anyhow::ensure!(value > 0.0, "{name} must be positive, got {value}");
    Ok(())
}

fn non_negative(name: &str, value: f32) -> LoadResult<()> {
    finite(name, value)?;
    anyhow::ensure!(value >= 0.0, "{name} must not be negative, got {value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = ConfigLoader::parse(
            r#"
            frame_duration = 20

            [enemy]
            attack_damage = 10

            [player]
            visible_radius = 300.0
            "#,
        )
        .unwrap();

        assert_eq!(config.frame_duration, 20);
        assert_eq!(config.enemy.attack_damage, 10);
        assert_eq!(config.enemy.attack_radius, 30.0);
        assert_eq!(config.player.visible_radius, 300.0);
        assert_eq!(config.player.health, 100);
    }

    #[test]
    fn rejects_non_positive_tile_size() {
        assert!(ConfigLoader::parse("tile_size = 0.0").is_err());
    }

    #[test]
    fn rejects_animation_speed_that_never_advances() {
        for text in [
            "animation_speed = 0.0",
            "animation_speed = -0.15",
            "animation_speed = nan",
            "animation_speed = inf",
        ] {
            let err = ConfigLoader::parse(text).unwrap_err();
            assert!(err.to_string().contains("animation_speed"), "{text}: {err}");
        }
    }

    #[test]
    fn rejects_negative_or_nan_radii_and_speeds() {
        for text in [
            "[enemy]\nattack_radius = -1.0",
            "[enemy]\nspeed = nan",
            "[player]\nvisible_radius = -220.0",
            "[player]\nvisible_factor = nan",
            "[player]\nspeed = -5.0",
        ] {
            assert!(ConfigLoader::parse(text).is_err(), "{text}");
        }

        let config = ConfigLoader::parse("[enemy]\nspeed = 0.0").unwrap();
        assert_eq!(config.enemy.speed, 0.0);
    }
}
