pub mod storage;
pub mod style;

use tracing::{error, info};

use gallery_common::config::{GalleryConfig, parse_config};

pub const THEME_KEY: &str = "theme";

const GALLERY_TOML: &str = include_str!("../../gallery.toml");

// a broken config file should not leave the user staring at a blank page
pub fn load_config() -> GalleryConfig {
    match parse_config(GALLERY_TOML) {
        Ok(config) => {
            info!(default_query = %config.default_query, theme = %config.theme, "loaded gallery config");
            config
        }
        Err(err) => {
            error!("failed to parse gallery.toml, using defaults: {err}");
            GalleryConfig::default()
        }
    }
}
