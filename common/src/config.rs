use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

use api::{DEFAULT_PAGE_SIZE, NASA_API_ROOT};

// gallery configuration
//
// one parameterized view replaces the per-theme copies, so everything that used to
// differ between them lives here.  every field is optional in the file
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GalleryConfig {
    // searched on first load and whenever the input is cleared
    pub default_query: String,

    // initial theme, before any stored preference is applied
    pub theme: Theme,

    // a mapped batch shorter than this ends paging for the current query
    pub page_size: usize,

    // quiet period after the last keystroke before a search is started
    pub debounce_ms: u32,

    // distance from the bottom of the scroller that triggers the next page
    pub scroll_threshold_px: f64,

    // include a trailing slash if the root has a path component
    pub api_root: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        GalleryConfig {
            default_query: String::from("galaxy"),
            theme: Theme::Nebula,
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: 600,
            scroll_threshold_px: 300.0,
            api_root: String::from(NASA_API_ROOT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum Theme {
    // dark blue gradient
    #[default]
    Nebula,
    Daylight,
}

impl Theme {
    pub fn css_class(&self) -> &'static str {
        match self {
            Theme::Nebula => "theme-nebula",
            Theme::Daylight => "theme-daylight",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Nebula => Theme::Daylight,
            Theme::Daylight => Theme::Nebula,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Nebula => write!(f, "Nebula"),
            Theme::Daylight => write!(f, "Daylight"),
        }
    }
}

// gallery.toml keeps its keys under [config], leaving room for other tables later
#[derive(Debug, Default, Deserialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: GalleryConfig,
}

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<GalleryConfig> {
    debug!("parsing gallery config");

    let data: TomlConfigFile = toml::from_str(doc)?;

    if data.config.page_size == 0 {
        return Err(anyhow::Error::msg("page_size must be at least 1"));
    }

    debug!("successfully parsed gallery config");
    Ok(data.config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_all_defaults() {
        assert_eq!(parse_config("").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn partial_table_keeps_other_defaults() {
        let config = parse_config(
            r#"
            [config]
            default_query = "nebula"
            theme = "Daylight"
            "#,
        )
        .unwrap();

        assert_eq!(config.default_query, "nebula");
        assert_eq!(config.theme, Theme::Daylight);
        assert_eq!(config.page_size, 100);
        assert_eq!(config.debounce_ms, 600);
        assert_eq!(config.api_root, NASA_API_ROOT);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(parse_config("[config]\npage_size = 0\n").is_err());
    }

    #[test]
    fn unknown_theme_is_rejected() {
        assert!(parse_config("[config]\ntheme = \"Plaid\"\n").is_err());
    }

    #[test]
    fn theme_toggles_back_and_forth() {
        assert_eq!(Theme::Nebula.toggle(), Theme::Daylight);
        assert_eq!(Theme::Nebula.toggle().toggle(), Theme::Nebula);
        assert_ne!(Theme::Nebula.css_class(), Theme::Daylight.css_class());
    }
}
