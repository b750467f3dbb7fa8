//! Settings parser for .slidepage/config.toml

use super::types::Settings;
use slidepage_core::prelude::*;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const SLIDEPAGE_DIR: &str = ".slidepage";

const DEFAULT_CONFIG: &str = r#"# SlidePage Configuration

[slides]
selector = "^---\\s*$"  # Lines matching this regex split the deck into panels
class = "animated"       # Marker class added to every panel

[slides.animation]
enter = ["slideInDown", "slideInUp"]    # [backward, forward]
leave = ["slideOutDown", "slideOutUp"]  # [backward, forward]
# stall_timeout_ms = 2000               # Force-finish a transition that never ends

[ui]
animation_ms = 400
show_status_bar = true
show_clock = true
"#;

/// Path of the config file for a deck directory
pub fn config_path(deck_dir: &Path) -> PathBuf {
    deck_dir.join(SLIDEPAGE_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.slidepage/config.toml`.
///
/// Missing, unreadable or malformed files fall back to defaults.
pub fn load_settings(deck_dir: &Path) -> Settings {
    let config_path = config_path(deck_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match parse_settings(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(content: &str) -> Result<Settings> {
    Ok(toml::from_str(content)?)
}

/// Create the default config file in the .slidepage/ directory
pub fn init_config_dir(deck_dir: &Path) -> Result<PathBuf> {
    let slidepage_dir = deck_dir.join(SLIDEPAGE_DIR);

    if !slidepage_dir.exists() {
        std::fs::create_dir_all(&slidepage_dir)
            .map_err(|e| Error::config(format!("Failed to create .slidepage dir: {}", e)))?;
    }

    let config_path = slidepage_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(config_path)
}
