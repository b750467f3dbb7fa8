//! Configuration file parsing for SlidePage
//!
//! Supports `.slidepage/config.toml` next to the deck being presented.

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings, parse_settings};
pub use types::*;
