//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use slidepage_core::prelude::*;

/// Application settings (.slidepage/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub slides: SlideOptions,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Options recognised by the slide widget. Read once at construction.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SlideOptions {
    /// Pattern the container uses to discover panels
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Marker class applied to every panel
    #[serde(default = "default_class")]
    pub class: String,

    #[serde(default)]
    pub animation: AnimationOptions,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            class: default_class(),
            animation: AnimationOptions::default(),
        }
    }
}

impl SlideOptions {
    /// Build options from an untyped TOML value.
    ///
    /// Anything but a table is rejected; missing keys fall back to the
    /// defaults and unknown keys are ignored.
    pub fn from_value(value: &toml::Value) -> Result<Self> {
        if !value.is_table() {
            return Err(Error::invalid_options(format!("got {}", value.type_str())));
        }
        value
            .clone()
            .try_into()
            .map_err(|e: toml::de::Error| Error::config_invalid(e.message().to_string()))
    }
}

/// Animation class names, each a `[backward, forward]` pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnimationOptions {
    #[serde(default = "default_enter")]
    pub enter: [String; 2],

    #[serde(default = "default_leave")]
    pub leave: [String; 2],

    /// Force-complete a transition whose end signal never arrives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stall_timeout_ms: Option<u64>,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enter: default_enter(),
            leave: default_leave(),
            stall_timeout_ms: None,
        }
    }
}

impl AnimationOptions {
    pub fn stall_timeout(&self) -> Option<Duration> {
        self.stall_timeout_ms.map(Duration::from_millis)
    }
}

/// Terminal UI settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// How long one keyframe animation runs
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,

    #[serde(default = "default_true")]
    pub show_status_bar: bool,

    /// Show a wall clock in the header
    #[serde(default = "default_true")]
    pub show_clock: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
            show_status_bar: true,
            show_clock: true,
        }
    }
}

impl UiSettings {
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

fn default_selector() -> String {
    r"^---\s*$".to_string()
}

fn default_class() -> String {
    "animated".to_string()
}

fn default_enter() -> [String; 2] {
    ["slideInDown".to_string(), "slideInUp".to_string()]
}

fn default_leave() -> [String; 2] {
    ["slideOutDown".to_string(), "slideOutUp".to_string()]
}

fn default_animation_ms() -> u64 {
    400
}

fn default_true() -> bool {
    true
}
