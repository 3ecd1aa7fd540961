use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Show the indicator while every inventory slot is occupied
    #[serde(default = "default_true")]
    pub display_full: bool,

    /// Show the indicator while the inventory holds a matching item
    #[serde(default = "default_true")]
    pub display_contain: bool,

    /// Dot separated name fragments, e.g. `"rune.shark"`
    #[serde(default)]
    pub contain_name: Option<String>,

    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    #[serde(default = "default_render_interval_ms")]
    pub render_interval_ms: u64,

    // TOML tables must come after plain values
    #[serde(default = "default_full_indicator")]
    pub full_indicator: IndicatorStyle,

    #[serde(default = "default_contain_indicator")]
    pub contain_indicator: IndicatorStyle,
}

/// Where and how an indicator is drawn on the overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorStyle {
    /// RGBA
    pub color: [u8; 4],
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,

    #[serde(default)]
    pub label: Option<String>,
}

// Default values
fn default_true() -> bool {
    true
}

fn default_full_indicator() -> IndicatorStyle {
    IndicatorStyle {
        color: [255, 0, 0, 255],
        x: 0,
        y: 0,
        width: 10,
        height: 10,
        label: None,
    }
}

fn default_contain_indicator() -> IndicatorStyle {
    IndicatorStyle {
        color: [0, 255, 0, 255],
        x: 10,
        y: 0,
        width: 10,
        height: 10,
        label: None,
    }
}

fn default_tick_interval_ms() -> u64 {
    600 // one game tick
}

fn default_render_interval_ms() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            display_full: true,
            display_contain: true,
            contain_name: None,
            tick_interval_ms: default_tick_interval_ms(),
            render_interval_ms: default_render_interval_ms(),
            full_indicator: default_full_indicator(),
            contain_indicator: default_contain_indicator(),
        }
    }
}

impl Config {
    /// The configured pattern string, empty when never set
    pub fn contain_patterns(&self) -> &str {
        self.contain_name.as_deref().unwrap_or_default()
    }

    /// True until the user has been through the setup prompts once
    pub fn is_first_run(&self) -> bool {
        self.contain_name.is_none()
    }
}
