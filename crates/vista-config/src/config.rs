//! Configuration structs with sensible defaults and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Main view size and lens.
    pub viewport: ViewportConfig,
    /// Horizon ring resolution.
    pub horizon: HorizonConfig,
    /// Overview framing and line style.
    pub overview: OverviewConfig,
    /// Simulated camera flight for the demo.
    pub flight: FlightConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Main view configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewportConfig {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f64,
}

/// Horizon circle configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HorizonConfig {
    /// Vertices on the horizon ring. Higher is smoother but slower.
    pub segments: usize,
    /// Multiplier on the horizon radius, in `(0, 1]`.
    pub shrink_factor: f64,
}

/// Dash pattern names accepted in `config.ron`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum LineDash {
    Solid,
    #[default]
    ShortDot,
    Dash,
    Dot,
}

/// Overview map configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OverviewConfig {
    /// How much larger than the visible earth the overview extent is.
    pub grow_factor: f64,
    /// Visible-earth line color (RGB).
    pub line_color: [u8; 3],
    /// Visible-earth line width in points.
    pub line_width: f32,
    pub line_dash: LineDash,
}

/// Demo camera flight. Positions are Web Mercator meters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FlightConfig {
    pub start_x: f64,
    pub start_y: f64,
    /// Camera altitude above the sphere in meters.
    pub altitude_m: f64,
    /// Compass heading in degrees; the camera flies along it.
    pub heading_deg: f64,
    /// Ground distance covered per step, in meters.
    pub step_m: f64,
    /// Number of camera updates to simulate.
    pub steps: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fov_y_deg: 45.0,
        }
    }
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            segments: 45,
            shrink_factor: 0.97,
        }
    }
}

impl Default for OverviewConfig {
    fn default() -> Self {
        Self {
            grow_factor: 1.75,
            line_color: [0, 0, 125],
            line_width: 2.0,
            line_dash: LineDash::ShortDot,
        }
    }
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            start_x: 17_000_000.0,
            start_y: 2_000_000.0,
            altitude_m: 1_000_000.0,
            heading_deg: 90.0,
            step_m: 500_000.0,
            steps: 12,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Validation ---

impl Config {
    /// Reject settings the visible-earth pipeline cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field, reason| Err(ConfigError::InvalidValue { field, reason });

        if self.viewport.width == 0 || self.viewport.height == 0 {
            return invalid("viewport", "width and height must be non-zero");
        }
        if !(self.viewport.fov_y_deg > 0.0 && self.viewport.fov_y_deg < 180.0) {
            return invalid("viewport.fov_y_deg", "must be in (0, 180)");
        }
        if self.horizon.segments < 3 {
            return invalid("horizon.segments", "must be at least 3");
        }
        if !(self.horizon.shrink_factor > 0.0 && self.horizon.shrink_factor <= 1.0) {
            return invalid("horizon.shrink_factor", "must be in (0, 1]");
        }
        if !(self.overview.grow_factor.is_finite() && self.overview.grow_factor > 0.0) {
            return invalid("overview.grow_factor", "must be positive");
        }
        if !(self.flight.altitude_m.is_finite() && self.flight.altitude_m > 0.0) {
            return invalid("flight.altitude_m", "must be positive");
        }
        Ok(())
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(config_dir.join(CONFIG_FILE), serialized).map_err(ConfigError::WriteError)
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&config_dir.join(CONFIG_FILE))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        ron::from_str(&contents).map_err(ConfigError::ParseError)
    }
}
