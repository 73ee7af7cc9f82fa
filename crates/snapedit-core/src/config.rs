//! Editor configuration: slider ranges and the default save format.
//!
//! Every top-level field has a default matching the stock editor, so a
//! config file only needs the sliders it changes. A slider table must give
//! all three values:
//!
//! ```toml
//! default_extension = "jpg"
//!
//! [blur]
//! min = 1
//! max = 41
//! default = 5
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::codec::DEFAULT_EXTENSION;

/// Errors from reading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid range for {name}: min {min} > max {max}")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
}

/// Bounds and starting value of one adjustment slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f32,
    pub max: f32,
    /// Value the slider starts at when shown.
    pub default: f32,
}

impl SliderRange {
    pub const fn new(min: f32, max: f32, default: f32) -> Self {
        Self { min, max, default }
    }

    /// Clamp a slider value into range. NaN maps to the default.
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        // `f32::clamp` panics when min > max
        if self.min > self.max || self.min.is_nan() || self.max.is_nan() {
            return Err(ConfigError::InvalidRange {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Settings for the editor front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Blur intensity (1 to 25, starts at 5)
    pub blur: SliderRange,
    /// Brightness delta (-100 to 100)
    pub brightness: SliderRange,
    /// Contrast delta (-100 to 100)
    pub contrast: SliderRange,
    /// Resize percentage (10 to 200, starts at 100)
    pub scale: SliderRange,
    /// Extension appended to save paths that have none
    pub default_extension: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            blur: SliderRange::new(1.0, 25.0, 5.0),
            brightness: SliderRange::new(-100.0, 100.0, 0.0),
            contrast: SliderRange::new(-100.0, 100.0, 0.0),
            scale: SliderRange::new(10.0, 200.0, 100.0),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl EditorConfig {
    /// Parse a TOML document. Missing fields keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.blur.validate("blur")?;
        self.brightness.validate("brightness")?;
        self.contrast.validate("contrast")?;
        self.scale.validate("scale")
    }
}
