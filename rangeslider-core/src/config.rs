//! Slider configuration: the host-facing configuration object, loadable from TOML.
//!
//! ```toml
//! minimum_value = 0.0
//! maximum_value = 500.0
//! lower_value = 50.0
//! upper_value = 250.0
//! track_height = 2.0
//! highlight_height = 4.0
//!
//! [style.track_tint]
//! r = 0.16
//! g = 0.20
//! b = 0.25
//! ```
//!
//! Missing fields take the control's defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::control::RangeSlider;
use crate::domain::{Invalidation, RangeError, RangeModel, SliderStyle};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("field `{field}` must be finite")]
    NonFinite { field: &'static str },

    #[error(transparent)]
    Range(#[from] RangeError),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderConfig {
    pub minimum_value: f64,
    pub maximum_value: f64,
    pub lower_value: f64,
    pub upper_value: f64,
    pub track_height: f64,
    pub highlight_height: f64,
    pub style: SliderStyle,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self::from_model(&RangeModel::default(), SliderStyle::default())
    }
}

impl SliderConfig {
    pub fn from_model(model: &RangeModel, style: SliderStyle) -> Self {
        Self {
            minimum_value: model.minimum(),
            maximum_value: model.maximum(),
            lower_value: model.lower_value(),
            upper_value: model.upper_value(),
            track_height: model.track_height(),
            highlight_height: model.highlight_height(),
            style,
        }
    }

    /// Snapshot a live control's configuration.
    pub fn from_slider(slider: &RangeSlider) -> Self {
        Self::from_model(slider.model(), *slider.style())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.check_finite()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate into a model: range first, then the selection is clamped.
    pub fn to_model(&self) -> Result<RangeModel, ConfigError> {
        self.check_finite()?;
        let mut model = RangeModel::with_range(
            self.minimum_value,
            self.maximum_value,
            self.lower_value,
            self.upper_value,
        )?;
        model.set_track_height(self.track_height);
        model.set_highlight_height(self.highlight_height);
        Ok(model)
    }

    /// Build a fresh control with zero bounds; the host supplies layout later.
    pub fn build(&self) -> Result<RangeSlider, ConfigError> {
        let mut slider = RangeSlider::with_model(self.to_model()?);
        slider.set_style(self.style);
        Ok(slider)
    }

    fn check_finite(&self) -> Result<(), ConfigError> {
        let fields = [
            ("minimum_value", self.minimum_value),
            ("maximum_value", self.maximum_value),
            ("lower_value", self.lower_value),
            ("upper_value", self.upper_value),
            ("track_height", self.track_height),
            ("highlight_height", self.highlight_height),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite()) {
            Some((field, _)) => Err(ConfigError::NonFinite { field: *field }),
            None => Ok(()),
        }
    }
}

impl RangeSlider {
    /// Apply a whole configuration. Either everything applies or nothing does.
    pub fn apply_config(&mut self, config: &SliderConfig) -> Result<Invalidation, ConfigError> {
        let model = config.to_model()?;
        self.set_style(config.style);
        Ok(self.replace_model(model))
    }
}
