//! Configuration loading for chart layout, palette and HTTP settings.
//!
//! Everything has a default, so the config file is optional and may list
//! only the fields it overrides.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use heatmap_common::{ChartLayout, ThresholdStyle};

/// Location of the reference dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Root configuration loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub layout: ChartLayout,
    pub palette: ThresholdStyle,
    pub http: HttpConfig,
    pub raster: RasterConfig,
}

/// HTTP client settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Total request timeout in seconds
    pub timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            connect_timeout_secs: 30,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

/// PNG output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Multiplier applied to the chart size
    pub scale: f32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl HeatmapConfig {
    /// Load from a YAML file, or defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config: {}", path.display()))?;
                let config = Self::from_yaml(&content)
                    .with_context(|| format!("Failed to parse config: {}", path.display()))?;
                info!(path = %path.display(), "Loaded configuration");
                config
            }
            None => {
                debug!("No config file given, using defaults");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        self.palette.validate()?;
        anyhow::ensure!(
            self.raster.scale.is_finite() && self.raster.scale > 0.0,
            "raster.scale must be positive, got {}",
            self.raster.scale
        );
        Ok(())
    }
}
