//! Chart geometry.
//!
//! All values are in SVG user units (pixels). Missing fields deserialize to
//! the defaults of the standard 1200x500 chart.

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Space around the plot area reserved for axes and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 60.0,
            right: 20.0,
            bottom: 100.0,
            left: 80.0,
        }
    }
}

/// Legend box size and its distance below the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    pub width: f64,
    pub height: f64,
    pub offset: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 30.0,
            offset: 40.0,
        }
    }
}

/// Overall chart geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub legend: LegendLayout,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 500.0,
            margin: Margin::default(),
            legend: LegendLayout::default(),
        }
    }
}

impl ChartLayout {
    /// Width of the plot area.
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area.
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Top-left corner of the legend, relative to the SVG origin.
    pub fn legend_origin(&self) -> (f64, f64) {
        (
            self.inner_width() / 2.0 - self.legend.width / 2.0 + self.margin.left,
            self.inner_height() + self.margin.top + self.legend.offset,
        )
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if !(self.inner_width() > 0.0 && self.inner_height() > 0.0) {
            return Err(HeatmapError::Config(format!(
                "plot area must be positive, got {}x{}",
                self.inner_width(),
                self.inner_height()
            )));
        }
        if !(self.legend.width > 0.0 && self.legend.height > 0.0) {
            return Err(HeatmapError::Config(
                "legend must have a positive size".to_string(),
            ));
        }
        Ok(())
    }
}
