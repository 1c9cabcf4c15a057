//! Colour configuration for the temperature heatmap.
//!
//! A [`ThresholdStyle`] pairs ascending cut points with colours. Value `v`
//! belongs to bucket `i` when exactly `i` cut points are `<= v`; each bucket
//! is closed on its lower edge and open on its upper edge.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HeatmapError, HeatmapResult};

/// Temperature cut points (°C).
pub const TEMPERATURE_THRESHOLDS: [f64; 9] = [2.8, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0];

/// Reversed nine-class red-yellow-blue diverging palette, coldest first.
pub const TEMPERATURE_PALETTE: [&str; 9] = [
    "#4575b4", "#74add1", "#abd9e9", "#e0f3f8", "#ffffbf", "#fee090", "#fdae61", "#f46d43",
    "#d73027",
];

/// An opaque RGB colour, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value).ok_or_else(|| format!("invalid hex color '{}'", value))
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Threshold colour classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdStyle {
    /// Ascending cut points
    pub thresholds: Vec<f64>,

    /// One colour per bucket, coldest first. When there are as many colours
    /// as cut points, the last colour also covers values above the last cut.
    pub colors: Vec<Color>,
}

impl Default for ThresholdStyle {
    fn default() -> Self {
        Self::temperature()
    }
}

impl ThresholdStyle {
    /// The standard nine-bucket temperature style.
    pub fn temperature() -> Self {
        Self {
            thresholds: TEMPERATURE_THRESHOLDS.to_vec(),
            colors: TEMPERATURE_PALETTE
                .iter()
                .filter_map(|hex| Color::from_hex(hex))
                .collect(),
        }
    }

    pub fn validate(&self) -> HeatmapResult<()> {
        if self.colors.is_empty() {
            return Err(HeatmapError::Config(
                "threshold style needs at least one color".to_string(),
            ));
        }

        if self.thresholds.iter().any(|t| !t.is_finite()) {
            return Err(HeatmapError::Config(
                "thresholds must be finite numbers".to_string(),
            ));
        }

        for pair in self.thresholds.windows(2) {
            if pair[1] <= pair[0] {
                return Err(HeatmapError::Config(
                    "thresholds must be in ascending order".to_string(),
                ));
            }
        }

        let n = self.thresholds.len();
        if self.colors.len() != n && self.colors.len() != n + 1 {
            return Err(HeatmapError::Config(format!(
                "{} thresholds need {} or {} colors, got {}",
                n,
                n,
                n + 1,
                self.colors.len()
            )));
        }

        Ok(())
    }
}
