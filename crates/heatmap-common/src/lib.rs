//! Common types shared by the heatmap renderer and CLI.

pub mod dataset;
pub mod error;
pub mod layout;
pub mod style;

pub use dataset::{month_name, Dataset, MonthlyVariance};
pub use error::{HeatmapError, HeatmapResult};
pub use layout::{ChartLayout, LegendLayout, Margin};
pub use style::{Color, ThresholdStyle, TEMPERATURE_PALETTE, TEMPERATURE_THRESHOLDS};
