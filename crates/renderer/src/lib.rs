//! Heatmap rendering for monthly temperature variance data.
//!
//! Implements:
//! - Band, linear and threshold scales
//! - Axes and the colour legend
//! - SVG, HTML page and PNG output

pub mod axis;
pub mod heatmap;
pub mod legend;
pub mod page;
pub mod raster;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use heatmap::{Cell, Heatmap, TooltipMode};
pub use legend::{Legend, LegendBucket};
pub use scale::{BandScale, LinearScale, ThresholdScale};
pub use tooltip::Tooltip;
