//! Colour legend for the threshold scale.
//!
//! Each colour bucket becomes one rectangle whose horizontal extent is the
//! bucket's value interval mapped through a linear scale over the dataset's
//! temperature extent. Unbounded bucket edges take the extent's ends, and
//! every interval is clipped to the extent, so buckets the data never reaches
//! collapse to zero width.

use heatmap_common::{Color, HeatmapResult, LegendLayout};

use crate::axis::{value_axis, Axis};
use crate::scale::{LinearScale, ThresholdScale};
use crate::svg::{fmt_num, translate, SvgWriter};

/// One legend rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendBucket {
    pub color: Color,
    /// Clipped value interval
    pub lower: f64,
    pub upper: f64,
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone)]
pub struct Legend {
    buckets: Vec<LegendBucket>,
    axis: Axis,
    height: f64,
}

impl Legend {
    pub fn new(colors: &ThresholdScale, extent: (f64, f64), layout: &LegendLayout) -> Self {
        let (min, max) = extent;
        let scale = LinearScale::new(extent, (0.0, layout.width));

        let buckets = colors
            .colors()
            .iter()
            .enumerate()
            .map(|(i, &color)| {
                let (lo, hi) = colors.invert_extent(i);
                let lower = lo.unwrap_or(min).clamp(min, max);
                let upper = hi.unwrap_or(max).clamp(min, max).max(lower);
                let x = scale.apply(lower);
                LegendBucket {
                    color,
                    lower,
                    upper,
                    x,
                    width: scale.apply(upper) - x,
                }
            })
            .collect();

        let axis = value_axis(&scale, colors.thresholds());

        Self {
            buckets,
            axis,
            height: layout.height,
        }
    }

    pub fn buckets(&self) -> &[LegendBucket] {
        &self.buckets
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    /// Write the legend group at `origin`.
    pub fn write(&self, svg: &mut SvgWriter, origin: (f64, f64)) -> HeatmapResult<()> {
        svg.start(
            "g",
            &[
                ("id", "legend".to_string()),
                ("transform", translate(origin.0, origin.1)),
            ],
        )?;

        for bucket in &self.buckets {
            svg.empty(
                "rect",
                &[
                    ("x", fmt_num(bucket.x)),
                    ("y", "0".to_string()),
                    ("width", fmt_num(bucket.width)),
                    ("height", fmt_num(self.height)),
                    ("fill", bucket.color.to_hex()),
                ],
            )?;
        }

        self.axis
            .write(svg, None, Some(translate(0.0, self.height)))?;
        svg.end("g")
    }
}
