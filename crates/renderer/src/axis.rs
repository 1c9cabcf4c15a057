//! Axis tick generation and SVG output.
//!
//! Output follows the usual charting layout: a `domain` path along the
//! scale range and one `tick` group per label, each with a 6px tick line.

use heatmap_common::{month_name, HeatmapResult};

use crate::scale::{BandScale, LinearScale};
use crate::svg::{fmt_num, translate, SvgWriter};

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// Side of the plot an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

/// A labelled position along an axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct Axis {
    pub orientation: Orientation,
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
}

/// Bottom axis labelling every year divisible by ten.
pub fn year_axis(scale: &BandScale<i32>) -> Axis {
    let ticks = scale
        .domain()
        .iter()
        .filter(|year| year.rem_euclid(10) == 0)
        .filter_map(|&year| {
            scale.center(year).map(|offset| Tick {
                offset,
                label: year.to_string(),
            })
        })
        .collect();

    Axis {
        orientation: Orientation::Bottom,
        range: band_range(scale),
        ticks,
    }
}

/// Left axis labelling every month by name.
pub fn month_axis(scale: &BandScale<u32>) -> Axis {
    let ticks = scale
        .domain()
        .iter()
        .filter_map(|&month| {
            let offset = scale.center(month)?;
            let label = month_name(month)?;
            Some(Tick {
                offset,
                label: label.to_string(),
            })
        })
        .collect();

    Axis {
        orientation: Orientation::Left,
        range: band_range(scale),
        ticks,
    }
}

/// Bottom axis labelling the given values with one decimal.
///
/// Values outside the scale's domain are skipped.
pub fn value_axis(scale: &LinearScale, values: &[f64]) -> Axis {
    let ticks = values
        .iter()
        .filter(|v| scale.contains(**v))
        .map(|&v| Tick {
            offset: scale.apply(v),
            label: format!("{:.1}", v),
        })
        .collect();

    Axis {
        orientation: Orientation::Bottom,
        range: scale.range(),
        ticks,
    }
}

fn band_range<T: Copy + PartialEq>(scale: &BandScale<T>) -> (f64, f64) {
    let start = scale
        .domain()
        .first()
        .and_then(|v| scale.position(*v))
        .unwrap_or(0.0);
    (
        start,
        start + scale.bandwidth() * scale.domain().len() as f64,
    )
}

impl Axis {
    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }

    /// Write the axis as a `<g>` group.
    pub fn write(
        &self,
        svg: &mut SvgWriter,
        id: Option<&str>,
        transform: Option<String>,
    ) -> HeatmapResult<()> {
        let mut attrs = vec![
            ("fill", "none".to_string()),
            ("font-size", "10".to_string()),
            ("font-family", "sans-serif".to_string()),
        ];
        if let Some(id) = id {
            attrs.push(("id", id.to_string()));
        }
        if let Some(transform) = transform {
            attrs.push(("transform", transform));
        }
        attrs.push((
            "text-anchor",
            match self.orientation {
                Orientation::Bottom => "middle",
                Orientation::Left => "end",
            }
            .to_string(),
        ));

        svg.start("g", &attrs)?;
        svg.empty(
            "path",
            &[
                ("class", "domain".to_string()),
                ("stroke", "currentColor".to_string()),
                ("d", self.domain_path()),
            ],
        )?;

        for tick in &self.ticks {
            self.write_tick(svg, tick)?;
        }

        svg.end("g")
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = self.range;
        let (r0, r1) = (fmt_num(r0), fmt_num(r1));
        let size = fmt_num(TICK_SIZE);
        match self.orientation {
            Orientation::Bottom => format!("M{r0},{size}V0H{r1}V{size}"),
            Orientation::Left => format!("M-{size},{r0}H0V{r1}H-{size}"),
        }
    }

    fn write_tick(&self, svg: &mut SvgWriter, tick: &Tick) -> HeatmapResult<()> {
        let spacing = fmt_num(TICK_SIZE + TICK_PADDING);
        let (position, line, text) = match self.orientation {
            Orientation::Bottom => (
                translate(tick.offset, 0.0),
                ("y2", fmt_num(TICK_SIZE)),
                vec![
                    ("fill", "currentColor".to_string()),
                    ("y", spacing),
                    ("dy", "0.71em".to_string()),
                ],
            ),
            Orientation::Left => (
                translate(0.0, tick.offset),
                ("x2", fmt_num(-TICK_SIZE)),
                vec![
                    ("fill", "currentColor".to_string()),
                    ("x", format!("-{}", spacing)),
                    ("dy", "0.32em".to_string()),
                ],
            ),
        };

        svg.start(
            "g",
            &[
                ("class", "tick".to_string()),
                ("opacity", "1".to_string()),
                ("transform", position),
            ],
        )?;
        svg.empty("line", &[("stroke", "currentColor".to_string()), line])?;
        svg.text("text", &text, &tick.label)?;
        svg.end("g")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_axis_labels_decades_only() {
        let scale = BandScale::new((1753..=1785).collect(), (0.0, 330.0));
        let axis = year_axis(&scale);
        assert_eq!(axis.labels(), vec!["1760", "1770", "1780"]);
        // 1760 is the 8th band of width 10, centred
        assert_eq!(axis.ticks[0].offset, 75.0);
    }

    #[test]
    fn test_month_axis_labels_all_months() {
        let scale = BandScale::new((1..=12).collect(), (0.0, 120.0));
        let axis = month_axis(&scale);
        assert_eq!(axis.ticks.len(), 12);
        assert_eq!(axis.ticks[0].label, "January");
        assert_eq!(axis.ticks[0].offset, 5.0);
        assert_eq!(axis.ticks[11].label, "December");
    }

    #[test]
    fn test_value_axis_skips_out_of_domain() {
        let scale = LinearScale::new((3.0, 9.5), (0.0, 400.0));
        let axis = value_axis(&scale, &[2.8, 4.0, 9.0, 10.0]);
        assert_eq!(axis.labels(), vec!["4.0", "9.0"]);
    }

    #[test]
    fn test_write_left_axis() {
        let scale = BandScale::new((1..=12).collect(), (0.0, 120.0));
        let mut svg = SvgWriter::new();
        month_axis(&scale)
            .write(&mut svg, Some("y-axis"), None)
            .unwrap();
        let doc = svg.finish().unwrap();
        assert!(doc.contains(r#"id="y-axis""#));
        assert!(doc.contains(r#"d="M-6,0H0V120H-6""#));
        assert!(doc.contains(">March</text>"));
    }
}
