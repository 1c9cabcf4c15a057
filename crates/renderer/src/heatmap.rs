//! Heatmap chart assembly.
//!
//! Years run along the x axis and months down the y axis (January on top).
//! Every record becomes one band-sized cell filled by the threshold colour
//! of its absolute temperature.

use tracing::debug;

use heatmap_common::{ChartLayout, Color, Dataset, HeatmapError, HeatmapResult};

use crate::axis::{month_axis, year_axis, Axis};
use crate::legend::Legend;
use crate::scale::{BandScale, ThresholdScale};
use crate::svg::{fmt_num, translate, SvgWriter, SVG_NAMESPACE};
use crate::tooltip::Tooltip;

/// How cell tooltips are attached to the SVG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TooltipMode {
    /// Tooltip text in a `data-tooltip` attribute, for the page script.
    #[default]
    DataAttribute,
    /// A `<title>` child element, shown natively by SVG viewers.
    Title,
    None,
}

/// One rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub year: i32,
    pub month: u32,
    pub temperature: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub tooltip: Tooltip,
}

/// A dataset bound to chart geometry and scales.
pub struct Heatmap<'a> {
    dataset: &'a Dataset,
    layout: ChartLayout,
    x: BandScale<i32>,
    y: BandScale<u32>,
    colors: ThresholdScale,
}

impl<'a> Heatmap<'a> {
    pub fn new(
        dataset: &'a Dataset,
        layout: ChartLayout,
        colors: ThresholdScale,
    ) -> HeatmapResult<Self> {
        layout.validate()?;

        let x = BandScale::new(dataset.years(), (0.0, layout.inner_width()));
        let y = BandScale::new((1..=12).collect(), (0.0, layout.inner_height()));

        debug!(
            years = x.domain().len(),
            records = dataset.len(),
            cell_width = x.bandwidth(),
            cell_height = y.bandwidth(),
            "Built heatmap scales"
        );

        Ok(Self {
            dataset,
            layout,
            x,
            y,
            colors,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        self.dataset
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn x_scale(&self) -> &BandScale<i32> {
        &self.x
    }

    pub fn y_scale(&self) -> &BandScale<u32> {
        &self.y
    }

    pub fn color_scale(&self) -> &ThresholdScale {
        &self.colors
    }

    pub fn x_axis(&self) -> Axis {
        year_axis(&self.x)
    }

    pub fn y_axis(&self) -> Axis {
        month_axis(&self.y)
    }

    pub fn legend(&self) -> Legend {
        Legend::new(
            &self.colors,
            self.dataset.temperature_extent(),
            &self.layout.legend,
        )
    }

    /// Cells in dataset order, positioned relative to the plot area.
    pub fn cells(&self) -> HeatmapResult<Vec<Cell>> {
        self.dataset
            .records()
            .iter()
            .map(|record| {
                let x = self.x.position(record.year).ok_or_else(|| {
                    HeatmapError::Render(format!("year {} missing from x scale", record.year))
                })?;
                let y = self.y.position(record.month).ok_or_else(|| {
                    HeatmapError::Render(format!("month {} missing from y scale", record.month))
                })?;
                let temperature = self.dataset.temperature(record);

                Ok(Cell {
                    year: record.year,
                    month: record.month,
                    temperature,
                    x,
                    y,
                    width: self.x.bandwidth(),
                    height: self.y.bandwidth(),
                    color: self.colors.color(temperature),
                    tooltip: Tooltip::for_record(self.dataset, record),
                })
            })
            .collect()
    }

    /// Render the chart as an SVG document.
    pub fn render_svg(&self, tooltips: TooltipMode) -> HeatmapResult<String> {
        let layout = &self.layout;
        let mut svg = SvgWriter::new();

        svg.start(
            "svg",
            &[
                ("xmlns", SVG_NAMESPACE.to_string()),
                ("id", "heatmap".to_string()),
                ("width", fmt_num(layout.width)),
                ("height", fmt_num(layout.height)),
                (
                    "viewBox",
                    format!("0 0 {} {}", fmt_num(layout.width), fmt_num(layout.height)),
                ),
            ],
        )?;

        svg.start(
            "g",
            &[("transform", translate(layout.margin.left, layout.margin.top))],
        )?;
        self.x_axis().write(
            &mut svg,
            Some("x-axis"),
            Some(translate(0.0, layout.inner_height())),
        )?;
        self.y_axis().write(&mut svg, Some("y-axis"), None)?;

        let cells = self.cells()?;
        for cell in &cells {
            write_cell(&mut svg, cell, tooltips)?;
        }
        svg.end("g")?;

        self.legend().write(&mut svg, layout.legend_origin())?;
        svg.end("svg")?;

        debug!(cells = cells.len(), "Rendered heatmap SVG");
        svg.finish()
    }
}

fn write_cell(svg: &mut SvgWriter, cell: &Cell, tooltips: TooltipMode) -> HeatmapResult<()> {
    let mut attrs = vec![
        ("class", "cell".to_string()),
        // Zero-based month index
        ("data-month", (cell.month - 1).to_string()),
        ("data-year", cell.year.to_string()),
        ("data-temp", cell.temperature.to_string()),
        ("x", fmt_num(cell.x)),
        ("y", fmt_num(cell.y)),
        ("width", fmt_num(cell.width)),
        ("height", fmt_num(cell.height)),
        ("fill", cell.color.to_hex()),
    ];

    match tooltips {
        TooltipMode::DataAttribute => {
            attrs.push(("data-tooltip", cell.tooltip.to_html()));
            svg.empty("rect", &attrs)
        }
        TooltipMode::Title => {
            svg.start("rect", &attrs)?;
            svg.text("title", &[], &cell.tooltip.to_text())?;
            svg.end("rect")
        }
        TooltipMode::None => svg.empty("rect", &attrs),
    }
}

/// Page title line.
pub fn title() -> &'static str {
    "Monthly Global Land-Surface Temperature"
}

/// Page description line, e.g. `1753-2015: base temperature 8.66℃`.
pub fn description(dataset: &Dataset) -> String {
    let (first, last) = dataset.year_span();
    format!(
        "{}-{}: base temperature {}℃",
        first,
        last,
        dataset.base_temperature()
    )
}
