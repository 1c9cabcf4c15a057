//! Tests for heatmap cell layout, colouring and axes.

use heatmap_common::{ChartLayout, Color, Dataset, MonthlyVariance};
use renderer::{Heatmap, ThresholdScale, TooltipMode};
use test_utils::{assert_approx_eq, create_full_dataset, create_sparse_dataset, sample_dataset};

fn standard(dataset: &Dataset) -> Heatmap<'_> {
    Heatmap::new(dataset, ChartLayout::default(), ThresholdScale::temperature()).unwrap()
}

// ============================================================================
// Cell placement
// ============================================================================

#[test]
fn test_cells_sit_in_their_year_and_month_bands() {
    let dataset = create_full_dataset(1900, 10);
    let heatmap = standard(&dataset);
    let cells = heatmap.cells().unwrap();

    assert_eq!(cells.len(), 120);
    let band_w = 1100.0 / 10.0;
    let band_h = 340.0 / 12.0;
    for cell in &cells {
        assert_approx_eq!(cell.x, (cell.year - 1900) as f64 * band_w, 1e-9);
        assert_approx_eq!(cell.y, (cell.month - 1) as f64 * band_h, 1e-9);
        assert_approx_eq!(cell.width, band_w, 1e-9);
        assert_approx_eq!(cell.height, band_h, 1e-9);
    }
}

#[test]
fn test_january_is_top_row() {
    let dataset = sample_dataset();
    let heatmap = standard(&dataset);
    let cells = heatmap.cells().unwrap();

    let january = cells.iter().find(|c| c.month == 1).unwrap();
    let december = cells.iter().find(|c| c.month == 12).unwrap();
    assert_eq!(january.y, 0.0);
    assert!(december.y > january.y);
}

#[test]
fn test_year_gaps_do_not_leave_empty_bands() {
    let dataset = create_sparse_dataset(&[1800, 1900, 2000], 0.0);
    let heatmap = standard(&dataset);

    assert_eq!(heatmap.x_scale().position(1900), Some(1100.0 / 3.0));
    assert_eq!(heatmap.x_scale().position(1850), None);
}

// ============================================================================
// Colour
// ============================================================================

#[test]
fn test_reference_record_color() {
    let dataset = Dataset::new(8.66, vec![MonthlyVariance::new(1753, 1, -1.3)]).unwrap();
    let heatmap = standard(&dataset);
    let cell = &heatmap.cells().unwrap()[0];

    assert_approx_eq!(cell.temperature, 7.36, 1e-9);
    assert_eq!(cell.color, Color::from_hex("#fee090").unwrap());
}

#[test]
fn test_equal_temperatures_share_color() {
    let dataset = Dataset::new(
        8.0,
        vec![
            MonthlyVariance::new(1900, 1, 1.25),
            MonthlyVariance::new(1950, 7, 1.25),
            MonthlyVariance::new(2000, 12, 1.25),
        ],
    )
    .unwrap();
    let heatmap = standard(&dataset);
    let cells = heatmap.cells().unwrap();

    assert!(cells.iter().all(|c| c.color == cells[0].color));
}

#[test]
fn test_color_depends_only_on_absolute_temperature() {
    // Same absolute temperature through different baselines
    let a = Dataset::new(8.0, vec![MonthlyVariance::new(1900, 1, 1.0)]).unwrap();
    let b = Dataset::new(10.0, vec![MonthlyVariance::new(1900, 1, -1.0)]).unwrap();

    let ca = standard(&a).cells().unwrap()[0].color;
    let cb = standard(&b).cells().unwrap()[0].color;
    assert_eq!(ca, cb);
}

// ============================================================================
// Axes
// ============================================================================

#[test]
fn test_x_axis_shows_decades_in_domain() {
    let dataset = create_full_dataset(1753, 263);
    let heatmap = standard(&dataset);
    let labels = heatmap.x_axis().labels().join(",");

    let expected: Vec<String> = (1760..=2010).step_by(10).map(|y| y.to_string()).collect();
    assert_eq!(labels, expected.join(","));
}

#[test]
fn test_y_axis_months_january_first() {
    let dataset = sample_dataset();
    let heatmap = standard(&dataset);
    let axis = heatmap.y_axis();
    let labels = axis.labels();

    assert_eq!(
        labels,
        vec![
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December"
        ]
    );
}

// ============================================================================
// SVG output
// ============================================================================

#[test]
fn test_svg_cells_carry_inspectable_attributes() {
    let dataset = Dataset::new(8.66, vec![MonthlyVariance::new(1753, 1, -1.3)]).unwrap();
    let svg = standard(&dataset)
        .render_svg(TooltipMode::DataAttribute)
        .unwrap();

    assert!(svg.contains(r#"id="heatmap""#));
    assert!(svg.contains(r#"id="x-axis""#));
    assert!(svg.contains(r#"id="y-axis""#));
    assert!(svg.contains(r#"id="legend""#));
    assert!(svg.contains(r#"class="cell""#));
    assert!(svg.contains(r#"data-month="0""#));
    assert!(svg.contains(r#"data-year="1753""#));
    assert!(svg.contains(&format!(r#"data-temp="{}""#, 8.66 + -1.3)));
    assert!(svg.contains(r##"fill="#fee090""##));
    assert!(svg.contains("Temp: 7.36℃"));
}

#[test]
fn test_svg_has_one_rect_per_record_plus_legend() {
    let dataset = sample_dataset();
    let svg = standard(&dataset).render_svg(TooltipMode::None).unwrap();

    assert_eq!(svg.matches(r#"class="cell""#).count(), dataset.len());
    assert_eq!(svg.matches("<rect").count(), dataset.len() + 9);
    assert!(!svg.contains("data-tooltip"));
}

#[test]
fn test_title_mode_embeds_native_tooltips() {
    let dataset = sample_dataset();
    let svg = standard(&dataset).render_svg(TooltipMode::Title).unwrap();

    assert_eq!(svg.matches("<title>").count(), dataset.len());
    assert!(svg.contains("1753 - January"));
}

#[test]
fn test_invalid_layout_is_rejected() {
    let dataset = sample_dataset();
    let layout = ChartLayout {
        height: 100.0,
        ..ChartLayout::default()
    };
    assert!(Heatmap::new(&dataset, layout, ThresholdScale::temperature()).is_err());
}
