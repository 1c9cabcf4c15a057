//! Common test fixtures for heatmap tests.
//!
//! Values mirror the real global temperature document: baseline 8.66°C,
//! records starting in January 1753.

use heatmap_common::Dataset;

/// Baseline temperature of the reference document.
pub const BASE_TEMPERATURE: f64 = 8.66;

/// A small document in the source format, spanning 1753-1761.
///
/// Includes the reference record `{1753, 1, -1.3}` (7.36°C) and one decade
/// year (1760).
pub const SAMPLE_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [
        {"year": 1753, "month": 1, "variance": -1.3},
        {"year": 1753, "month": 2, "variance": -2.223},
        {"year": 1753, "month": 3, "variance": 0.211},
        {"year": 1754, "month": 1, "variance": -1.366},
        {"year": 1755, "month": 6, "variance": -0.6},
        {"year": 1758, "month": 12, "variance": 1.9},
        {"year": 1760, "month": 7, "variance": -6.976},
        {"year": 1760, "month": 8, "variance": 2.34},
        {"year": 1761, "month": 12, "variance": 5.228}
    ]
}"#;

/// A document whose months are out of range.
pub const INVALID_MONTH_JSON: &str = r#"{
    "baseTemperature": 8.66,
    "monthlyVariance": [{"year": 1753, "month": 0, "variance": 0.0}]
}"#;

/// Structurally broken document.
pub const MALFORMED_JSON: &str = r#"{"baseTemperature": 8.66, "monthlyVariance": [{"year": 17"#;

/// Parsed [`SAMPLE_JSON`].
pub fn sample_dataset() -> Dataset {
    Dataset::from_json(SAMPLE_JSON).expect("sample fixture must parse")
}
