//! Synthetic dataset generators.
//!
//! These create predictable, verifiable datasets for scale and layout tests.

use heatmap_common::{Dataset, MonthlyVariance};

use crate::fixtures::BASE_TEMPERATURE;

/// Creates every month of `years` consecutive years starting at `first_year`.
///
/// The variance is a deterministic sawtooth so that absolute temperatures
/// sweep across all colour buckets of the standard scale.
///
/// # Example
///
/// ```
/// use test_utils::create_full_dataset;
///
/// let dataset = create_full_dataset(1753, 3);
/// assert_eq!(dataset.len(), 36);
/// assert_eq!(dataset.years(), vec![1753, 1754, 1755]);
/// ```
pub fn create_full_dataset(first_year: i32, years: usize) -> Dataset {
    let records = (0..years)
        .flat_map(|y| {
            (1..=12u32).map(move |month| {
                let i = y * 12 + month as usize;
                let variance = (i % 17) as f64 * 0.6 - 6.5;
                MonthlyVariance::new(first_year + y as i32, month, variance)
            })
        })
        .collect();

    Dataset::new(BASE_TEMPERATURE, records).expect("generated dataset must be valid")
}

/// Creates one January record per listed year with the given variance.
pub fn create_sparse_dataset(years: &[i32], variance: f64) -> Dataset {
    let records = years
        .iter()
        .map(|&year| MonthlyVariance::new(year, 1, variance))
        .collect();

    Dataset::new(BASE_TEMPERATURE, records).expect("generated dataset must be valid")
}

/// Writes `contents` to a named temporary file and returns its handle.
pub fn write_temp_json(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_dataset_covers_all_months() {
        let dataset = create_full_dataset(1900, 2);
        assert_eq!(dataset.len(), 24);
        assert!(dataset.records().iter().all(|r| (1..=12).contains(&r.month)));
    }

    #[test]
    fn test_full_dataset_spans_color_buckets() {
        let dataset = create_full_dataset(1900, 5);
        let (min, max) = dataset.temperature_extent();
        assert!(min < 2.8);
        assert!(max > 11.0);
    }

    #[test]
    fn test_sparse_dataset_keeps_gaps() {
        let dataset = create_sparse_dataset(&[1800, 1850, 1900], 0.0);
        assert_eq!(dataset.years(), vec![1800, 1850, 1900]);
    }
}
