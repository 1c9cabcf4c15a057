//! Monthly temperature variance dataset.
//!
//! The source document has the shape
//! `{"baseTemperature": f64, "monthlyVariance": [{"year", "month", "variance"}]}`.
//! Absolute temperatures are never stored; they are derived as
//! `base_temperature + variance` when needed.

use std::collections::BTreeSet;

use chrono::Month;
use serde::Deserialize;

use crate::error::{HeatmapError, HeatmapResult};

/// One month of one year, expressed as a deviation from the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Deviation from the baseline in °C.
    pub variance: f64,
}

impl MonthlyVariance {
    pub fn new(year: i32, month: u32, variance: f64) -> Self {
        Self {
            year,
            month,
            variance,
        }
    }

    /// Full English month name, or `None` outside 1-12.
    pub fn month_name(&self) -> Option<&'static str> {
        month_name(self.month)
    }
}

/// Full English name for a 1-based calendar month.
pub fn month_name(month: u32) -> Option<&'static str> {
    let month = u8::try_from(month).ok()?;
    Month::try_from(month).ok().map(|m| m.name())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDataset {
    base_temperature: f64,
    monthly_variance: Vec<MonthlyVariance>,
}

/// Validated, immutable dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    base_temperature: f64,
    records: Vec<MonthlyVariance>,
}

impl Dataset {
    /// Build a dataset, rejecting empty input, months outside 1-12 and
    /// non-finite temperatures.
    pub fn new(base_temperature: f64, records: Vec<MonthlyVariance>) -> HeatmapResult<Self> {
        if records.is_empty() {
            return Err(HeatmapError::EmptyDataset);
        }
        if !base_temperature.is_finite() {
            return Err(HeatmapError::NonFinite {
                field: "baseTemperature".to_string(),
                value: base_temperature,
            });
        }
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !(base_temperature + r.variance).is_finite())
        {
            return Err(HeatmapError::NonFinite {
                field: format!("monthlyVariance[{}].variance", index),
                value: record.variance,
            });
        }
        if let Some((index, record)) = records
            .iter()
            .enumerate()
            .find(|(_, r)| !(1..=12).contains(&r.month))
        {
            return Err(HeatmapError::InvalidMonth {
                index,
                month: record.month,
            });
        }

        Ok(Self {
            base_temperature,
            records,
        })
    }

    /// Parse the dataset from its JSON document.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        Self::new(raw.base_temperature, raw.monthly_variance)
    }

    /// Parse the dataset from raw response bytes.
    pub fn from_slice(bytes: &[u8]) -> HeatmapResult<Self> {
        let raw: RawDataset = serde_json::from_slice(bytes)?;
        Self::new(raw.base_temperature, raw.monthly_variance)
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn records(&self) -> &[MonthlyVariance] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Absolute temperature of a record.
    pub fn temperature(&self, record: &MonthlyVariance) -> f64 {
        self.base_temperature + record.variance
    }

    /// Distinct years in ascending order.
    pub fn years(&self) -> Vec<i32> {
        self.records
            .iter()
            .map(|r| r.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// First and last year present.
    pub fn year_span(&self) -> (i32, i32) {
        self.records
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), r| {
                (min.min(r.year), max.max(r.year))
            })
    }

    /// Minimum and maximum absolute temperature over all records.
    pub fn temperature_extent(&self) -> (f64, f64) {
        self.records.iter().map(|r| self.temperature(r)).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), t| (min.min(t), max.max(t)),
        )
    }
}
