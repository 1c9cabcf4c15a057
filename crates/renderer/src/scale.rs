//! Scales mapping data values to pixel offsets and colours.

use heatmap_common::{Color, HeatmapResult, ThresholdStyle};

/// Maps a discrete ordered domain onto equal-width pixel bands.
///
/// Bands have no padding: band `i` starts at `range.0 + i * step`.
#[derive(Debug, Clone)]
pub struct BandScale<T> {
    domain: Vec<T>,
    start: f64,
    step: f64,
}

impl<T: Copy + PartialEq> BandScale<T> {
    pub fn new(domain: Vec<T>, range: (f64, f64)) -> Self {
        let step = if domain.is_empty() {
            0.0
        } else {
            (range.1 - range.0) / domain.len() as f64
        };

        Self {
            domain,
            start: range.0,
            step,
        }
    }

    /// Start offset of the band for `value`, or `None` if it is not in the domain.
    pub fn position(&self, value: T) -> Option<f64> {
        self.index_of(value)
            .map(|i| self.start + i as f64 * self.step)
    }

    /// Centre offset of the band for `value`.
    pub fn center(&self, value: T) -> Option<f64> {
        self.position(value).map(|p| p + self.step / 2.0)
    }

    pub fn bandwidth(&self) -> f64 {
        self.step
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    fn index_of(&self, value: T) -> Option<usize> {
        self.domain.iter().position(|v| *v == value)
    }
}

/// Continuous linear mapping from a domain interval onto a range interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Values outside the domain extrapolate. A degenerate domain maps
    /// everything to the range start.
    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Whether `value` lies inside the domain, bounds included.
    pub fn contains(&self, value: f64) -> bool {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        value >= lo && value <= hi
    }
}

/// Maps a continuous value to one of a fixed set of colours via ascending cut points.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale {
    thresholds: Vec<f64>,
    colors: Vec<Color>,
}

impl ThresholdScale {
    pub fn new(style: &ThresholdStyle) -> HeatmapResult<Self> {
        style.validate()?;
        Ok(Self {
            thresholds: style.thresholds.clone(),
            colors: style.colors.clone(),
        })
    }

    /// The standard nine-bucket temperature scale.
    pub fn temperature() -> Self {
        let style = ThresholdStyle::temperature();
        Self {
            thresholds: style.thresholds,
            colors: style.colors,
        }
    }

    /// Index of the bucket containing `value`.
    ///
    /// Counts the cut points `<= value`; values above the last cut share the
    /// last colour when there is no dedicated overflow colour. NaN falls into
    /// the lowest bucket.
    pub fn bucket(&self, value: f64) -> usize {
        let index = self.thresholds.partition_point(|t| *t <= value);
        index.min(self.colors.len() - 1)
    }

    pub fn color(&self, value: f64) -> Color {
        self.colors[self.bucket(value)]
    }

    /// Value interval covered by bucket `index`. `None` marks an unbounded edge.
    pub fn invert_extent(&self, index: usize) -> (Option<f64>, Option<f64>) {
        let lower = index
            .checked_sub(1)
            .and_then(|i| self.thresholds.get(i).copied());
        let upper = if index + 1 >= self.colors.len() {
            None
        } else {
            self.thresholds.get(index).copied()
        };
        (lower, upper)
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}
