// File: crates/prism-core/src/series.rs
// Summary: Data model for line series and pie/donut category slices.

use thiserror::Error;

/// Errors raised by the validating constructors. The rendering and hover
/// paths never produce these; they exist for callers who want the data
/// contract checked at the boundary instead of trusting their source.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataError {
    #[error("series positions must be non-decreasing (violated at index {index})")]
    UnsortedPositions { index: usize },
    #[error("slice values must be finite and non-negative (violated at index {index})")]
    BadSliceValue { index: usize },
}

/// One observation: a position on the ordered x domain (numeric, or epoch
/// milliseconds for time axes) and a numeric value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DataPoint {
    pub position: f64,
    pub value: f64,
}

impl DataPoint {
    pub const fn new(position: f64, value: f64) -> Self {
        Self { position, value }
    }
}

/// An ordered run of data points for one chart trace.
///
/// Positions are assumed non-decreasing; insertion order is position order.
/// The hover resolver relies on this but does not check it; pass data
/// through [`Series::try_new`] when the source is untrusted. A series is
/// supplied once per chart and never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Series {
    points: Vec<DataPoint>,
}

impl Series {
    /// Wrap already-ordered points without validating.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Wrap points, rejecting any position that decreases.
    pub fn try_new(points: Vec<DataPoint>) -> Result<Self, DataError> {
        for (index, pair) in points.windows(2).enumerate() {
            if pair[1].position < pair[0].position {
                return Err(DataError::UnsortedPositions { index: index + 1 });
            }
        }
        Ok(Self { points })
    }

    /// Convenience constructor from `(position, value)` pairs.
    pub fn from_pairs(pairs: Vec<(f64, f64)>) -> Self {
        Self::new(pairs.into_iter().map(|(x, y)| DataPoint::new(x, y)).collect())
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn position_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.position))
    }

    pub fn value_extent(&self) -> Option<(f64, f64)> {
        extent(self.points.iter().map(|p| p.value))
    }
}

/// One category of a pie or donut chart.
#[derive(Clone, Debug, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

impl Slice {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Check the pie/donut data contract: every value finite and non-negative.
pub fn validate_slices(slices: &[Slice]) -> Result<(), DataError> {
    for (index, slice) in slices.iter().enumerate() {
        if !slice.value.is_finite() || slice.value < 0.0 {
            return Err(DataError::BadSliceValue { index });
        }
    }
    Ok(())
}

/// Smallest and largest of the finite values, or None when there are none.
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        if !v.is_finite() {
            continue;
        }
        min = min.min(v);
        max = max.max(v);
        any = true;
    }
    if any { Some((min, max)) } else { None }
}
