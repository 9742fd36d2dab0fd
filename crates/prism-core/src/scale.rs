// File: crates/prism-core/src/scale.rs
// Summary: Linear and time domain-to-pixel scale transforms.

use chrono::{TimeZone, Utc};

use crate::grid::format_number;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Domain-to-pixel mapping shared by axis rendering and pointer inversion.
pub trait Scale {
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;
    fn domain(&self) -> (f64, f64);
    fn range(&self) -> (f64, f64);
}

/// Affine map from a numeric domain onto a pixel range. The range may be
/// inverted (bottom > top) for y axes.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    /// Build a scale; a degenerate (zero-span) domain is widened by one unit
    /// so the mapping stays invertible.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let (d0, mut d1) = domain;
        if (d1 - d0).abs() < 1e-12 {
            d1 = d0 + 1.0;
        }
        Self { d0, d1, r0: range.0, r1: range.1 }
    }

    /// Build a scale from a data extent, defaulting to the unit domain when
    /// the extent is empty.
    pub fn fit(extent: Option<(f64, f64)>, range: (f64, f64)) -> Self {
        Self::new(extent.unwrap_or((0.0, 1.0)), range)
    }
}

impl Scale for LinearScale {
    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        self.r0 + (v - self.d0) / (self.d1 - self.d0) * (self.r1 - self.r0)
    }

    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        self.d0 + (px - self.r0) / (self.r1 - self.r0) * (self.d1 - self.d0)
    }

    fn domain(&self) -> (f64, f64) {
        (self.d0, self.d1)
    }

    fn range(&self) -> (f64, f64) {
        (self.r0, self.r1)
    }
}

/// Linear scale over epoch milliseconds, plus calendar-aware tick labels.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    inner: LinearScale,
}

impl TimeScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { inner: LinearScale::new(domain, range) }
    }

    pub fn fit(extent: Option<(f64, f64)>, range: (f64, f64)) -> Self {
        Self { inner: LinearScale::fit(extent, range) }
    }

    /// Format one tick position. The granularity follows the domain span, so
    /// a multi-year axis labels years while an intraday axis labels times.
    pub fn tick_label(&self, ms: f64) -> String {
        let (d0, d1) = self.inner.domain();
        time_label(ms, (d1 - d0).abs())
    }
}

impl Scale for TimeScale {
    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        self.inner.to_px(v)
    }

    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        self.inner.from_px(px)
    }

    fn domain(&self) -> (f64, f64) {
        self.inner.domain()
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range()
    }
}

/// Span-aware timestamp label. Falls back to the numeric form for
/// timestamps chrono cannot represent.
pub(crate) fn time_label(ms: f64, span_ms: f64) -> String {
    let fmt = if span_ms >= 730.0 * MILLIS_PER_DAY {
        "%Y"
    } else if span_ms >= 90.0 * MILLIS_PER_DAY {
        "%b %Y"
    } else if span_ms >= 3.0 * MILLIS_PER_DAY {
        "%b %d"
    } else if span_ms >= 3.0 * MILLIS_PER_HOUR {
        "%H:%M"
    } else {
        "%H:%M:%S"
    };
    if !ms.is_finite() {
        return format_number(ms);
    }
    match Utc.timestamp_millis_opt(ms.round() as i64).single() {
        Some(dt) => dt.format(fmt).to_string(),
        None => format_number(ms),
    }
}
