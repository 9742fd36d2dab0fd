// File: crates/prism-core/src/axis.rs
// Summary: Axis model with caption, range, and tick label formatting.

use crate::grid::{format_number, linspace};
use crate::scale::time_label;

/// How tick positions are rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    Numeric,
    /// Positions are epoch milliseconds.
    Time,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
    pub format: TickFormat,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Numeric }
    }

    pub fn time(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max, format: TickFormat::Time }
    }

    pub fn default_x() -> Self {
        Self::time("x label", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("y label", 0.0, 1.0)
    }

    /// Fit the axis range to a data extent, keeping the previous range when
    /// the extent is empty.
    pub fn fit(&mut self, extent: Option<(f64, f64)>) {
        if let Some((min, max)) = extent {
            self.min = min;
            self.max = max;
        }
    }

    /// `count` evenly spaced tick positions with their labels.
    pub fn tick_labels(&self, count: usize) -> Vec<(f64, String)> {
        let span = (self.max - self.min).abs();
        linspace(self.min, self.max, count)
            .into_iter()
            .map(|v| {
                let text = match self.format {
                    TickFormat::Numeric => format_number(v),
                    TickFormat::Time => time_label(v, span),
                };
                (v, text)
            })
            .collect()
    }
}
