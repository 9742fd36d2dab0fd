// File: crates/prism-core/src/arc.rs
// Summary: Pie layout (value-proportional angle spans) and annular arc geometry.

use std::cmp::Ordering;
use std::f64::consts::{PI, TAU};

use crate::geometry::{point_at, polar};

/// One slice's angular extent. Angles start at 12 o'clock and grow
/// clockwise; spans tile `[0, 2π)` half-open, so a boundary angle belongs
/// to the later slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcSpan {
    /// Index of the source slice in its original insertion order.
    pub index: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl ArcSpan {
    pub fn sweep(&self) -> f64 {
        self.end_angle - self.start_angle
    }

    pub fn mid_angle(&self) -> f64 {
        (self.start_angle + self.end_angle) * 0.5
    }
}

/// Assign each value an angle span proportional to its share of the total.
///
/// With `sort_by_value` the spans are laid out largest-first (the pie
/// chart's ordering); otherwise insertion order is kept (the donut's).
/// Either way every span remembers its source index. Non-finite or
/// negative values and a non-positive total yield an empty layout rather
/// than NaN angles.
pub fn pie_layout(values: &[f64], sort_by_value: bool) -> Vec<ArcSpan> {
    let total: f64 = values.iter().filter(|v| v.is_finite() && **v >= 0.0).sum();
    if !(total > 0.0) {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..values.len())
        .filter(|&i| values[i].is_finite() && values[i] >= 0.0)
        .collect();
    if sort_by_value {
        order.sort_by(|&a, &b| {
            values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal)
        });
    }

    let mut spans = Vec::with_capacity(order.len());
    let mut angle = 0.0;
    for &index in &order {
        let value = values[index];
        let sweep = value / total * TAU;
        spans.push(ArcSpan {
            index,
            value,
            start_angle: angle,
            end_angle: angle + sweep,
        });
        angle += sweep;
    }
    // Rounding drift accumulates over the walk; pin the final edge to 2π.
    if let Some(last) = spans.last_mut() {
        last.end_angle = TAU;
    }
    spans
}

/// SVG path data for a pie sector (`inner_r == 0`) or donut sector.
/// A sweep of 2π is emitted as two half arcs since a single SVG arc
/// command cannot describe a full circle.
pub fn annular_sector_path(
    cx: f64,
    cy: f64,
    inner_r: f64,
    outer_r: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let sweep = end_angle - start_angle;
    if sweep >= TAU - 1e-9 {
        return full_ring_path(cx, cy, inner_r, outer_r, start_angle);
    }

    let large = if sweep > PI { 1 } else { 0 };
    let (ox0, oy0) = point_at(cx, cy, outer_r, start_angle);
    let (ox1, oy1) = point_at(cx, cy, outer_r, end_angle);

    let mut d = format!(
        "M {ox0:.2} {oy0:.2} A {outer_r:.2} {outer_r:.2} 0 {large} 1 {ox1:.2} {oy1:.2}"
    );
    if inner_r > 0.0 {
        let (ix0, iy0) = point_at(cx, cy, inner_r, start_angle);
        let (ix1, iy1) = point_at(cx, cy, inner_r, end_angle);
        d.push_str(&format!(
            " L {ix1:.2} {iy1:.2} A {inner_r:.2} {inner_r:.2} 0 {large} 0 {ix0:.2} {iy0:.2} Z"
        ));
    } else {
        d.push_str(&format!(" L {cx:.2} {cy:.2} Z"));
    }
    d
}

fn full_ring_path(cx: f64, cy: f64, inner_r: f64, outer_r: f64, start_angle: f64) -> String {
    let ring = |r: f64, sweep_flag: u8| -> String {
        let (x0, y0) = point_at(cx, cy, r, start_angle);
        let (x1, y1) = point_at(cx, cy, r, start_angle + PI);
        format!(
            "M {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 1 {sweep_flag} {x1:.2} {y1:.2} \
             A {r:.2} {r:.2} 0 1 {sweep_flag} {x0:.2} {y0:.2} Z"
        )
    };
    if inner_r > 0.0 {
        // Opposite winding cuts the hole under the default nonzero fill rule.
        format!("{} {}", ring(outer_r, 1), ring(inner_r, 0))
    } else {
        ring(outer_r, 1)
    }
}

/// Label anchor at the span's mid-angle, halfway between the two radii.
pub fn centroid(
    cx: f64,
    cy: f64,
    inner_r: f64,
    outer_r: f64,
    span: &ArcSpan,
) -> (f64, f64) {
    point_at(cx, cy, (inner_r + outer_r) * 0.5, span.mid_angle())
}

/// Radial/angular hit test: the span whose sector contains the point, if the
/// point sits inside the annulus at all.
pub fn slice_at<'a>(
    spans: &'a [ArcSpan],
    cx: f64,
    cy: f64,
    inner_r: f64,
    outer_r: f64,
    x: f64,
    y: f64,
) -> Option<&'a ArcSpan> {
    let (radius, angle) = polar(cx, cy, x, y);
    if radius < inner_r || radius > outer_r {
        return None;
    }
    // polar() never returns 2π and the last span's edge is pinned there, so
    // the half-open comparison covers every reachable angle.
    spans
        .iter()
        .find(|s| angle >= s.start_angle && angle < s.end_angle)
}
