// File: crates/prism-core/src/hover.rs
// Summary: Pointer hover resolution: nearest data point lookup and tooltip state.

use crate::grid::format_number;
use crate::scale::Scale;
use crate::series::{DataPoint, Series};

/// Whether the tooltip should currently be shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Everything a tooltip view needs for one frame: the resolved data point,
/// its projection into surface pixels, and the display text. Rebuilt on
/// every pointer move and discarded on pointer leave.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipPayload {
    pub anchor: DataPoint,
    pub screen_x: f64,
    pub screen_y: f64,
    pub text: String,
}

/// Maps pointer positions to the nearest data point of a series and tracks
/// tooltip visibility as an explicit two-state machine (Hidden/Visible)
/// driven by discrete enter/move/leave events.
///
/// The resolver owns no series and performs no drawing; the host maps raw
/// pixels into domain units (via the chart's x scale) before calling in,
/// and applies the returned payload to whatever tooltip view it owns.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverResolver {
    visibility: Visibility,
}

impl HoverResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// The pointer entered the plot. Idempotent; no computation.
    pub fn pointer_enter(&mut self) {
        self.visibility = Visibility::Visible;
    }

    /// The pointer left the plot. Returns `None` as the hide signal so the
    /// host can apply enter/move/leave results uniformly.
    pub fn pointer_leave(&mut self) -> Option<TooltipPayload> {
        self.visibility = Visibility::Hidden;
        None
    }

    /// Resolve the series point nearest to `position` (already in domain
    /// units) and build its tooltip payload. Empty series resolve to `None`.
    ///
    /// Resolution does not consult or change visibility: a move while
    /// hidden still resolves, exactly as the source chart kept updating its
    /// focus marker independently of the opacity toggles.
    ///
    /// O(log n); the series is never mutated.
    pub fn pointer_move(
        &self,
        series: &Series,
        position: f64,
        x_scale: &dyn Scale,
        y_scale: &dyn Scale,
    ) -> Option<TooltipPayload> {
        let points = series.points();
        let index = nearest_index(points, position)?;
        let anchor = points[index];
        Some(TooltipPayload {
            anchor,
            screen_x: x_scale.to_px(anchor.position),
            screen_y: y_scale.to_px(anchor.value),
            text: format_number(anchor.value),
        })
    }
}

/// Index of the point nearest to `position` in a series ordered by
/// non-decreasing position; `None` only for an empty slice.
///
/// Lower-bound binary search (first index whose position is not less than
/// the target), then a boundary/tie policy: before the first point or past
/// the last, the run is clamped to that end; between two points the closer
/// one wins, and an exact distance tie resolves to the later point. The
/// right bias is a chosen convention, not the only defensible one.
///
/// Behavior on positions that are not non-decreasing is unspecified.
pub fn nearest_index(points: &[DataPoint], position: f64) -> Option<usize> {
    if points.is_empty() {
        return None;
    }
    let i = points.partition_point(|p| p.position < position);
    if i == 0 {
        return Some(0);
    }
    if i == points.len() {
        return Some(points.len() - 1);
    }
    let before = (position - points[i - 1].position).abs();
    let after = (points[i].position - position).abs();
    if before < after { Some(i - 1) } else { Some(i) }
}
