// File: crates/prism-core/src/chart.rs
// Summary: Line, pie, and donut chart configurations and SVG rendering pipeline.

use anyhow::Result;

use crate::arc::{annular_sector_path, centroid, pie_layout, slice_at, ArcSpan};
use crate::axis::Axis;
use crate::color::{ordinal, ramp, Color};
use crate::geometry::Rect;
use crate::grid::format_number;
use crate::hover::{HoverResolver, TooltipPayload, Visibility};
use crate::scale::{LinearScale, Scale};
use crate::series::{validate_slices, DataError, DataPoint, Series, Slice};
use crate::svg::{SvgDoc, TextStyle};
use crate::theme::Theme;
use crate::types::{
    Padding, DONUT_INNER_RADIUS, DONUT_PADDING, DONUT_SIZE, LINE_HEIGHT, LINE_WIDTH,
    PIE_LABEL_DISTANCE, PIE_PAD_TO_EDGE, PIE_SIZE,
};

const X_TICKS: usize = 10;
const Y_TICKS: usize = 6;
const TICK_LEN: f64 = 6.0;
const FOCUS_RADIUS: f64 = 5.0;
// Estimated glyph advance for the 14px tooltip text; SVG has no layout
// engine to measure against, so the background box is sized from this.
const TOOLTIP_CHAR_WIDTH: f64 = 8.4;

// ---- line chart -------------------------------------------------------------

/// A single-series line chart with time or numeric x axis.
///
/// The struct owns its series, axes, and hover visibility; hosts drive it
/// with discrete pointer events instead of reaching into shared drawing
/// state.
#[derive(Clone, Debug)]
pub struct LineChart {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub font_family: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Fit the y range to the data on every render; turn off to keep the
    /// configured `y_axis` range.
    pub y_axis_auto: bool,
    /// Axis lines, tick marks, and tick text.
    pub axes_color: Color,
    pub axes_font_size: String,
    /// Axis caption text color and size.
    pub axes_label_color: Color,
    pub axes_label_size: String,
    pub show_axis_labels: bool,
    pub show_title: bool,
    pub title: String,
    pub title_color: Color,
    pub show_tooltip: bool,
    pub line_color: Color,
    pub focus_color: Color,
    pub tooltip_text_color: Color,
    pub tooltip_fill: Color,
    series: Series,
    hover: HoverResolver,
}

impl LineChart {
    pub fn new(series: Series) -> Self {
        let theme = Theme::classic();
        Self {
            width: LINE_WIDTH,
            height: LINE_HEIGHT,
            padding: Padding::default(),
            font_family: "Verdana".to_string(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            y_axis_auto: true,
            axes_color: theme.axis_line,
            axes_font_size: "0.5em".to_string(),
            axes_label_color: theme.axis_label,
            axes_label_size: "0.8em".to_string(),
            show_axis_labels: false,
            show_title: false,
            title: "TITLE".to_string(),
            title_color: theme.title,
            show_tooltip: true,
            line_color: theme.line_stroke,
            focus_color: theme.focus,
            tooltip_text_color: theme.tooltip_text,
            tooltip_fill: theme.tooltip_fill,
            series,
            hover: HoverResolver::new(),
        }
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        self.axes_color = theme.axis_line;
        self.axes_label_color = theme.axis_label;
        self.title_color = theme.title;
        self.line_color = theme.line_stroke;
        self.focus_color = theme.focus;
        self.tooltip_text_color = theme.tooltip_text;
        self.tooltip_fill = theme.tooltip_fill;
    }

    pub fn render_svg(&self) -> String {
        self.render(None)
    }

    /// Render with the hover focus marker and tooltip stamped in, e.g. for
    /// snapshotting the exact frame a host would show.
    pub fn render_svg_with_focus(&self, payload: &TooltipPayload) -> String {
        self.render(Some(payload))
    }

    pub fn render_to_svg_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_svg(path, &self.render_svg())
    }

    pub fn pointer_entered(&mut self) {
        self.hover.pointer_enter();
    }

    /// Map a surface x coordinate back into the domain and resolve the
    /// nearest point. Resolution is along x only; the y coordinate is used
    /// just to confine hover to the plot area.
    pub fn pointer_moved(&self, screen_x: f64, screen_y: f64) -> Option<TooltipPayload> {
        if !self.show_tooltip || self.series.is_empty() {
            return None;
        }
        if !self.plot().contains(screen_x, screen_y) {
            return None;
        }
        let (xs, ys) = self.scales();
        let position = xs.from_px(screen_x);
        self.hover.pointer_move(&self.series, position, &xs, &ys)
    }

    pub fn pointer_left(&mut self) -> Option<TooltipPayload> {
        self.hover.pointer_leave()
    }

    pub fn hover_visibility(&self) -> Visibility {
        self.hover.visibility()
    }

    fn plot(&self) -> Rect {
        Rect::plot_area(self.width, self.height, &self.padding)
    }

    /// Axes fitted to the current data extent.
    fn fitted_axes(&self) -> (Axis, Axis) {
        let mut x_axis = self.x_axis.clone();
        let mut y_axis = self.y_axis.clone();
        x_axis.fit(self.series.position_extent());
        if self.y_axis_auto {
            y_axis.fit(self.series.value_extent());
        }
        (x_axis, y_axis)
    }

    fn scales(&self) -> (LinearScale, LinearScale) {
        let plot = self.plot();
        let (x_axis, y_axis) = self.fitted_axes();
        (
            LinearScale::new((x_axis.min, x_axis.max), (plot.left, plot.right)),
            LinearScale::new((y_axis.min, y_axis.max), (plot.bottom, plot.top)),
        )
    }

    fn render(&self, focus: Option<&TooltipPayload>) -> String {
        let plot = self.plot();
        let (x_axis, y_axis) = self.fitted_axes();
        let (xs, ys) = self.scales();
        let mut doc = SvgDoc::new(self.width, self.height);

        draw_grid(&mut doc, &plot, &y_axis, &ys, self.axes_color);
        self.draw_axes(&mut doc, &plot, &x_axis, &y_axis, &xs, &ys);
        self.draw_series(&mut doc, &xs, &ys);
        if self.show_axis_labels {
            self.draw_axis_labels(&mut doc, &x_axis, &y_axis);
        }
        if self.show_title {
            draw_title(
                &mut doc,
                self.width,
                self.padding.top,
                &self.title,
                self.title_color,
                &self.font_family,
                "1em",
            );
        }
        if let Some(payload) = focus {
            self.draw_focus(&mut doc, payload);
        }
        doc.finish()
    }

    fn draw_axes(
        &self,
        doc: &mut SvgDoc,
        plot: &Rect,
        x_axis: &Axis,
        y_axis: &Axis,
        xs: &dyn Scale,
        ys: &dyn Scale,
    ) {
        doc.line(plot.left, plot.bottom, plot.right, plot.bottom, self.axes_color, 1.0);
        doc.line(plot.left, plot.top, plot.left, plot.bottom, self.axes_color, 1.0);

        let tick_style = TextStyle {
            fill: self.axes_color,
            font_family: &self.font_family,
            font_size: &self.axes_font_size,
            anchor: "end",
        };
        for (v, label) in x_axis.tick_labels(X_TICKS) {
            let x = xs.to_px(v);
            doc.line(x, plot.bottom, x, plot.bottom + TICK_LEN, self.axes_color, 1.0);
            // Tick text shifts toward the axis and rotates -45, end-anchored.
            let transform = format!(
                "translate({:.2} {:.2}) rotate(-45)",
                x - 10.0,
                plot.bottom + TICK_LEN + 3.0
            );
            doc.text(0.0, 0.0, &label, &tick_style, Some(&transform));
        }
        for (v, label) in y_axis.tick_labels(Y_TICKS) {
            let y = ys.to_px(v);
            doc.line(plot.left - TICK_LEN, y, plot.left, y, self.axes_color, 1.0);
            doc.text(plot.left - TICK_LEN - 2.0, y + 3.0, &label, &tick_style, None);
        }
    }

    fn draw_series(&self, doc: &mut SvgDoc, xs: &dyn Scale, ys: &dyn Scale) {
        let points = self.series.points();
        if points.len() < 2 {
            return;
        }
        let mut d = String::new();
        for (k, p) in points.iter().enumerate() {
            let x = xs.to_px(p.position);
            let y = ys.to_px(p.value);
            if k == 0 {
                d.push_str(&format!("M {x:.2} {y:.2}"));
            } else {
                d.push_str(&format!(" L {x:.2} {y:.2}"));
            }
        }
        doc.path(&d, None, Some(self.line_color), 3.0);
    }

    fn draw_axis_labels(&self, doc: &mut SvgDoc, x_axis: &Axis, y_axis: &Axis) {
        let style = TextStyle {
            fill: self.axes_label_color,
            font_family: &self.font_family,
            font_size: &self.axes_label_size,
            anchor: "start",
        };
        // The y caption sits between the title band and the axis itself.
        doc.text(
            self.padding.left / 2.0,
            self.padding.top - 10.0,
            &y_axis.label,
            &style,
            None,
        );
        let centered = TextStyle { anchor: "middle", ..style };
        doc.text(
            self.width / 2.0,
            self.height - 10.0,
            &x_axis.label,
            &centered,
            None,
        );
    }

    fn draw_focus(&self, doc: &mut SvgDoc, payload: &TooltipPayload) {
        doc.circle(payload.screen_x, payload.screen_y, FOCUS_RADIUS, self.focus_color);
        let tx = payload.screen_x + 50.0;
        let ty = payload.screen_y - 25.0;
        let box_w = payload.text.chars().count() as f64 * TOOLTIP_CHAR_WIDTH + 12.0;
        doc.rect(tx - 6.0, ty - 14.0, box_w, 20.0, self.tooltip_fill, 5.0);
        let style = TextStyle {
            fill: self.tooltip_text_color,
            font_family: &self.font_family,
            font_size: "14px",
            anchor: "start",
        };
        doc.text(tx, ty, &payload.text, &style, None);
    }
}

impl Default for LineChart {
    fn default() -> Self {
        Self::new(Series::default())
    }
}

// ---- pie chart --------------------------------------------------------------

/// Full-disc pie chart. Spans are laid out largest-first and colored along
/// a two-color ramp in ascending value order, so the smallest slice takes
/// the ramp start.
#[derive(Clone, Debug)]
pub struct PieChart {
    /// Surface is square; height equals width.
    pub width: f64,
    pub pad_to_edge: f64,
    pub label_distance: f64,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub font_family: String,
    pub font_size: f64,
    pub label_color: Color,
    pub color_start: Color,
    pub color_end: Color,
    pub show_tooltip: bool,
    slices: Vec<Slice>,
    hover: HoverResolver,
}

impl PieChart {
    pub fn new(slices: Vec<Slice>) -> Self {
        let theme = Theme::classic();
        Self {
            width: PIE_SIZE,
            pad_to_edge: PIE_PAD_TO_EDGE,
            label_distance: PIE_LABEL_DISTANCE,
            stroke_color: Color::BLACK,
            stroke_width: 0.0,
            font_family: "Verdana".to_string(),
            font_size: 30.0,
            label_color: theme.slice_label,
            color_start: theme.ramp_start,
            color_end: theme.ramp_end,
            show_tooltip: true,
            slices,
            hover: HoverResolver::new(),
        }
    }

    /// Like [`PieChart::new`], but rejects non-finite or negative values.
    pub fn try_new(slices: Vec<Slice>) -> Result<Self, DataError> {
        validate_slices(&slices)?;
        Ok(Self::new(slices))
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        self.label_color = theme.slice_label;
        self.color_start = theme.ramp_start;
        self.color_end = theme.ramp_end;
    }

    pub fn render_svg(&self) -> String {
        let radius = self.width / 2.0;
        let (cx, cy) = (radius, radius);
        let outer = radius - self.pad_to_edge;
        let spans = self.spans();
        let fills = self.fills(&spans);
        let mut doc = SvgDoc::new(self.width, self.width);

        draw_sectors(
            &mut doc,
            cx,
            cy,
            0.0,
            outer,
            &spans,
            &fills,
            self.stroke_color,
            self.stroke_width,
        );
        let font_size = format!("{}px", format_number(self.font_size));
        let style = TextStyle {
            fill: self.label_color,
            font_family: &self.font_family,
            font_size: &font_size,
            anchor: "start",
        };
        draw_slice_labels(
            &mut doc,
            cx,
            cy,
            radius - self.label_distance,
            radius,
            &spans,
            &self.slices,
            &style,
        );
        doc.finish()
    }

    pub fn render_to_svg_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_svg(path, &self.render_svg())
    }

    pub fn pointer_entered(&mut self) {
        self.hover.pointer_enter();
    }

    /// Resolve the slice under the pointer. The payload anchors at the
    /// pointer itself (offset by 10px on both axes, as the source tooltip
    /// div was) rather than at a fixed slice point.
    pub fn pointer_moved(&self, screen_x: f64, screen_y: f64) -> Option<TooltipPayload> {
        if !self.show_tooltip {
            return None;
        }
        let radius = self.width / 2.0;
        let outer = radius - self.pad_to_edge;
        let spans = self.spans();
        let span = slice_at(&spans, radius, radius, 0.0, outer, screen_x, screen_y)?;
        Some(slice_payload(span, screen_x + 10.0, screen_y + 10.0))
    }

    pub fn pointer_left(&mut self) -> Option<TooltipPayload> {
        self.hover.pointer_leave()
    }

    pub fn hover_visibility(&self) -> Visibility {
        self.hover.visibility()
    }

    fn spans(&self) -> Vec<ArcSpan> {
        let values: Vec<f64> = self.slices.iter().map(|s| s.value).collect();
        pie_layout(&values, true)
    }

    /// Ramp colors assigned by ascending value rank: the smallest slice
    /// gets `color_start`, the largest approaches `color_end`.
    fn fills(&self, spans: &[ArcSpan]) -> Vec<Color> {
        let n = spans.len();
        let colors = ramp(self.color_start, self.color_end, n);
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by(|&a, &b| {
            spans[a]
                .value
                .partial_cmp(&spans[b].value)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let mut fills = vec![Color::BLACK; n];
        for (rank, &slot) in order.iter().enumerate() {
            fills[slot] = colors[rank];
        }
        fills
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ---- donut chart ------------------------------------------------------------

/// Donut chart: insertion-ordered sectors around a hole, colored from a
/// repeating categorical palette.
#[derive(Clone, Debug)]
pub struct DonutChart {
    pub width: f64,
    pub height: f64,
    pub padding: Padding,
    pub inner_radius: f64,
    pub palette: Vec<Color>,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub font_family: String,
    pub label_size: f64,
    pub label_color: Color,
    pub show_title: bool,
    pub title: String,
    pub title_color: Color,
    pub title_size: String,
    pub show_tooltip: bool,
    slices: Vec<Slice>,
    hover: HoverResolver,
}

impl DonutChart {
    pub fn new(slices: Vec<Slice>) -> Self {
        let theme = Theme::classic();
        Self {
            width: DONUT_SIZE,
            height: DONUT_SIZE,
            padding: Padding::uniform(DONUT_PADDING),
            inner_radius: DONUT_INNER_RADIUS,
            palette: theme.palette.to_vec(),
            stroke_color: theme.slice_stroke,
            stroke_width: 1.0,
            font_family: "Verdana".to_string(),
            label_size: 15.0,
            label_color: theme.slice_label,
            show_title: false,
            title: "TITLE".to_string(),
            title_color: theme.title,
            title_size: "1em".to_string(),
            show_tooltip: true,
            slices,
            hover: HoverResolver::new(),
        }
    }

    /// Like [`DonutChart::new`], but rejects non-finite or negative values.
    pub fn try_new(slices: Vec<Slice>) -> Result<Self, DataError> {
        validate_slices(&slices)?;
        Ok(Self::new(slices))
    }

    pub fn slices(&self) -> &[Slice] {
        &self.slices
    }

    pub fn apply_theme(&mut self, theme: &Theme) {
        self.palette = theme.palette.to_vec();
        self.stroke_color = theme.slice_stroke;
        self.label_color = theme.slice_label;
        self.title_color = theme.title;
    }

    pub fn render_svg(&self) -> String {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let outer = self.outer_radius();
        let spans = self.spans();
        let fills: Vec<Color> = spans
            .iter()
            .map(|s| ordinal(&self.palette, s.index))
            .collect();
        let mut doc = SvgDoc::new(self.width, self.height);

        draw_sectors(
            &mut doc,
            cx,
            cy,
            self.inner_radius,
            outer,
            &spans,
            &fills,
            self.stroke_color,
            self.stroke_width,
        );
        let font_size = format!("{}px", format_number(self.label_size));
        let style = TextStyle {
            fill: self.label_color,
            font_family: &self.font_family,
            font_size: &font_size,
            anchor: "middle",
        };
        draw_slice_labels(
            &mut doc,
            cx,
            cy,
            self.inner_radius,
            outer,
            &spans,
            &self.slices,
            &style,
        );
        if self.show_title {
            draw_title(
                &mut doc,
                self.width,
                self.padding.top,
                &self.title,
                self.title_color,
                &self.font_family,
                &self.title_size,
            );
        }
        doc.finish()
    }

    pub fn render_to_svg_file(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_svg(path, &self.render_svg())
    }

    pub fn pointer_entered(&mut self) {
        self.hover.pointer_enter();
    }

    /// Resolve the sector under the pointer; points inside the hole or
    /// beyond the rim miss.
    pub fn pointer_moved(&self, screen_x: f64, screen_y: f64) -> Option<TooltipPayload> {
        if !self.show_tooltip {
            return None;
        }
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let spans = self.spans();
        let span = slice_at(
            &spans,
            cx,
            cy,
            self.inner_radius,
            self.outer_radius(),
            screen_x,
            screen_y,
        )?;
        Some(slice_payload(span, screen_x + 10.0, screen_y))
    }

    pub fn pointer_left(&mut self) -> Option<TooltipPayload> {
        self.hover.pointer_leave()
    }

    pub fn hover_visibility(&self) -> Visibility {
        self.hover.visibility()
    }

    fn outer_radius(&self) -> f64 {
        let inner_w = self.width - self.padding.hsum();
        let inner_h = self.height - self.padding.vsum();
        inner_w.min(inner_h) / 2.0
    }

    fn spans(&self) -> Vec<ArcSpan> {
        let values: Vec<f64> = self.slices.iter().map(|s| s.value).collect();
        pie_layout(&values, false)
    }
}

impl Default for DonutChart {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

// ---- helpers ----------------------------------------------------------------

fn write_svg(path: impl AsRef<std::path::Path>, svg: &str) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg)?;
    Ok(())
}

fn draw_grid(doc: &mut SvgDoc, plot: &Rect, y_axis: &Axis, ys: &dyn Scale, color: Color) {
    for (v, _) in y_axis.tick_labels(Y_TICKS) {
        let y = ys.to_px(v);
        doc.dashed_line(plot.left, y, plot.right, y, color, 1.0, "1,1", 0.3);
    }
}

fn draw_title(
    doc: &mut SvgDoc,
    width: f64,
    padding_top: f64,
    title: &str,
    color: Color,
    font_family: &str,
    font_size: &str,
) {
    let style = TextStyle {
        fill: color,
        font_family,
        font_size,
        anchor: "middle",
    };
    doc.text(width / 2.0, padding_top / 2.0, title, &style, None);
}

fn draw_sectors(
    doc: &mut SvgDoc,
    cx: f64,
    cy: f64,
    inner_r: f64,
    outer_r: f64,
    spans: &[ArcSpan],
    fills: &[Color],
    stroke: Color,
    stroke_width: f64,
) {
    for (span, fill) in spans.iter().zip(fills) {
        let d = annular_sector_path(cx, cy, inner_r, outer_r, span.start_angle, span.end_angle);
        doc.path(&d, Some(*fill), Some(stroke), stroke_width);
    }
}

fn draw_slice_labels(
    doc: &mut SvgDoc,
    cx: f64,
    cy: f64,
    inner_r: f64,
    outer_r: f64,
    spans: &[ArcSpan],
    slices: &[Slice],
    style: &TextStyle<'_>,
) {
    for span in spans {
        let Some(slice) = slices.get(span.index) else {
            continue;
        };
        let (x, y) = centroid(cx, cy, inner_r, outer_r, span);
        doc.text(x, y, &slice.label, style, None);
    }
}

/// Payload for a resolved pie/donut sector: the anchor records the slice's
/// insertion index as its position and the slice value as its value.
fn slice_payload(span: &ArcSpan, screen_x: f64, screen_y: f64) -> TooltipPayload {
    TooltipPayload {
        anchor: DataPoint::new(span.index as f64, span.value),
        screen_x,
        screen_y,
        text: format_number(span.value),
    }
}
