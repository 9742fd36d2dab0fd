// File: crates/prism-core/src/svg.rs
// Summary: Minimal SVG document writer with escaped attributes.

use crate::color::Color;

/// Text element styling shared by captions, tick labels, and tooltips.
#[derive(Clone, Copy, Debug)]
pub struct TextStyle<'a> {
    pub fill: Color,
    pub font_family: &'a str,
    /// Any CSS length ("0.8em", "15px").
    pub font_size: &'a str,
    /// "start", "middle", or "end".
    pub anchor: &'a str,
}

/// Accumulates elements and serializes a standalone `<svg>` document.
/// Callers pass pre-built path data; everything else is escaped here.
#[derive(Debug)]
pub struct SvgDoc {
    width: f64,
    height: f64,
    body: String,
}

impl SvgDoc {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, body: String::new() }
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: Color, width: f64) {
        self.body.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{width:.2}\"/>",
            stroke.to_hex()
        ));
    }

    /// Grid-style line: reduced opacity and a dash pattern.
    pub fn dashed_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Color,
        width: f64,
        dash: &str,
        opacity: f64,
    ) {
        self.body.push_str(&format!(
            "<line x1=\"{x1:.2}\" y1=\"{y1:.2}\" x2=\"{x2:.2}\" y2=\"{y2:.2}\" stroke=\"{}\" stroke-width=\"{width:.2}\" stroke-dasharray=\"{}\" opacity=\"{opacity:.2}\"/>",
            stroke.to_hex(),
            escape(dash)
        ));
    }

    pub fn path(
        &mut self,
        d: &str,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    ) {
        let fill = fill.map_or_else(|| "none".to_string(), |c| c.to_hex());
        let stroke = stroke.map_or_else(|| "none".to_string(), |c| c.to_hex());
        self.body.push_str(&format!(
            "<path d=\"{}\" fill=\"{fill}\" stroke=\"{stroke}\" stroke-width=\"{stroke_width:.2}\"/>",
            escape(d)
        ));
    }

    pub fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: Color) {
        self.body.push_str(&format!(
            "<circle cx=\"{cx:.2}\" cy=\"{cy:.2}\" r=\"{r:.2}\" fill=\"{}\"/>",
            fill.to_hex()
        ));
    }

    pub fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: Color, rx: f64) {
        self.body.push_str(&format!(
            "<rect x=\"{x:.2}\" y=\"{y:.2}\" width=\"{w:.2}\" height=\"{h:.2}\" rx=\"{rx:.2}\" fill=\"{}\"/>",
            fill.to_hex()
        ));
    }

    /// Text at `(x, y)`. With a `transform` the caller usually positions via
    /// the transform itself and passes zero coordinates.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        style: &TextStyle<'_>,
        transform: Option<&str>,
    ) {
        let transform = transform
            .map(|t| format!(" transform=\"{}\"", escape(t)))
            .unwrap_or_default();
        self.body.push_str(&format!(
            "<text x=\"{x:.2}\" y=\"{y:.2}\" text-anchor=\"{}\" fill=\"{}\" font-family=\"{}\" font-size=\"{}\"{transform}>{}</text>",
            escape(style.anchor),
            style.fill.to_hex(),
            escape(style.font_family),
            escape(style.font_size),
            escape(content)
        ));
    }

    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{:.0}\" height=\"{:.0}\" viewBox=\"0 0 {:.0} {:.0}\">{}</svg>",
            self.width, self.height, self.width, self.height, self.body
        )
    }
}

/// Escape text for use in SVG content and attribute values.
pub(crate) fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
