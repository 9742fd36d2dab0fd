// File: crates/prism-core/src/theme.rs
// Summary: Named color presets for chart rendering.

use crate::color::Color;

/// One color per chart role. The `classic` preset carries the palette the
/// library's default configurations are built from.
#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Axis lines, tick marks, and tick text.
    pub axis_line: Color,
    /// Axis caption text ("x label" / "y label").
    pub axis_label: Color,
    /// Chart title text.
    pub title: Color,
    /// Line series stroke.
    pub line_stroke: Color,
    /// Hover focus marker.
    pub focus: Color,
    /// Tooltip text.
    pub tooltip_text: Color,
    /// Tooltip background.
    pub tooltip_fill: Color,
    /// Donut sector outline.
    pub slice_stroke: Color,
    /// Pie/donut slice label text.
    pub slice_label: Color,
    /// Pie gradient ramp endpoints (low value to high value).
    pub ramp_start: Color,
    pub ramp_end: Color,
    /// Donut categorical palette, cycled by insertion order.
    pub palette: [Color; 7],
}

impl Theme {
    pub fn classic() -> Self {
        Self {
            name: "classic",
            axis_line: Color::rgb(0x4d, 0x90, 0x8e),
            axis_label: Color::rgb(0x27, 0x7d, 0xa1),
            title: Color::rgb(0x27, 0x7d, 0xa1),
            line_stroke: Color::rgb(0xbf, 0xe4, 0xa3),
            focus: Color::rgb(0x4d, 0x90, 0x8e),
            tooltip_text: Color::rgb(0x4d, 0x90, 0x8e),
            tooltip_fill: Color::WHITE,
            slice_stroke: Color::rgb(0x27, 0x7d, 0xa1),
            slice_label: Color::BLACK,
            ramp_start: Color::rgb(0xce, 0xfa, 0xd0),
            ramp_end: Color::rgb(0x00, 0x80, 0x00),
            palette: [
                Color::rgb(0xce, 0xd8, 0x9e),
                Color::rgb(0xf9, 0xf9, 0xc5),
                Color::rgb(0x6c, 0xc4, 0xa1),
                Color::rgb(0xae, 0xdb, 0xce),
                Color::rgb(0x76, 0xba, 0x99),
                Color::rgb(0xd9, 0xf8, 0xc4),
                Color::rgb(0x90, 0xc8, 0xac),
            ],
        }
    }

    pub fn midnight() -> Self {
        Self {
            name: "midnight",
            axis_line: Color::rgb(0x8a, 0xa5, 0xb8),
            axis_label: Color::rgb(0xc9, 0xdd, 0xe8),
            title: Color::rgb(0xc9, 0xdd, 0xe8),
            line_stroke: Color::rgb(0x5c, 0xc8, 0xff),
            focus: Color::rgb(0xff, 0xd1, 0x66),
            tooltip_text: Color::rgb(0xc9, 0xdd, 0xe8),
            tooltip_fill: Color::rgb(0x1c, 0x24, 0x2e),
            slice_stroke: Color::rgb(0x8a, 0xa5, 0xb8),
            slice_label: Color::rgb(0xe8, 0xf0, 0xf6),
            ramp_start: Color::rgb(0x1f, 0x3a, 0x5f),
            ramp_end: Color::rgb(0x5c, 0xc8, 0xff),
            palette: [
                Color::rgb(0x2e, 0x5e, 0x8c),
                Color::rgb(0x3d, 0x7a, 0xb5),
                Color::rgb(0x5c, 0xc8, 0xff),
                Color::rgb(0x49, 0x9d, 0x8f),
                Color::rgb(0x6f, 0xc2, 0xb0),
                Color::rgb(0x94, 0x6f, 0xc2),
                Color::rgb(0xb8, 0x94, 0xe0),
            ],
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::midnight()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::classic()
}
