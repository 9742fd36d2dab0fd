// File: crates/prism-core/src/lib.rs
// Summary: Core library entry point; exports the chart and hover API.

pub mod arc;
pub mod axis;
pub mod chart;
pub mod color;
pub mod geometry;
pub mod grid;
pub mod hover;
pub mod scale;
pub mod series;
pub mod svg;
pub mod theme;
pub mod types;

pub use arc::{pie_layout, ArcSpan};
pub use axis::{Axis, TickFormat};
pub use chart::{DonutChart, LineChart, PieChart};
pub use color::Color;
pub use hover::{nearest_index, HoverResolver, TooltipPayload, Visibility};
pub use scale::{LinearScale, Scale, TimeScale};
pub use series::{DataError, DataPoint, Series, Slice};
pub use svg::SvgDoc;
pub use theme::Theme;
pub use types::Padding;
