// File: crates/prism-examples/src/bin/pie.rs
// Summary: Render a gradient-ramp pie chart to an SVG file.

use anyhow::{Context, Result};
use prism_core::{Color, PieChart, Slice};

fn main() -> Result<()> {
    let slices = vec![
        Slice::new("a", 44.0),
        Slice::new("b", 13.0),
        Slice::new("c", 86.0),
        Slice::new("d", 5.0),
        Slice::new("e", 72.0),
    ];

    let mut chart = PieChart::try_new(slices)?;
    chart.stroke_color = Color::parse("#277da1").context("bad stroke color")?;
    chart.stroke_width = 1.0;
    let out = std::path::PathBuf::from("target/out/example_pie.svg");
    chart.render_to_svg_file(&out)?;
    println!("Wrote {}", out.display());
    Ok(())
}
