// File: crates/prism-examples/src/bin/donut.rs
// Summary: Render a donut chart of population age brackets to an SVG file.

use anyhow::Result;
use prism_core::{DonutChart, Slice};

fn main() -> Result<()> {
    let slices = vec![
        Slice::new("<18", 727432.0),
        Slice::new("\u{2265}65", 629032.0),
        Slice::new("55-64", 515347.0),
        Slice::new("18-24", 341435.0),
        Slice::new("25-34", 444509.0),
        Slice::new("35-44", 426967.0),
        Slice::new("45-54", 480565.0),
    ];

    let mut chart = DonutChart::try_new(slices)?;
    chart.show_title = true;
    chart.title = "Population by age".to_string();

    let out = std::path::PathBuf::from("target/out/example_donut.svg");
    chart.render_to_svg_file(&out)?;

    // A hover over the ring resolves the sector under the pointer.
    if let Some(payload) = chart.pointer_moved(chart.width / 2.0, chart.padding.top + 20.0) {
        println!("hover at 12 o'clock resolves count {}", payload.text);
    }
    println!("Wrote {}", out.display());
    Ok(())
}
