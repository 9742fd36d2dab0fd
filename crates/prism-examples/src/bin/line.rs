// File: crates/prism-examples/src/bin/line.rs
// Summary: Render a line chart from CSV observations to an SVG file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use prism_core::{Axis, LineChart, Series};

// Daily readings; dates become epoch-millisecond positions on a time axis.
const DATA: &str = "\
date,value
2023-01-02,12.4
2023-01-09,14.1
2023-01-16,13.2
2023-01-23,17.8
2023-01-30,16.5
2023-02-06,19.3
2023-02-13,18.1
2023-02-20,21.6
2023-02-27,23.0
2023-03-06,22.4
";

fn load_series() -> Result<Series> {
    let mut reader = csv::Reader::from_reader(DATA.as_bytes());
    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        let date = record.get(0).context("missing date column")?;
        let value = record.get(1).context("missing value column")?;
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")?
            .and_hms_opt(0, 0, 0)
            .context("invalid midnight timestamp")?;
        let position = day.and_utc().timestamp_millis() as f64;
        pairs.push((position, value.parse::<f64>()?));
    }
    Ok(Series::from_pairs(pairs))
}

fn main() -> Result<()> {
    let series = load_series()?;
    let (x_min, x_max) = series.position_extent().context("empty series")?;

    let mut chart = LineChart::new(series);
    chart.x_axis = Axis::time("Week", x_min, x_max);
    chart.y_axis = Axis::new("Reading", 0.0, 25.0);
    chart.y_axis_auto = false;
    chart.show_axis_labels = true;
    chart.show_title = true;
    chart.title = "Weekly readings".to_string();

    let out = std::path::PathBuf::from("target/out/example_line.svg");
    chart.render_to_svg_file(&out)?;

    // Show what a hover at mid-plot would resolve to.
    if let Some(payload) = chart.pointer_moved(chart.width / 2.0, chart.height / 2.0) {
        println!(
            "hover at center resolves value {} at x={}",
            payload.text, payload.anchor.position
        );
    }
    println!("Wrote {}", out.display());
    Ok(())
}
