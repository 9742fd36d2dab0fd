// File: crates/prism-core/tests/svg_smoke.rs
// Purpose: End-to-end render checks for each chart kind's SVG output.

use prism_core::chart::{DonutChart, LineChart, PieChart};
use prism_core::series::{Series, Slice};
use prism_core::theme;

fn sample_series() -> Series {
    Series::from_pairs(vec![
        (0.0, 0.0),
        (1.0, 2.0),
        (2.0, 1.0),
        (3.0, 3.5),
        (4.0, 2.5),
    ])
}

fn age_slices() -> Vec<Slice> {
    vec![
        Slice::new("<18", 727432.0),
        Slice::new(">=65", 629032.0),
        Slice::new("55-64", 515347.0),
        Slice::new("18-24", 341435.0),
        Slice::new("25-34", 444509.0),
        Slice::new("35-44", 426967.0),
        Slice::new("45-54", 480565.0),
    ]
}

#[test]
fn line_chart_renders_axes_grid_and_path() {
    let mut chart = LineChart::new(sample_series());
    chart.x_axis = prism_core::Axis::new("x label", 0.0, 4.0);
    chart.show_title = true;
    chart.title = "Throughput".to_string();

    let svg = chart.render_svg();
    assert!(svg.starts_with("<svg xmlns="));
    assert!(svg.ends_with("</svg>"));
    // one series path in the default line color
    assert_eq!(svg.matches("<path").count(), 1);
    assert!(svg.contains("stroke=\"#bfe4a3\""));
    // dashed y grid and rotated x tick labels
    assert!(svg.contains("stroke-dasharray=\"1,1\""));
    assert!(svg.contains("rotate(-45)"));
    assert!(svg.contains("Throughput"));
}

#[test]
fn line_chart_focus_overlay_is_stamped_on_request() {
    let mut chart = LineChart::new(sample_series());
    chart.x_axis = prism_core::Axis::new("x label", 0.0, 4.0);
    chart.pointer_entered();

    let plain = chart.render_svg();
    assert!(!plain.contains("<circle"));

    let payload = chart.pointer_moved(400.0, 300.0).expect("payload");
    let focused = chart.render_svg_with_focus(&payload);
    assert!(focused.contains("<circle"));
    assert!(focused.contains(&payload.text));

    // outside the plot area nothing resolves
    assert!(chart.pointer_moved(10.0, 10.0).is_none());
}

#[test]
fn pie_chart_renders_one_sector_per_slice() {
    let slices = vec![
        Slice::new("a", 44.0),
        Slice::new("b", 13.0),
        Slice::new("c", 86.0),
        Slice::new("d", 5.0),
        Slice::new("e", 72.0),
    ];
    let chart = PieChart::try_new(slices).expect("valid slices");
    let svg = chart.render_svg();
    assert_eq!(svg.matches("<path").count(), 5);
    assert_eq!(svg.matches("<text").count(), 5);
    // ramp start color belongs to the smallest slice
    assert!(svg.contains("fill=\"#cefad0\""));
}

#[test]
fn donut_chart_escapes_labels_and_draws_title() {
    let mut chart = DonutChart::try_new(age_slices()).expect("valid slices");
    chart.show_title = true;
    chart.title = "Age brackets".to_string();

    let svg = chart.render_svg();
    assert_eq!(svg.matches("<path").count(), 7);
    assert!(svg.contains("&lt;18"));
    assert!(svg.contains("&gt;=65"));
    assert!(svg.contains("Age brackets"));
    assert!(svg.contains("stroke=\"#277da1\""));
}

#[test]
fn manual_y_range_survives_rendering() {
    let mut chart = LineChart::new(sample_series());
    chart.y_axis = prism_core::Axis::new("y label", 0.0, 100.0);
    chart.y_axis_auto = false;
    let svg = chart.render_svg();
    // the top tick reflects the configured range, not the data extent
    assert!(svg.contains(">100<"));
}

#[test]
fn empty_charts_render_without_series_marks() {
    let line = LineChart::new(Series::default());
    let svg = line.render_svg();
    assert_eq!(svg.matches("<path").count(), 0);
    assert!(svg.contains("<line"));

    let donut = DonutChart::new(Vec::new());
    assert_eq!(donut.render_svg().matches("<path").count(), 0);
}

#[test]
fn themed_render_swaps_the_palette() {
    let mut chart = LineChart::new(sample_series());
    chart.apply_theme(&theme::find("midnight"));
    let svg = chart.render_svg();
    assert!(svg.contains("stroke=\"#5cc8ff\""));
    assert!(!svg.contains("stroke=\"#bfe4a3\""));
}

#[test]
fn render_to_file_creates_parent_directories() {
    let chart = DonutChart::new(age_slices());
    let out = std::path::PathBuf::from("target/test_out/donut.svg");
    chart.render_to_svg_file(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "svg should be non-empty");
}
