// File: crates/prism-core/src/grid.rs
// Summary: Tick layout and numeric label formatting helpers.

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Numeric tick label: rounded to four decimals with insignificant trailing
/// zeros dropped, so `20.0` reads "20" and `0.1250` reads "0.125".
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    let rounded = (v * 1e4).round() / 1e4;
    if rounded == rounded.trunc() && rounded.abs() < 1e15 {
        // trunc() above guards the cast
        return format!("{}", rounded as i64);
    }
    let s = format!("{rounded:.4}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
