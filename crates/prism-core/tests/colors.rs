// File: crates/prism-core/tests/colors.rs
// Purpose: Validate color parsing, interpolation, and palette lookup.

use prism_core::color::{ordinal, ramp, Color};
use prism_core::theme;

#[test]
fn parses_hex_and_keyword_forms() {
    assert_eq!(Color::parse("#277DA1"), Some(Color::rgb(0x27, 0x7d, 0xa1)));
    assert_eq!(Color::parse("#fff"), Some(Color::WHITE));
    assert_eq!(Color::parse("green"), Some(Color::rgb(0, 0x80, 0)));
    assert_eq!(Color::parse("Black"), Some(Color::BLACK));
    assert_eq!(Color::parse("#12345"), None);
    assert_eq!(Color::parse("chartreuse"), None);
}

#[test]
fn hex_form_roundtrips_lowercase() {
    let c = Color::parse("#BFE4A3").unwrap();
    assert_eq!(c.to_hex(), "#bfe4a3");
}

#[test]
fn lerp_holds_endpoints_and_clamps() {
    let a = Color::rgb(0, 0, 0);
    let b = Color::rgb(200, 100, 50);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 2.0), b);
    assert_eq!(a.lerp(b, 0.5), Color::rgb(100, 50, 25));
}

#[test]
fn ramp_starts_at_the_start_color() {
    let colors = ramp(Color::rgb(0xce, 0xfa, 0xd0), Color::rgb(0, 0x80, 0), 5);
    assert_eq!(colors.len(), 5);
    assert_eq!(colors[0], Color::rgb(0xce, 0xfa, 0xd0));
    // samples stop short of the end color, matching i/n indexing
    assert_ne!(colors[4], Color::rgb(0, 0x80, 0));
}

#[test]
fn ordinal_cycles_and_survives_an_empty_palette() {
    let palette = [Color::rgb(1, 1, 1), Color::rgb(2, 2, 2)];
    assert_eq!(ordinal(&palette, 0), palette[0]);
    assert_eq!(ordinal(&palette, 3), palette[1]);
    assert_eq!(ordinal(&[], 9), Color::BLACK);
}

#[test]
fn theme_lookup_falls_back_to_classic() {
    assert_eq!(theme::find("midnight").name, "midnight");
    assert_eq!(theme::find("MIDNIGHT").name, "midnight");
    assert_eq!(theme::find("no-such-theme").name, "classic");
}
