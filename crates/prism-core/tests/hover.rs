// File: crates/prism-core/tests/hover.rs
// Purpose: Validate nearest-point resolution and tooltip visibility transitions.

use prism_core::hover::{nearest_index, HoverResolver, Visibility};
use prism_core::scale::LinearScale;
use prism_core::series::Series;

fn series(pairs: &[(f64, f64)]) -> Series {
    Series::from_pairs(pairs.to_vec())
}

/// Identity scales so payload screen coordinates equal domain coordinates.
fn identity_scales() -> (LinearScale, LinearScale) {
    (
        LinearScale::new((0.0, 100.0), (0.0, 100.0)),
        LinearScale::new((0.0, 100.0), (0.0, 100.0)),
    )
}

#[test]
fn resolved_point_is_a_member_of_the_series() {
    let s = series(&[(0.0, 10.0), (4.0, 2.0), (9.0, 7.0), (13.0, 1.0)]);
    let mut probe = -3.0;
    while probe < 17.0 {
        let i = nearest_index(s.points(), probe).expect("non-empty series resolves");
        assert!(i < s.len());
        probe += 0.25;
    }
}

#[test]
fn positions_before_the_first_point_clamp_to_it() {
    let s = series(&[(5.0, 1.0), (10.0, 2.0), (20.0, 3.0)]);
    assert_eq!(nearest_index(s.points(), -100.0), Some(0));
    assert_eq!(nearest_index(s.points(), 5.0), Some(0));
}

#[test]
fn positions_after_the_last_point_clamp_to_it() {
    let s = series(&[(5.0, 1.0), (10.0, 2.0), (20.0, 3.0)]);
    assert_eq!(nearest_index(s.points(), 20.0), Some(2));
    assert_eq!(nearest_index(s.points(), 1e9), Some(2));
}

#[test]
fn exact_position_match_resolves_that_point() {
    // S = [(0,10), (10,20), (20,15)], probe 10 resolves (10,20)
    let s = series(&[(0.0, 10.0), (10.0, 20.0), (20.0, 15.0)]);
    let (xs, ys) = identity_scales();
    let r = HoverResolver::new();
    let payload = r.pointer_move(&s, 10.0, &xs, &ys).expect("payload");
    assert_eq!(payload.anchor.position, 10.0);
    assert_eq!(payload.anchor.value, 20.0);
}

#[test]
fn equidistant_probe_prefers_the_later_point() {
    // probe 5 is distance 5 from both neighbors; the later one wins
    let s = series(&[(0.0, 10.0), (10.0, 20.0)]);
    let (xs, ys) = identity_scales();
    let r = HoverResolver::new();
    let payload = r.pointer_move(&s, 5.0, &xs, &ys).expect("payload");
    assert_eq!(payload.anchor.position, 10.0);
    assert_eq!(payload.anchor.value, 20.0);
}

#[test]
fn strictly_closer_neighbor_wins_on_either_side() {
    let s = series(&[(0.0, 1.0), (10.0, 2.0)]);
    assert_eq!(nearest_index(s.points(), 4.9), Some(0));
    assert_eq!(nearest_index(s.points(), 5.1), Some(1));
}

#[test]
fn empty_series_never_produces_a_payload() {
    let s = series(&[]);
    let (xs, ys) = identity_scales();
    let r = HoverResolver::new();
    assert_eq!(r.pointer_move(&s, 0.0, &xs, &ys), None);
    assert_eq!(r.pointer_move(&s, f64::MAX, &xs, &ys), None);
    assert_eq!(nearest_index(s.points(), 42.0), None);
}

#[test]
fn singleton_series_always_resolves_its_point() {
    let s = series(&[(7.0, 3.0)]);
    assert_eq!(nearest_index(s.points(), -1000.0), Some(0));
    assert_eq!(nearest_index(s.points(), 7.0), Some(0));
    assert_eq!(nearest_index(s.points(), 1000.0), Some(0));
}

#[test]
fn duplicate_positions_resolve_deterministically() {
    let s = series(&[(5.0, 1.0), (5.0, 2.0), (7.0, 3.0)]);
    // lower bound lands on the first of the duplicates
    assert_eq!(nearest_index(s.points(), 5.0), Some(0));
    // probe 6 ties between the second duplicate and 7; right bias applies
    assert_eq!(nearest_index(s.points(), 6.0), Some(2));
}

#[test]
fn enter_move_move_leave_visibility_trace() {
    let s = series(&[(0.0, 1.0), (10.0, 2.0)]);
    let (xs, ys) = identity_scales();
    let mut r = HoverResolver::new();
    assert_eq!(r.visibility(), Visibility::Hidden);

    r.pointer_enter();
    let mut trace = vec![r.visibility()];

    assert!(r.pointer_move(&s, 1.0, &xs, &ys).is_some());
    trace.push(r.visibility());
    assert!(r.pointer_move(&s, 9.0, &xs, &ys).is_some());
    trace.push(r.visibility());

    assert_eq!(r.pointer_leave(), None);
    trace.push(r.visibility());

    assert_eq!(
        trace,
        vec![
            Visibility::Visible,
            Visibility::Visible,
            Visibility::Visible,
            Visibility::Hidden
        ]
    );
}

#[test]
fn pointer_enter_is_idempotent_and_reenterable() {
    let mut r = HoverResolver::new();
    r.pointer_enter();
    r.pointer_enter();
    assert!(r.is_visible());
    r.pointer_leave();
    assert!(!r.is_visible());
    r.pointer_enter();
    assert!(r.is_visible());
}

#[test]
fn payload_projects_the_anchor_through_the_scales() {
    let s = series(&[(0.0, 0.0), (10.0, 50.0)]);
    // domain 0..10 onto pixels 100..300; values 0..50 onto 400..0 (inverted y)
    let xs = LinearScale::new((0.0, 10.0), (100.0, 300.0));
    let ys = LinearScale::new((0.0, 50.0), (400.0, 0.0));
    let r = HoverResolver::new();
    let payload = r.pointer_move(&s, 9.0, &xs, &ys).expect("payload");
    assert_eq!(payload.anchor.position, 10.0);
    assert!((payload.screen_x - 300.0).abs() < 1e-9);
    assert!((payload.screen_y - 0.0).abs() < 1e-9);
    assert_eq!(payload.text, "50");
}

#[test]
fn successive_moves_supersede_rather_than_accumulate() {
    let s = series(&[(0.0, 1.0), (10.0, 2.0), (20.0, 3.0)]);
    let (xs, ys) = identity_scales();
    let r = HoverResolver::new();
    let first = r.pointer_move(&s, 0.0, &xs, &ys).expect("payload");
    let second = r.pointer_move(&s, 20.0, &xs, &ys).expect("payload");
    assert_ne!(first.anchor.position, second.anchor.position);
    // the series itself is untouched between moves
    assert_eq!(s.len(), 3);
}
