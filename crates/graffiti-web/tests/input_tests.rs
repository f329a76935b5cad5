// Host-side tests for pure input functions.
// The web crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use graffiti_core::Point;
use input::*;

#[test]
fn client_to_canvas_offsets_by_rect_origin() {
    let p = client_to_canvas(150.0, 80.0, (50.0, 30.0, 800.0, 600.0), 800.0, 600.0);
    assert_eq!(p, Point::new(100.0, 50.0));
}

#[test]
fn client_to_canvas_scales_css_to_backing_pixels() {
    // canvas shown at half its backing size
    let p = client_to_canvas(200.0, 100.0, (0.0, 0.0, 400.0, 300.0), 800.0, 600.0);
    assert_eq!(p, Point::new(400.0, 200.0));
}

#[test]
fn client_to_canvas_survives_an_unlaid_out_canvas() {
    let p = client_to_canvas(20.0, 10.0, (0.0, 0.0, 0.0, 0.0), 800.0, 600.0);
    assert_eq!(p, Point::new(20.0, 10.0));
    assert!(p.is_finite());
}

#[test]
fn pointer_stroke_tracks_only_its_pointer() {
    let mut stroke = PointerStroke::default();
    assert!(!stroke.owns(1));
    stroke.begin(1, Point::new(10.0, 10.0));
    assert!(stroke.owns(1));
    assert!(!stroke.owns(2));
}

#[test]
fn finish_hands_back_the_path_once() {
    let mut stroke = PointerStroke::default();
    stroke.begin(3, Point::new(0.0, 0.0));
    stroke.path.push(Point::new(30.0, 40.0));

    let path = stroke.finish().unwrap();
    assert_eq!(path.len(), 2);
    assert_eq!(path.length(), 50.0);
    assert!(!stroke.owns(3));
    assert!(stroke.path.is_empty());
    assert!(stroke.finish().is_none());
}

#[test]
fn begin_restarts_an_abandoned_gesture() {
    let mut stroke = PointerStroke::default();
    stroke.begin(1, Point::new(0.0, 0.0));
    stroke.path.push(Point::new(100.0, 0.0));
    stroke.begin(2, Point::new(5.0, 5.0));
    assert!(stroke.owns(2));
    assert_eq!(stroke.path.points(), &[Point::new(5.0, 5.0)]);
}

#[test]
fn fingertip_is_mirrored_horizontally() {
    assert_eq!(mirror_fingertip(0.2, 0.7), Some(Point::new(0.8, 0.7)));
    assert_eq!(mirror_fingertip(0.5, 0.5), Some(Point::new(0.5, 0.5)));
    assert_eq!(mirror_fingertip(f64::NAN, 0.5), None);
}
