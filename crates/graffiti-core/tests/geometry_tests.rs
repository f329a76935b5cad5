// Host-side tests for path geometry and the pixel/normalized conversion.

use graffiti_core::*;

fn zigzag() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(3.0, 4.0),
        Point::new(3.0, 10.0),
        Point::new(10.0, 10.0),
    ]
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

#[test]
fn path_length_sums_segments() {
    assert!((path_length(&zigzag()) - 18.0).abs() < 1e-12);
    assert_eq!(path_length(&[]), 0.0);
    assert_eq!(path_length(&[Point::new(4.0, 4.0)]), 0.0);
}

#[test]
fn path_length_is_direction_independent() {
    let mut rev = zigzag();
    rev.reverse();
    assert!((path_length(&rev) - path_length(&zigzag())).abs() < 1e-12);
}

#[test]
fn sampling_from_either_end_agrees() {
    let path = zigzag();
    let mut rev = path.clone();
    rev.reverse();
    let total = path_length(&path);
    for d in [0.0, 2.5, 5.0, 7.0, 11.0, 17.9] {
        let forward = point_at_distance(&path, total - d).unwrap();
        let backward = point_at_distance(&rev, d).unwrap();
        assert!(close(forward, backward), "mismatch at d={d}: {forward:?} vs {backward:?}");
    }
}

#[test]
fn sampling_clamps_to_the_ends() {
    let path = zigzag();
    let total = path_length(&path);
    assert_eq!(point_at_distance(&path, 0.0), Some(path[0]));
    assert_eq!(point_at_distance(&path, -3.0), Some(path[0]));
    assert_eq!(point_at_distance(&path, total + 1e-6), Some(path[3]));
    assert_eq!(point_at_distance(&path, total * 10.0), Some(path[3]));
}

#[test]
fn sampling_interpolates_inside_a_segment() {
    let p = point_at_distance(&zigzag(), 8.0).unwrap();
    assert!(close(p, Point::new(3.0, 7.0)));
}

#[test]
fn single_point_path_always_returns_that_point() {
    let dot = [Point::new(7.0, 9.0)];
    for d in [-1.0, 0.0, 5.0, 1e9] {
        assert_eq!(point_at_distance(&dot, d), Some(dot[0]));
    }
    assert_eq!(point_at_distance(&[], 1.0), None);
}

#[test]
fn commit_then_denormalize_round_trips() {
    let mut path = ActivePath::new();
    path.begin(Point::new(12.0, 30.0));
    path.push(Point::new(400.0, 300.0));
    path.push(Point::new(799.0, 599.0));
    let vp = Viewport::new(800.0, 600.0);
    let committed = path.commit(vp);
    for (a, b) in committed.to_pixels(vp).iter().zip(path.points()) {
        assert!(close(*a, *b));
    }
    for p in committed.points() {
        assert!((0.0..=1.0).contains(&p.x) && (0.0..=1.0).contains(&p.y));
    }
}

#[test]
fn denormalize_scales_with_the_viewport() {
    let mut path = ActivePath::new();
    path.begin(Point::new(200.0, 150.0));
    let committed = path.commit(Viewport::new(800.0, 600.0));
    let big = committed.to_pixels(Viewport::new(1600.0, 1200.0));
    assert!(close(big[0], Point::new(400.0, 300.0)));
    let wide = committed.to_pixels(Viewport::new(1000.0, 600.0));
    assert!(close(wide[0], Point::new(250.0, 150.0)));
}

#[test]
fn active_path_drops_points_within_a_pixel() {
    let mut path = ActivePath::new();
    path.begin(Point::new(0.0, 0.0));
    assert!(!path.push(Point::new(0.5, 0.5)));
    assert!(!path.push(Point::new(1.0, 0.0)));
    assert!(path.push(Point::new(2.0, 0.0)));
    assert_eq!(path.len(), 2);
}

#[test]
fn begin_discards_a_stale_gesture() {
    let mut path = ActivePath::new();
    path.begin(Point::new(0.0, 0.0));
    path.push(Point::new(50.0, 0.0));
    path.begin(Point::new(9.0, 9.0));
    assert_eq!(path.points(), &[Point::new(9.0, 9.0)]);
}

#[test]
fn begin_ignores_a_non_finite_point() {
    let mut path = ActivePath::new();
    path.begin(Point::new(5.0, 5.0));
    path.begin(Point::new(f64::NAN, 3.0));
    assert!(path.is_empty());
    path.push(Point::new(10.0, 0.0));
    path.push(Point::new(20.0, 0.0));
    assert_eq!(path.length(), 10.0);

    let mut scene = Scene::with_seed(Viewport::new(800.0, 600.0), 1);
    let mut infinite = ActivePath::new();
    infinite.begin(Point::new(f64::INFINITY, 0.0));
    assert_eq!(scene.commit_stroke(&infinite, &StrokeStyle::default()), None);
}
