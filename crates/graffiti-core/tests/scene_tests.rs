// Host-side tests for stroke commit, drip spawning and the frame update.

use graffiti_core::*;

const VP: Viewport = Viewport::new(800.0, 600.0);

fn line(from: Point, to: Point) -> ActivePath {
    let mut path = ActivePath::new();
    path.begin(from);
    path.push(to);
    path
}

fn dot(at: Point) -> ActivePath {
    let mut path = ActivePath::new();
    path.begin(at);
    path
}

#[test]
fn empty_path_is_rejected_silently() {
    let mut scene = Scene::with_seed(VP, 1);
    assert_eq!(scene.commit_stroke(&ActivePath::new(), &StrokeStyle::default()), None);
    assert!(scene.is_empty());
    assert!(!scene.is_dirty());
}

#[test]
fn tap_commits_a_dot_with_one_glyph() {
    let mut scene = Scene::with_seed(VP, 1);
    let report = scene
        .commit_stroke(&dot(Point::new(400.0, 300.0)), &StrokeStyle::default())
        .unwrap();
    assert_eq!(report.stroke_index, 0);
    assert_eq!(report.drips_spawned, 0);
    let stroke = &scene.strokes()[0];
    assert_eq!(stroke.total_len, 0.0);
    assert!(stroke.num_chars >= 1);
    assert_eq!(stroke.path.points(), &[Point::new(0.5, 0.5)]);
    assert_eq!(stroke.glyphs(VP).len(), 1);
}

#[test]
fn stroke_fields_follow_the_style() {
    let mut scene = Scene::with_seed(VP, 1);
    let style = StrokeStyle::from_controls("#00ff00", "10", "hey", "40", "#000000");
    scene.commit_stroke(&line(Point::new(0.0, 100.0), Point::new(240.0, 100.0)), &style);
    let stroke = &scene.strokes()[0];
    assert_eq!(stroke.spray_color, "#00ff00");
    assert_eq!(stroke.thickness, 44.0);
    assert_eq!(stroke.text, "hey");
    assert_eq!(stroke.text_size, 40);
    assert_eq!(stroke.text_color, "#000000");
    assert_eq!(stroke.total_len, 240.0);
    // spacing max(8, 40*0.6) = 24
    assert_eq!(stroke.num_chars, 10);
}

#[test]
fn short_strokes_do_not_drip() {
    let mut scene = Scene::with_seed(VP, 2);
    let report = scene
        .commit_stroke(
            &line(Point::new(100.0, 100.0), Point::new(105.0, 100.0)),
            &StrokeStyle::default(),
        )
        .unwrap();
    assert_eq!(report.drips_spawned, 0);
    assert!(scene.drips().is_empty());
}

#[test]
fn long_strokes_spawn_the_capped_maximum() {
    let mut scene = Scene::with_seed(VP, 3);
    let report = scene
        .commit_stroke(
            &line(Point::new(0.0, 100.0), Point::new(500.0, 100.0)),
            &StrokeStyle::default(),
        )
        .unwrap();
    assert_eq!(report.drips_spawned, MAX_DRIPS_PER_STROKE);
    assert_eq!(scene.drips().len(), 12);
}

#[test]
fn drips_anchor_in_the_middle_of_the_stroke() {
    let mut scene = Scene::with_seed(VP, 4);
    let style = StrokeStyle {
        spray_color: "#abcdef".into(),
        ..StrokeStyle::default()
    };
    scene.commit_stroke(&line(Point::new(0.0, 300.0), Point::new(400.0, 300.0)), &style);
    assert_eq!(scene.drips().len(), 11);
    for drip in scene.drips() {
        let x_px = drip.start_x * VP.width;
        assert!((60.0..=340.0).contains(&x_px), "anchor at {x_px}px");
        assert!((drip.start_y - 0.5).abs() < 1e-12);
        assert_eq!(drip.color, "#abcdef");
        let cap_px = drip.max_length * VP.height;
        // 60px minimum, plus up to the 300px below the anchor less the margin
        assert!((60.0..=280.0).contains(&cap_px), "cap {cap_px}px");
    }
}

#[test]
fn same_seed_same_wall() {
    let path = line(Point::new(10.0, 10.0), Point::new(310.0, 200.0));
    let mut a = Scene::with_seed(VP, 42);
    let mut b = Scene::with_seed(VP, 42);
    a.commit_stroke(&path, &StrokeStyle::default());
    b.commit_stroke(&path, &StrokeStyle::default());
    for _ in 0..10 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.drips(), b.drips());
}

#[test]
fn tick_on_an_empty_scene_is_harmless() {
    let mut scene = Scene::with_seed(VP, 5);
    assert_eq!(scene.tick(), TickReport::default());
    assert!(!scene.is_dirty());
}

#[test]
fn tick_is_idempotent_once_every_drip_is_capped() {
    let mut scene = Scene::with_seed(VP, 6);
    scene.commit_stroke(
        &line(Point::new(100.0, 50.0), Point::new(300.0, 50.0)),
        &StrokeStyle::default(),
    );
    for _ in 0..1000 {
        scene.tick();
    }
    let settled = scene.drips().to_vec();
    assert!(settled.iter().all(Drip::is_growth_complete));
    scene.mark_saved();
    assert_eq!(scene.tick(), TickReport::default());
    assert_eq!(scene.drips(), &settled[..]);
    assert!(!scene.is_dirty());
}

#[test]
fn finished_drips_are_pruned_after_advancing() {
    let mut scene = Scene::with_seed(VP, 7);
    let runs_off = Drip::restore(Point::new(0.5, 0.95), "#f00", Vec::new(), 4.0, 0.88, 0.2);
    let stays = Drip::restore(Point::new(0.2, 0.1), "#0f0", Vec::new(), 4.0, 0.88, 0.2);
    scene.restore(Vec::new(), vec![runs_off, stays]);

    let mut removed = 0;
    for _ in 0..200 {
        removed += scene.tick().removed;
    }
    assert_eq!(removed, 1);
    assert_eq!(scene.drips().len(), 1);
    assert_eq!(scene.drips()[0].color, "#0f0");
    assert!(scene.drips()[0].is_growth_complete());
}

#[test]
fn reset_empties_the_scene() {
    let mut scene = Scene::with_seed(VP, 8);
    scene.commit_stroke(
        &line(Point::new(0.0, 0.0), Point::new(200.0, 200.0)),
        &StrokeStyle::default(),
    );
    scene.tick();
    scene.reset();
    assert!(scene.strokes().is_empty());
    assert!(scene.drips().is_empty());
}

#[test]
fn strokes_keep_their_cached_length_after_resize() {
    let mut scene = Scene::with_seed(VP, 9);
    scene.commit_stroke(
        &line(Point::new(0.0, 100.0), Point::new(300.0, 100.0)),
        &StrokeStyle::default(),
    );
    scene.set_viewport(Viewport::new(1600.0, 1200.0));
    let stroke = &scene.strokes()[0];
    assert_eq!(stroke.total_len, 300.0);
    let glyphs = stroke.glyphs(scene.viewport());
    assert_eq!(glyphs.len(), stroke.num_chars);
    let last = glyphs.last().unwrap();
    assert!((last.at.x - 600.0).abs() < 1e-9);
}

#[test]
fn zero_sized_viewport_rejects_the_commit() {
    let mut scene = Scene::with_seed(Viewport::new(0.0, 0.0), 10);
    let report = scene.commit_stroke(
        &line(Point::new(10.0, 10.0), Point::new(200.0, 10.0)),
        &StrokeStyle::default(),
    );
    assert_eq!(report, None);
    assert!(scene.is_empty());
}
