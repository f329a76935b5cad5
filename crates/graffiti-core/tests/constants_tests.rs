// Relations between tuning constants that the engine relies on.

use graffiti_core::*;

#[test]
fn drip_batch_bounds_are_ordered() {
    assert!(MIN_DRIPS_PER_STROKE > 0);
    assert!(MIN_DRIPS_PER_STROKE <= MAX_DRIPS_PER_STROKE);
    assert!(MIN_DRIP_PATH_LEN > 0.0);
}

#[test]
fn spawn_window_stays_inside_the_stroke() {
    assert!(SPAWN_START_FRACTION >= 0.0);
    assert!(SPAWN_START_FRACTION + SPAWN_SPAN_FRACTION <= 1.0);
}

#[test]
fn wobble_decays() {
    assert!(DRIP_WOBBLE_DAMPING > 0.0 && DRIP_WOBBLE_DAMPING < 1.0);
    assert!(DRIP_SPEED > 0.0);
}

#[test]
fn default_style_is_consistent() {
    assert_eq!(thickness_for_radius(DEFAULT_RADIUS), DEFAULT_THICKNESS);
    assert!(DEFAULT_TEXT_SIZE >= MIN_TEXT_SIZE);
    assert!(!DEFAULT_TEXT.trim().is_empty());
    assert!((0.0..=1.0).contains(&DRIP_ALPHA));
    assert!((0.0..=1.0).contains(&STROKE_ALPHA));
}

#[test]
fn camera_polls_faster_than_autosave() {
    assert!((CAMERA_POLL_INTERVAL_MS as u128) < AUTOSAVE_INTERVAL.as_millis());
}
