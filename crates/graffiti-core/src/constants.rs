// Shared tuning constants for the stroke/drip engine and its front-ends.

use std::time::Duration;

// Drip motion (pixels per tick in the current viewport)
pub const DRIP_SPEED: f64 = 1.4;
pub const DRIP_WOBBLE: f64 = 1.5; // width of the uniform wobble kick
pub const DRIP_WOBBLE_DAMPING: f64 = 0.95; // per-tick geometric decay
pub const DRIP_ALPHA: f64 = 0.88;
pub const DRIP_THICK_MIN: f64 = 3.0;
pub const DRIP_THICK_SPAN: f64 = 5.0;
pub const DRIP_EXIT_MARGIN_PX: f64 = 20.0; // tip must pass this far below the bottom edge

// Default growth cap for a freshly built drip (pixels)
pub const DRIP_DEFAULT_LEN_MIN_PX: f64 = 50.0;
pub const DRIP_DEFAULT_LEN_SPAN_PX: f64 = 350.0;
// Longest cap a restored drip may carry (one full canvas height)
pub const MAX_DRIP_LENGTH_NORM: f64 = 1.0;

// Spawn policy
pub const MIN_DRIP_PATH_LEN: f64 = 10.0;
pub const DRIP_LEN_PER_EXTRA: f64 = 50.0; // one extra drip per this much arc length
pub const MIN_DRIPS_PER_STROKE: usize = 3;
pub const MAX_DRIPS_PER_STROKE: usize = 12;
pub const SPAWN_START_FRACTION: f64 = 0.15;
pub const SPAWN_SPAN_FRACTION: f64 = 0.7;
pub const SPAWN_LEN_MIN_PX: f64 = 60.0;
pub const SPAWN_BOTTOM_MARGIN_PX: f64 = 80.0;

// Input
pub const MIN_POINT_SPACING_PX: f64 = 1.0;

// Stroke styling
pub const BASE_THICKNESS: f64 = 24.0;
pub const THICKNESS_PER_RADIUS: f64 = 2.0;
pub const MIN_CHAR_SPACING: f64 = 8.0;
pub const CHAR_SPACING_PER_SIZE: f64 = 0.6;
pub const MAX_GLYPHS_PER_STROKE: usize = 2048;
pub const STROKE_ALPHA: f64 = 0.92;
pub const PREVIEW_ALPHA: f64 = 0.9;

// Style defaults, used when controls or snapshots supply nothing usable
pub const DEFAULT_SPRAY_COLOR: &str = "#ff2d55";
pub const DEFAULT_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_TEXT: &str = "oh";
pub const DEFAULT_RADIUS: i32 = 4;
pub const DEFAULT_TEXT_SIZE: u32 = 28;
pub const MIN_TEXT_SIZE: u32 = 12;
pub const DEFAULT_THICKNESS: f64 = 32.0;
pub const DEFAULT_DRIP_THICK: f64 = 5.0;
pub const DEFAULT_DRIP_MAX_LENGTH_NORM: f64 = 0.25;

// Persistence
pub const STORAGE_KEY: &str = "graffiti-wall-v1";
pub const AUTOSAVE_INTERVAL: Duration = Duration::from_millis(1500);

// Camera input cadence, decoupled from the render tick
pub const CAMERA_POLL_INTERVAL_MS: i32 = 150;
