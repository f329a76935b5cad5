//! Where a finished stroke starts to run.

use rand::Rng;
use smallvec::SmallVec;

use crate::constants::*;
use crate::drip::Drip;
use crate::geometry::{path_length, point_at_distance, Point, Viewport};

pub type DripBatch = SmallVec<[Drip; MAX_DRIPS_PER_STROKE]>;

/// How many drips a stroke of pixel arc length `total_len` produces.
pub fn drip_count(total_len: f64) -> usize {
    if total_len.is_nan() || total_len < MIN_DRIP_PATH_LEN {
        return 0;
    }
    let extra = (total_len / DRIP_LEN_PER_EXTRA).floor();
    let count = if extra.is_finite() {
        MIN_DRIPS_PER_STROKE.saturating_add(extra as usize)
    } else {
        MAX_DRIPS_PER_STROKE
    };
    count.clamp(MIN_DRIPS_PER_STROKE, MAX_DRIPS_PER_STROKE)
}

/// Growth cap in pixels for a drip anchored at normalized height `anchor_y`:
/// at least 60 px, up to the visible space left below the anchor.
fn spawn_cap_px<R: Rng>(anchor_y: f64, viewport: Viewport, rng: &mut R) -> f64 {
    let below = (1.0 - anchor_y) * viewport.height - SPAWN_BOTTOM_MARGIN_PX;
    SPAWN_LEN_MIN_PX + rng.gen::<f64>() * below.max(0.0)
}

/// Drips for a just-committed pixel-space path. Each drip is anchored at an
/// independent uniform arc position in the middle 70% of the path.
pub fn spawn_drips<R: Rng>(
    path_px: &[Point],
    color: &str,
    viewport: Viewport,
    rng: &mut R,
) -> DripBatch {
    let total_len = path_length(path_px);
    let count = drip_count(total_len);
    let mut batch = DripBatch::new();
    for _ in 0..count {
        let d = total_len * (SPAWN_START_FRACTION + rng.gen::<f64>() * SPAWN_SPAN_FRACTION);
        let Some(anchor_px) = point_at_distance(path_px, d) else {
            continue;
        };
        let anchor = viewport.normalize(anchor_px);
        if !anchor.is_finite() {
            continue;
        }
        let mut drip = Drip::new(anchor, color, viewport, rng);
        drip.max_length = spawn_cap_px(anchor.y, viewport, rng) / viewport.height;
        batch.push(drip);
    }
    batch
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_grows_with_length_then_caps() {
        assert_eq!(drip_count(0.0), 0);
        assert_eq!(drip_count(9.99), 0);
        assert_eq!(drip_count(10.0), 3);
        assert_eq!(drip_count(49.0), 3);
        assert_eq!(drip_count(100.0), 5);
        assert_eq!(drip_count(449.0), 11);
        assert_eq!(drip_count(450.0), 12);
        assert_eq!(drip_count(5000.0), 12);
        assert_eq!(drip_count(f64::NAN), 0);
    }
}
