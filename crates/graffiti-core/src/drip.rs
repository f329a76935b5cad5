//! A single paint run: a damped horizontal random walk that descends from a
//! fixed anchor until it reaches its growth cap.
//!
//! Positions and the cap are normalized to the viewport. Speed and wobble are
//! pixel quantities, so each step divides them by the viewport it runs in.

use rand::Rng;

use crate::constants::*;
use crate::geometry::{Point, Viewport};

#[derive(Clone, Debug, PartialEq)]
pub struct Drip {
    pub start_x: f64,
    pub start_y: f64,
    pub color: String,
    pub points: Vec<Point>,
    pub cur_x: f64,
    pub cur_y: f64,
    /// Horizontal offset from the anchor, in pixels.
    pub wobble: f64,
    pub thick: f64,
    pub alpha: f64,
    pub max_length: f64,
}

impl Drip {
    /// Fresh drip at a normalized `anchor` with randomized thickness, initial
    /// wobble and a default 50..400 px growth cap for `viewport`.
    pub fn new<R: Rng>(
        anchor: Point,
        color: impl Into<String>,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let wobble = (rng.gen::<f64>() - 0.5) * 2.0;
        let thick = DRIP_THICK_MIN + rng.gen::<f64>() * DRIP_THICK_SPAN;
        let max_px = DRIP_DEFAULT_LEN_MIN_PX + rng.gen::<f64>() * DRIP_DEFAULT_LEN_SPAN_PX;
        Self {
            start_x: anchor.x,
            start_y: anchor.y,
            color: color.into(),
            points: Vec::new(),
            cur_x: anchor.x,
            cur_y: anchor.y,
            wobble,
            thick,
            alpha: DRIP_ALPHA,
            max_length: max_px / viewport.height,
        }
    }

    /// Rebuild a drip from stored state. The walk resumes from rest at the
    /// last stored point, or at the anchor when none were kept.
    pub fn restore(
        anchor: Point,
        color: impl Into<String>,
        points: Vec<Point>,
        thick: f64,
        alpha: f64,
        max_length: f64,
    ) -> Self {
        let tip = points.last().copied().unwrap_or(anchor);
        Self {
            start_x: anchor.x,
            start_y: anchor.y,
            color: color.into(),
            points,
            cur_x: tip.x,
            cur_y: tip.y.max(anchor.y),
            wobble: 0.0,
            thick,
            alpha,
            max_length,
        }
    }

    pub fn anchor(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    #[inline]
    fn limit_y(&self) -> f64 {
        self.start_y + self.max_length
    }

    pub fn is_growth_complete(&self) -> bool {
        self.cur_y >= self.limit_y()
    }

    /// Normalized length grown so far.
    pub fn length(&self) -> f64 {
        self.cur_y - self.start_y
    }

    /// One tick of growth. Returns whether a point was appended. Growth ends
    /// at the cap or once the tip is past the bottom exit line.
    ///
    /// A step that would produce a non-finite coordinate (e.g. a 0-sized
    /// viewport) is discarded whole, leaving the drip untouched.
    pub fn advance<R: Rng>(&mut self, viewport: Viewport, rng: &mut R) -> bool {
        if self.is_growth_complete() {
            return false;
        }
        let step = DRIP_SPEED / viewport.height;
        if !step.is_finite() {
            return false;
        }
        let next_y = (self.cur_y + step).min(self.limit_y());
        let wobble = (self.wobble + (rng.gen::<f64>() - 0.5) * DRIP_WOBBLE) * DRIP_WOBBLE_DAMPING;
        let next_x = self.start_x + wobble / viewport.width;
        if !next_x.is_finite() || !next_y.is_finite() {
            return false;
        }
        self.wobble = wobble;
        self.cur_x = next_x;
        self.cur_y = next_y;
        self.points.push(Point::new(next_x, next_y));
        // A tip that has run off the bottom is done growing, whatever its cap.
        if self.is_past_bottom(viewport) {
            self.max_length = self.length();
            self.cur_y = self.limit_y();
        }
        true
    }

    #[inline]
    fn is_past_bottom(&self, viewport: Viewport) -> bool {
        self.cur_y > 1.0 + DRIP_EXIT_MARGIN_PX / viewport.height
    }

    /// Capped and with its tip run past the bottom edge of `viewport`.
    pub fn is_finished(&self, viewport: Viewport) -> bool {
        self.is_growth_complete() && self.is_past_bottom(viewport)
    }

    pub fn pixel_anchor(&self, viewport: Viewport) -> Point {
        viewport.denormalize(self.anchor())
    }

    pub fn pixel_points(&self, viewport: Viewport) -> impl Iterator<Item = Point> + '_ {
        self.points.iter().map(move |p| viewport.denormalize(*p))
    }
}
