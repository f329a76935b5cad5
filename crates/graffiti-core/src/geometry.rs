//! Polyline helpers and the two coordinate spaces a path lives in.
//!
//! While a gesture is in progress its points are absolute canvas pixels
//! ([`ActivePath`]). Once committed they are divided by the canvas size at that
//! moment ([`CommittedPath`]) so the drawing replays at any later viewport size.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::MIN_POINT_SPACING_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        DVec2::from(self).distance(DVec2::from(other))
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        DVec2::new(p.x, p.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

/// Canvas backing-store size in pixels. Either side may read as 0 while the
/// page is laying out, so conversions through it can yield non-finite values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn normalize(&self, p: Point) -> Point {
        Point::new(p.x / self.width, p.y / self.height)
    }

    #[inline]
    pub fn denormalize(&self, p: Point) -> Point {
        Point::new(p.x * self.width, p.y * self.height)
    }
}

/// Sum of the Euclidean lengths of consecutive segments.
pub fn path_length(path: &[Point]) -> f64 {
    path.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Point at arc length `d` along `path`.
///
/// `d <= 0` gives the first point and `d` past the end gives the last one.
/// Returns `None` only for an empty path.
pub fn point_at_distance(path: &[Point], d: f64) -> Option<Point> {
    let first = *path.first()?;
    if path.len() == 1 || d <= 0.0 {
        return Some(first);
    }
    let mut acc = 0.0;
    for w in path.windows(2) {
        let seg = w[0].distance(w[1]);
        if seg > 0.0 && acc + seg >= d {
            let t = (d - acc) / seg;
            return Some(DVec2::from(w[0]).lerp(DVec2::from(w[1]), t).into());
        }
        acc += seg;
    }
    path.last().copied()
}

/// Pixel-space path of the gesture currently being drawn.
#[derive(Clone, Debug, Default)]
pub struct ActivePath {
    points: Vec<Point>,
}

impl ActivePath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh gesture at `p`, dropping anything left over. A
    /// non-finite `p` leaves the path empty.
    pub fn begin(&mut self, p: Point) {
        self.points.clear();
        if p.is_finite() {
            self.points.push(p);
        }
    }

    /// Append `p` unless it sits within a pixel of the previous point.
    /// Returns whether the point was kept.
    pub fn push(&mut self, p: Point) -> bool {
        if !p.is_finite() {
            return false;
        }
        if let Some(last) = self.points.last() {
            if last.distance(p) <= MIN_POINT_SPACING_PX {
                return false;
            }
        }
        self.points.push(p);
        true
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn length(&self) -> f64 {
        path_length(&self.points)
    }

    /// The one conversion from pixel space into normalized space. Points that
    /// do not normalize to finite values are dropped individually.
    pub fn commit(&self, viewport: Viewport) -> CommittedPath {
        CommittedPath::from_normalized(self.points.iter().map(|p| viewport.normalize(*p)))
    }
}

/// Normalized path owned by a stroke. Every point is finite.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommittedPath {
    points: Vec<Point>,
}

impl CommittedPath {
    pub fn from_normalized(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().filter(Point::is_finite).collect(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_pixels(&self, viewport: Viewport) -> Vec<Point> {
        self.points.iter().map(|p| viewport.denormalize(*p)).collect()
    }
}
