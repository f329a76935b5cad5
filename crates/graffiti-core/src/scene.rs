//! The wall: every committed stroke and every running drip, in drawing order.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::drip::Drip;
use crate::geometry::{ActivePath, Viewport};
use crate::spawn::spawn_drips;
use crate::stroke::{Stroke, StrokeStyle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitReport {
    pub stroke_index: usize,
    pub drips_spawned: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub grown: usize,
    pub removed: usize,
}

pub struct Scene {
    strokes: Vec<Stroke>,
    drips: Vec<Drip>,
    viewport: Viewport,
    rng: StdRng,
    dirty: bool,
}

impl Scene {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_rng(viewport, StdRng::from_entropy())
    }

    /// Deterministic scene; handy for tests and replays.
    pub fn with_seed(viewport: Viewport, seed: u64) -> Self {
        Self::with_rng(viewport, StdRng::seed_from_u64(seed))
    }

    fn with_rng(viewport: Viewport, rng: StdRng) -> Self {
        Self {
            strokes: Vec::new(),
            drips: Vec::new(),
            viewport,
            rng,
            dirty: false,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn drips(&self) -> &[Drip] {
        &self.drips
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.drips.is_empty()
    }

    /// Whether anything changed since the last [`Scene::mark_saved`].
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Turn a finished gesture into a stroke and let it drip.
    ///
    /// Returns `None`, leaving the scene untouched, for an empty path or one
    /// that cannot be normalized against the current viewport.
    pub fn commit_stroke(&mut self, path: &ActivePath, style: &StrokeStyle) -> Option<CommitReport> {
        let stroke = Stroke::commit(path, style, self.viewport)?;
        let drips = spawn_drips(path.points(), &stroke.spray_color, self.viewport, &mut self.rng);
        let report = CommitReport {
            stroke_index: self.strokes.len(),
            drips_spawned: drips.len(),
        };
        log::debug!(
            "[scene] stroke #{} points={} len={:.1} chars={} drips={}",
            report.stroke_index,
            stroke.path.len(),
            stroke.total_len,
            stroke.num_chars,
            report.drips_spawned
        );
        self.strokes.push(stroke);
        self.drips.extend(drips);
        self.dirty = true;
        Some(report)
    }

    /// One animation frame: grow every drip, then drop the finished ones.
    pub fn tick(&mut self) -> TickReport {
        let viewport = self.viewport;
        let mut grown = 0;
        for drip in self.drips.iter_mut() {
            if drip.advance(viewport, &mut self.rng) {
                grown += 1;
            }
        }
        let before = self.drips.len();
        self.drips.retain(|d| !d.is_finished(viewport));
        let removed = before - self.drips.len();
        if grown > 0 || removed > 0 {
            self.dirty = true;
        }
        TickReport { grown, removed }
    }

    /// Wipe the wall. Stored snapshots are cleared by the persistence layer.
    pub fn reset(&mut self) {
        self.strokes.clear();
        self.drips.clear();
        self.dirty = true;
        log::info!("[scene] reset");
    }

    /// Replace the contents with restored state.
    pub fn restore(&mut self, strokes: Vec<Stroke>, drips: Vec<Drip>) {
        self.strokes = strokes;
        self.drips = drips;
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn tick_does_not_touch_strokes() {
        let mut scene = Scene::with_seed(Viewport::new(800.0, 600.0), 3);
        let mut path = ActivePath::new();
        path.begin(Point::new(100.0, 100.0));
        path.push(Point::new(300.0, 100.0));
        scene.commit_stroke(&path, &StrokeStyle::default());
        let strokes = scene.strokes().to_vec();
        for _ in 0..50 {
            scene.tick();
        }
        assert_eq!(scene.strokes(), &strokes[..]);
    }
}
