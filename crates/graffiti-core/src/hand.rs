//! Fingertip drawing from a hand-landmark detector.
//!
//! The detector is a capability behind [`HandTracker`]; the wall works the
//! same with [`NoHandTracker`], where only pointer input ever draws.

use crate::geometry::{ActivePath, Point};
use crate::scene::{CommitReport, Scene};
use crate::stroke::StrokeStyle;

pub trait HandTracker {
    type Frame: ?Sized;

    /// Normalized fingertip position in `frame`, if a hand is visible.
    fn detect(&mut self, frame: &Self::Frame, timestamp_ms: f64) -> Option<Point>;
}

/// Tracker for hosts without a camera or detector.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHandTracker;

impl HandTracker for NoHandTracker {
    type Frame = ();

    fn detect(&mut self, _frame: &(), _timestamp_ms: f64) -> Option<Point> {
        None
    }
}

/// In-progress stroke driven by fingertip detections.
#[derive(Clone, Debug, Default)]
pub struct FingerStroke {
    path: ActivePath,
}

impl FingerStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(&self) -> &ActivePath {
        &self.path
    }

    pub fn is_drawing(&self) -> bool {
        !self.path.is_empty()
    }

    /// Feed one detection result. A visible fingertip extends the path; losing
    /// the hand commits it once. Losing it again with nothing drawn is a no-op.
    pub fn on_detection(
        &mut self,
        tip: Option<Point>,
        scene: &mut Scene,
        style: &StrokeStyle,
    ) -> Option<CommitReport> {
        match tip {
            Some(norm) => {
                let px = scene.viewport().denormalize(norm);
                if self.path.is_empty() {
                    if px.is_finite() {
                        self.path.begin(px);
                    }
                } else {
                    self.path.push(px);
                }
                None
            }
            None => {
                if self.path.is_empty() {
                    return None;
                }
                let report = scene.commit_stroke(&self.path, style);
                self.path.clear();
                report
            }
        }
    }

    /// Run the tracker on `frame` and feed the result.
    pub fn poll<T: HandTracker>(
        &mut self,
        tracker: &mut T,
        frame: &T::Frame,
        timestamp_ms: f64,
        scene: &mut Scene,
        style: &StrokeStyle,
    ) -> Option<CommitReport> {
        let tip = tracker.detect(frame, timestamp_ms);
        self.on_detection(tip, scene, style)
    }

    /// Drop the in-progress path without committing it.
    pub fn cancel(&mut self) {
        self.path.clear();
    }
}
