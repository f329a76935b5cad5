use graffiti_core::{ActivePath, Point};

/// Pointer gesture in progress. Only one pointer draws at a time.
#[derive(Default, Clone, Debug)]
pub struct PointerStroke {
    pub pointer_id: Option<i32>,
    pub path: ActivePath,
}

impl PointerStroke {
    pub fn begin(&mut self, pointer_id: i32, p: Point) {
        self.pointer_id = Some(pointer_id);
        self.path.begin(p);
    }

    #[inline]
    pub fn owns(&self, pointer_id: i32) -> bool {
        self.pointer_id == Some(pointer_id)
    }

    /// End the gesture, handing back its points if there were any.
    pub fn finish(&mut self) -> Option<ActivePath> {
        self.pointer_id = None;
        if self.path.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.path))
        }
    }
}

/// Map a client-space position into canvas backing-store pixels, given the
/// canvas' on-page rect `(left, top, width, height)`.
#[inline]
pub fn client_to_canvas(
    client_x: f64,
    client_y: f64,
    rect: (f64, f64, f64, f64),
    canvas_w: f64,
    canvas_h: f64,
) -> Point {
    let (left, top, w, h) = rect;
    let sx = if w > 0.0 { canvas_w / w } else { 1.0 };
    let sy = if h > 0.0 { canvas_h / h } else { 1.0 };
    Point::new((client_x - left) * sx, (client_y - top) * sy)
}

/// Selfie cameras show a mirror image; flip x so the stroke follows the
/// finger the way the user sees it.
#[inline]
pub fn mirror_fingertip(x: f64, y: f64) -> Option<Point> {
    let p = Point::new(1.0 - x, y);
    p.is_finite().then_some(p)
}
