//! Fingertip drawing through a MediaPipe-style hand landmarker.
//!
//! The page owns the camera stream (`<video id="camera">`) and loads the
//! detector into `window.graffitiHandLandmarker`. Either may be missing or
//! still loading; detection then simply reports no hand.

use crate::dom;
use crate::input;
use crate::Shared;
use graffiti_core::{HandTracker, Point, CAMERA_POLL_INTERVAL_MS};
use js_sys::{Array, Function, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

const LANDMARKER_GLOBAL: &str = "graffitiHandLandmarker";
const INDEX_FINGER_TIP: u32 = 8;
// HTMLMediaElement.HAVE_CURRENT_DATA
const HAVE_CURRENT_DATA: u16 = 2;

pub struct JsHandTracker {
    window: web::Window,
}

impl JsHandTracker {
    fn landmarker(&self) -> Option<JsValue> {
        Reflect::get(&self.window, &JsValue::from_str(LANDMARKER_GLOBAL))
            .ok()
            .filter(|v| v.is_object())
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

// `result.landmarks[0][8]`, the index fingertip of the first hand.
fn fingertip(result: &JsValue) -> Option<Point> {
    let hands = get(result, "landmarks")?.dyn_into::<Array>().ok()?;
    let hand = hands.get(0).dyn_into::<Array>().ok()?;
    let tip = hand.get(INDEX_FINGER_TIP);
    let x = get(&tip, "x")?.as_f64()?;
    let y = get(&tip, "y")?.as_f64()?;
    input::mirror_fingertip(x, y)
}

impl HandTracker for JsHandTracker {
    type Frame = web::HtmlVideoElement;

    fn detect(&mut self, video: &web::HtmlVideoElement, timestamp_ms: f64) -> Option<Point> {
        if video.ready_state() < HAVE_CURRENT_DATA {
            return None;
        }
        let landmarker = self.landmarker()?;
        let detect = get(&landmarker, "detectForVideo")?.dyn_into::<Function>().ok()?;
        match detect.call2(&landmarker, video, &JsValue::from_f64(timestamp_ms)) {
            Ok(result) => fingertip(&result),
            Err(e) => {
                log::warn!("[camera] detect failed: {:?}", e);
                None
            }
        }
    }
}

/// Poll the detector on its own timer, independent of the frame rate. Does
/// nothing when the page has no camera element.
pub fn start_polling(shared: &Shared) {
    let Some(window) = web::window() else {
        return;
    };
    let Some(video) = shared
        .document
        .get_element_by_id("camera")
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
    else {
        log::info!("[camera] no #camera element; pointer input only");
        return;
    };

    let mut tracker = JsHandTracker {
        window: window.clone(),
    };
    let s = shared.clone();
    let poll = Closure::wrap(Box::new(move || {
        let enabled = dom::is_checked(&s.document, "cameraToggle", false)
            && dom::is_checked(&s.document, "sprayToggle", true);
        let style = dom::read_style(&s.document);
        let report = {
            let mut scene = s.scene.borrow_mut();
            let mut finger = s.finger.borrow_mut();
            if enabled {
                finger.poll(&mut tracker, &video, js_sys::Date::now(), &mut scene, &style)
            } else {
                // Switching the camera off counts as losing the hand.
                finger.on_detection(None, &mut scene, &style)
            }
        };
        if report.is_some() {
            s.save();
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        poll.as_ref().unchecked_ref(),
        CAMERA_POLL_INTERVAL_MS,
    ) {
        log::error!("[camera] setInterval error: {:?}", e);
    }
    poll.forget();
}
