use crate::input;
use graffiti_core::{Point, StrokeStyle, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

// Backing-store size used while the canvas has not been laid out yet.
const FALLBACK_WIDTH: u32 = 800;
const FALLBACK_HEIGHT: u32 = 600;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Keep the backing store at the canvas' CSS size, so stroke widths and text
/// sizes read as CSS pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let rect = canvas.get_bounding_client_rect();
    let w_px = rect.width() as u32;
    let h_px = rect.height() as u32;
    canvas.set_width(if w_px > 0 { w_px } else { FALLBACK_WIDTH });
    canvas.set_height(if h_px > 0 { h_px } else { FALLBACK_HEIGHT });
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Viewport {
    Viewport::new(canvas.width() as f64, canvas.height() as f64)
}

/// Pointer position in canvas backing-store pixels.
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Point {
    let rect = canvas.get_bounding_client_rect();
    input::client_to_canvas(
        ev.client_x() as f64,
        ev.client_y() as f64,
        (rect.left(), rect.top(), rect.width(), rect.height()),
        canvas.width() as f64,
        canvas.height() as f64,
    )
}

fn input_element(document: &web::Document, id: &str) -> Option<web::HtmlInputElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
}

pub fn input_value(document: &web::Document, id: &str) -> String {
    input_element(document, id)
        .map(|el| el.value())
        .unwrap_or_default()
}

/// Checkbox state; a missing checkbox reads as `default`.
pub fn is_checked(document: &web::Document, id: &str, default: bool) -> bool {
    input_element(document, id)
        .map(|el| el.checked())
        .unwrap_or(default)
}

/// Current control-panel style.
pub fn read_style(document: &web::Document) -> StrokeStyle {
    StrokeStyle::from_controls(
        &input_value(document, "sprayColor"),
        &input_value(document, "sprayRadius"),
        &input_value(document, "textInput"),
        &input_value(document, "textSize"),
        &input_value(document, "textColor"),
    )
}

// Mirror each slider's value into its label.
pub fn wire_value_labels(document: &web::Document) {
    for (slider_id, label_id) in [
        ("sprayDensity", "densityVal"),
        ("sprayRadius", "radiusVal"),
        ("textSize", "textSizeVal"),
    ] {
        let (Some(slider), Some(label)) = (
            input_element(document, slider_id),
            document.get_element_by_id(label_id),
        ) else {
            continue;
        };
        let slider_read = slider.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            label.set_text_content(Some(&slider_read.value()));
        }) as Box<dyn FnMut()>);
        let _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
