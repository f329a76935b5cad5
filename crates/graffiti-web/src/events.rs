use crate::dom;
use crate::Shared;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Commit whatever the pointer drew and save right away.
fn finish_pointer_stroke(shared: &Shared) {
    let Some(path) = shared.pointer.borrow_mut().finish() else {
        return;
    };
    let style = dom::read_style(&shared.document);
    let committed = shared
        .scene
        .borrow_mut()
        .commit_stroke(&path, &style)
        .is_some();
    if committed {
        shared.save();
    }
}

fn add_pointer_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::PointerEvent) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_pointer_handlers(shared: &Shared) {
    let canvas_target: &web::EventTarget = shared.canvas.as_ref();

    // pointerdown
    {
        let s = shared.clone();
        add_pointer_listener(canvas_target, "pointerdown", move |ev| {
            if ev.button() != 0 || !dom::is_checked(&s.document, "sprayToggle", true) {
                return;
            }
            let pos = dom::pointer_canvas_px(&ev, &s.canvas);
            s.pointer.borrow_mut().begin(ev.pointer_id(), pos);
            let _ = s.canvas.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        });
    }

    // pointermove
    {
        let s = shared.clone();
        add_pointer_listener(canvas_target, "pointermove", move |ev| {
            let mut pointer = s.pointer.borrow_mut();
            if !pointer.owns(ev.pointer_id()) {
                return;
            }
            let pos = dom::pointer_canvas_px(&ev, &s.canvas);
            pointer.path.push(pos);
            ev.prevent_default();
        });
    }

    // pointerup / pointercancel / pointerleave all end the gesture
    for event in ["pointerup", "pointercancel", "pointerleave"] {
        let s = shared.clone();
        add_pointer_listener(canvas_target, event, move |ev| {
            if !s.pointer.borrow().owns(ev.pointer_id()) {
                return;
            }
            if ev.type_() == "pointerup" && ev.button() != 0 {
                return;
            }
            finish_pointer_stroke(&s);
        });
    }
}

pub fn wire_reset_button(shared: &Shared) {
    let s = shared.clone();
    dom::add_click_listener(&shared.document, "resetBtn", move || {
        s.pointer.borrow_mut().finish();
        s.finger.borrow_mut().cancel();
        let mut scene = s.scene.borrow_mut();
        s.persistence.borrow_mut().reset(&mut scene);
    });
}

// Save on the way out, so the last second of paint is not lost.
pub fn wire_lifecycle_saves(shared: &Shared) {
    let s = shared.clone();
    let on_hide = Closure::wrap(Box::new(move || {
        finish_pointer_stroke(&s);
        s.save();
    }) as Box<dyn FnMut()>);
    let _ = shared
        .document
        .add_event_listener_with_callback("visibilitychange", on_hide.as_ref().unchecked_ref());
    if let Some(window) = web::window() {
        let _ = window.add_event_listener_with_callback("pagehide", on_hide.as_ref().unchecked_ref());
    }
    on_hide.forget();
}
