#![cfg(target_arch = "wasm32")]
use graffiti_core::{AutosaveClock, FingerStroke, Persistence, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod dom;
mod events;
mod frame;
mod input;
mod render;
mod storage;

/// State shared between the event closures, the camera timer and the frame
/// loop. Everything runs on the page's single callback queue, so plain
/// `Rc<RefCell<_>>` is enough.
#[derive(Clone)]
pub(crate) struct Shared {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub persistence: Rc<RefCell<Persistence>>,
    pub pointer: Rc<RefCell<input::PointerStroke>>,
    pub finger: Rc<RefCell<FingerStroke>>,
}

impl Shared {
    /// Save now; failures are logged inside and never surface here.
    pub fn save(&self) {
        let mut scene = self.scene.borrow_mut();
        self.persistence.borrow_mut().save(&mut scene);
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("graffiti-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);
    let painter = render::Painter::new(&canvas)?;

    let mut scene = Scene::new(dom::canvas_viewport(&canvas));
    let persistence = Persistence::new(
        Box::new(storage::WebStorage::local()),
        Box::new(storage::WebStorage::session()),
    );
    // Restore before the first frame so the wall never flashes empty.
    if !persistence.load_into(&mut scene) {
        log::info!("[persist] no saved wall; starting empty");
    }

    let shared = Shared {
        document: document.clone(),
        canvas: canvas.clone(),
        scene: Rc::new(RefCell::new(scene)),
        persistence: Rc::new(RefCell::new(persistence)),
        pointer: Rc::new(RefCell::new(input::PointerStroke::default())),
        finger: Rc::new(RefCell::new(FingerStroke::new())),
    };

    dom::wire_value_labels(&document);
    events::wire_pointer_handlers(&shared);
    events::wire_reset_button(&shared);
    events::wire_lifecycle_saves(&shared);
    camera::start_polling(&shared);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        shared,
        painter,
        autosave: AutosaveClock::default(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
