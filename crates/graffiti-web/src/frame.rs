use crate::dom;
use crate::render;
use crate::Shared;
use graffiti_core::AutosaveClock;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub shared: Shared,
    pub painter: render::Painter,
    pub autosave: AutosaveClock,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let viewport = dom::canvas_viewport(&self.shared.canvas);
        {
            let mut scene = self.shared.scene.borrow_mut();
            scene.set_viewport(viewport);
            scene.tick();
        }

        if self.autosave.due(Instant::now()) && self.shared.scene.borrow().is_dirty() {
            self.shared.save();
        }

        let document = &self.shared.document;
        let blur = dom::is_checked(document, "blurEffect", false);
        let scene = self.shared.scene.borrow();
        self.painter.draw_scene(&scene, blur);

        // Live previews of the gestures still in progress.
        let pointer = self.shared.pointer.borrow();
        let finger = self.shared.finger.borrow();
        if !pointer.path.is_empty() || finger.is_drawing() {
            let style = dom::read_style(document);
            for path in [&pointer.path, finger.path()] {
                if !path.is_empty() {
                    self.painter.draw_preview(path.points(), &style);
                }
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    let tick = tick.borrow();
    if let Some(cb) = tick.as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame error: {:?}", e);
        }
    }
}
