use crate::dom;
use crate::render;
use anyhow::anyhow;
use folio_core::scene::{pointer_to_ndc, Camera, FloatingObject};
use folio_core::Liveness;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame state of the background object.
pub struct FrameContext {
    pub object: FloatingObject,
    pub camera: Camera,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: render::GpuState,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.object.step(js_sys::Date::now());

        let w = self.canvas.width();
        let h = self.canvas.height();
        self.camera.set_viewport(w as f32, h as f32);
        self.gpu.resize_if_needed(w, h);
        if let Err(e) = self
            .gpu
            .render(&self.camera, self.object.outer(), self.object.inner())
        {
            log::error!("render error: {:?}", e);
        }
    }

    pub fn pointer_moved(&mut self, client_x: f32, client_y: f32, window: &web::Window) {
        let (vw, vh) = dom::viewport_size(window);
        self.object
            .set_pointer_ndc(pointer_to_ndc(client_x, client_y, vw as f32, vh as f32));
    }
}

struct LoopInner {
    window: web::Window,
    alive: Liveness,
    request_id: Cell<Option<i32>>,
    closure: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopInner {
    fn request_next(&self) {
        if !self.alive.is_alive() {
            return;
        }
        if let Some(c) = self.closure.borrow().as_ref() {
            match self.window.request_animation_frame(c.as_ref().unchecked_ref()) {
                Ok(id) => self.request_id.set(Some(id)),
                Err(e) => {
                    log::error!("requestAnimationFrame error: {:?}", e);
                    self.alive.kill();
                }
            }
        }
    }

    fn cancel(&self) {
        self.alive.kill();
        if let Some(id) = self.request_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// A `requestAnimationFrame` loop that stops when dropped or when the frame
/// callback returns `false`.
pub struct AnimationLoop {
    inner: Rc<LoopInner>,
}

impl AnimationLoop {
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow!("no window"))?;
        let inner = Rc::new(LoopInner {
            window,
            alive: Liveness::new(),
            request_id: Cell::new(None),
            closure: RefCell::new(None),
        });
        // Weak so the closure stored inside `inner` does not keep it alive.
        let weak: Weak<LoopInner> = Rc::downgrade(&inner);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.request_id.set(None);
            if !inner.alive.is_alive() {
                return;
            }
            if frame(timestamp) {
                inner.request_next();
            } else {
                inner.alive.kill();
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.closure.borrow_mut() = Some(closure);
        inner.request_next();
        Ok(Self { inner })
    }

    pub fn is_running(&self) -> bool {
        self.inner.alive.is_alive()
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.inner.cancel();
    }
}
