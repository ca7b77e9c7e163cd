//! Decorative background object: acquisition and teardown.
//!
//! [`mount`] creates every resource the object needs (GPU state, window
//! listeners, the animation loop) and returns them inside one
//! [`FloatingScene`]. Dropping it releases all of them, frame loop first.

use crate::dom::{self, Listener};
use crate::frame::{AnimationLoop, FrameContext};
use crate::render;
use folio_core::scene::{Camera, FloatingObject};
use folio_core::SceneConfig;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FloatingScene {
    frame_loop: Option<AnimationLoop>,
    listeners: Vec<Listener>,
    ctx: Option<Rc<RefCell<FrameContext>>>,
}

pub async fn mount(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    config: &SceneConfig,
) -> anyhow::Result<FloatingScene> {
    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let gpu = render::GpuState::new(canvas.clone(), config).await?;
    let camera = Camera::from_config(config, canvas.width() as f32, canvas.height() as f32);
    let ctx = Rc::new(RefCell::new(FrameContext {
        object: FloatingObject::new(*config),
        camera,
        canvas: canvas.clone(),
        gpu,
    }));

    let mut listeners = Vec::with_capacity(2);
    {
        let ctx_pointer = ctx.clone();
        let window_pointer = window.clone();
        listeners.push(Listener::new(window, "mousemove", move |ev| {
            if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
                ctx_pointer.borrow_mut().pointer_moved(
                    me.client_x() as f32,
                    me.client_y() as f32,
                    &window_pointer,
                );
            }
        })?);
    }
    {
        // The frame reads the backing size and updates camera aspect and surface.
        let canvas_resize = canvas.clone();
        listeners.push(Listener::new(window, "resize", move |_| {
            dom::sync_canvas_backing_size(&canvas_resize);
        })?);
    }

    let ctx_tick = ctx.clone();
    let frame_loop = AnimationLoop::start(move |_timestamp| {
        ctx_tick.borrow_mut().frame();
        true
    })?;
    log::info!("[scene] floating object mounted");

    Ok(FloatingScene {
        frame_loop: Some(frame_loop),
        listeners,
        ctx: Some(ctx),
    })
}

impl FloatingScene {
    pub fn is_running(&self) -> bool {
        self.frame_loop
            .as_ref()
            .map(AnimationLoop::is_running)
            .unwrap_or(false)
    }
}

impl Drop for FloatingScene {
    fn drop(&mut self) {
        // Stop frames before releasing anything a frame would touch.
        drop(self.frame_loop.take());
        self.listeners.clear();
        if let Some(ctx) = self.ctx.take() {
            match Rc::try_unwrap(ctx) {
                Ok(cell) => drop(cell.into_inner()),
                Err(_) => log::warn!("[scene] frame context still shared at teardown"),
            }
        }
        log::info!("[scene] floating object unmounted");
    }
}
