//! Browser `setInterval` behind the core [`Scheduler`] trait.

use folio_core::{Liveness, Scheduler, TaskHandle, TickFn};
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct IntervalScheduler {
    window: web::Window,
}

impl IntervalScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every(&self, period: Duration, tick: TickFn) -> IntervalHandle {
        let alive = Liveness::new();
        let closure = Closure::wrap(alive.guard(tick));
        let ms = period.as_millis().min(i32::MAX as u128) as i32;
        let id = match self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            ) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("setInterval error: {:?}", e);
                alive.kill();
                None
            }
        };
        IntervalHandle {
            window: self.window.clone(),
            id,
            alive,
            _closure: closure,
        }
    }
}

/// Owns the interval id and its callback; the callback outlives the interval.
pub struct IntervalHandle {
    window: web::Window,
    id: Option<i32>,
    alive: Liveness,
    _closure: Closure<dyn FnMut()>,
}

impl TaskHandle for IntervalHandle {
    fn cancel(&mut self) {
        self.alive.kill();
        if let Some(id) = self.id.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    fn is_active(&self) -> bool {
        self.alive.is_alive() && self.id.is_some()
    }
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
