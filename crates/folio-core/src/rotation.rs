//! Timer-driven rotation of the orbit.
//!
//! [`RotationDriver::mount`] acquires a periodic task from a [`Scheduler`] and
//! returns a [`MountedRotation`] guard. The guard owns the task handle and the
//! rotation state; dropping it (or calling [`MountedRotation::unmount`])
//! cancels the task before anything else is released, so no tick can observe
//! torn-down state.

use crate::config::OrbitConfig;
use crate::schedule::{Scheduler, TaskHandle};
use std::cell::Cell;
use std::rc::Rc;

/// Accumulated rotation of a single mount.
///
/// The offset is derived from the tick count so that after `n` ticks it is
/// exactly `n * step`. It grows without wraparound; only its trigonometric
/// projection is ever observed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RotationState {
    ticks: u64,
    step_degrees: f64,
}

impl RotationState {
    pub fn new(step_degrees: f64) -> Self {
        Self {
            ticks: 0,
            step_degrees,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn offset_degrees(&self) -> f64 {
        self.ticks as f64 * self.step_degrees
    }

    #[inline]
    pub fn advance(&mut self) {
        self.ticks += 1;
    }
}

pub struct RotationDriver {
    config: OrbitConfig,
}

impl RotationDriver {
    pub fn new(config: OrbitConfig) -> Self {
        Self { config }
    }

    /// Start rotating. `on_tick` receives the new offset after every tick and is
    /// expected to re-render whatever depends on it.
    pub fn mount<S, F>(&self, scheduler: &S, mut on_tick: F) -> MountedRotation<S::Handle>
    where
        S: Scheduler,
        F: FnMut(f64) + 'static,
    {
        let state = Rc::new(Cell::new(RotationState::new(self.config.step_degrees)));
        let tick_state = state.clone();
        let handle = scheduler.every(
            self.config.tick_period,
            Box::new(move || {
                let mut s = tick_state.get();
                s.advance();
                tick_state.set(s);
                on_tick(s.offset_degrees());
            }),
        );
        log::debug!(
            "[orbit] rotation mounted: period={:?} step={}deg",
            self.config.tick_period,
            self.config.step_degrees
        );
        MountedRotation { handle, state }
    }
}

/// Live rotation; the periodic task runs for as long as this value exists.
pub struct MountedRotation<H: TaskHandle> {
    handle: H,
    state: Rc<Cell<RotationState>>,
}

impl<H: TaskHandle> MountedRotation<H> {
    pub fn offset_degrees(&self) -> f64 {
        self.state.get().offset_degrees()
    }

    pub fn ticks(&self) -> u64 {
        self.state.get().ticks()
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_active()
    }

    /// Stop rotating and discard the state.
    pub fn unmount(self) {
        drop(self);
    }
}

impl<H: TaskHandle> Drop for MountedRotation<H> {
    fn drop(&mut self) {
        self.handle.cancel();
        log::debug!("[orbit] rotation unmounted after {} ticks", self.ticks());
    }
}
