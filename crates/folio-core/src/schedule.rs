//! Cancellable periodic tasks.
//!
//! A [`Scheduler`] turns a callback into a repeating task and hands back a
//! [`TaskHandle`]. Cancelling the handle (explicitly or by dropping it) stops
//! further deliveries synchronously. Callbacks are wrapped with a liveness
//! flag shared with the handle, so a tick the host had already queued when
//! the task was cancelled runs as a no-op.
//!
//! The browser implementation lives in the web crate; [`ManualScheduler`]
//! drives tasks from a virtual clock and is what host tests use.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

pub type TickFn = Box<dyn FnMut()>;

pub trait TaskHandle {
    /// Stop the task. Idempotent.
    fn cancel(&mut self);
    fn is_active(&self) -> bool;
}

pub trait Scheduler {
    type Handle: TaskHandle;

    /// Run `tick` every `period` until the returned handle is cancelled or dropped.
    fn every(&self, period: Duration, tick: TickFn) -> Self::Handle;
}

/// Shared flag tying a task handle to the callbacks it registered.
#[derive(Clone, Debug)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn kill(&self) {
        self.0.set(false);
    }

    /// Wrap `tick` so it does nothing once this flag is killed.
    pub fn guard(&self, mut tick: TickFn) -> TickFn {
        let alive = self.clone();
        Box::new(move || {
            if alive.is_alive() {
                tick();
            }
        })
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

struct ManualTask {
    period: Duration,
    next_due: Duration,
    alive: Liveness,
    tick: Rc<RefCell<TickFn>>,
}

#[derive(Default)]
struct ManualClock {
    now: Duration,
    tasks: Vec<ManualTask>,
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Ticks are delivered in due-time order (registration order on ties), one per
/// elapsed period, never reordered or duplicated.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<ManualClock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    pub fn active_tasks(&self) -> usize {
        self.clock
            .borrow()
            .tasks
            .iter()
            .filter(|t| t.alive.is_alive())
            .count()
    }

    /// Tasks still held by the scheduler, cancelled ones included until pruned.
    pub fn registered_tasks(&self) -> usize {
        self.clock.borrow().tasks.len()
    }

    /// Move the virtual clock forward by `by`, firing every tick that falls due.
    /// Returns the number of ticks delivered.
    ///
    /// Cancelled tasks are dropped first; a tick they had queued is considered
    /// delivered (as a no-op) before the clock moves.
    pub fn advance(&self, by: Duration) -> usize {
        self.prune();
        let target = self.now() + by;
        let mut fired = 0;
        loop {
            let next = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .tasks
                    .iter_mut()
                    .filter(|t| t.alive.is_alive() && t.next_due <= target)
                    .min_by_key(|t| t.next_due);
                match due {
                    Some(task) => {
                        let at = task.next_due;
                        task.next_due += task.period;
                        let tick = task.tick.clone();
                        clock.now = at;
                        Some(tick)
                    }
                    None => None,
                }
            };
            // The clock borrow is released here so the tick may register or cancel tasks.
            match next {
                Some(tick) => {
                    (*tick.borrow_mut())();
                    fired += 1;
                }
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
        fired
    }

    /// Invoke the callback of every cancelled task once, as a host would when a
    /// tick was already queued at cancellation time, then forget those tasks.
    /// Returns how many were invoked.
    pub fn fire_cancelled(&self) -> usize {
        let stale: Vec<_> = self
            .clock
            .borrow()
            .tasks
            .iter()
            .filter(|t| !t.alive.is_alive())
            .map(|t| t.tick.clone())
            .collect();
        for tick in &stale {
            (*tick.borrow_mut())();
        }
        self.prune();
        stale.len()
    }

    fn prune(&self) {
        self.clock
            .borrow_mut()
            .tasks
            .retain(|t| t.alive.is_alive());
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&self, period: Duration, tick: TickFn) -> ManualHandle {
        // A zero period would never let the clock move past the due time.
        let period = period.max(Duration::from_millis(1));
        let alive = Liveness::new();
        let mut clock = self.clock.borrow_mut();
        let next_due = clock.now + period;
        clock.tasks.push(ManualTask {
            period,
            next_due,
            alive: alive.clone(),
            tick: Rc::new(RefCell::new(alive.guard(tick))),
        });
        ManualHandle { alive }
    }
}

pub struct ManualHandle {
    alive: Liveness,
}

impl TaskHandle for ManualHandle {
    fn cancel(&mut self) {
        self.alive.kill();
    }

    fn is_active(&self) -> bool {
        self.alive.is_alive()
    }
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
