// Host-side tests for the rotation driver and the scheduled-task abstraction,
// driven by the deterministic manual scheduler.

use folio_core::content::orbit_items;
use folio_core::{
    ManualScheduler, Orbit, OrbitConfig, RotationDriver, RotationState, Scheduler, TaskHandle,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(50);

fn ticks(n: u32) -> Duration {
    TICK * n
}

#[test]
fn rotation_state_offset_is_tick_count_times_step() {
    let mut s = RotationState::new(1.0);
    assert_eq!(s.offset_degrees(), 0.0);
    for _ in 0..1000 {
        s.advance();
    }
    assert_eq!(s.ticks(), 1000);
    assert_eq!(s.offset_degrees(), 1000.0);

    let mut half = RotationState::new(0.1);
    for _ in 0..30 {
        half.advance();
    }
    assert_eq!(half.offset_degrees(), 30.0 * 0.1);
}

#[test]
fn offset_advances_one_step_per_tick() {
    let scheduler = ManualScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_tick = seen.clone();
    let driver = RotationDriver::new(OrbitConfig::default());
    let rotation = driver.mount(&scheduler, move |o| seen_tick.borrow_mut().push(o));

    assert_eq!(rotation.offset_degrees(), 0.0);
    assert_eq!(scheduler.advance(ticks(7)), 7);
    assert_eq!(rotation.ticks(), 7);
    assert_eq!(rotation.offset_degrees(), 7.0);
    assert_eq!(*seen.borrow(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
}

#[test]
fn partial_periods_do_not_tick_early() {
    let scheduler = ManualScheduler::new();
    let driver = RotationDriver::new(OrbitConfig::default());
    let rotation = driver.mount(&scheduler, |_| {});

    assert_eq!(scheduler.advance(Duration::from_millis(49)), 0);
    assert_eq!(rotation.offset_degrees(), 0.0);
    assert_eq!(scheduler.advance(Duration::from_millis(1)), 1);
    assert_eq!(rotation.offset_degrees(), 1.0);
    assert_eq!(scheduler.advance(Duration::from_millis(125)), 2);
    assert_eq!(rotation.offset_degrees(), 3.0);
}

#[test]
fn ninety_ticks_turn_first_item_a_quarter() {
    let scheduler = ManualScheduler::new();
    let orbit = Rc::new(Orbit::new(orbit_items(), OrbitConfig::default()).unwrap());
    let last = Rc::new(Cell::new((0.0, 0.0)));
    let (orbit_tick, last_tick) = (orbit.clone(), last.clone());
    let driver = RotationDriver::new(*orbit.config());
    let rotation = driver.mount(&scheduler, move |offset| {
        let p = orbit_tick.layout(offset)[0];
        last_tick.set((p.x, p.y));
    });

    scheduler.advance(ticks(90));
    assert_eq!(rotation.offset_degrees(), 90.0);
    let (x, y) = last.get();
    assert!(x.abs() < 1e-9, "x = {x}");
    assert!((y - 120.0).abs() < 1e-9, "y = {y}");
}

#[test]
fn unmount_stops_ticks() {
    let scheduler = ManualScheduler::new();
    let count = Rc::new(Cell::new(0u32));
    let last_offset = Rc::new(Cell::new(0.0));
    let (count_tick, last_tick) = (count.clone(), last_offset.clone());
    let driver = RotationDriver::new(OrbitConfig::default());
    let rotation = driver.mount(&scheduler, move |o| {
        count_tick.set(count_tick.get() + 1);
        last_tick.set(o);
    });

    scheduler.advance(ticks(10));
    assert!(rotation.is_active());
    rotation.unmount();
    assert_eq!(scheduler.active_tasks(), 0);

    assert_eq!(scheduler.advance(ticks(100)), 0);
    assert_eq!(count.get(), 10);
    assert_eq!(last_offset.get(), 10.0);
}

#[test]
fn queued_tick_after_teardown_is_a_no_op() {
    let scheduler = ManualScheduler::new();
    let count = Rc::new(Cell::new(0u32));
    let count_tick = count.clone();
    let driver = RotationDriver::new(OrbitConfig::default());
    let rotation = driver.mount(&scheduler, move |_| count_tick.set(count_tick.get() + 1));
    scheduler.advance(ticks(3));
    drop(rotation);

    // the host delivers a tick that was already queued
    assert_eq!(scheduler.fire_cancelled(), 1);
    assert_eq!(count.get(), 3);
}

#[test]
fn remount_restarts_from_zero() {
    let scheduler = ManualScheduler::new();
    let driver = RotationDriver::new(OrbitConfig::default());

    let first = driver.mount(&scheduler, |_| {});
    scheduler.advance(ticks(40));
    assert_eq!(first.offset_degrees(), 40.0);
    drop(first);

    let second = driver.mount(&scheduler, |_| {});
    assert_eq!(second.offset_degrees(), 0.0);
    scheduler.advance(ticks(5));
    assert_eq!(second.offset_degrees(), 5.0);
}

#[test]
fn custom_cadence_and_step() {
    let scheduler = ManualScheduler::new();
    let config = OrbitConfig {
        tick_period: Duration::from_millis(100),
        step_degrees: 2.5,
        ..OrbitConfig::default()
    };
    let rotation = RotationDriver::new(config).mount(&scheduler, |_| {});
    scheduler.advance(Duration::from_secs(1));
    assert_eq!(rotation.ticks(), 10);
    assert_eq!(rotation.offset_degrees(), 25.0);
}

#[test]
fn cancel_is_idempotent_and_drop_cancels() {
    let scheduler = ManualScheduler::new();
    let count = Rc::new(Cell::new(0u32));

    let c = count.clone();
    let mut handle = scheduler.every(TICK, Box::new(move || c.set(c.get() + 1)));
    assert!(handle.is_active());
    handle.cancel();
    handle.cancel();
    assert!(!handle.is_active());

    let c = count.clone();
    let dropped = scheduler.every(TICK, Box::new(move || c.set(c.get() + 1)));
    drop(dropped);

    scheduler.advance(ticks(20));
    assert_eq!(count.get(), 0);
    assert_eq!(scheduler.active_tasks(), 0);
}

#[test]
fn ticks_from_several_tasks_arrive_in_due_order() {
    let scheduler = ManualScheduler::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    let l = log.clone();
    let _fast = scheduler.every(
        Duration::from_millis(20),
        Box::new(move || l.borrow_mut().push("fast")),
    );
    let l = log.clone();
    let _slow = scheduler.every(
        Duration::from_millis(50),
        Box::new(move || l.borrow_mut().push("slow")),
    );

    scheduler.advance(Duration::from_millis(100));
    assert_eq!(
        *log.borrow(),
        vec!["fast", "fast", "slow", "fast", "fast", "fast", "slow"]
    );
    assert_eq!(scheduler.now(), Duration::from_millis(100));
}

#[test]
fn a_tick_may_cancel_another_task() {
    let scheduler = ManualScheduler::new();
    let victim_count = Rc::new(Cell::new(0u32));
    let v = victim_count.clone();
    let victim = Rc::new(RefCell::new(Some(
        scheduler.every(Duration::from_millis(30), Box::new(move || v.set(v.get() + 1))),
    )));

    let victim_slot = victim.clone();
    let _killer = scheduler.every(
        Duration::from_millis(40),
        Box::new(move || {
            victim_slot.borrow_mut().take();
        }),
    );

    scheduler.advance(Duration::from_millis(200));
    // only the tick at 30ms lands before the cancel at 40ms
    assert_eq!(victim_count.get(), 1);
}

#[test]
fn cancelled_tasks_are_pruned_across_remounts() {
    let scheduler = ManualScheduler::new();
    let driver = RotationDriver::new(OrbitConfig::default());
    for _ in 0..100 {
        let rotation = driver.mount(&scheduler, |_| {});
        scheduler.advance(ticks(2));
        assert_eq!(rotation.offset_degrees(), 2.0);
    }
    // the last mount was dropped at the end of the loop body
    assert_eq!(scheduler.registered_tasks(), 1);
    scheduler.advance(TICK);
    assert_eq!(scheduler.registered_tasks(), 0);
}

#[test]
fn fired_cancelled_tasks_are_forgotten() {
    let scheduler = ManualScheduler::new();
    let count = Rc::new(Cell::new(0u32));
    let c = count.clone();
    drop(scheduler.every(TICK, Box::new(move || c.set(c.get() + 1))));

    assert_eq!(scheduler.registered_tasks(), 1);
    assert_eq!(scheduler.fire_cancelled(), 1);
    assert_eq!(scheduler.registered_tasks(), 0);
    assert_eq!(scheduler.fire_cancelled(), 0);
    assert_eq!(count.get(), 0);
}
