use std::cell::Cell;
use std::rc::Rc;

use super::*;

/// Stand-in timer handle that records its cancellation.
struct FakeTimer {
    cancelled: Rc<Cell<u32>>,
}

impl Drop for FakeTimer {
    fn drop(&mut self) {
        self.cancelled.set(self.cancelled.get() + 1);
    }
}

fn timer(cancelled: &Rc<Cell<u32>>) -> FakeTimer {
    FakeTimer { cancelled: Rc::clone(cancelled) }
}

#[test]
fn new_slot_is_empty() {
    let slot: TimerSlot<FakeTimer> = TimerSlot::new();
    assert!(!slot.is_armed());
}

#[test]
fn arm_with_starts_once() {
    let cancelled = Rc::new(Cell::new(0));
    let started = Cell::new(0);
    let mut slot = TimerSlot::new();

    assert!(slot.arm_with(|| {
        started.set(started.get() + 1);
        timer(&cancelled)
    }));
    assert!(!slot.arm_with(|| {
        started.set(started.get() + 1);
        timer(&cancelled)
    }));

    assert_eq!(started.get(), 1);
    assert_eq!(cancelled.get(), 0);
    assert!(slot.is_armed());
}

#[test]
fn disarm_cancels_and_allows_rearm() {
    let cancelled = Rc::new(Cell::new(0));
    let mut slot = TimerSlot::new();
    slot.arm_with(|| timer(&cancelled));

    assert!(slot.disarm());
    assert_eq!(cancelled.get(), 1);
    assert!(!slot.disarm());

    assert!(slot.arm_with(|| timer(&cancelled)));
}

#[test]
fn repeated_leave_without_enter_keeps_single_timer() {
    let cancelled = Rc::new(Cell::new(0));
    let mut slot = TimerSlot::new();
    let mut started = 0;
    for _ in 0..3 {
        if slot.arm_with(|| timer(&cancelled)) {
            started += 1;
        }
    }
    assert_eq!(started, 1);
    assert_eq!(cancelled.get(), 0);
}

#[test]
fn replace_cancels_previous() {
    let cancelled = Rc::new(Cell::new(0));
    let mut slot = TimerSlot::new();
    slot.replace(timer(&cancelled));
    slot.replace(timer(&cancelled));
    slot.replace(timer(&cancelled));
    assert_eq!(cancelled.get(), 2);
    assert!(slot.is_armed());
}

#[test]
fn dropping_slot_cancels_pending_timer() {
    let cancelled = Rc::new(Cell::new(0));
    {
        let mut slot = TimerSlot::new();
        slot.replace(timer(&cancelled));
    }
    assert_eq!(cancelled.get(), 1);
}
