//! Timer ownership.
//!
//! Browser timers (`gloo_timers` `Timeout` / `Interval`) cancel when dropped,
//! so holding one in a slot is the same as keeping it armed. A slot holds at
//! most one handle: debouncing replaces it, autoplay arms it only if empty.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

/// Owner of at most one pending timer handle.
#[derive(Debug)]
pub struct TimerSlot<T> {
    handle: Option<T>,
}

impl<T> Default for TimerSlot<T> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<T> TimerSlot<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Arm with the handle built by `start`, unless already armed.
    ///
    /// Returns `true` if a new timer was started. `start` is not called when
    /// the slot is occupied, so no second timer ever exists.
    pub fn arm_with(&mut self, start: impl FnOnce() -> T) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = Some(start());
        true
    }

    /// Cancel any pending timer, then hold `handle` instead.
    pub fn replace(&mut self, handle: T) {
        self.disarm();
        self.handle = Some(handle);
    }

    /// Cancel the pending timer. Returns `true` if one was armed.
    pub fn disarm(&mut self) -> bool {
        self.handle.take().is_some()
    }
}
