//! Timer and task scheduling seam.
//!
//! The browser build schedules with `gloo_timers::callback::Timeout` and
//! spawns with `wasm_bindgen_futures::spawn_local` (see `web::runtime`).
//! `ManualRuntime` (tests and the `testing` feature) replaces both with a
//! virtual clock and a local executor so timing contracts can be asserted to
//! the millisecond.

#[cfg(test)]
#[path = "runtime_test.rs"]
mod runtime_test;

#[cfg(any(test, feature = "testing"))]
use std::cell::{Cell, RefCell};

#[cfg(any(test, feature = "testing"))]
use futures::executor::{LocalPool, LocalSpawner};
use futures::future::LocalBoxFuture;
#[cfg(any(test, feature = "testing"))]
use futures::task::LocalSpawnExt;

/// One-shot timer callback.
pub type Task = Box<dyn FnOnce()>;

pub trait Runtime {
    /// Run `task` once after `delay_ms`. Timers cannot be cancelled.
    fn schedule(&self, delay_ms: u32, task: Task);

    /// Drive `future` to completion on the current thread.
    fn spawn(&self, future: LocalBoxFuture<'static, ()>);
}

#[cfg(any(test, feature = "testing"))]
struct Timer {
    due_ms: u64,
    seq: u64,
    task: Task,
}

/// Deterministic runtime: time only moves through [`ManualRuntime::advance`].
#[cfg(any(test, feature = "testing"))]
pub struct ManualRuntime {
    now_ms: Cell<u64>,
    next_seq: Cell<u64>,
    timers: RefCell<Vec<Timer>>,
    pool: RefCell<LocalPool>,
    spawner: LocalSpawner,
}

#[cfg(any(test, feature = "testing"))]
impl Default for ManualRuntime {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl ManualRuntime {
    #[must_use]
    pub fn new() -> Self {
        let pool = LocalPool::new();
        let spawner = pool.spawner();
        Self {
            now_ms: Cell::new(0),
            next_seq: Cell::new(0),
            timers: RefCell::new(Vec::new()),
            pool: RefCell::new(pool),
            spawner,
        }
    }

    /// Virtual milliseconds elapsed since creation.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.borrow().len()
    }

    /// Poll spawned tasks until none can make progress.
    pub fn run_until_stalled(&self) {
        self.pool.borrow_mut().run_until_stalled();
    }

    /// Move the clock forward, firing due timers in deadline order.
    ///
    /// Timers scheduled by a firing timer run in the same call when their
    /// deadline falls inside the window. Spawned tasks are polled after each
    /// timer.
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        self.run_until_stalled();
        while let Some(timer) = self.pop_due(target) {
            self.now_ms.set(timer.due_ms);
            (timer.task)();
            self.run_until_stalled();
        }
        self.now_ms.set(target);
    }

    fn pop_due(&self, target: u64) -> Option<Timer> {
        let mut timers = self.timers.borrow_mut();
        let index = timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due_ms <= target)
            .min_by_key(|(_, timer)| (timer.due_ms, timer.seq))
            .map(|(index, _)| index)?;
        Some(timers.swap_remove(index))
    }
}

#[cfg(any(test, feature = "testing"))]
impl Runtime for ManualRuntime {
    fn schedule(&self, delay_ms: u32, task: Task) {
        let seq = self.next_seq.get();
        self.next_seq.set(seq + 1);
        let due_ms = self.now_ms.get() + u64::from(delay_ms);
        self.timers.borrow_mut().push(Timer { due_ms, seq, task });
    }

    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        if let Err(e) = self.spawner.spawn_local(future) {
            log::error!("failed to spawn task: {e}");
        }
    }
}
