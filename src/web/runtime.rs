use futures::future::LocalBoxFuture;
use gloo_timers::callback::Timeout;

use crate::runtime::{Runtime, Task};

/// Browser event-loop runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooRuntime;

impl Runtime for GlooRuntime {
    fn schedule(&self, delay_ms: u32, task: Task) {
        Timeout::new(delay_ms, task).forget();
    }

    fn spawn(&self, future: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(future);
    }
}
