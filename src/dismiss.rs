//! Timed fade-then-remove sequence shared by alerts and toasts.

#[cfg(test)]
#[path = "dismiss_test.rs"]
mod dismiss_test;

use std::rc::Rc;

use crate::consts::{FADED_OPACITY, FADED_TRANSFORM};
use crate::dom::Dom;
use crate::runtime::Runtime;

/// After `delay_ms`, fade `node` out; after a further `fade_ms`, remove it.
///
/// Nothing here can be cancelled: once scheduled, the node is gone by
/// `delay_ms + fade_ms`.
pub fn schedule_dismiss<D, R>(dom: &Rc<D>, runtime: &Rc<R>, node: D::Node, delay_ms: u32, fade_ms: u32)
where
    D: Dom + 'static,
    R: Runtime + 'static,
{
    let dom = Rc::clone(dom);
    let rt = Rc::clone(runtime);
    runtime.schedule(
        delay_ms,
        Box::new(move || {
            dom.set_style(&node, "opacity", FADED_OPACITY);
            dom.set_style(&node, "transform", FADED_TRANSFORM);
            rt.schedule(fade_ms, Box::new(move || dom.remove(&node)));
        }),
    );
}
