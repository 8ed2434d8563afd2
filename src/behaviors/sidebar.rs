//! Mobile sidebar toggle driven by `#menuToggle`.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::consts::SIDEBAR_OPEN_CLASS;
use crate::dom::Dom;

/// Flip the sidebar's open state; returns whether it is open afterwards.
pub fn toggle<D: Dom>(dom: &D, sidebar: &D::Node) -> bool {
    dom.toggle_class(sidebar, SIDEBAR_OPEN_CLASS)
}
