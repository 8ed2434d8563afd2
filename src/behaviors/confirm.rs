//! Confirm-before-action for `[data-confirm]` elements.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

use crate::consts::CONFIRM_ATTR;
use crate::dom::Dom;
use crate::host::Dialogs;

/// Prompt text for `element`: its `data-confirm` value, or `fallback` when empty.
pub fn prompt_for<D: Dom>(dom: &D, element: &D::Node, fallback: &str) -> String {
    dom.attribute(element, CONFIRM_ATTR)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Ask the user; returns `true` when the triggering action may proceed.
pub fn confirm_action<D: Dom>(dom: &D, dialogs: &dyn Dialogs, element: &D::Node, fallback: &str) -> bool {
    dialogs.confirm(&prompt_for(dom, element, fallback))
}
