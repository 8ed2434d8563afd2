//! Live character counter for `textarea[data-char-count]`.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use crate::dom::Dom;

/// Length of `value` as the browser reports it (UTF-16 code units).
#[must_use]
pub fn char_count(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Write the textarea's current length into the counter element.
///
/// Always recomputed from the full value, never from the previous count.
pub fn refresh<D: Dom>(dom: &D, textarea: &D::Node, counter: &D::Node) -> usize {
    let count = char_count(&dom.value(textarea));
    dom.set_text(counter, &count.to_string());
    count
}
