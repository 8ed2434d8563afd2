//! Inline image preview for `input[type="file"][data-preview]`.
//!
//! DESIGN
//! ======
//! Reads are asynchronous and may finish out of order. Each change event
//! takes a ticket from the input's [`PreviewSlot`]; a completed read is only
//! rendered if its ticket is still the latest, so a slow earlier read can
//! never overwrite the preview of a newer selection.
//!
//! ERROR HANDLING
//! ==============
//! Read failures are logged and leave the current preview in place.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::consts::PREVIEW_ALT;
use crate::dom::Dom;
use crate::runtime::Runtime;

/// Per-input generation counter.
#[derive(Debug, Default)]
pub struct PreviewSlot {
    generation: Cell<u64>,
}

impl PreviewSlot {
    /// Supersede any pending read and return the new ticket.
    pub fn begin(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

/// React to a change on `input`: read its first file and render it into `target`.
///
/// Returns `false` when no file is selected. A change with no file still
/// supersedes earlier pending reads.
pub fn on_change<D, R>(dom: &Rc<D>, runtime: &R, slot: &Rc<PreviewSlot>, input: &D::Node, target: &D::Node) -> bool
where
    D: Dom + 'static,
    R: Runtime,
{
    let ticket = slot.begin();
    let Some(read) = dom.read_selected_file(input) else {
        return false;
    };

    let dom = Rc::clone(dom);
    let slot = Rc::clone(slot);
    let target = target.clone();
    runtime.spawn(Box::pin(async move {
        match read.await {
            Ok(data_url) if slot.is_current(ticket) => dom.show_image(&target, &data_url, PREVIEW_ALT),
            Ok(_) => log::debug!("dropping stale preview read #{ticket}"),
            Err(e) => log::warn!("image preview failed: {e}"),
        }
    }));
    true
}
