//! Document access seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never touch web-sys directly. They run against the [`Dom`] trait,
//! implemented by `web::WebDom` in the browser and by `MemoryDom` on the host,
//! so every binding can be exercised without a browser.
//!
//! DESIGN
//! ======
//! Methods take `&self`: both the browser DOM and the in-memory tree use
//! interior mutability, and event handlers need to mutate the document while
//! the binder still holds a shared reference to it.

#[cfg(any(test, feature = "testing"))]
pub mod memory;
pub mod selector;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::UiError;

#[cfg(any(test, feature = "testing"))]
pub use memory::{MemoryDom, NodeId};
pub use selector::Selector;

/// DOM events the binder listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Input,
    Submit,
    Change,
}

impl EventKind {
    /// DOM event type name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Input => "input",
            Self::Submit => "submit",
            Self::Change => "change",
        }
    }
}

/// The part of a dispatched event a handler may act on.
pub trait DomEvent {
    /// Cancel the event's default action (navigation, form submission).
    fn prevent_default(&self);
}

/// Event listener callback.
pub type Handler = Rc<dyn Fn(&dyn DomEvent)>;

/// Pending read of a selected file, resolving to a `data:` URL.
pub type FileRead = LocalBoxFuture<'static, Result<String, UiError>>;

/// Operations the UI behaviors need from a document.
pub trait Dom {
    type Node: Clone + 'static;

    /// All elements in the document matching `selector`, in document order.
    fn query_all(&self, selector: Selector) -> Vec<Self::Node>;

    /// First element in the document matching `selector`.
    fn query_first(&self, selector: Selector) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// Descendants of `root` matching `selector`, in document order.
    fn query_within(&self, root: &Self::Node, selector: Selector) -> Vec<Self::Node>;

    fn element_by_id(&self, id: &str) -> Option<Self::Node>;

    fn body(&self) -> Option<Self::Node>;

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    /// Current form value; empty for elements without one.
    fn value(&self, node: &Self::Node) -> String;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn remove_class(&self, node: &Self::Node, class: &str);

    /// Flip `class` on `node`; returns whether it is present afterwards.
    fn toggle_class(&self, node: &Self::Node, class: &str) -> bool;

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    /// Replace the node's content with plain text.
    fn set_text(&self, node: &Self::Node, text: &str);

    fn create_element(&self, tag: &str) -> Option<Self::Node>;

    fn append_child(&self, parent: &Self::Node, child: &Self::Node);

    /// Detach `node` from the document. Removing a detached node is a no-op.
    fn remove(&self, node: &Self::Node);

    /// Replace the content of `container` with a single `<img>`.
    fn show_image(&self, container: &Self::Node, src: &str, alt: &str);

    fn listen(&self, node: &Self::Node, event: EventKind, handler: Handler);

    /// Start reading the first file selected in a file input.
    ///
    /// Returns `None` when nothing is selected.
    fn read_selected_file(&self, input: &Self::Node) -> Option<FileRead>;
}
