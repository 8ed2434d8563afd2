//! Browser services outside the document: blocking dialogs and the clipboard.
//!
//! The scripted implementations record every call so tests can assert on
//! prompts and copied text. They are compiled only for tests and the
//! `testing` feature.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

#[cfg(any(test, feature = "testing"))]
use std::cell::{Cell, RefCell};

#[cfg(any(test, feature = "testing"))]
use futures::future;
use futures::future::LocalBoxFuture;

use crate::error::UiError;

/// Blocking `alert`/`confirm` prompts.
pub trait Dialogs {
    fn alert(&self, message: &str);

    /// Ask a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

/// Asynchronous system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>>;
}

/// Dialogs that answer every `confirm` with a preset reply.
#[derive(Debug)]
#[cfg(any(test, feature = "testing"))]
pub struct ScriptedDialogs {
    answer: Cell<bool>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
}

#[cfg(any(test, feature = "testing"))]
impl ScriptedDialogs {
    #[must_use]
    pub fn answering(answer: bool) -> Self {
        Self { answer: Cell::new(answer), alerts: RefCell::new(Vec::new()), confirms: RefCell::new(Vec::new()) }
    }

    pub fn set_answer(&self, answer: bool) {
        self.answer.set(answer);
    }

    #[must_use]
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    #[must_use]
    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Dialogs for ScriptedDialogs {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_owned());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_owned());
        self.answer.get()
    }
}

/// Clipboard that keeps the last written text, or refuses every write.
#[derive(Debug, Default)]
#[cfg(any(test, feature = "testing"))]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
    denied: Cell<bool>,
}

#[cfg(any(test, feature = "testing"))]
impl MemoryClipboard {
    /// A clipboard whose writes all fail, as when permission is denied.
    #[must_use]
    pub fn denied() -> Self {
        Self { contents: RefCell::new(None), denied: Cell::new(true) }
    }

    #[must_use]
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>> {
        if self.denied.get() {
            return Box::pin(future::ready(Err(UiError::Clipboard("write permission denied".to_owned()))));
        }
        *self.contents.borrow_mut() = Some(text.to_owned());
        Box::pin(future::ready(Ok(())))
    }
}
