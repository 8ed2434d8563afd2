//! UI-effects service handed to page code.
//!
//! DESIGN
//! ======
//! Toasts, clipboard copy, and the JSON API are reached through one explicitly
//! constructed [`UiEffects`] value instead of `window` globals. The browser
//! build wraps it in `web::UiHandle`; tests build it over `MemoryDom` and
//! `ManualRuntime`.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use std::rc::Rc;

use crate::config::{Messages, UiConfig};
use crate::dom::Dom;
use crate::host::Clipboard;
use crate::net::api::{ApiClient, Transport};
use crate::runtime::Runtime;
use crate::toast::{Severity, Toaster};

pub struct UiEffects<D: Dom, R: Runtime> {
    toaster: Toaster<D, R>,
    clipboard: Rc<dyn Clipboard>,
    runtime: Rc<R>,
    api: ApiClient<D>,
    messages: Rc<Messages>,
}

impl<D: Dom, R: Runtime> Clone for UiEffects<D, R> {
    fn clone(&self) -> Self {
        Self {
            toaster: self.toaster.clone(),
            clipboard: Rc::clone(&self.clipboard),
            runtime: Rc::clone(&self.runtime),
            api: self.api.clone(),
            messages: Rc::clone(&self.messages),
        }
    }
}

impl<D, R> UiEffects<D, R>
where
    D: Dom + 'static,
    R: Runtime + 'static,
{
    pub fn new(
        dom: Rc<D>,
        runtime: Rc<R>,
        clipboard: Rc<dyn Clipboard>,
        transport: Rc<dyn Transport>,
        config: &UiConfig,
    ) -> Self {
        Self {
            toaster: Toaster::new(Rc::clone(&dom), Rc::clone(&runtime), config.timing),
            clipboard,
            runtime,
            api: ApiClient::new(dom, transport),
            messages: Rc::new(config.messages.clone()),
        }
    }

    pub fn show_toast(&self, message: &str, severity: Severity) -> Option<D::Node> {
        self.toaster.show(message, severity)
    }

    /// Copy `text` in the background and report the outcome with a toast.
    pub fn copy_to_clipboard(&self, text: &str) {
        let this = self.clone();
        let text = text.to_owned();
        self.runtime.spawn(Box::pin(async move {
            this.copy_and_notify(&text).await;
        }));
    }

    /// Copy `text` and toast the outcome; returns whether the write succeeded.
    ///
    /// Failures are logged and toasted, never returned.
    pub async fn copy_and_notify(&self, text: &str) -> bool {
        match self.clipboard.write_text(text).await {
            Ok(()) => {
                self.toaster.show(&self.messages.copy_succeeded, Severity::Success);
                true
            }
            Err(e) => {
                log::error!("failed to copy: {e}");
                self.toaster.show(&self.messages.copy_failed, Severity::Error);
                false
            }
        }
    }

    pub fn api(&self) -> &ApiClient<D> {
        &self.api
    }
}
