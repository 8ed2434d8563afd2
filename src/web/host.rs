//! `window.alert`/`window.confirm` and `navigator.clipboard`.

use futures::future::{self, LocalBoxFuture};
use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use super::js_error_message;
use crate::error::UiError;
use crate::host::{Clipboard, Dialogs};

pub struct WindowDialogs {
    window: Window,
}

impl WindowDialogs {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Dialogs for WindowDialogs {
    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }

    fn confirm(&self, message: &str) -> bool {
        // A blocked or failed prompt counts as declined.
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}

pub struct NavigatorClipboard {
    window: Window,
}

impl NavigatorClipboard {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Clipboard for NavigatorClipboard {
    fn write_text(&self, text: &str) -> LocalBoxFuture<'static, Result<(), UiError>> {
        let Some(clipboard) = self.window.navigator().clipboard() else {
            return Box::pin(future::ready(Err(UiError::Clipboard("clipboard API unavailable".to_owned()))));
        };
        let promise = clipboard.write_text(text);
        Box::pin(async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| UiError::Clipboard(js_error_message(&e)))
        })
    }
}
