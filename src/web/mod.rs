//! Browser bindings (`hydrate` feature).
//!
//! SYSTEM CONTEXT
//! ==============
//! Page templates load the wasm module and call [`start`] once. It installs
//! the panic hook and console logger, reads `<body>` configuration, binds
//! every marker attribute (deferring to `DOMContentLoaded` while the document
//! is still parsing), and returns a [`UiHandle`] for inline page scripts.
//!
//! ERROR HANDLING
//! ==============
//! Only a missing `window`/`document` fails startup. Everything past that
//! point degrades per behavior and logs to the console.

mod dom;
mod handle;
mod host;
mod http;
mod runtime;

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DocumentReadyState;

use crate::binder::UiBinder;
use crate::config::UiConfig;
use crate::effects::UiEffects;
use crate::error::UiError;

pub use dom::WebDom;
pub use handle::UiHandle;
pub use host::{NavigatorClipboard, WindowDialogs};
pub use http::GlooTransport;
pub use runtime::GlooRuntime;

/// Bind the current page and return the handle page scripts call into.
///
/// # Errors
///
/// Fails when run outside a browser window.
#[wasm_bindgen]
pub fn start() -> Result<UiHandle, JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("console logger already installed");
    }

    let window = web_sys::window().ok_or_else(|| to_js_error(&UiError::Unavailable("window")))?;
    let dom = Rc::new(WebDom::new(&window).map_err(|e| to_js_error(&e))?);
    let config = Rc::new(UiConfig::from_page(dom.as_ref()));
    log::set_max_level(config.log_level);

    let runtime = Rc::new(GlooRuntime);
    let binder = UiBinder::new(
        Rc::clone(&dom),
        Rc::clone(&runtime),
        Rc::new(WindowDialogs::new(window.clone())),
        Rc::clone(&config),
    );
    bind_when_ready(dom.document(), binder);

    let effects = UiEffects::new(
        dom,
        runtime,
        Rc::new(NavigatorClipboard::new(window)),
        Rc::new(GlooTransport),
        &config,
    );
    Ok(UiHandle::new(effects))
}

fn bind_when_ready(document: &web_sys::Document, binder: UiBinder<WebDom, GlooRuntime>) {
    if document.ready_state() != DocumentReadyState::Loading {
        binder.bind_all();
        return;
    }
    let on_ready = Closure::once_into_js(move || {
        binder.bind_all();
    });
    if let Err(e) = document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref()) {
        log::error!("cannot wait for DOMContentLoaded: {}", js_error_message(&e));
    }
}

/// Best-effort readable text for a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value
        .as_string()
        .or_else(|| js_sys::JSON::stringify(value).ok().and_then(|s| s.as_string()))
        .unwrap_or_else(|| format!("{value:?}"))
}

pub(crate) fn to_js_error(err: &UiError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
