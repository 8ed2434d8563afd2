//! JS-facing handle returned by `start()`.
//!
//! Page scripts keep the handle and call it directly, e.g.
//! `ui.showToast("Сохранено", "success")` or `await ui.post(url, data)`.

use js_sys::{Date, Promise};
use time::{OffsetDateTime, UtcOffset};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use super::{GlooRuntime, WebDom, js_error_message, to_js_error};
use crate::effects::UiEffects;
use crate::error::UiError;
use crate::toast::Severity;
use crate::util::relative_time;

#[wasm_bindgen]
pub struct UiHandle {
    effects: UiEffects<WebDom, GlooRuntime>,
}

impl UiHandle {
    pub(super) fn new(effects: UiEffects<WebDom, GlooRuntime>) -> Self {
        Self { effects }
    }
}

#[wasm_bindgen]
impl UiHandle {
    /// Copy literal text and toast the outcome.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self, text: &str) {
        self.effects.copy_to_clipboard(text);
    }

    /// Show a toast; `severity` is `success`, `error`, or `info` (default).
    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: &str, severity: Option<String>) {
        self.effects.show_toast(message, Severity::from_tag(severity.as_deref()));
    }

    /// `GET url`, resolving to the parsed JSON body.
    pub fn get(&self, url: String) -> Promise {
        let effects = self.effects.clone();
        future_to_promise(async move {
            let value: serde_json::Value = effects.api().get(&url).await.map_err(|e| to_js_error(&e))?;
            json_to_js(&value)
        })
    }

    /// `POST url` with `payload` as JSON and the page CSRF token.
    pub fn post(&self, url: String, payload: JsValue) -> Promise {
        let effects = self.effects.clone();
        future_to_promise(async move {
            let body = stringify(&payload)?;
            let value: serde_json::Value = effects.api().post_raw(&url, body).await.map_err(|e| to_js_error(&e))?;
            json_to_js(&value)
        })
    }

    /// `DD.MM.YYYY, HH:MM` in the browser's time zone.
    ///
    /// # Errors
    ///
    /// Rejects timestamps that cannot be parsed.
    #[wasm_bindgen(js_name = formatDate)]
    pub fn format_date(&self, raw: &str) -> Result<String, JsValue> {
        let then = parse_local(raw)?;
        Ok(relative_time::format_date(then, offset_at(then)))
    }

    /// "только что", "N мин. назад", ... or the absolute date after a week.
    ///
    /// # Errors
    ///
    /// Rejects timestamps that cannot be parsed.
    #[wasm_bindgen(js_name = formatRelativeTime)]
    pub fn format_relative_time(&self, raw: &str) -> Result<String, JsValue> {
        let then = parse_local(raw)?;
        Ok(relative_time::format_relative_time(then, now(), offset_at(then)))
    }
}

fn json_to_js(value: &serde_json::Value) -> Result<JsValue, JsValue> {
    js_sys::JSON::parse(&value.to_string())
}

/// `JSON.stringify(value)`, key order as built by the page script.
fn stringify(value: &JsValue) -> Result<String, JsValue> {
    let text = js_sys::JSON::stringify(value).map_err(|e| to_js_error(&UiError::Payload(js_error_message(&e))))?;
    Ok(text.as_string().unwrap_or_else(|| "null".to_owned()))
}

fn parse_local(raw: &str) -> Result<OffsetDateTime, JsValue> {
    relative_time::parse_timestamp(raw, offset_at).map_err(|e| to_js_error(&e))
}

#[allow(clippy::cast_possible_truncation)]
fn now() -> OffsetDateTime {
    let millis = Date::now() as i64;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(millis) * 1_000_000).unwrap_or(OffsetDateTime::UNIX_EPOCH)
}

/// The browser's UTC offset in effect at `at` (DST-aware).
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn offset_at(at: OffsetDateTime) -> UtcOffset {
    let millis = (at.unix_timestamp_nanos() / 1_000_000) as f64;
    let date = Date::new(&JsValue::from_f64(millis));
    // getTimezoneOffset is UTC minus local, in minutes.
    let minutes = -(date.get_timezone_offset() as i32);
    UtcOffset::from_whole_seconds(minutes * 60).unwrap_or(UtcOffset::UTC)
}
