//! Crate error type.
//!
//! Browser failures arrive as opaque `JsValue`s; the `web` layer flattens them
//! into the string payloads below so host-side code and tests never depend on
//! wasm-bindgen types.

#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("payload cannot be encoded: {0}")]
    Payload(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("file read failed: {0}")]
    FileRead(String),
    #[error("invalid timestamp: {0}")]
    Timestamp(String),
    #[error("browser environment unavailable: {0}")]
    Unavailable(&'static str),
}
