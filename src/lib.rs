//! # pool-ui
//!
//! Browser-side behaviors for the Pool dashboard's server-rendered pages.
//! Compiled to WebAssembly with the `hydrate` feature; everything else builds
//! and tests on the host against an in-memory document.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`binder`] | Declarative marker-attribute bindings and the startup scan |
//! | [`behaviors`] | Per-behavior event reactions (counter, validation, ...) |
//! | [`dismiss`] | Fade-then-remove timer sequence shared by alerts and toasts |
//! | [`toast`] | Toast notifications |
//! | [`effects`] | Injected UI-effects service (toast, clipboard, API) |
//! | [`net`] | JSON GET/POST helpers with CSRF header |
//! | [`dom`] | `Dom` trait, typed selectors, and the in-memory `MemoryDom` (`testing`) |
//! | [`runtime`] | Timer/task `Runtime` trait and the virtual-clock `ManualRuntime` (`testing`) |
//! | [`host`] | Blocking dialogs and clipboard seams |
//! | [`util`] | Date and relative-time formatting |
//! | [`config`] | Page-level configuration |
//! | [`consts`] | Marker names, default delays, default messages |
//! | [`error`] | Crate error type |
//! | `web` | web-sys implementations and the JS entry point (`hydrate` only) |

pub mod behaviors;
pub mod binder;
pub mod config;
pub mod consts;
pub mod dismiss;
pub mod dom;
pub mod effects;
pub mod error;
pub mod host;
pub mod net;
pub mod runtime;
pub mod toast;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod web;

pub use error::UiError;
