//! Networking helpers for the dashboard's JSON endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` builds requests and decodes responses; the browser transport lives in
//! `web::http` so request shape and CSRF handling stay testable on the host.

pub mod api;
