//! Formatting helpers shared by page scripts and templates.

pub mod relative_time;
