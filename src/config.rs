//! Page configuration parsed from `<body>` data attributes.
//!
//! Server templates may override timings, prompt text, and the console log
//! level per page. Every attribute is optional:
//! - `data-alert-dismiss-ms`: default 5000
//! - `data-toast-display-ms`: default 3000
//! - `data-fade-ms`: default 300
//! - `data-log-level`: `off`, `error`, `warn`, `info` (default), `debug`, `trace`
//! - `data-msg-validation`, `data-msg-confirm`, `data-msg-copied`,
//!   `data-msg-copy-failed`: localized text, Russian defaults
//!
//! Malformed values fall back to the default with a warning.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use log::LevelFilter;

use crate::consts::{
    DEFAULT_ALERT_DISMISS_MS, DEFAULT_CONFIRM_MESSAGE, DEFAULT_COPY_FAILED, DEFAULT_COPY_SUCCEEDED, DEFAULT_FADE_MS,
    DEFAULT_TOAST_DISPLAY_MS, DEFAULT_VALIDATION_MESSAGE,
};
use crate::dom::Dom;

pub const ALERT_DISMISS_MS_ATTR: &str = "data-alert-dismiss-ms";
pub const TOAST_DISPLAY_MS_ATTR: &str = "data-toast-display-ms";
pub const FADE_MS_ATTR: &str = "data-fade-ms";
pub const LOG_LEVEL_ATTR: &str = "data-log-level";
pub const VALIDATION_MESSAGE_ATTR: &str = "data-msg-validation";
pub const CONFIRM_MESSAGE_ATTR: &str = "data-msg-confirm";
pub const COPY_SUCCEEDED_ATTR: &str = "data-msg-copied";
pub const COPY_FAILED_ATTR: &str = "data-msg-copy-failed";

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Delay before a server-rendered alert fades.
    pub alert_dismiss_ms: u32,
    /// Delay before a toast fades.
    pub toast_display_ms: u32,
    /// Fade length before removal.
    pub fade_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            alert_dismiss_ms: DEFAULT_ALERT_DISMISS_MS,
            toast_display_ms: DEFAULT_TOAST_DISPLAY_MS,
            fade_ms: DEFAULT_FADE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub validation_failed: String,
    pub confirm_default: String,
    pub copy_succeeded: String,
    pub copy_failed: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            validation_failed: DEFAULT_VALIDATION_MESSAGE.to_owned(),
            confirm_default: DEFAULT_CONFIRM_MESSAGE.to_owned(),
            copy_succeeded: DEFAULT_COPY_SUCCEEDED.to_owned(),
            copy_failed: DEFAULT_COPY_FAILED.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub timing: Timing,
    pub messages: Messages,
    pub log_level: LevelFilter,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { timing: Timing::default(), messages: Messages::default(), log_level: DEFAULT_LOG_LEVEL }
    }
}

impl UiConfig {
    /// Build config from the current page's `<body>` attributes.
    pub fn from_page<D: Dom>(dom: &D) -> Self {
        match dom.body() {
            Some(body) => Self::from_lookup(|name| dom.attribute(&body, name)),
            None => Self::default(),
        }
    }

    /// Build config from an attribute lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timing = Timing {
            alert_dismiss_ms: attr_parse_u32(&lookup, ALERT_DISMISS_MS_ATTR, DEFAULT_ALERT_DISMISS_MS),
            toast_display_ms: attr_parse_u32(&lookup, TOAST_DISPLAY_MS_ATTR, DEFAULT_TOAST_DISPLAY_MS),
            fade_ms: attr_parse_u32(&lookup, FADE_MS_ATTR, DEFAULT_FADE_MS),
        };
        let messages = Messages {
            validation_failed: attr_text(&lookup, VALIDATION_MESSAGE_ATTR, DEFAULT_VALIDATION_MESSAGE),
            confirm_default: attr_text(&lookup, CONFIRM_MESSAGE_ATTR, DEFAULT_CONFIRM_MESSAGE),
            copy_succeeded: attr_text(&lookup, COPY_SUCCEEDED_ATTR, DEFAULT_COPY_SUCCEEDED),
            copy_failed: attr_text(&lookup, COPY_FAILED_ATTR, DEFAULT_COPY_FAILED),
        };
        let log_level = parse_log_level(lookup(LOG_LEVEL_ATTR).as_deref());
        Self { timing, messages, log_level }
    }
}

fn attr_parse_u32(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: u32) -> u32 {
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse::<u32>().unwrap_or_else(|_| {
        log::warn!("ignoring {key}={raw:?}: not a millisecond count");
        default
    })
}

fn attr_text(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key)
        .map(|raw| raw.trim().to_owned())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    let Some(raw) = raw else {
        return DEFAULT_LOG_LEVEL;
    };
    LevelFilter::from_str(raw.trim()).unwrap_or_else(|_| {
        log::warn!("ignoring {LOG_LEVEL_ATTR}={raw:?}: unknown level");
        DEFAULT_LOG_LEVEL
    })
}
