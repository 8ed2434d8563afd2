//! Toast notifications.
//!
//! A toast is a fixed-position `div.alert.alert-<severity>` appended to the
//! body, faded after the display delay and removed after the fade. Toasts
//! stack freely: there is no queue, limit, or deduplication.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::config::Timing;
use crate::consts::ALERT_CLASS;
use crate::dismiss::schedule_dismiss;
use crate::dom::Dom;
use crate::runtime::Runtime;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    /// Parse an optional tag from page scripts; unknown or missing tags are `Info`.
    #[must_use]
    pub fn from_tag(tag: Option<&str>) -> Self {
        let Some(tag) = tag else {
            return Self::Info;
        };
        tag.parse().unwrap_or_else(|()| {
            log::warn!("unknown toast severity {tag:?}, using info");
            Self::Info
        })
    }
}

impl FromStr for Severity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success" => Ok(Self::Success),
            "error" => Ok(Self::Error),
            "info" => Ok(Self::Info),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const TOAST_STYLE: [(&str, &str); 5] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("z-index", "9999"),
    ("min-width", "200px"),
];

pub struct Toaster<D: Dom, R: Runtime> {
    dom: Rc<D>,
    runtime: Rc<R>,
    timing: Timing,
}

impl<D: Dom, R: Runtime> Clone for Toaster<D, R> {
    fn clone(&self) -> Self {
        Self { dom: Rc::clone(&self.dom), runtime: Rc::clone(&self.runtime), timing: self.timing }
    }
}

impl<D, R> Toaster<D, R>
where
    D: Dom + 'static,
    R: Runtime + 'static,
{
    pub fn new(dom: Rc<D>, runtime: Rc<R>, timing: Timing) -> Self {
        Self { dom, runtime, timing }
    }

    /// Show `message` and schedule its removal.
    ///
    /// Returns the toast node, or `None` when the document has no body.
    pub fn show(&self, message: &str, severity: Severity) -> Option<D::Node> {
        let body = self.dom.body()?;
        let toast = self.dom.create_element("div")?;
        self.dom.add_class(&toast, ALERT_CLASS);
        self.dom.add_class(&toast, &format!("{ALERT_CLASS}-{severity}"));
        self.dom.set_text(&toast, message);
        for (property, value) in TOAST_STYLE {
            self.dom.set_style(&toast, property, value);
        }
        self.dom.append_child(&body, &toast);
        log::debug!("toast [{severity}]: {message}");

        schedule_dismiss(&self.dom, &self.runtime, toast.clone(), self.timing.toast_display_ms, self.timing.fade_ms);
        Some(toast)
    }
}
