//! Required-field check for `form[data-validate]`.
//!
//! Every `[required]` descendant is checked on each submit, with no
//! short-circuit, so all failing fields are marked at once and fields fixed
//! since the last attempt lose their marker.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use crate::consts::{FIELD_ERROR_CLASS, REQUIRED_ATTR};
use crate::dom::{Dom, Selector};

/// Result of checking one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub checked: usize,
    pub failed: usize,
}

impl ValidationReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed == 0
    }
}

/// Mark empty required fields with the error class and clear it on the rest.
pub fn check_required<D: Dom>(dom: &D, form: &D::Node) -> ValidationReport {
    let fields = dom.query_within(form, Selector::Attr(REQUIRED_ATTR));
    let mut failed = 0;
    for field in &fields {
        if dom.value(field).trim().is_empty() {
            dom.add_class(field, FIELD_ERROR_CLASS);
            failed += 1;
        } else {
            dom.remove_class(field, FIELD_ERROR_CLASS);
        }
    }
    ValidationReport { checked: fields.len(), failed }
}
