use super::*;
use crate::dom::MemoryDom;

fn form_with_fields(values: &[&str]) -> (MemoryDom, crate::dom::NodeId, Vec<crate::dom::NodeId>) {
    let dom = MemoryDom::new();
    let form = dom.add(dom.root(), "form", &[("data-validate", "")]);
    let fields = values
        .iter()
        .map(|value| {
            let field = dom.add(form, "input", &[("required", "")]);
            dom.set_value(field, value);
            field
        })
        .collect();
    (dom, form, fields)
}

#[test]
fn all_filled_fields_pass_without_markers() {
    let (dom, form, fields) = form_with_fields(&["Заголовок", "текст"]);
    let report = check_required(&dom, &form);
    assert_eq!(report, ValidationReport { checked: 2, failed: 0 });
    assert!(report.is_valid());
    assert!(fields.iter().all(|f| !dom.has_class(f, "error")));
}

#[test]
fn whitespace_only_counts_as_empty() {
    let (dom, form, fields) = form_with_fields(&["  \t\n", "ok"]);
    let report = check_required(&dom, &form);
    assert!(!report.is_valid());
    assert!(dom.has_class(&fields[0], "error"));
    assert!(!dom.has_class(&fields[1], "error"));
}

#[test]
fn every_failing_field_is_marked() {
    let (dom, form, fields) = form_with_fields(&["", "x", ""]);
    let report = check_required(&dom, &form);
    assert_eq!(report, ValidationReport { checked: 3, failed: 2 });
    assert!(dom.has_class(&fields[0], "error"));
    assert!(!dom.has_class(&fields[1], "error"));
    assert!(dom.has_class(&fields[2], "error"));
}

#[test]
fn fixed_fields_lose_marker_on_next_check() {
    let (dom, form, fields) = form_with_fields(&[""]);
    check_required(&dom, &form);
    assert!(dom.has_class(&fields[0], "error"));

    dom.set_value(fields[0], "исправлено");
    assert!(check_required(&dom, &form).is_valid());
    assert!(!dom.has_class(&fields[0], "error"));
}

#[test]
fn optional_fields_and_fields_outside_form_are_ignored() {
    let (dom, form, _) = form_with_fields(&["ok"]);
    dom.add(form, "input", &[]);
    let outside = dom.add(dom.root(), "input", &[("required", "")]);
    let report = check_required(&dom, &form);
    assert_eq!(report.checked, 1);
    assert!(!dom.has_class(&outside, "error"));
}

#[test]
fn form_without_required_fields_is_valid() {
    let (dom, form, _) = form_with_fields(&[]);
    assert_eq!(check_required(&dom, &form), ValidationReport { checked: 0, failed: 0 });
}
