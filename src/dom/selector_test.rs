use std::collections::HashMap;

use super::*;

fn attrs(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
    pairs.iter().copied().collect()
}

fn matches(selector: Selector, tag: &str, pairs: &[(&'static str, &'static str)]) -> bool {
    let map = attrs(pairs);
    selector.matches(tag, |name| map.get(name).copied())
}

// =============================================================
// to_css
// =============================================================

#[test]
fn to_css_formats_each_variant() {
    assert_eq!(Selector::Class("alert").to_css(), ".alert");
    assert_eq!(Selector::Id("menuToggle").to_css(), "#menuToggle");
    assert_eq!(Selector::Attr("data-confirm").to_css(), "[data-confirm]");
    assert_eq!(
        Selector::TagWithAttr { tag: "textarea", attr: "data-char-count" }.to_css(),
        "textarea[data-char-count]"
    );
    assert_eq!(
        Selector::InputTypeWithAttr { input_type: "file", attr: "data-preview" }.to_css(),
        "input[type=\"file\"][data-preview]"
    );
    assert_eq!(Selector::Name("csrfmiddlewaretoken").to_css(), "[name=\"csrfmiddlewaretoken\"]");
}

// =============================================================
// matches
// =============================================================

#[test]
fn class_matches_any_token_in_class_list() {
    assert!(matches(Selector::Class("alert"), "div", &[("class", "alert alert-success")]));
    assert!(matches(Selector::Class("alert-success"), "div", &[("class", "alert  alert-success")]));
    assert!(!matches(Selector::Class("alert"), "div", &[("class", "alerts")]));
    assert!(!matches(Selector::Class("alert"), "div", &[]));
}

#[test]
fn id_requires_exact_value() {
    assert!(matches(Selector::Id("menuToggle"), "button", &[("id", "menuToggle")]));
    assert!(!matches(Selector::Id("menuToggle"), "button", &[("id", "menutoggle")]));
}

#[test]
fn attr_matches_presence_even_when_empty() {
    assert!(matches(Selector::Attr("required"), "input", &[("required", "")]));
    assert!(!matches(Selector::Attr("required"), "input", &[]));
}

#[test]
fn tag_with_attr_checks_both_parts() {
    let sel = Selector::TagWithAttr { tag: "textarea", attr: "data-char-count" };
    assert!(matches(sel, "textarea", &[("data-char-count", "c")]));
    assert!(matches(sel, "TEXTAREA", &[("data-char-count", "c")]));
    assert!(!matches(sel, "input", &[("data-char-count", "c")]));
    assert!(!matches(sel, "textarea", &[]));
}

#[test]
fn input_type_with_attr_requires_file_input() {
    let sel = Selector::InputTypeWithAttr { input_type: "file", attr: "data-preview" };
    assert!(matches(sel, "input", &[("type", "file"), ("data-preview", "p")]));
    assert!(!matches(sel, "input", &[("type", "text"), ("data-preview", "p")]));
    assert!(!matches(sel, "input", &[("data-preview", "p")]));
    assert!(!matches(sel, "div", &[("type", "file"), ("data-preview", "p")]));
}

#[test]
fn name_matches_exact_value() {
    assert!(matches(Selector::Name("csrfmiddlewaretoken"), "input", &[("name", "csrfmiddlewaretoken")]));
    assert!(!matches(Selector::Name("csrfmiddlewaretoken"), "input", &[("name", "csrf")]));
}
