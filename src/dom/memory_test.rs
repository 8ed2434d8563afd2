use std::rc::Rc;

use super::*;

// =============================================================
// Tree and queries
// =============================================================

#[test]
fn query_all_returns_matches_in_document_order() {
    let dom = MemoryDom::new();
    let outer = dom.add(dom.root(), "div", &[("class", "alert")]);
    let inner = dom.add(outer, "div", &[("class", "alert alert-info")]);
    let sibling = dom.add(dom.root(), "p", &[("class", "alert")]);
    assert_eq!(dom.query_all(Selector::Class("alert")), vec![outer, inner, sibling]);
}

#[test]
fn query_within_only_sees_descendants() {
    let dom = MemoryDom::new();
    let form = dom.add(dom.root(), "form", &[]);
    let inside = dom.add(form, "input", &[("required", "")]);
    dom.add(dom.root(), "input", &[("required", "")]);
    assert_eq!(dom.query_within(&form, Selector::Attr("required")), vec![inside]);
}

#[test]
fn element_by_id_finds_nested_element() {
    let dom = MemoryDom::new();
    let wrap = dom.add(dom.root(), "div", &[]);
    let counter = dom.add(wrap, "span", &[("id", "count")]);
    assert_eq!(dom.element_by_id("count"), Some(counter));
    assert_eq!(dom.element_by_id("missing"), None);
}

#[test]
fn removed_nodes_are_not_queried_or_contained() {
    let dom = MemoryDom::new();
    let alert = dom.add(dom.root(), "div", &[("class", "alert")]);
    assert!(dom.contains(alert));
    dom.remove(&alert);
    assert!(!dom.contains(alert));
    assert!(dom.query_all(Selector::Class("alert")).is_empty());
    dom.remove(&alert);
}

// =============================================================
// Classes, text, images
// =============================================================

#[test]
fn class_operations_edit_class_attribute() {
    let dom = MemoryDom::new();
    let el = dom.add(dom.root(), "aside", &[("class", "sidebar")]);
    dom.add_class(&el, "open");
    dom.add_class(&el, "open");
    assert_eq!(dom.attribute(&el, "class").as_deref(), Some("sidebar open"));
    assert!(!dom.toggle_class(&el, "open"));
    assert_eq!(dom.attribute(&el, "class").as_deref(), Some("sidebar"));
    assert!(dom.toggle_class(&el, "open"));
    dom.remove_class(&el, "sidebar");
    assert!(!dom.has_class(&el, "sidebar"));
    assert!(dom.has_class(&el, "open"));
}

#[test]
fn show_image_replaces_existing_content() {
    let dom = MemoryDom::new();
    let preview = dom.add(dom.root(), "div", &[("id", "preview")]);
    dom.add(preview, "span", &[]);
    dom.show_image(&preview, "data:image/png;base64,AA", "Preview");
    let children = dom.children(preview);
    assert_eq!(children.len(), 1);
    assert_eq!(dom.tag(children[0]), "img");
    assert_eq!(dom.attribute(&children[0], "src").as_deref(), Some("data:image/png;base64,AA"));
    assert_eq!(dom.attribute(&children[0], "alt").as_deref(), Some("Preview"));
}

// =============================================================
// Events and file reads
// =============================================================

#[test]
fn dispatch_runs_matching_listeners_and_reports_prevention() {
    let dom = Rc::new(MemoryDom::new());
    let button = dom.add(dom.root(), "a", &[]);
    dom.listen(&button, EventKind::Click, Rc::new(|ev: &dyn DomEvent| ev.prevent_default()));
    assert!(dom.dispatch(button, EventKind::Click));
    assert!(!dom.dispatch(button, EventKind::Input));
    assert_eq!(dom.listener_count(), 1);
}

#[test]
fn listeners_may_mutate_the_document() {
    let dom = Rc::new(MemoryDom::new());
    let field = dom.add(dom.root(), "textarea", &[]);
    let out = dom.add(dom.root(), "span", &[]);
    let dom_for_cb = Rc::clone(&dom);
    dom.listen(
        &field,
        EventKind::Input,
        Rc::new(move |_: &dyn DomEvent| dom_for_cb.set_text(&out, &dom_for_cb.value(&field))),
    );
    dom.type_text(field, "hello");
    assert_eq!(dom.text(out), "hello");
}

#[test]
fn file_reads_complete_on_demand() {
    let dom = MemoryDom::new();
    let input = dom.add(dom.root(), "input", &[("type", "file")]);
    assert!(dom.read_selected_file(&input).is_none());

    dom.select_file(input, Some("data:a"));
    let read = dom.read_selected_file(&input).unwrap();
    assert_eq!(dom.pending_reads(), 1);
    assert!(dom.complete_read(0));
    assert_eq!(futures::executor::block_on(read).unwrap(), "data:a");
    assert!(!dom.complete_read(0));
}

#[test]
fn failed_file_read_resolves_to_error() {
    let dom = MemoryDom::new();
    let input = dom.add(dom.root(), "input", &[("type", "file")]);
    dom.select_file(input, Some("data:a"));
    let read = dom.read_selected_file(&input).unwrap();
    assert!(dom.fail_read(0, "denied"));
    assert!(matches!(futures::executor::block_on(read), Err(UiError::FileRead(_))));
}
