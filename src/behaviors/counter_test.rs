use super::*;
use crate::dom::MemoryDom;

#[test]
fn char_count_counts_utf16_units() {
    assert_eq!(char_count(""), 0);
    assert_eq!(char_count("abc"), 3);
    assert_eq!(char_count("Привет"), 6);
    assert_eq!(char_count("🚀"), 2);
}

#[test]
fn refresh_tracks_any_edit_sequence() {
    let dom = MemoryDom::new();
    let textarea = dom.add(dom.root(), "textarea", &[("data-char-count", "count")]);
    let counter = dom.add(dom.root(), "span", &[("id", "count")]);

    for value in ["п", "по", "пост", "по", "", "новый пост для канала"] {
        dom.set_value(textarea, value);
        let n = refresh(&dom, &textarea, &counter);
        assert_eq!(n, value.chars().count());
        assert_eq!(dom.text(counter), n.to_string());
    }
}
