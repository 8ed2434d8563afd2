use super::*;
use crate::dom::MemoryDom;
use crate::host::ScriptedDialogs;

#[test]
fn prompt_uses_attribute_text() {
    let dom = MemoryDom::new();
    let button = dom.add(dom.root(), "button", &[("data-confirm", "Удалить пост?")]);
    assert_eq!(prompt_for(&dom, &button, "Вы уверены?"), "Удалить пост?");
}

#[test]
fn empty_attribute_falls_back_to_default() {
    let dom = MemoryDom::new();
    let button = dom.add(dom.root(), "button", &[("data-confirm", "")]);
    assert_eq!(prompt_for(&dom, &button, "Вы уверены?"), "Вы уверены?");
}

#[test]
fn confirm_action_returns_user_answer() {
    let dom = MemoryDom::new();
    let link = dom.add(dom.root(), "a", &[("data-confirm", "Опубликовать?")]);
    let dialogs = ScriptedDialogs::answering(false);
    assert!(!confirm_action(&dom, &dialogs, &link, "Вы уверены?"));
    dialogs.set_answer(true);
    assert!(confirm_action(&dom, &dialogs, &link, "Вы уверены?"));
    assert_eq!(dialogs.confirms(), vec!["Опубликовать?", "Опубликовать?"]);
}
