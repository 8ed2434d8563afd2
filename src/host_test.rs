use futures::executor::block_on;

use super::*;

#[test]
fn scripted_dialogs_record_prompts_and_reply() {
    let dialogs = ScriptedDialogs::answering(false);
    assert!(!dialogs.confirm("Удалить?"));
    dialogs.set_answer(true);
    assert!(dialogs.confirm("Точно?"));
    dialogs.alert("готово");
    assert_eq!(dialogs.confirms(), vec!["Удалить?", "Точно?"]);
    assert_eq!(dialogs.alerts(), vec!["готово"]);
}

#[test]
fn memory_clipboard_stores_last_write() {
    let clipboard = MemoryClipboard::default();
    block_on(clipboard.write_text("first")).unwrap();
    block_on(clipboard.write_text("second")).unwrap();
    assert_eq!(clipboard.contents().as_deref(), Some("second"));
}

#[test]
fn denied_clipboard_rejects_writes() {
    let clipboard = MemoryClipboard::denied();
    let err = block_on(clipboard.write_text("x")).unwrap_err();
    assert!(matches!(err, UiError::Clipboard(_)));
    assert_eq!(clipboard.contents(), None);
}
