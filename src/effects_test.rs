use futures::executor::block_on;
use futures::future::{self, LocalBoxFuture};
use serde_json::Value;

use super::*;
use crate::dom::MemoryDom;
use crate::error::UiError;
use crate::host::MemoryClipboard;
use crate::net::api::ApiRequest;
use crate::runtime::ManualRuntime;

struct EchoTransport;

impl Transport for EchoTransport {
    fn send(&self, request: ApiRequest) -> LocalBoxFuture<'static, Result<String, UiError>> {
        Box::pin(future::ready(Ok(format!(r#"{{"url":"{}"}}"#, request.url))))
    }
}

struct Fixture {
    dom: Rc<MemoryDom>,
    rt: Rc<ManualRuntime>,
    clipboard: Rc<MemoryClipboard>,
    effects: UiEffects<MemoryDom, ManualRuntime>,
}

fn fixture(clipboard: MemoryClipboard) -> Fixture {
    let dom = Rc::new(MemoryDom::new());
    let rt = Rc::new(ManualRuntime::new());
    let clipboard = Rc::new(clipboard);
    let clipboard_dyn: Rc<dyn Clipboard> = clipboard.clone();
    let effects =
        UiEffects::new(Rc::clone(&dom), Rc::clone(&rt), clipboard_dyn, Rc::new(EchoTransport), &UiConfig::default());
    Fixture { dom, rt, clipboard, effects }
}

#[test]
fn show_toast_defaults_to_body_append() {
    let f = fixture(MemoryClipboard::default());
    let toast = f.effects.show_toast("Пост сохранён", Severity::Info).unwrap();
    assert_eq!(f.dom.attribute(&toast, "class").as_deref(), Some("alert alert-info"));
}

#[test]
fn successful_copy_shows_success_toast() {
    let f = fixture(MemoryClipboard::default());
    f.effects.copy_to_clipboard("https://vk.com/wall-1_2");
    f.rt.run_until_stalled();

    assert_eq!(f.clipboard.contents().as_deref(), Some("https://vk.com/wall-1_2"));
    let toasts = f.dom.children(f.dom.root());
    assert_eq!(toasts.len(), 1);
    assert_eq!(f.dom.text(toasts[0]), "Скопировано в буфер обмена!");
    assert!(f.dom.has_class(&toasts[0], "alert-success"));
}

#[test]
fn failed_copy_shows_error_toast_without_propagating() {
    let f = fixture(MemoryClipboard::denied());
    assert!(!block_on(f.effects.copy_and_notify("secret")));

    let toasts = f.dom.children(f.dom.root());
    assert_eq!(toasts.len(), 1);
    assert_eq!(f.dom.text(toasts[0]), "Ошибка копирования");
    assert!(f.dom.has_class(&toasts[0], "alert-error"));
}

#[test]
fn copy_toast_expires_like_any_toast() {
    let f = fixture(MemoryClipboard::default());
    f.effects.copy_to_clipboard("x");
    f.rt.advance(3300);
    assert!(f.dom.children(f.dom.root()).is_empty());
}

#[test]
fn api_is_reachable_through_effects() {
    let f = fixture(MemoryClipboard::default());
    let reply: Value = block_on(f.effects.api().get("/api/scheduler/status/")).unwrap();
    assert_eq!(reply["url"], "/api/scheduler/status/");
}
