//! `Dom` over the live browser document.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use futures::future;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, Event, File, FileReader, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, Window,
};

use super::js_error_message;
use crate::dom::{Dom, DomEvent, EventKind, FileRead, Handler, Selector};
use crate::error::UiError;

impl DomEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// # Errors
    ///
    /// Returns [`UiError::Unavailable`] when the window has no document.
    pub fn new(window: &Window) -> Result<Self, UiError> {
        let document = window.document().ok_or(UiError::Unavailable("document"))?;
        Ok(Self { document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn elements(list: Result<NodeList, wasm_bindgen::JsValue>) -> Vec<Element> {
    let Ok(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.item(i)).filter_map(|node| node.dyn_into::<Element>().ok()).collect()
}

impl Dom for WebDom {
    type Node = Element;

    fn query_all(&self, selector: Selector) -> Vec<Element> {
        elements(self.document.query_selector_all(&selector.to_css()))
    }

    fn query_within(&self, root: &Element, selector: Selector) -> Vec<Element> {
        elements(root.query_selector_all(&selector.to_css()))
    }

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn body(&self) -> Option<Element> {
        self.document.body().map(Element::from)
    }

    fn attribute(&self, node: &Element, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn value(&self, node: &Element) -> String {
        if let Some(input) = node.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(textarea) = node.dyn_ref::<HtmlTextAreaElement>() {
            textarea.value()
        } else if let Some(select) = node.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().add_1(class);
    }

    fn remove_class(&self, node: &Element, class: &str) {
        let _ = node.class_list().remove_1(class);
    }

    fn toggle_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().toggle(class).unwrap_or(false)
    }

    fn set_style(&self, node: &Element, property: &str, value: &str) {
        if let Some(el) = node.dyn_ref::<HtmlElement>() {
            let _ = el.style().set_property(property, value);
        }
    }

    fn set_text(&self, node: &Element, text: &str) {
        node.set_text_content(Some(text));
    }

    fn create_element(&self, tag: &str) -> Option<Element> {
        self.document.create_element(tag).ok()
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        if let Err(e) = parent.append_child(child) {
            log::warn!("append failed: {}", js_error_message(&e));
        }
    }

    fn remove(&self, node: &Element) {
        node.remove();
    }

    fn show_image(&self, container: &Element, src: &str, alt: &str) {
        let Ok(img) = self.document.create_element("img") else {
            return;
        };
        let _ = img.set_attribute("src", src);
        let _ = img.set_attribute("alt", alt);
        container.set_text_content(None);
        self.append_child(container, &img);
    }

    fn listen(&self, node: &Element, event: EventKind, handler: Handler) {
        let cb = Closure::wrap(Box::new(move |ev: Event| handler(&ev)) as Box<dyn FnMut(Event)>);
        if let Err(e) = node.add_event_listener_with_callback(event.as_str(), cb.as_ref().unchecked_ref()) {
            log::warn!("cannot listen for {}: {}", event.as_str(), js_error_message(&e));
        }
        // Listeners live as long as the page.
        cb.forget();
    }

    fn read_selected_file(&self, input: &Element) -> Option<FileRead> {
        let file = input.dyn_ref::<HtmlInputElement>()?.files()?.get(0)?;
        Some(read_as_data_url(&file))
    }
}

type ReadSender = Rc<RefCell<Option<oneshot::Sender<Result<String, UiError>>>>>;

fn settle(tx: &ReadSender, result: Result<String, UiError>) {
    if let Some(tx) = tx.borrow_mut().take() {
        let _ = tx.send(result);
    }
}

fn read_as_data_url(file: &File) -> FileRead {
    let reader = match FileReader::new() {
        Ok(reader) => reader,
        Err(e) => return Box::pin(future::ready(Err(UiError::FileRead(js_error_message(&e))))),
    };
    let (tx, rx) = oneshot::channel();
    let tx: ReadSender = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let tx = Rc::clone(&tx);
        let reader = reader.clone();
        Closure::wrap(Box::new(move || {
            let result = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| UiError::FileRead("reader produced no data URL".to_owned()));
            settle(&tx, result);
        }) as Box<dyn FnMut()>)
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::wrap(Box::new(move || {
            settle(&tx, Err(UiError::FileRead("reader error".to_owned())));
        }) as Box<dyn FnMut()>)
    };
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));

    if let Err(e) = reader.read_as_data_url(file) {
        return Box::pin(future::ready(Err(UiError::FileRead(js_error_message(&e)))));
    }

    Box::pin(async move {
        let result = rx.await.unwrap_or_else(|_| Err(UiError::FileRead("read abandoned".to_owned())));
        drop((onload, onerror, reader));
        result
    })
}
