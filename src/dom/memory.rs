//! In-memory document tree.
//!
//! `MemoryDom` implements [`Dom`] over a flat arena of nodes rooted at a
//! `<body>`. Besides the trait operations it can dispatch events to attached
//! listeners and simulate file selection with reads that complete on demand,
//! which is everything the behavior tests need to drive a page without a
//! browser.
//!
//! Listeners fire only on their own node; there is no bubbling.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use futures::channel::oneshot;

use super::{Dom, DomEvent, EventKind, FileRead, Handler, Selector};
use crate::error::UiError;

/// Arena index of a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Debug, Default)]
struct MemoryNode {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    text: String,
    value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    selected_file: Option<String>,
}

struct PendingRead {
    input: NodeId,
    data_url: String,
    tx: oneshot::Sender<Result<String, UiError>>,
}

/// Event passed to listeners by [`MemoryDom::dispatch`].
#[derive(Debug, Default)]
pub struct MemoryEvent {
    prevented: Cell<bool>,
}

impl MemoryEvent {
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.prevented.get()
    }
}

impl DomEvent for MemoryEvent {
    fn prevent_default(&self) {
        self.prevented.set(true);
    }
}

pub struct MemoryDom {
    nodes: RefCell<Vec<MemoryNode>>,
    listeners: RefCell<Vec<(NodeId, EventKind, Handler)>>,
    reads: RefCell<Vec<PendingRead>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    const BODY: NodeId = NodeId(0);

    /// An empty document containing only `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let body = MemoryNode { tag: "body".to_owned(), ..MemoryNode::default() };
        Self { nodes: RefCell::new(vec![body]), listeners: RefCell::new(Vec::new()), reads: RefCell::new(Vec::new()) }
    }

    /// The document body.
    #[must_use]
    pub fn root(&self) -> NodeId {
        Self::BODY
    }

    /// Create an element with `attributes` and append it to `parent`.
    pub fn add(&self, parent: NodeId, tag: &str, attributes: &[(&str, &str)]) -> NodeId {
        let id = self.alloc(tag);
        {
            let mut nodes = self.nodes.borrow_mut();
            let node = &mut nodes[id.0];
            for (name, value) in attributes {
                node.attributes.insert((*name).to_owned(), (*value).to_owned());
            }
        }
        self.append_child(&parent, &id);
        id
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].attributes.insert(name.to_owned(), value.to_owned());
    }

    pub fn set_value(&self, node: NodeId, value: &str) {
        value.clone_into(&mut self.nodes.borrow_mut()[node.0].value);
    }

    /// Text content of `node`.
    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    #[must_use]
    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].styles.get(property).cloned()
    }

    #[must_use]
    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    #[must_use]
    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.nodes.borrow()[node.0].children.clone()
    }

    /// Whether `node` is still attached under the body.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == Self::BODY {
                return true;
            }
            cursor = nodes[id.0].parent;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Fire `event` at `node`; returns whether a listener prevented the default.
    pub fn dispatch(&self, node: NodeId, event: EventKind) -> bool {
        let handlers: Vec<Handler> = self
            .listeners
            .borrow()
            .iter()
            .filter(|(target, kind, _)| *target == node && *kind == event)
            .map(|(_, _, handler)| Handler::clone(handler))
            .collect();
        let ev = MemoryEvent::default();
        for handler in handlers {
            handler(&ev);
        }
        ev.default_prevented()
    }

    /// Replace the value of `node` and fire `input`, as typing would.
    pub fn type_text(&self, node: NodeId, value: &str) -> bool {
        self.set_value(node, value);
        self.dispatch(node, EventKind::Input)
    }

    /// Select a file (given as its eventual `data:` URL) or clear the selection.
    pub fn select_file(&self, input: NodeId, data_url: Option<&str>) {
        self.nodes.borrow_mut()[input.0].selected_file = data_url.map(str::to_owned);
    }

    /// Number of file reads started but not yet completed.
    #[must_use]
    pub fn pending_reads(&self) -> usize {
        self.reads.borrow().len()
    }

    /// Complete the `index`-th pending read with its file contents.
    pub fn complete_read(&self, index: usize) -> bool {
        let Some(read) = self.take_read(index) else {
            return false;
        };
        read.tx.send(Ok(read.data_url)).is_ok()
    }

    /// Fail the `index`-th pending read.
    pub fn fail_read(&self, index: usize, reason: &str) -> bool {
        let Some(read) = self.take_read(index) else {
            return false;
        };
        read.tx.send(Err(UiError::FileRead(format!("{reason} (input {:?})", read.input)))).is_ok()
    }

    fn take_read(&self, index: usize) -> Option<PendingRead> {
        let mut reads = self.reads.borrow_mut();
        (index < reads.len()).then(|| reads.remove(index))
    }

    fn alloc(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(MemoryNode { tag: tag.to_ascii_lowercase(), ..MemoryNode::default() });
        NodeId(nodes.len() - 1)
    }

    fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[root.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn matching(&self, root: NodeId, selector: Selector) -> Vec<NodeId> {
        let candidates = self.descendants(root);
        let nodes = self.nodes.borrow();
        candidates
            .into_iter()
            .filter(|id| {
                let node = &nodes[id.0];
                selector.matches(&node.tag, |name| node.attributes.get(name).map(String::as_str))
            })
            .collect()
    }

    fn detach(nodes: &mut [MemoryNode], node: NodeId) {
        if let Some(parent) = nodes[node.0].parent.take() {
            nodes[parent.0].children.retain(|child| *child != node);
        }
    }

    fn class_list(node: &MemoryNode) -> Vec<String> {
        node.attributes
            .get("class")
            .map(|list| list.split_ascii_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn set_class_list(node: &mut MemoryNode, classes: &[String]) {
        node.attributes.insert("class".to_owned(), classes.join(" "));
    }

    fn clear_children(nodes: &mut [MemoryNode], container: NodeId) {
        let children = std::mem::take(&mut nodes[container.0].children);
        for child in children {
            nodes[child.0].parent = None;
        }
    }
}

impl Dom for MemoryDom {
    type Node = NodeId;

    fn query_all(&self, selector: Selector) -> Vec<NodeId> {
        self.matching(Self::BODY, selector)
    }

    fn query_within(&self, root: &NodeId, selector: Selector) -> Vec<NodeId> {
        self.matching(*root, selector)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let candidates = self.descendants(Self::BODY);
        let nodes = self.nodes.borrow();
        candidates.into_iter().find(|node| nodes[node.0].attributes.get("id").is_some_and(|v| v == id))
    }

    fn body(&self) -> Option<NodeId> {
        Some(Self::BODY)
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attributes.get(name).cloned()
    }

    fn value(&self, node: &NodeId) -> String {
        self.nodes.borrow()[node.0].value.clone()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        Self::class_list(&self.nodes.borrow()[node.0]).iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let entry = &mut nodes[node.0];
        let mut classes = Self::class_list(entry);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_owned());
            Self::set_class_list(entry, &classes);
        }
    }

    fn remove_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let entry = &mut nodes[node.0];
        let mut classes = Self::class_list(entry);
        let before = classes.len();
        classes.retain(|c| c != class);
        if classes.len() != before {
            Self::set_class_list(entry, &classes);
        }
    }

    fn toggle_class(&self, node: &NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0].styles.insert(property.to_owned(), value.to_owned());
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        let mut nodes = self.nodes.borrow_mut();
        Self::clear_children(&mut nodes, *node);
        text.clone_into(&mut nodes[node.0].text);
    }

    fn create_element(&self, tag: &str) -> Option<NodeId> {
        Some(self.alloc(tag))
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut nodes = self.nodes.borrow_mut();
        Self::detach(&mut nodes, *child);
        nodes[child.0].parent = Some(*parent);
        nodes[parent.0].children.push(*child);
    }

    fn remove(&self, node: &NodeId) {
        Self::detach(&mut self.nodes.borrow_mut(), *node);
    }

    fn show_image(&self, container: &NodeId, src: &str, alt: &str) {
        {
            let mut nodes = self.nodes.borrow_mut();
            Self::clear_children(&mut nodes, *container);
            nodes[container.0].text.clear();
        }
        self.add(*container, "img", &[("src", src), ("alt", alt)]);
    }

    fn listen(&self, node: &NodeId, event: EventKind, handler: Handler) {
        self.listeners.borrow_mut().push((*node, event, handler));
    }

    fn read_selected_file(&self, input: &NodeId) -> Option<FileRead> {
        let data_url = self.nodes.borrow()[input.0].selected_file.clone()?;
        let (tx, rx) = oneshot::channel();
        self.reads.borrow_mut().push(PendingRead { input: *input, data_url, tx });
        Some(Box::pin(async move {
            rx.await.unwrap_or_else(|_| Err(UiError::FileRead("read abandoned".to_owned())))
        }))
    }
}
