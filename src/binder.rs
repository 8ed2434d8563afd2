//! Startup scan: marker attributes to behaviors.
//!
//! ARCHITECTURE
//! ============
//! [`BINDINGS`] is the whole contract between templates and this crate: a
//! selector, the behavior it opts into, and where the behavior's target
//! element comes from. [`scan`] resolves the table against a document without
//! side effects; [`UiBinder::bind_all`] then attaches one listener (or timer)
//! per resolved attachment. Elements added after startup are not bound.
//!
//! ERROR HANDLING
//! ==============
//! A missing target (counter, preview, sidebar) is not an error. The
//! attachment is skipped and only counted in the [`BindSummary`].

#[cfg(test)]
#[path = "binder_test.rs"]
mod binder_test;

use std::rc::Rc;

use crate::behaviors::preview::PreviewSlot;
use crate::behaviors::{confirm, counter, preview, sidebar, validation};
use crate::config::UiConfig;
use crate::consts::{
    ALERT_CLASS, CHAR_COUNT_ATTR, CONFIRM_ATTR, MENU_TOGGLE_ID, PREVIEW_ATTR, SIDEBAR_CLASS, VALIDATE_ATTR,
};
use crate::dismiss::schedule_dismiss;
use crate::dom::{Dom, DomEvent, EventKind, Selector};
use crate::host::Dialogs;
use crate::runtime::Runtime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Fade and remove a server-rendered alert.
    AutoDismiss,
    /// Toggle the sidebar's open class on click.
    SidebarToggle,
    /// Mirror a textarea's length into a counter element.
    CharCounter,
    /// Block submission while required fields are empty.
    RequiredFields,
    /// Render the selected image file into a preview element.
    ImagePreview,
    /// Ask for confirmation before the element's default action.
    ConfirmAction,
}

/// Where a behavior finds its second element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSource {
    /// Element whose id is the value of this attribute on the bound element.
    IdFromAttr(&'static str),
    /// First element in the document matching this selector.
    First(Selector),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub selector: Selector,
    pub behavior: Behavior,
    pub target: Option<TargetSource>,
}

/// Bindings applied at startup, in order.
pub const BINDINGS: [Binding; 6] = [
    Binding { selector: Selector::Class(ALERT_CLASS), behavior: Behavior::AutoDismiss, target: None },
    Binding {
        selector: Selector::Id(MENU_TOGGLE_ID),
        behavior: Behavior::SidebarToggle,
        target: Some(TargetSource::First(Selector::Class(SIDEBAR_CLASS))),
    },
    Binding {
        selector: Selector::TagWithAttr { tag: "textarea", attr: CHAR_COUNT_ATTR },
        behavior: Behavior::CharCounter,
        target: Some(TargetSource::IdFromAttr(CHAR_COUNT_ATTR)),
    },
    Binding {
        selector: Selector::TagWithAttr { tag: "form", attr: VALIDATE_ATTR },
        behavior: Behavior::RequiredFields,
        target: None,
    },
    Binding {
        selector: Selector::InputTypeWithAttr { input_type: "file", attr: PREVIEW_ATTR },
        behavior: Behavior::ImagePreview,
        target: Some(TargetSource::IdFromAttr(PREVIEW_ATTR)),
    },
    Binding { selector: Selector::Attr(CONFIRM_ATTR), behavior: Behavior::ConfirmAction, target: None },
];

/// One element matched by a binding, with its resolved target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment<N> {
    pub behavior: Behavior,
    pub element: N,
    pub target: Option<N>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<N> {
    pub attachments: Vec<Attachment<N>>,
    /// Matches dropped because their target element is missing.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BindSummary {
    pub attached: usize,
    pub skipped: usize,
}

/// Resolve [`BINDINGS`] against `dom` without attaching anything.
pub fn scan<D: Dom>(dom: &D) -> Scan<D::Node> {
    let mut attachments = Vec::new();
    let mut skipped = 0;
    for binding in BINDINGS {
        for element in matched(dom, binding.selector) {
            let target = match binding.target {
                None => None,
                Some(source) => match resolve_target(dom, source, &element) {
                    Some(found) => Some(found),
                    None => {
                        log::debug!("skipping {:?} on {}: target missing", binding.behavior, binding.selector.to_css());
                        skipped += 1;
                        continue;
                    }
                },
            };
            attachments.push(Attachment { behavior: binding.behavior, element, target });
        }
    }
    Scan { attachments, skipped }
}

/// Elements a binding applies to. Ids bind one element, the first in
/// document order, even when a template repeats the id.
fn matched<D: Dom>(dom: &D, selector: Selector) -> Vec<D::Node> {
    match selector {
        Selector::Id(id) => dom.element_by_id(id).into_iter().collect(),
        _ => dom.query_all(selector),
    }
}

fn resolve_target<D: Dom>(dom: &D, source: TargetSource, element: &D::Node) -> Option<D::Node> {
    match source {
        TargetSource::IdFromAttr(attr) => {
            let id = dom.attribute(element, attr)?;
            dom.element_by_id(&id)
        }
        TargetSource::First(selector) => dom.query_first(selector),
    }
}

/// Attaches behaviors to a document.
pub struct UiBinder<D: Dom, R: Runtime> {
    dom: Rc<D>,
    runtime: Rc<R>,
    dialogs: Rc<dyn Dialogs>,
    config: Rc<UiConfig>,
}

impl<D, R> UiBinder<D, R>
where
    D: Dom + 'static,
    R: Runtime + 'static,
{
    pub fn new(dom: Rc<D>, runtime: Rc<R>, dialogs: Rc<dyn Dialogs>, config: Rc<UiConfig>) -> Self {
        Self { dom, runtime, dialogs, config }
    }

    /// Scan the document once and attach every resolved behavior.
    pub fn bind_all(&self) -> BindSummary {
        let scan = scan(self.dom.as_ref());
        let mut summary = BindSummary { attached: 0, skipped: scan.skipped };
        for attachment in scan.attachments {
            if self.attach(attachment) {
                summary.attached += 1;
            } else {
                summary.skipped += 1;
            }
        }
        log::debug!("bound {} behaviors ({} skipped)", summary.attached, summary.skipped);
        summary
    }

    fn attach(&self, attachment: Attachment<D::Node>) -> bool {
        let Attachment { behavior, element, target } = attachment;
        match (behavior, target) {
            (Behavior::AutoDismiss, _) => {
                let timing = self.config.timing;
                schedule_dismiss(&self.dom, &self.runtime, element, timing.alert_dismiss_ms, timing.fade_ms);
            }
            (Behavior::SidebarToggle, Some(bar)) => {
                let dom = Rc::clone(&self.dom);
                self.dom.listen(
                    &element,
                    EventKind::Click,
                    Rc::new(move |_: &dyn DomEvent| {
                        sidebar::toggle(dom.as_ref(), &bar);
                    }),
                );
            }
            (Behavior::CharCounter, Some(counter_el)) => {
                let dom = Rc::clone(&self.dom);
                let textarea = element.clone();
                self.dom.listen(
                    &element,
                    EventKind::Input,
                    Rc::new(move |_: &dyn DomEvent| {
                        counter::refresh(dom.as_ref(), &textarea, &counter_el);
                    }),
                );
            }
            (Behavior::RequiredFields, _) => {
                let dom = Rc::clone(&self.dom);
                let dialogs = Rc::clone(&self.dialogs);
                let config = Rc::clone(&self.config);
                let form = element.clone();
                self.dom.listen(
                    &element,
                    EventKind::Submit,
                    Rc::new(move |ev: &dyn DomEvent| {
                        let report = validation::check_required(dom.as_ref(), &form);
                        if !report.is_valid() {
                            ev.prevent_default();
                            dialogs.alert(&config.messages.validation_failed);
                        }
                    }),
                );
            }
            (Behavior::ImagePreview, Some(preview_el)) => {
                let dom = Rc::clone(&self.dom);
                let runtime = Rc::clone(&self.runtime);
                let slot = Rc::new(PreviewSlot::default());
                let input = element.clone();
                self.dom.listen(
                    &element,
                    EventKind::Change,
                    Rc::new(move |_: &dyn DomEvent| {
                        preview::on_change(&dom, runtime.as_ref(), &slot, &input, &preview_el);
                    }),
                );
            }
            (Behavior::ConfirmAction, _) => {
                let dom = Rc::clone(&self.dom);
                let dialogs = Rc::clone(&self.dialogs);
                let config = Rc::clone(&self.config);
                let trigger = element.clone();
                self.dom.listen(
                    &element,
                    EventKind::Click,
                    Rc::new(move |ev: &dyn DomEvent| {
                        let fallback = &config.messages.confirm_default;
                        if !confirm::confirm_action(dom.as_ref(), dialogs.as_ref(), &trigger, fallback) {
                            ev.prevent_default();
                        }
                    }),
                );
            }
            (Behavior::SidebarToggle | Behavior::CharCounter | Behavior::ImagePreview, None) => return false,
        }
        true
    }
}
