//! The clipboard action: one construction selects text, runs the copy or
//! cut primitive, reports the outcome and clears the selection again.

use crate::action::Action;
use crate::document::DocumentSurface;
use crate::error::{Error, Result};
use crate::event::{ClipboardEmitter, ClipboardEvent, EventKind};
use crate::select::select;
use crate::transient::{create_host, HostStyle};
use std::rc::Rc;

/// Construction input for `ClipboardAction`.
pub struct ClipboardOptions<E> {
    action: Option<String>,
    container: Option<E>,
    emitter: Option<Rc<ClipboardEmitter<E>>>,
    target: Option<E>,
    text: Option<String>,
    trigger: Option<E>,
    host_style: HostStyle,
}

impl<E> Default for ClipboardOptions<E> {
    fn default() -> Self {
        Self {
            action: None,
            container: None,
            emitter: None,
            target: None,
            text: None,
            trigger: None,
            host_style: HostStyle::default(),
        }
    }
}

impl<E> ClipboardOptions<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw action name; checked when the action is constructed.
    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn container(mut self, container: E) -> Self {
        self.container = Some(container);
        self
    }

    pub fn emitter(mut self, emitter: Rc<ClipboardEmitter<E>>) -> Self {
        self.emitter = Some(emitter);
        self
    }

    pub fn target(mut self, target: E) -> Self {
        self.target = Some(target);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn trigger(mut self, trigger: E) -> Self {
        self.trigger = Some(trigger);
        self
    }

    pub fn host_style(mut self, style: HostStyle) -> Self {
        self.host_style = style;
        self
    }
}

/// A single copy or cut invocation against a document.
///
/// The action borrows the document for its whole life since it claims the
/// document's focus and selection. Any transient host it created is removed
/// on cleanup and, at the latest, when the action is dropped.
pub struct ClipboardAction<'d, D: DocumentSurface + ?Sized> {
    doc: &'d mut D,
    action: Action,
    container: D::Element,
    emitter: Option<Rc<ClipboardEmitter<D::Element>>>,
    target: Option<D::Element>,
    text: Option<String>,
    trigger: Option<D::Element>,
    selected_text: String,
    host_style: HostStyle,
    fake_element: Option<D::Element>,
}

impl<'d, D: DocumentSurface + ?Sized> ClipboardAction<'d, D> {
    /// Validate `options` and run the whole invocation.
    pub fn new(options: ClipboardOptions<D::Element>, doc: &'d mut D) -> Result<Self> {
        let action = match options.action.as_deref() {
            Some(name) => name.parse()?,
            None => Action::default(),
        };

        if let Some(target) = &options.target {
            validate_target(&*doc, target, action)?;
        }

        let container = match options.container {
            Some(container) if doc.contains(&container) => container,
            Some(container) => {
                log::warn!("Container {:?} is not in the document, using body", container);
                doc.body()
            }
            None => doc.body(),
        };

        let mut clip = Self {
            doc,
            action,
            container,
            emitter: options.emitter,
            target: options.target,
            text: options.text,
            trigger: options.trigger,
            selected_text: String::new(),
            host_style: options.host_style,
            fake_element: None,
        };
        clip.init_selection();
        Ok(clip)
    }

    /// Explicit text, unless it is empty.
    fn explicit_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.is_empty())
    }

    fn init_selection(&mut self) {
        if self.explicit_text().is_some() {
            self.select_fake();
        } else if self.target.is_some() {
            self.select_target();
        } else {
            log::debug!("Nothing to {}: neither text nor target given", self.action);
        }
    }

    /// Put the explicit text into a transient host under the container,
    /// select it and run the primitive.
    pub fn select_fake(&mut self) {
        self.remove_fake();
        let Some(text) = self.text.as_deref().filter(|text| !text.is_empty()) else {
            return;
        };

        let host = create_host(&mut *self.doc, &self.host_style, text);
        self.doc.append_child(&self.container, &host);
        self.selected_text = select(&mut *self.doc, &host);
        self.fake_element = Some(host);
        self.copy_text();
    }

    /// Select the target's text and run the primitive.
    pub fn select_target(&mut self) {
        let Some(target) = self.target.clone() else {
            return;
        };
        self.selected_text = select(&mut *self.doc, &target);
        self.copy_text();
    }

    pub fn copy_text(&mut self) {
        let succeeded = self.doc.exec_command(self.action);
        log::debug!(
            "{} command {} for {} characters",
            self.action,
            if succeeded { "succeeded" } else { "failed" },
            self.selected_text.chars().count()
        );
        self.handle_result(succeeded);
    }

    /// Publish the outcome, then clear the selection.
    pub fn handle_result(&mut self, succeeded: bool) {
        let (kind, text) = if succeeded {
            (EventKind::Success, Some(self.selected_text.clone()))
        } else {
            (EventKind::Error, None)
        };
        let event = ClipboardEvent {
            action: self.action,
            text,
            trigger: self.trigger.clone(),
        };

        match &self.emitter {
            Some(emitter) => emitter.emit(kind.as_str(), &event),
            None => log::debug!("No emitter set, {} event dropped", kind),
        }

        self.clear_selection();
    }

    /// Give up focus and selection and remove the transient host.
    ///
    /// Safe to call any number of times.
    pub fn clear_selection(&mut self) {
        if let Some(trigger) = &self.trigger {
            self.doc.focus(trigger);
        }
        let active = self.doc.active_element();
        self.doc.blur(&active);
        self.doc.remove_all_ranges();
        self.remove_fake();
    }

    pub fn remove_fake(&mut self) {
        if let Some(host) = self.fake_element.take() {
            self.doc.remove_child(&self.container, &host);
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn container(&self) -> &D::Element {
        &self.container
    }

    pub fn emitter(&self) -> Option<&Rc<ClipboardEmitter<D::Element>>> {
        self.emitter.as_ref()
    }

    pub fn target(&self) -> Option<&D::Element> {
        self.target.as_ref()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn trigger(&self) -> Option<&D::Element> {
        self.trigger.as_ref()
    }

    pub fn selected_text(&self) -> &str {
        &self.selected_text
    }

    /// The transient host, while it is attached.
    pub fn fake_element(&self) -> Option<&D::Element> {
        self.fake_element.as_ref()
    }

    pub fn document(&self) -> &D {
        &*self.doc
    }
}

impl<'d, D: DocumentSurface + ?Sized> Drop for ClipboardAction<'d, D> {
    fn drop(&mut self) {
        self.remove_fake();
    }
}

fn validate_target<D: DocumentSurface + ?Sized>(
    doc: &D,
    target: &D::Element,
    action: Action,
) -> Result<()> {
    if !doc.contains(target) {
        return Err(Error::InvalidTarget);
    }

    let disabled = doc.has_attribute(target, "disabled");
    match action {
        Action::Copy if disabled => Err(Error::DisabledTarget),
        Action::Cut if disabled || doc.has_attribute(target, "readonly") => {
            Err(Error::ReadonlyTarget)
        }
        _ => Ok(()),
    }
}
