//! In-memory document.
//!
//! A small element tree with one focus slot and one selection, backed by a
//! `ClipboardBackend` for the copy/cut primitive. Used by the command line
//! front end and by tests.

use crate::action::Action;
use crate::clipboard::{ClipboardBackend, MemoryClipboard};
use crate::document::DocumentSurface;
use std::collections::BTreeMap;

/// Handle to an element of a `Document`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    value: String,
    text: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Empty,
    /// Character range inside a value control
    Control {
        element: ElementId,
        start: usize,
        end: usize,
    },
    /// Whole contents of an element
    Contents(ElementId),
}

pub struct Document {
    nodes: Vec<Node>,
    root: ElementId,
    body: ElementId,
    active: ElementId,
    selection: Selection,
    scroll_top: i64,
    clipboard: Box<dyn ClipboardBackend>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Box::new(MemoryClipboard::new()))
    }
}

impl Document {
    /// Empty `<html><body></body></html>` document writing to `clipboard`.
    pub fn new(clipboard: Box<dyn ClipboardBackend>) -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: ElementId(0),
            body: ElementId(0),
            active: ElementId(0),
            selection: Selection::Empty,
            scroll_top: 0,
            clipboard,
        };
        let root = doc.create_element("html");
        let body = doc.create_element("body");
        doc.node_mut(&body).parent = Some(root);
        doc.node_mut(&root).children.push(body);
        doc.root = root;
        doc.body = body;
        doc.active = body;
        doc
    }

    pub fn tag_name(&self, element: &ElementId) -> &str {
        &self.node(element).tag
    }

    pub fn style(&self, element: &ElementId, property: &str) -> Option<&str> {
        self.node(element).style.get(property).map(String::as_str)
    }

    pub fn children(&self, element: &ElementId) -> &[ElementId] {
        &self.node(element).children
    }

    /// Replace the element's own text and detach its children.
    pub fn set_text_content(&mut self, element: &ElementId, text: &str) {
        let children = std::mem::take(&mut self.node_mut(element).children);
        for child in children {
            self.detach(&child);
        }
        self.node_mut(element).text = text.to_string();
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        self.descendants(&self.root)
            .into_iter()
            .find(|el| self.node(el).attributes.get("id").map(String::as_str) == Some(id))
    }

    pub fn set_scroll_top(&mut self, offset: i64) {
        self.scroll_top = offset;
    }

    fn node(&self, element: &ElementId) -> &Node {
        &self.nodes[element.0]
    }

    fn node_mut(&mut self, element: &ElementId) -> &mut Node {
        &mut self.nodes[element.0]
    }

    /// The element and everything below it, depth first.
    fn descendants(&self, element: &ElementId) -> Vec<ElementId> {
        let mut out = vec![*element];
        let mut i = 0;
        while i < out.len() {
            let current = out[i];
            out.extend(self.node(&current).children.iter().copied());
            i += 1;
        }
        out
    }

    fn is_inside(&self, element: &ElementId, ancestor: &ElementId) -> bool {
        let mut current = Some(*element);
        while let Some(el) = current {
            if el == *ancestor {
                return true;
            }
            current = self.node(&el).parent;
        }
        false
    }

    /// Unlink `element` from its parent and drop focus or selection that
    /// pointed into the removed subtree.
    fn detach(&mut self, element: &ElementId) {
        if let Some(parent) = self.node_mut(element).parent.take() {
            self.node_mut(&parent).children.retain(|c| c != element);
        }
        if self.is_inside(&self.active, element) {
            self.active = self.body;
        }
        let selected = match self.selection {
            Selection::Control { element: el, .. } | Selection::Contents(el) => Some(el),
            Selection::Empty => None,
        };
        if let Some(el) = selected {
            if self.is_inside(&el, element) {
                self.selection = Selection::Empty;
            }
        }
    }

    fn is_locked(&self, element: &ElementId) -> bool {
        let attrs = &self.node(element).attributes;
        attrs.contains_key("readonly") || attrs.contains_key("disabled")
    }

    /// Remove the selected range from a writable value control.
    fn delete_selection(&mut self) {
        if let Selection::Control { element, start, end } = self.selection {
            if self.is_locked(&element) || start == end {
                return;
            }
            let value: String = {
                let current = &self.node(&element).value;
                current
                    .chars()
                    .take(start)
                    .chain(current.chars().skip(end))
                    .collect()
            };
            self.node_mut(&element).value = value;
            self.selection = Selection::Control {
                element,
                start,
                end: start,
            };
        }
    }
}

impl DocumentSurface for Document {
    type Element = ElementId;

    fn root(&self) -> ElementId {
        self.root
    }

    fn body(&self) -> ElementId {
        self.body
    }

    fn contains(&self, element: &ElementId) -> bool {
        element.0 < self.nodes.len() && self.is_inside(element, &self.root)
    }

    fn create_element(&mut self, tag: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag: tag.to_lowercase(),
            ..Node::default()
        });
        id
    }

    fn append_child(&mut self, parent: &ElementId, child: &ElementId) {
        if self.is_inside(parent, child) {
            log::warn!("Refusing to append {:?} inside its own subtree", child);
            return;
        }
        self.detach(child);
        self.node_mut(child).parent = Some(*parent);
        self.node_mut(parent).children.push(*child);
    }

    fn remove_child(&mut self, parent: &ElementId, child: &ElementId) {
        if self.node(child).parent == Some(*parent) {
            self.detach(child);
        }
    }

    fn get_attribute(&self, element: &ElementId, name: &str) -> Option<String> {
        self.node(element).attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: &ElementId, name: &str, value: &str) {
        self.node_mut(element)
            .attributes
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, element: &ElementId, name: &str) {
        self.node_mut(element).attributes.remove(name);
    }

    fn set_style(&mut self, element: &ElementId, property: &str, value: &str) {
        self.node_mut(element)
            .style
            .insert(property.to_string(), value.to_string());
    }

    fn is_value_control(&self, element: &ElementId) -> bool {
        matches!(self.node(element).tag.as_str(), "input" | "textarea")
    }

    fn is_content_editable(&self, element: &ElementId) -> bool {
        match self.node(element).attributes.get("contenteditable") {
            Some(value) => value.is_empty() || value == "true" || value == "plaintext-only",
            None => false,
        }
    }

    fn value(&self, element: &ElementId) -> String {
        self.node(element).value.clone()
    }

    fn set_value(&mut self, element: &ElementId, value: &str) {
        self.node_mut(element).value = value.to_string();
        if let Selection::Control { element: el, .. } = self.selection {
            if el == *element {
                self.selection = Selection::Empty;
            }
        }
    }

    fn text_content(&self, element: &ElementId) -> String {
        let node = self.node(element);
        let mut text = node.text.clone();
        for child in &node.children {
            text.push_str(&self.text_content(child));
        }
        text
    }

    fn focus(&mut self, element: &ElementId) {
        if self.contains(element) {
            self.active = *element;
        }
    }

    fn blur(&mut self, element: &ElementId) {
        if self.active == *element {
            self.active = self.body;
        }
    }

    fn active_element(&self) -> ElementId {
        self.active
    }

    fn set_selection_range(&mut self, element: &ElementId, start: usize, end: usize) {
        let len = self.node(element).value.chars().count();
        let end = end.min(len);
        let start = start.min(end);
        self.selection = Selection::Control {
            element: *element,
            start,
            end,
        };
    }

    fn select_node_contents(&mut self, element: &ElementId) {
        self.selection = Selection::Contents(*element);
    }

    fn remove_all_ranges(&mut self) {
        self.selection = Selection::Empty;
    }

    fn selection_text(&self) -> String {
        match self.selection {
            Selection::Empty => String::new(),
            Selection::Control { element, start, end } => self
                .node(&element)
                .value
                .chars()
                .skip(start)
                .take(end - start)
                .collect(),
            Selection::Contents(element) => self.text_content(&element),
        }
    }

    fn scroll_top(&self) -> i64 {
        self.scroll_top
    }

    fn exec_command(&mut self, action: Action) -> bool {
        let text = self.selection_text();
        match self.clipboard.write_text(&text) {
            Ok(()) => {
                log::debug!(
                    "{} of {} characters via {} clipboard",
                    action,
                    text.chars().count(),
                    self.clipboard.name()
                );
                if action == Action::Cut {
                    self.delete_selection();
                }
                true
            }
            Err(e) => {
                log::warn!("{} command failed: {:#}", action, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::UnsupportedClipboard;

    fn input_with_value(doc: &mut Document, value: &str) -> ElementId {
        let input = doc.create_element("input");
        doc.set_value(&input, value);
        let body = doc.body();
        doc.append_child(&body, &input);
        input
    }

    #[test]
    fn test_new_document_focuses_body() {
        let doc = Document::default();
        assert_eq!(doc.active_element(), doc.body());
        assert_eq!(doc.tag_name(&doc.root()), "html");
        assert!(doc.contains(&doc.body()));
    }

    #[test]
    fn test_detached_element_is_not_contained() {
        let mut doc = Document::default();
        let p = doc.create_element("p");
        assert!(!doc.contains(&p));

        let body = doc.body();
        doc.append_child(&body, &p);
        assert!(doc.contains(&p));

        doc.remove_child(&body, &p);
        assert!(!doc.contains(&p));
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        let span = doc.create_element("span");
        doc.set_text_content(&div, "ab");
        doc.set_text_content(&span, "c");
        doc.append_child(&div, &span);

        assert_eq!(doc.text_content(&div), "abc");
    }

    #[test]
    fn test_get_element_by_id() {
        let mut doc = Document::default();
        let input = input_with_value(&mut doc, "abc");
        doc.set_attribute(&input, "id", "input");

        assert_eq!(doc.get_element_by_id("input"), Some(input));
        assert_eq!(doc.get_element_by_id("foo"), None);
    }

    #[test]
    fn test_selection_range_is_clamped_to_value() {
        let mut doc = Document::default();
        let input = input_with_value(&mut doc, "héllo");

        doc.set_selection_range(&input, 1, 99);
        assert_eq!(doc.selection_text(), "éllo");

        doc.remove_all_ranges();
        assert_eq!(doc.selection_text(), "");
    }

    #[test]
    fn test_removing_selected_element_clears_focus_and_selection() {
        let mut doc = Document::default();
        let input = input_with_value(&mut doc, "abc");
        doc.focus(&input);
        doc.set_selection_range(&input, 0, 3);

        let body = doc.body();
        doc.remove_child(&body, &input);

        assert_eq!(doc.active_element(), body);
        assert_eq!(doc.selection_text(), "");
    }

    #[test]
    fn test_cut_removes_selected_value() {
        let clipboard = MemoryClipboard::new();
        let mut doc = Document::new(Box::new(clipboard.clone()));
        let input = input_with_value(&mut doc, "abcdef");
        doc.set_selection_range(&input, 1, 4);

        assert!(doc.exec_command(Action::Cut));

        assert_eq!(clipboard.contents().as_deref(), Some("bcd"));
        assert_eq!(doc.value(&input), "aef");
    }

    #[test]
    fn test_cut_leaves_readonly_value() {
        let mut doc = Document::default();
        let input = input_with_value(&mut doc, "abc");
        doc.set_attribute(&input, "readonly", "");
        doc.set_selection_range(&input, 0, 3);

        assert!(doc.exec_command(Action::Cut));
        assert_eq!(doc.value(&input), "abc");
    }

    #[test]
    fn test_exec_command_reports_backend_failure() {
        let mut doc = Document::new(Box::new(UnsupportedClipboard));
        let input = input_with_value(&mut doc, "abc");
        doc.set_selection_range(&input, 0, 3);

        assert!(!doc.exec_command(Action::Copy));
    }

    #[test]
    fn test_content_editable_detection() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        assert!(!doc.is_content_editable(&div));
        doc.set_attribute(&div, "contenteditable", "");
        assert!(doc.is_content_editable(&div));
        doc.set_attribute(&div, "contenteditable", "false");
        assert!(!doc.is_content_editable(&div));
    }
}
