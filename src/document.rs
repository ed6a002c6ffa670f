use crate::action::Action;
use std::fmt::Debug;

/// Everything the clipboard action needs from the host document.
///
/// The document owns the element tree, the single focused element, the
/// single text selection and the copy/cut primitive. Passing it in as a
/// capability keeps that global state out of the action itself.
pub trait DocumentSurface {
    type Element: Clone + PartialEq + Debug;

    /// The document element (`<html>`), which carries the `dir` attribute.
    fn root(&self) -> Self::Element;

    fn body(&self) -> Self::Element;

    /// Whether `element` is currently attached to the document tree.
    fn contains(&self, element: &Self::Element) -> bool;

    fn create_element(&mut self, tag: &str) -> Self::Element;

    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element);

    fn remove_child(&mut self, parent: &Self::Element, child: &Self::Element);

    fn get_attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn has_attribute(&self, element: &Self::Element, name: &str) -> bool {
        self.get_attribute(element, name).is_some()
    }

    fn set_attribute(&mut self, element: &Self::Element, name: &str, value: &str);

    fn remove_attribute(&mut self, element: &Self::Element, name: &str);

    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str);

    /// Input/textarea-like controls that expose their text as a value.
    fn is_value_control(&self, element: &Self::Element) -> bool;

    fn is_content_editable(&self, element: &Self::Element) -> bool;

    fn value(&self, element: &Self::Element) -> String;

    fn set_value(&mut self, element: &Self::Element, value: &str);

    /// Rendered text of the element and all of its descendants.
    fn text_content(&self, element: &Self::Element) -> String;

    fn focus(&mut self, element: &Self::Element);

    fn blur(&mut self, element: &Self::Element);

    fn active_element(&self) -> Self::Element;

    /// Select the `[start, end)` character range inside a value control.
    fn set_selection_range(&mut self, element: &Self::Element, start: usize, end: usize);

    fn select_node_contents(&mut self, element: &Self::Element);

    fn remove_all_ranges(&mut self);

    fn selection_text(&self) -> String;

    /// Current vertical scroll offset of the viewport, in pixels.
    fn scroll_top(&self) -> i64;

    /// Run the platform copy or cut primitive on the current selection.
    ///
    /// `false` covers both a failed attempt and a platform that does not
    /// support the command at all.
    fn exec_command(&mut self, action: Action) -> bool;
}

/// How text is read and selected from a target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    /// Editable controls: select the full range of the value.
    Value,
    /// Any other element: select the range spanning its rendered text.
    TextContent,
}

impl SelectionSource {
    pub fn of<D: DocumentSurface + ?Sized>(doc: &D, element: &D::Element) -> Self {
        if doc.is_value_control(element) {
            SelectionSource::Value
        } else {
            SelectionSource::TextContent
        }
    }
}
