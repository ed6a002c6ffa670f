use crate::document::{DocumentSurface, SelectionSource};

/// Select all text of `element` and return what ended up selected.
pub fn select<D: DocumentSurface + ?Sized>(doc: &mut D, element: &D::Element) -> String {
    match SelectionSource::of(&*doc, element) {
        SelectionSource::Value => select_value(doc, element),
        SelectionSource::TextContent => {
            if doc.is_content_editable(element) {
                doc.focus(element);
            }
            doc.select_node_contents(element);
            doc.selection_text()
        }
    }
}

fn select_value<D: DocumentSurface + ?Sized>(doc: &mut D, element: &D::Element) -> String {
    // Temporarily readonly so touch devices don't pop up a keyboard
    let was_readonly = doc.has_attribute(element, "readonly");
    if !was_readonly {
        doc.set_attribute(element, "readonly", "");
    }

    let value = doc.value(element);
    doc.focus(element);
    doc.set_selection_range(element, 0, value.chars().count());

    if !was_readonly {
        doc.remove_attribute(element, "readonly");
    }

    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Document;

    #[test]
    fn test_select_value_control() {
        let mut doc = Document::default();
        let textarea = doc.create_element("textarea");
        doc.set_value(&textarea, "line one\nline two");
        let body = doc.body();
        doc.append_child(&body, &textarea);

        let selected = select(&mut doc, &textarea);

        assert_eq!(selected, "line one\nline two");
        assert_eq!(doc.selection_text(), selected);
        assert_eq!(doc.active_element(), textarea);
        assert!(!doc.has_attribute(&textarea, "readonly"));
    }

    #[test]
    fn test_select_keeps_existing_readonly() {
        let mut doc = Document::default();
        let input = doc.create_element("input");
        doc.set_attribute(&input, "readonly", "");
        doc.set_value(&input, "abc");
        let body = doc.body();
        doc.append_child(&body, &input);

        select(&mut doc, &input);

        assert!(doc.has_attribute(&input, "readonly"));
    }

    #[test]
    fn test_select_generic_element_does_not_move_focus() {
        let mut doc = Document::default();
        let p = doc.create_element("p");
        doc.set_text_content(&p, "abc");
        let body = doc.body();
        doc.append_child(&body, &p);

        assert_eq!(select(&mut doc, &p), "abc");
        assert_eq!(doc.active_element(), body);
    }

    #[test]
    fn test_select_content_editable_focuses() {
        let mut doc = Document::default();
        let div = doc.create_element("div");
        doc.set_attribute(&div, "contenteditable", "true");
        doc.set_text_content(&div, "draft");
        let body = doc.body();
        doc.append_child(&body, &div);

        assert_eq!(select(&mut doc, &div), "draft");
        assert_eq!(doc.active_element(), div);
    }
}
