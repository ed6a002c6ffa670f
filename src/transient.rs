//! Off-screen host for explicit text.
//!
//! When the caller hands over a string instead of an element there is
//! nothing on the page to select, so a readonly textarea is created to
//! carry it. The clipboard action owns the host and removes it again.

use crate::document::DocumentSurface;
use serde::{Deserialize, Serialize};

/// Inline style applied to the transient textarea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostStyle {
    /// Keeps iOS from zooming in on focus
    pub font_size: String,
    /// Horizontal offset that moves the host out of view
    pub offset: String,
}

impl Default for HostStyle {
    fn default() -> Self {
        Self {
            font_size: "12pt".to_string(),
            offset: "-9999px".to_string(),
        }
    }
}

/// Create a detached readonly textarea holding `text`.
pub fn create_host<D: DocumentSurface + ?Sized>(
    doc: &mut D,
    style: &HostStyle,
    text: &str,
) -> D::Element {
    let root = doc.root();
    let is_rtl = doc.get_attribute(&root, "dir").as_deref() == Some("rtl");
    let top = format!("{}px", doc.scroll_top());

    let host = doc.create_element("textarea");
    doc.set_style(&host, "font-size", &style.font_size);
    doc.set_style(&host, "border", "0");
    doc.set_style(&host, "padding", "0");
    doc.set_style(&host, "margin", "0");
    doc.set_style(&host, "position", "absolute");
    doc.set_style(&host, if is_rtl { "right" } else { "left" }, &style.offset);
    doc.set_style(&host, "top", &top);
    doc.set_attribute(&host, "readonly", "");
    doc.set_value(&host, text);
    host
}
