//! Copy or cut text from a document element, or from an explicit string,
//! and report the outcome on an event channel.
//!
//! ```
//! use clip_action::{ClipboardAction, ClipboardOptions, DocumentSurface, MemoryClipboard};
//! use clip_action::dom::Document;
//!
//! let clipboard = MemoryClipboard::new();
//! let mut doc = Document::new(Box::new(clipboard.clone()));
//! let input = doc.create_element("input");
//! doc.set_value(&input, "abc");
//! let body = doc.body();
//! doc.append_child(&body, &input);
//!
//! let clip = ClipboardAction::new(ClipboardOptions::new().target(input), &mut doc).unwrap();
//! assert_eq!(clip.selected_text(), "abc");
//! drop(clip);
//! assert_eq!(clipboard.contents().as_deref(), Some("abc"));
//! ```

pub mod action;
pub mod clipboard;
pub mod clipboard_action;
pub mod config;
pub mod document;
pub mod dom;
pub mod emitter;
pub mod error;
pub mod event;
pub mod select;
pub mod transient;

pub use action::Action;
pub use clipboard::{ClipboardBackend, MemoryClipboard, SystemClipboard, UnsupportedClipboard};
pub use clipboard_action::{ClipboardAction, ClipboardOptions};
pub use document::{DocumentSurface, SelectionSource};
pub use emitter::{Emitter, ListenerId};
pub use error::Error;
pub use event::{ClipboardEmitter, ClipboardEvent, EventKind};
pub use transient::HostStyle;
