use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use std::cell::RefCell;
use std::rc::Rc;

/// Destination of the copy/cut primitive.
pub trait ClipboardBackend {
    /// Write text to the clipboard
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Read text back from the clipboard
    fn read_text(&mut self) -> Result<String>;

    /// Backend name (for logging)
    fn name(&self) -> &'static str;
}

/// The system clipboard, through arboard.
#[derive(Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardBackend for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new()
            .context("Failed to access clipboard")?;

        clipboard.set_text(text.to_string())
            .context("Failed to write text to clipboard")
    }

    fn read_text(&mut self) -> Result<String> {
        let mut clipboard = Clipboard::new()
            .context("Failed to access clipboard")?;

        clipboard.get_text()
            .context("Failed to read text from clipboard")
    }

    fn name(&self) -> &'static str {
        "system"
    }
}

/// In-process clipboard. Clones share the same buffer, so a test can keep
/// one handle while the document owns the other.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    contents: Rc<RefCell<Option<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written text, if anything was written
    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }

    fn read_text(&mut self) -> Result<String> {
        self.contents
            .borrow()
            .clone()
            .context("Clipboard is empty")
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

/// A platform without a usable copy/cut command.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedClipboard;

impl ClipboardBackend for UnsupportedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<()> {
        bail!("Clipboard commands are not supported on this platform")
    }

    fn read_text(&mut self) -> Result<String> {
        bail!("Clipboard commands are not supported on this platform")
    }

    fn name(&self) -> &'static str {
        "unsupported"
    }
}

/// Build a backend from its config name
pub fn backend_from_name(name: &str) -> Result<Box<dyn ClipboardBackend>> {
    match name.to_lowercase().as_str() {
        "system" => Ok(Box::new(SystemClipboard::new())),
        "memory" => Ok(Box::new(MemoryClipboard::new())),
        "unsupported" => Ok(Box::new(UnsupportedClipboard)),
        other => bail!("Unknown clipboard backend: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_clipboard_shares_buffer() {
        let handle = MemoryClipboard::new();
        let mut writer = handle.clone();

        writer.write_text("abc").unwrap();

        assert_eq!(handle.contents().as_deref(), Some("abc"));
        assert_eq!(writer.read_text().unwrap(), "abc");
    }

    #[test]
    fn test_memory_clipboard_empty_read_fails() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.read_text().is_err());
    }

    #[test]
    fn test_unsupported_clipboard_always_fails() {
        let mut clipboard = UnsupportedClipboard;
        assert!(clipboard.write_text("abc").is_err());
    }

    #[test]
    fn test_backend_from_name() {
        assert_eq!(backend_from_name("memory").unwrap().name(), "memory");
        assert_eq!(backend_from_name("Unsupported").unwrap().name(), "unsupported");
        assert!(backend_from_name("x11").is_err());
    }
}
