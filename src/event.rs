use crate::action::Action;
use crate::emitter::Emitter;
use std::fmt;

/// Names of the events published by a clipboard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Success,
    Error,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Success => "success",
            EventKind::Error => "error",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `success` and `error` events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEvent<E> {
    pub action: Action,
    /// The selected text; only set on success.
    pub text: Option<String>,
    /// Element that started the action, passed through untouched.
    pub trigger: Option<E>,
}

pub type ClipboardEmitter<E> = Emitter<ClipboardEvent<E>>;
