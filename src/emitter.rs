//! Name-keyed event channel.
//!
//! The action object only publishes to an emitter; whoever constructs the
//! action owns the emitter and manages subscriptions on it.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Handle returned by `on`/`once`, used to remove a single listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler<P> = Rc<dyn Fn(&P)>;

struct Listener<P> {
    id: ListenerId,
    once: bool,
    handler: Handler<P>,
}

pub struct Emitter<P> {
    listeners: RefCell<HashMap<String, Vec<Listener<P>>>>,
    next_id: Cell<u64>,
}

impl<P> Default for Emitter<P> {
    fn default() -> Self {
        Self {
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }
}

impl<P> Emitter<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to every emit of `name`.
    pub fn on<F>(&self, name: &str, handler: F) -> ListenerId
    where
        F: Fn(&P) + 'static,
    {
        self.add(name, false, Rc::new(handler))
    }

    /// Subscribe `handler` to the next emit of `name` only.
    pub fn once<F>(&self, name: &str, handler: F) -> ListenerId
    where
        F: Fn(&P) + 'static,
    {
        self.add(name, true, Rc::new(handler))
    }

    /// Remove one listener, or every listener of `name` when `id` is `None`.
    pub fn off(&self, name: &str, id: Option<ListenerId>) {
        let mut listeners = self.listeners.borrow_mut();
        match id {
            Some(id) => {
                if let Some(list) = listeners.get_mut(name) {
                    list.retain(|l| l.id != id);
                    if list.is_empty() {
                        listeners.remove(name);
                    }
                }
            }
            None => {
                listeners.remove(name);
            }
        }
    }

    /// Call every listener of `name` in registration order.
    ///
    /// Listeners see a snapshot taken before the first one runs, so they may
    /// subscribe or unsubscribe freely.
    pub fn emit(&self, name: &str, payload: &P) {
        let snapshot: Vec<Handler<P>> = {
            let mut listeners = self.listeners.borrow_mut();
            let Some(list) = listeners.get_mut(name) else {
                return;
            };
            let handlers = list.iter().map(|l| Rc::clone(&l.handler)).collect();
            list.retain(|l| !l.once);
            if list.is_empty() {
                listeners.remove(name);
            }
            handlers
        };

        for handler in snapshot {
            handler(payload);
        }
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners
            .borrow()
            .get(name)
            .map(|list| list.len())
            .unwrap_or(0)
    }

    fn add(&self, name: &str, once: bool, handler: Handler<P>) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .push(Listener { id, once, handler });
        id
    }
}
