use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use shared::domain::HandlerName;

use crate::controller::Controller;

/// One bridged handler and the controller that declared it.
///
/// The owner is held weakly; controllers belong to the host framework.
#[derive(Clone)]
pub struct HandlerEntry {
    pub name: HandlerName,
    pub controller: String,
    pub owner: Weak<RefCell<dyn Controller>>,
}

impl HandlerEntry {
    pub fn new(name: HandlerName, controller: String, owner: &Rc<RefCell<dyn Controller>>) -> Self {
        Self {
            name,
            controller,
            owner: Rc::downgrade(owner),
        }
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("name", &self.name)
            .field("controller", &self.controller)
            .field("alive", &(self.owner.strong_count() > 0))
            .finish()
    }
}

/// Registered handlers in registration order. Duplicates are kept.
#[derive(Debug, Default)]
pub struct HandlerRegistry {
    entries: Vec<HandlerEntry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: HandlerEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of the entries registered under `name`, in registration order.
    pub fn matching(&self, name: &str) -> Vec<HandlerEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.name.as_str() == name)
            .cloned()
            .collect()
    }

    pub fn names(&self) -> Vec<HandlerName> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }
}
