//! Terminal resize listeners
//!
//! Widgets that track the terminal size register a callback here and hold
//! the returned [`ResizeSubscription`]; dropping it unregisters the callback.

use ratatui::layout::Size;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

type Listener = Box<dyn FnMut(Size)>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, Listener>,
}

/// Shared registry of resize callbacks. Cloning yields another handle to the
/// same registry.
#[derive(Clone, Default)]
pub struct ResizeListeners {
    inner: Rc<RefCell<Registry>>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` until the returned subscription is cancelled or dropped.
    pub fn add_listener(&self, listener: impl FnMut(Size) + 'static) -> ResizeSubscription {
        let mut registry = self.inner.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, Box::new(listener));
        ResizeSubscription {
            id,
            registry: Rc::downgrade(&self.inner),
            active: true,
        }
    }

    /// Invokes every registered listener with the new size.
    pub fn dispatch(&self, size: Size) {
        let mut registry = self.inner.borrow_mut();
        for listener in registry.listeners.values_mut() {
            listener(size);
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for ResizeListeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeListeners")
            .field("listeners", &self.inner.borrow().listeners.len())
            .finish()
    }
}

/// Registration of one resize listener.
#[derive(Debug)]
pub struct ResizeSubscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
    active: bool,
}

impl ResizeSubscription {
    /// Removes the listener. Safe to call more than once.
    pub fn cancel(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        self.cancel();
    }
}
