//! Style-preset menu open flag
//!
//! A single process-wide boolean owned by the application. The parameters
//! panel never writes it; it subscribes and re-derives its layout from the
//! latest value. The preset trigger and preset menu flip it.

use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

struct MenuOpenInner {
    open: bool,
    subscribers: Vec<Sender<bool>>,
}

impl MenuOpenInner {
    fn store(&mut self, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        // Dropped subscriptions fail to send and are pruned here
        self.subscribers.retain(|tx| tx.send(open).is_ok());
        debug!(open, subscribers = self.subscribers.len(), "Style preset menu toggled");
    }
}

/// Shared handle to the "style-preset menu is open" flag
#[derive(Clone)]
pub struct MenuOpenStore {
    inner: Arc<RwLock<MenuOpenInner>>,
}

impl std::fmt::Debug for MenuOpenStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("MenuOpenStore")
            .field("open", &inner.open)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl Default for MenuOpenStore {
    fn default() -> Self {
        Self::new(false)
    }
}

impl MenuOpenStore {
    pub fn new(open: bool) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MenuOpenInner {
                open,
                subscribers: Vec::new(),
            })),
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.read().open
    }

    /// Set the flag, notifying subscribers only if the value changed
    pub fn set(&self, open: bool) {
        self.inner.write().store(open);
    }

    pub fn close(&self) {
        self.set(false);
    }

    /// Flip the flag and return the new value
    pub fn toggle(&self) -> bool {
        let mut inner = self.inner.write();
        let open = !inner.open;
        inner.store(open);
        open
    }

    /// Register for change notifications
    pub fn subscribe(&self) -> MenuSubscription {
        let (tx, rx) = unbounded();
        let mut inner = self.inner.write();
        inner.subscribers.push(tx);
        MenuSubscription {
            rx,
            initial: inner.open,
        }
    }
}

/// Receiving end of a store subscription
#[derive(Debug)]
pub struct MenuSubscription {
    rx: Receiver<bool>,
    initial: bool,
}

impl MenuSubscription {
    /// Value of the flag when the subscription was created
    pub fn initial(&self) -> bool {
        self.initial
    }

    /// Drain pending notifications, returning the most recent value
    pub fn latest(&self) -> Option<bool> {
        self.rx.try_iter().last()
    }
}

/// Tracks the last value seen through a subscription
#[derive(Debug)]
pub struct MenuWatcher {
    subscription: MenuSubscription,
    current: bool,
}

impl MenuWatcher {
    pub fn new(store: &MenuOpenStore) -> Self {
        let subscription = store.subscribe();
        let current = subscription.initial();
        Self {
            subscription,
            current,
        }
    }

    /// Apply pending notifications. Returns true if the value changed.
    pub fn poll(&mut self) -> bool {
        match self.subscription.latest() {
            Some(open) if open != self.current => {
                self.current = open;
                true
            }
            _ => false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.current
    }
}
