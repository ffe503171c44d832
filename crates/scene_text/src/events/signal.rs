//! Single-event broadcast channel
//!
//! A [`Signal`] holds an ordered list of handlers and calls each of them when
//! the signal is dispatched. Handlers are identified by the
//! [`SubscriptionId`] returned from [`Signal::subscribe`], since closures
//! cannot be compared for identity.
//!
//! Disposing a signal drops every handler and makes the channel permanently
//! inert: later subscriptions are rejected and dispatches reach nobody.

use std::fmt;
use thiserror::Error;

/// Errors raised by a signal channel
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalError {
    /// The signal was disposed and no longer accepts subscribers
    #[error("Signal has been disposed")]
    Disposed,
}

/// Identifier of a handler registered on a [`Signal`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    /// Raw numeric value of this subscription
    pub fn id(&self) -> u64 {
        self.0
    }
}

type Handler<T> = Box<dyn FnMut(&T)>;

struct Binding<T> {
    id: SubscriptionId,
    handler: Handler<T>,
    once: bool,
}

/// Broadcast channel carrying payloads of type `T`
pub struct Signal<T> {
    bindings: Vec<Binding<T>>,
    next_id: u64,
    disposed: bool,
}

impl<T> Signal<T> {
    /// Create a new live signal with no subscribers
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            next_id: 1,
            disposed: false,
        }
    }

    /// Register a handler called on every dispatch
    pub fn subscribe<F>(&mut self, handler: F) -> Result<SubscriptionId, SignalError>
    where
        F: FnMut(&T) + 'static,
    {
        self.bind(Box::new(handler), false)
    }

    /// Register a handler removed after its first call
    pub fn subscribe_once<F>(&mut self, handler: F) -> Result<SubscriptionId, SignalError>
    where
        F: FnMut(&T) + 'static,
    {
        self.bind(Box::new(handler), true)
    }

    fn bind(&mut self, handler: Handler<T>, once: bool) -> Result<SubscriptionId, SignalError> {
        if self.disposed {
            return Err(SignalError::Disposed);
        }

        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding { id, handler, once });
        Ok(id)
    }

    /// Remove a handler. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|binding| binding.id != id);
        self.bindings.len() != before
    }

    /// Call every handler in subscription order
    ///
    /// Returns the number of handlers invoked. A disposed signal invokes
    /// nothing and returns 0.
    pub fn dispatch(&mut self, payload: &T) -> usize {
        if self.disposed {
            log::warn!("Dispatch on a disposed signal ignored");
            return 0;
        }

        for binding in &mut self.bindings {
            (binding.handler)(payload);
        }

        let invoked = self.bindings.len();
        self.bindings.retain(|binding| !binding.once);
        invoked
    }

    /// Remove all handlers, keeping the signal usable
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Number of registered handlers
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no handler is registered
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop all handlers and make the signal permanently inert
    ///
    /// Returns true on the first disposal, false if already disposed.
    pub fn dispose(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        self.bindings.clear();
        self.disposed = true;
        true
    }

    /// Whether [`Signal::dispose`] has been called
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("subscribers", &self.bindings.len())
            .field("disposed", &self.disposed)
            .finish()
    }
}
