//! Single-writer state container with snapshot fan-out.

use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc;

use super::state::ScreenState;

/// The single source of truth for one screen's state.
///
/// Holds the latest immutable snapshot and delivers every snapshot produced
/// by a reducer application to all subscribers, in production order.
/// There is exactly one logical writer (the screen loop); `apply` runs the
/// whole read-reduce-publish cycle under one lock, so even misbehaving
/// concurrent callers serialize atomically and never interleave
/// field-by-field.
///
/// Writes cannot fail. Failures are state fields, never container errors.
pub struct StateStore<S> {
    inner: Arc<Mutex<Inner<S>>>,
}

struct Inner<S> {
    current: S,
    subscribers: Vec<mpsc::UnboundedSender<S>>,
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: ScreenState> StateStore<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                current: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Clone of the latest snapshot.
    pub fn snapshot(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// Register a subscriber.
    ///
    /// The subscription immediately receives the current snapshot, then
    /// every later snapshot in the order it was produced.
    pub fn subscribe(&self) -> Subscription<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Unbounded send to a live receiver cannot fail.
        let _ = tx.send(inner.current.clone());
        inner.subscribers.push(tx);
        Subscription { rx }
    }

    /// Apply a transition to the current state and publish the result.
    ///
    /// A transition that leaves the state unchanged (by `PartialEq`) is
    /// suppressed: subscribers only see actual changes.
    pub fn apply(&self, transition: impl FnOnce(S) -> S) -> S {
        let mut inner = self.inner.lock();
        let before = inner.current.clone();
        let after = transition(std::mem::take(&mut inner.current));
        inner.current = after.clone();
        if after != before {
            inner
                .subscribers
                .retain(|tx| tx.send(after.clone()).is_ok());
        }
        after
    }
}

/// Receiving half of a state subscription.
pub struct Subscription<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S> Subscription<S> {
    /// Next snapshot, or `None` once the store is gone.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }

    /// Non-blocking variant for synchronous callers.
    pub fn try_next(&mut self) -> Option<S> {
        self.rx.try_recv().ok()
    }
}
