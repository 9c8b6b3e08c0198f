//! Side effects scheduled by state transitions.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::sync::mpsc;

/// Boxed async effect. Resolves to an optional follow-up intent that
/// re-enters the screen's reduce cycle.
pub type EffectTask<I> = Pin<Box<dyn Future<Output = Option<I>> + Send>>;

/// Work scheduled as a result of a state transition.
///
/// Reducers stay pure; the effect handler returns these and the screen
/// loop runs them inside the screen's own task scope.
pub enum Effect<I> {
    /// Synchronous follow-up intent, observed in program order before any
    /// async completion.
    Dispatch(I),
    /// Async work (a fetch, a store write) whose completion may post an
    /// intent back to the loop.
    Task(EffectTask<I>),
    /// Post an intent after a fixed delay. Used for transient UI feedback
    /// such as auto-clearing a notice.
    Delay { after: Duration, intent: I },
}

impl<I> Effect<I> {
    pub fn dispatch(intent: I) -> Self {
        Effect::Dispatch(intent)
    }

    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = Option<I>> + Send + 'static,
    {
        Effect::Task(Box::pin(future))
    }

    pub fn delay(after: Duration, intent: I) -> Self {
        Effect::Delay { after, intent }
    }
}

/// Cloneable handle for posting intents into a screen's loop.
///
/// Long-running effect tasks (e.g. a live-feed forwarder) hold one of
/// these. Sending to a torn-down screen is a silent no-op: the work is
/// abandoned together with the screen.
pub struct IntentSender<I> {
    tx: mpsc::UnboundedSender<I>,
}

impl<I> Clone for IntentSender<I> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
        }
    }
}

impl<I> IntentSender<I> {
    pub(crate) fn new(tx: mpsc::UnboundedSender<I>) -> Self {
        Self { tx }
    }

    pub fn send(&self, intent: I) {
        if self.tx.send(intent).is_err() {
            tracing::debug!("intent dropped: screen torn down");
        }
    }
}
