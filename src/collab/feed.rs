//! Continuous most-recent-wins sources.

use std::time::SystemTime;

use tokio::sync::watch;

/// A live position sample.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionFix {
    pub lat: f64,
    pub lon: f64,
    pub heading_deg: f32,
    pub recorded_at: SystemTime,
}

/// Producing half of a live feed. Dropping it ends the feed.
pub struct FeedPublisher<T> {
    tx: watch::Sender<Option<T>>,
}

/// Consuming half of a live feed.
///
/// Only the latest value is retained; consumers are expected to tolerate
/// missed intermediate values.
pub struct LiveFeed<T> {
    rx: watch::Receiver<Option<T>>,
}

impl<T> Clone for LiveFeed<T> {
    fn clone(&self) -> Self {
        Self {
            rx: self.rx.clone(),
        }
    }
}

/// Create a connected publisher/feed pair with no value yet.
pub fn live_feed<T: Clone + Send + Sync + 'static>() -> (FeedPublisher<T>, LiveFeed<T>) {
    let (tx, rx) = watch::channel(None);
    (FeedPublisher { tx }, LiveFeed { rx })
}

impl<T> FeedPublisher<T> {
    /// Replace the current value. Lagging consumers simply skip to this.
    pub fn publish(&self, value: T) {
        // Send only fails with no receivers; the value is still latest
        // for feeds cloned later, so the result is deliberately ignored.
        let _ = self.tx.send(Some(value));
    }
}

impl<T: Clone> LiveFeed<T> {
    /// Latest value, if anything was ever published.
    pub fn latest(&self) -> Option<T> {
        self.rx.borrow().clone()
    }

    /// Wait for the next published value. `None` once the publisher is gone.
    pub async fn next(&mut self) -> Option<T> {
        loop {
            if self.rx.changed().await.is_err() {
                return None;
            }
            if let Some(value) = self.rx.borrow_and_update().clone() {
                return Some(value);
            }
        }
    }
}
