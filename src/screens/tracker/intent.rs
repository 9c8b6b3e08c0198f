//! Intents for the live-tracker screen.

use crate::collab::feed::PositionFix;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum TrackerIntent {
    StartFollowing,
    StopFollowing,
    /// A new fix arrived from the feed forwarder.
    FixReceived { fix: PositionFix },
    /// The position source is gone.
    FeedClosed,
}

impl Intent for TrackerIntent {}
