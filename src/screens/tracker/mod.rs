//! Live-tracker screen: follows a continuous position feed.
//!
//! The feed forwarder is a task inside the screen's own scope: it ends
//! when the user stops following, when the publisher goes away, or when
//! the screen is torn down. Nothing here outlives the screen.

mod intent;
mod reducer;
mod state;

pub use intent::TrackerIntent;
pub use reducer::TrackerReducer;
pub use state::TrackerState;

use tokio::sync::watch;

use crate::collab::feed::{LiveFeed, PositionFix};
use crate::mvi::{Effect, Feature, IntentSender};

/// Feature wiring for the live-tracker screen.
pub struct TrackerScreen {
    feed: LiveFeed<PositionFix>,
    /// Held while following; dropping it tells the forwarder to exit.
    session: Option<watch::Sender<()>>,
}

impl TrackerScreen {
    pub fn new(feed: LiveFeed<PositionFix>) -> Self {
        Self {
            feed,
            session: None,
        }
    }
}

impl Feature for TrackerScreen {
    type State = TrackerState;
    type Intent = TrackerIntent;
    type Reducer = TrackerReducer;

    fn effects(
        &mut self,
        intent: &TrackerIntent,
        before: &TrackerState,
        after: &TrackerState,
        intents: &IntentSender<TrackerIntent>,
    ) -> Vec<Effect<TrackerIntent>> {
        match intent {
            TrackerIntent::StartFollowing if !before.following && after.following => {
                let (stop_tx, mut stop_rx) = watch::channel(());
                self.session = Some(stop_tx);

                let mut feed = self.feed.clone();
                let intents = intents.clone();
                vec![Effect::task(async move {
                    loop {
                        tokio::select! {
                            stopped = stop_rx.changed() => {
                                if stopped.is_err() {
                                    // Session dropped: user stopped following.
                                    return None;
                                }
                            }
                            next = feed.next() => match next {
                                Some(fix) => intents.send(TrackerIntent::FixReceived { fix }),
                                None => return Some(TrackerIntent::FeedClosed),
                            },
                        }
                    }
                })]
            }

            TrackerIntent::StopFollowing | TrackerIntent::FeedClosed => {
                self.session = None;
                Vec::new()
            }

            _ => Vec::new(),
        }
    }
}
