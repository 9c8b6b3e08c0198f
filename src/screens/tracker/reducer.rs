//! Reducer for the live-tracker screen.

use crate::mvi::Reducer;

use super::intent::TrackerIntent;
use super::state::TrackerState;

pub struct TrackerReducer;

impl Reducer for TrackerReducer {
    type State = TrackerState;
    type Intent = TrackerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            TrackerIntent::StartFollowing => TrackerState {
                following: true,
                feed_ended: false,
                ..state
            },

            TrackerIntent::StopFollowing => TrackerState {
                following: false,
                ..state
            },

            TrackerIntent::FixReceived { fix } => {
                if state.following {
                    TrackerState {
                        position: Some(fix),
                        ..state
                    }
                } else {
                    // Late arrival from a forwarder that is being torn
                    // down; the screen is no longer interested.
                    state
                }
            }

            TrackerIntent::FeedClosed => TrackerState {
                following: false,
                feed_ended: true,
                ..state
            },
        }
    }
}
