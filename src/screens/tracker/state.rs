//! State for the live-tracker screen.

use crate::collab::feed::PositionFix;
use crate::mvi::ScreenState;

/// Live-tracker screen state: the most recent fix while following.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackerState {
    pub following: bool,
    pub position: Option<PositionFix>,
    /// The position source went away while we were following.
    pub feed_ended: bool,
}

impl ScreenState for TrackerState {}
