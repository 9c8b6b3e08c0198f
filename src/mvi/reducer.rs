//! Reducer trait for the MVI architecture.

use super::intent::Intent;
use super::state::ScreenState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State. Given the same
/// inputs it always produces the same output; async work belongs in the
/// screen's effect handler, never here.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: ScreenState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
