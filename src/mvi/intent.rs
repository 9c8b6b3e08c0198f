//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (taps, toggles, form edits)
/// - System events (fetch completions, feed updates, timers)
///
/// Intents are processed by reducers to produce new states. Clone is
/// required because the screen loop hands the same intent to both the
/// reducer and the effect handler.
pub trait Intent: Clone + Send + 'static {}
