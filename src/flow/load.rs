//! Retryable async load.

use crate::collab::OpError;

/// Lifecycle of a value fetched from a collaborator.
///
/// The shape makes "loading and failed at the same time" unrepresentable:
/// a well-formed state is always exactly one of these. Retries are
/// user-initiated only — the screen replays the originating intent; there
/// is no automatic backoff here.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    /// Nothing requested yet.
    NotAsked,
    /// Request in flight.
    Loading,
    /// Last request succeeded.
    Ready(T),
    /// Last request failed; `message` is ready for display.
    Failed { message: String },
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::NotAsked
    }
}

impl<T> Remote<T> {
    /// Enter `Loading`, clearing any previous error.
    pub fn begin(self) -> Self {
        Remote::Loading
    }

    /// Fold a collaborator result into the next lifecycle state.
    pub fn resolve(self, result: Result<T, OpError>) -> Self {
        match result {
            Ok(value) => Remote::Ready(value),
            Err(err) => Remote::Failed {
                message: err.user_message(),
            },
        }
    }

    /// Drop a failure, keeping any other state. Clearing a non-error is
    /// a no-op.
    pub fn reset_error(self) -> Self {
        match self {
            Remote::Failed { .. } => Remote::NotAsked,
            other => other,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Remote::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed { message } => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_asked_is_default() {
        assert_eq!(Remote::<u32>::default(), Remote::NotAsked);
    }

    #[test]
    fn begin_clears_previous_error() {
        let state = Remote::<u32>::Failed {
            message: "boom".into(),
        };
        let next = state.begin();
        assert!(next.is_loading());
        assert_eq!(next.error(), None);
    }

    #[test]
    fn resolve_success() {
        let next = Remote::Loading.resolve(Ok(5u32));
        assert_eq!(next.ready(), Some(&5));
        assert!(!next.is_loading());
    }

    #[test]
    fn resolve_failure_carries_user_message() {
        let next = Remote::<u32>::Loading.resolve(Err(OpError::api("network down")));
        assert_eq!(next.error(), Some("network down"));
        assert!(!next.is_loading());
    }

    #[test]
    fn loading_and_error_are_mutually_exclusive() {
        for state in [
            Remote::<u32>::NotAsked,
            Remote::Loading,
            Remote::Ready(1),
            Remote::Failed {
                message: "x".into(),
            },
        ] {
            assert!(!(state.is_loading() && state.error().is_some()));
        }
    }

    #[test]
    fn reset_error_is_idempotent() {
        let cleared = Remote::<u32>::Failed {
            message: "x".into(),
        }
        .reset_error();
        assert_eq!(cleared, Remote::NotAsked);
        assert_eq!(cleared.reset_error(), Remote::NotAsked);

        let ready = Remote::Ready(3).reset_error();
        assert_eq!(ready, Remote::Ready(3));
    }
}
