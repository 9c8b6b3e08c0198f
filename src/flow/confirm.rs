//! Staged action behind an explicit confirmation step.

/// A consequential action that must not run on the first tap.
///
/// `request` only stages the action together with a user-facing message;
/// a separate confirm executes it, a dismiss discards it. The staged
/// action can be taken at most once.
#[derive(Debug, Clone, PartialEq)]
pub enum Confirmable<A> {
    /// No confirmation pending.
    Idle,
    /// Dialog visible, action staged.
    Pending { action: A, message: String },
}

impl<A> Default for Confirmable<A> {
    fn default() -> Self {
        Confirmable::Idle
    }
}

impl<A> Confirmable<A> {
    /// Stage an action and show the dialog.
    pub fn request(action: A, message: impl Into<String>) -> Self {
        Confirmable::Pending {
            action,
            message: message.into(),
        }
    }

    /// Close the dialog, yielding the staged action exactly once.
    pub fn confirm(self) -> (Self, Option<A>) {
        match self {
            Confirmable::Pending { action, .. } => (Confirmable::Idle, Some(action)),
            Confirmable::Idle => (Confirmable::Idle, None),
        }
    }

    /// Discard the staged action. Dismissing an already-dismissed dialog
    /// is a no-op.
    pub fn dismiss(self) -> Self {
        Confirmable::Idle
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Confirmable::Pending { .. })
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Confirmable::Pending { message, .. } => Some(message),
            Confirmable::Idle => None,
        }
    }

    pub fn pending_action(&self) -> Option<&A> {
        match self {
            Confirmable::Pending { action, .. } => Some(action),
            Confirmable::Idle => None,
        }
    }
}
