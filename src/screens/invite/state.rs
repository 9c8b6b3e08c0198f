//! State for the share-invite screen.

use crate::flow::{Notice, Remote};
use crate::mvi::ScreenState;

/// Share-invite screen state: a single email form plus the send
/// operation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InviteState {
    pub email: String,
    /// Inline validation message. Validation failures never leave the
    /// screen — the gateway is only invoked for well-formed input.
    pub validation: Option<String>,
    pub send: Remote<()>,
    pub notice: Option<Notice>,
    pub notice_seq: u64,
}

impl ScreenState for InviteState {}

impl InviteState {
    pub fn is_sending(&self) -> bool {
        self.send.is_loading()
    }
}

/// Local precondition check for an invite address.
///
/// Deliberately shallow — the collaborator owns real deliverability.
/// Returns the inline message for malformed input.
pub fn validate_email(email: &str) -> Option<String> {
    let email = email.trim();
    if email.is_empty() {
        return Some("Enter an email address.".to_string());
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next();
    match domain {
        Some(domain)
            if !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.') =>
        {
            None
        }
        _ => Some("That doesn't look like a valid email address.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_addresses_pass() {
        assert_eq!(validate_email("ada@example.com"), None);
        assert_eq!(validate_email("  ada@sub.example.org "), None);
    }

    #[test]
    fn malformed_addresses_fail() {
        for bad in ["", "   ", "ada", "ada@", "@example.com", "ada@nodot", "ada@.com", "ada@com."] {
            assert!(validate_email(bad).is_some(), "{bad:?} should be rejected");
        }
    }
}
