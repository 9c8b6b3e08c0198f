//! Intents for the share-invite screen.

use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum InviteIntent {
    EmailChanged { value: String },
    /// Validate locally, then send through the gateway if well-formed.
    Submit,
    SendDone,
    SendFailed { message: String },
    /// A notice's display interval elapsed. Stale sequences are ignored.
    NoticeExpired { seq: u64 },
}

impl Intent for InviteIntent {}
