//! Transient user feedback.

/// A short-lived message (toast) shown after an operation completes.
///
/// The owning screen schedules a delayed expiry intent carrying `seq`;
/// expiry intents whose sequence no longer matches the visible notice are
/// stale and must be ignored, so a newer notice is never clipped by an
/// older timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub text: String,
    pub level: NoticeLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl Notice {
    pub fn info(seq: u64, text: impl Into<String>) -> Self {
        Self {
            seq,
            text: text.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn error(seq: u64, text: impl Into<String>) -> Self {
        Self {
            seq,
            text: text.into(),
            level: NoticeLevel::Error,
        }
    }
}
