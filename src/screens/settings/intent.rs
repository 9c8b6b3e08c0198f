//! Intents for the settings screen.

use crate::collab::api::BackupReport;
use crate::collab::settings::{PrefId, PrefSnapshot};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    /// Screen entry: load persisted preferences.
    Open,
    Loaded { fields: Vec<PrefSnapshot> },
    LoadFailed { message: String },

    /// Toggle a preference. Sensitive preferences only stage a pending
    /// confirmation; others apply immediately.
    Toggle { id: PrefId },

    /// Execute whatever is staged in the confirmation dialog.
    Confirm,
    /// Discard the staged action.
    DismissConfirm,

    /// Persist the current preference values.
    Save,
    SaveDone,
    SaveFailed { message: String },

    /// Stage a manual backup behind the confirmation dialog.
    BackupRequested,
    BackupDone { report: BackupReport },
    BackupFailed { message: String },

    /// A notice's display interval elapsed. Stale sequences are ignored.
    NoticeExpired { seq: u64 },
}

impl Intent for SettingsIntent {}
