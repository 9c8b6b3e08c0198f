//! State for the settings screen.

use crate::collab::api::BackupReport;
use crate::collab::settings::{PrefId, PrefSnapshot};
use crate::flow::{Confirmable, Notice, Remote};
use crate::mvi::ScreenState;

/// Settings screen state: notification preferences, the save operation,
/// manual backup, and the shared confirmation dialog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsState {
    pub prefs: Remote<Vec<PrefSnapshot>>,
    /// Edits not yet persisted.
    pub dirty: bool,
    pub save: Remote<()>,
    pub backup: Remote<BackupReport>,
    pub confirm: Confirmable<SettingsAction>,
    pub notice: Option<Notice>,
    /// Monotonic counter backing notice sequence numbers.
    pub notice_seq: u64,
}

impl ScreenState for SettingsState {}

/// Actions that require an explicit confirmation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    TogglePref(PrefId),
    RunBackup,
}

impl SettingsState {
    pub fn confirm_visible(&self) -> bool {
        self.confirm.is_pending()
    }

    pub fn field(&self, id: PrefId) -> Option<&PrefSnapshot> {
        self.prefs.ready()?.iter().find(|f| f.id == id)
    }
}
