//! Reducer for the settings screen.

use crate::collab::settings::{PrefId, PrefSnapshot};
use crate::flow::{Confirmable, Notice, Remote};
use crate::mvi::Reducer;

use super::intent::SettingsIntent;
use super::state::{SettingsAction, SettingsState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SettingsIntent::Open => SettingsState {
                prefs: state.prefs.begin(),
                dirty: false,
                ..state
            },

            SettingsIntent::Loaded { fields } => SettingsState {
                prefs: Remote::Ready(fields),
                dirty: false,
                ..state
            },

            SettingsIntent::LoadFailed { message } => SettingsState {
                prefs: Remote::Failed { message },
                ..state
            },

            SettingsIntent::Toggle { id } => toggle(state, id),

            SettingsIntent::Confirm => {
                let (confirm, action) = state.confirm.confirm();
                let mut next = SettingsState { confirm, ..state };
                match action {
                    Some(SettingsAction::TogglePref(id)) => apply_toggle(&mut next, id),
                    Some(SettingsAction::RunBackup) => next.backup = next.backup.begin(),
                    None => {}
                }
                next
            }

            SettingsIntent::DismissConfirm => SettingsState {
                confirm: state.confirm.dismiss(),
                ..state
            },

            SettingsIntent::Save => {
                if state.prefs.is_ready() {
                    SettingsState {
                        save: state.save.begin(),
                        ..state
                    }
                } else {
                    state
                }
            }

            SettingsIntent::SaveDone => {
                let mut next = SettingsState {
                    save: Remote::Ready(()),
                    dirty: false,
                    ..state
                };
                push_notice(&mut next, |seq| Notice::info(seq, "Settings saved"));
                next
            }

            SettingsIntent::SaveFailed { message } => SettingsState {
                save: Remote::Failed { message },
                ..state
            },

            SettingsIntent::BackupRequested => SettingsState {
                confirm: Confirmable::request(
                    SettingsAction::RunBackup,
                    "Run a manual backup now? This may take a while.",
                ),
                ..state
            },

            SettingsIntent::BackupDone { report } => {
                let entries = report.entries;
                let mut next = SettingsState {
                    backup: Remote::Ready(report),
                    ..state
                };
                push_notice(&mut next, |seq| {
                    Notice::info(seq, format!("Backup finished ({entries} entries)"))
                });
                next
            }

            SettingsIntent::BackupFailed { message } => SettingsState {
                backup: Remote::Failed { message },
                ..state
            },

            SettingsIntent::NoticeExpired { seq } => {
                if state.notice.as_ref().map(|n| n.seq) == Some(seq) {
                    SettingsState {
                        notice: None,
                        ..state
                    }
                } else {
                    state
                }
            }
        }
    }
}

fn toggle(state: SettingsState, id: PrefId) -> SettingsState {
    let Some(field) = state.field(id).cloned() else {
        return state;
    };
    if field.sensitive {
        let turning = if field.value { "off" } else { "on" };
        SettingsState {
            confirm: Confirmable::request(
                SettingsAction::TogglePref(id),
                format!("Turn {turning} '{}'?", field.label),
            ),
            ..state
        }
    } else {
        let mut next = state;
        apply_toggle(&mut next, id);
        next
    }
}

fn apply_toggle(state: &mut SettingsState, id: PrefId) {
    if let Remote::Ready(fields) = &mut state.prefs {
        if let Some(field) = fields.iter_mut().find(|f| f.id == id) {
            field.value = !field.value;
            state.dirty = true;
        }
    }
}

fn push_notice(state: &mut SettingsState, build: impl FnOnce(u64) -> Notice) {
    state.notice_seq += 1;
    state.notice = Some(build(state.notice_seq));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::api::BackupReport;
    use crate::collab::settings::PrefManager;
    use std::time::SystemTime;

    fn loaded() -> SettingsState {
        SettingsReducer::reduce(
            SettingsState::default(),
            SettingsIntent::Loaded {
                fields: PrefManager::new().to_snapshots(),
            },
        )
    }

    fn sensitive_id() -> PrefId {
        PrefId::FriendRequests
    }

    fn plain_id() -> PrefId {
        PrefId::NearbyAlerts
    }

    #[test]
    fn plain_toggle_applies_immediately() {
        let state = loaded();
        let before = state.field(plain_id()).map(|f| f.value);
        let next = SettingsReducer::reduce(state, SettingsIntent::Toggle { id: plain_id() });
        assert_eq!(next.field(plain_id()).map(|f| f.value), before.map(|v| !v));
        assert!(next.dirty);
        assert!(!next.confirm_visible());
    }

    #[test]
    fn sensitive_toggle_only_stages_confirmation() {
        let state = loaded();
        let before = state.field(sensitive_id()).map(|f| f.value);
        let next = SettingsReducer::reduce(state, SettingsIntent::Toggle { id: sensitive_id() });
        // Value untouched until confirmed.
        assert_eq!(next.field(sensitive_id()).map(|f| f.value), before);
        assert!(!next.dirty);
        assert!(next.confirm_visible());
        assert_eq!(
            next.confirm.pending_action(),
            Some(&SettingsAction::TogglePref(sensitive_id()))
        );
    }

    #[test]
    fn confirm_executes_staged_toggle_exactly_once() {
        let staged =
            SettingsReducer::reduce(loaded(), SettingsIntent::Toggle { id: sensitive_id() });
        let before = staged.field(sensitive_id()).map(|f| f.value);

        let confirmed = SettingsReducer::reduce(staged, SettingsIntent::Confirm);
        assert_eq!(
            confirmed.field(sensitive_id()).map(|f| f.value),
            before.map(|v| !v)
        );
        assert!(confirmed.dirty);
        assert!(!confirmed.confirm_visible());

        // A second confirm has nothing staged and changes nothing.
        let again = SettingsReducer::reduce(confirmed.clone(), SettingsIntent::Confirm);
        assert_eq!(again, confirmed);
    }

    #[test]
    fn dismiss_discards_and_is_idempotent() {
        let staged =
            SettingsReducer::reduce(loaded(), SettingsIntent::Toggle { id: sensitive_id() });
        let before = staged.field(sensitive_id()).map(|f| f.value);

        let dismissed = SettingsReducer::reduce(staged, SettingsIntent::DismissConfirm);
        assert!(!dismissed.confirm_visible());
        assert_eq!(dismissed.field(sensitive_id()).map(|f| f.value), before);

        let again = SettingsReducer::reduce(dismissed.clone(), SettingsIntent::DismissConfirm);
        assert_eq!(again, dismissed);
    }

    #[test]
    fn backup_request_stages_run_backup() {
        let next = SettingsReducer::reduce(loaded(), SettingsIntent::BackupRequested);
        assert!(next.confirm_visible());
        assert_eq!(
            next.confirm.pending_action(),
            Some(&SettingsAction::RunBackup)
        );
        assert!(!next.backup.is_loading());

        let confirmed = SettingsReducer::reduce(next, SettingsIntent::Confirm);
        assert!(confirmed.backup.is_loading());
    }

    #[test]
    fn save_requires_loaded_prefs() {
        let next = SettingsReducer::reduce(SettingsState::default(), SettingsIntent::Save);
        assert!(!next.save.is_loading());

        let next = SettingsReducer::reduce(loaded(), SettingsIntent::Save);
        assert!(next.save.is_loading());
    }

    #[test]
    fn save_done_clears_dirty_and_posts_notice() {
        let mut state = loaded();
        state.dirty = true;
        state.save = Remote::Loading;

        let next = SettingsReducer::reduce(state, SettingsIntent::SaveDone);
        assert!(!next.dirty);
        assert!(next.save.is_ready());
        let notice = next.notice.expect("notice posted");
        assert_eq!(notice.text, "Settings saved");
    }

    #[test]
    fn backup_done_reports_entry_count() {
        let next = SettingsReducer::reduce(
            loaded(),
            SettingsIntent::BackupDone {
                report: BackupReport {
                    entries: 12,
                    finished_at: SystemTime::UNIX_EPOCH,
                },
            },
        );
        assert!(next.backup.is_ready());
        assert_eq!(
            next.notice.map(|n| n.text),
            Some("Backup finished (12 entries)".to_string())
        );
    }

    #[test]
    fn stale_notice_expiry_is_ignored() {
        let with_notice = SettingsReducer::reduce(loaded(), SettingsIntent::SaveDone);
        let current_seq = with_notice.notice.as_ref().map(|n| n.seq).expect("notice");

        let stale = SettingsReducer::reduce(
            with_notice.clone(),
            SettingsIntent::NoticeExpired {
                seq: current_seq + 1,
            },
        );
        assert_eq!(stale, with_notice);

        let expired = SettingsReducer::reduce(
            with_notice,
            SettingsIntent::NoticeExpired { seq: current_seq },
        );
        assert_eq!(expired.notice, None);
    }

    #[test]
    fn expiring_an_already_cleared_notice_is_a_noop() {
        let state = loaded();
        let next = SettingsReducer::reduce(state.clone(), SettingsIntent::NoticeExpired { seq: 1 });
        assert_eq!(next, state);
    }
}
