//! Settings screen: typed notification preferences, durable save, and a
//! confirmation-gated manual backup.

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::{SettingsAction, SettingsState};

use std::sync::Arc;
use std::time::Duration;

use crate::collab::api::BackupService;
use crate::collab::settings::{PrefManager, SettingsStore};
use crate::mvi::{Effect, Feature, IntentSender};

/// Feature wiring for the settings screen.
pub struct SettingsScreen {
    store: Arc<dyn SettingsStore>,
    backup: Arc<dyn BackupService>,
    notice_ttl: Duration,
}

impl SettingsScreen {
    pub fn new(
        store: Arc<dyn SettingsStore>,
        backup: Arc<dyn BackupService>,
        notice_ttl: Duration,
    ) -> Self {
        Self {
            store,
            backup,
            notice_ttl,
        }
    }
}

impl Feature for SettingsScreen {
    type State = SettingsState;
    type Intent = SettingsIntent;
    type Reducer = SettingsReducer;

    fn effects(
        &mut self,
        intent: &SettingsIntent,
        before: &SettingsState,
        after: &SettingsState,
        _intents: &IntentSender<SettingsIntent>,
    ) -> Vec<Effect<SettingsIntent>> {
        match intent {
            SettingsIntent::Open => {
                let store = Arc::clone(&self.store);
                vec![Effect::task(async move {
                    Some(match store.load().await {
                        Ok(raw) => {
                            // Boundary validation: raw map to typed schema.
                            let mut manager = PrefManager::new();
                            manager.load_from_raw(&raw);
                            SettingsIntent::Loaded {
                                fields: manager.to_snapshots(),
                            }
                        }
                        Err(err) => SettingsIntent::LoadFailed {
                            message: err.user_message(),
                        },
                    })
                })]
            }

            SettingsIntent::Save if after.save.is_loading() => {
                let Some(fields) = after.prefs.ready().cloned() else {
                    return Vec::new();
                };
                let store = Arc::clone(&self.store);
                vec![Effect::task(async move {
                    let mut manager = PrefManager::new();
                    manager.apply_snapshots(&fields);
                    Some(match store.save(manager.to_raw()).await {
                        Ok(()) => SettingsIntent::SaveDone,
                        Err(err) => SettingsIntent::SaveFailed {
                            message: err.user_message(),
                        },
                    })
                })]
            }

            SettingsIntent::Confirm
                if before.confirm.pending_action() == Some(&SettingsAction::RunBackup)
                    && after.backup.is_loading() =>
            {
                let backup = Arc::clone(&self.backup);
                vec![Effect::task(async move {
                    Some(match backup.run_backup().await {
                        Ok(report) => SettingsIntent::BackupDone { report },
                        Err(err) => SettingsIntent::BackupFailed {
                            message: err.user_message(),
                        },
                    })
                })]
            }

            SettingsIntent::SaveDone | SettingsIntent::BackupDone { .. } => {
                match &after.notice {
                    Some(notice) => vec![Effect::delay(
                        self.notice_ttl,
                        SettingsIntent::NoticeExpired { seq: notice.seq },
                    )],
                    None => Vec::new(),
                }
            }

            _ => Vec::new(),
        }
    }
}
