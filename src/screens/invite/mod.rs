//! Share-invite screen: local email validation in front of the invite
//! gateway.

mod intent;
mod reducer;
mod state;

pub use intent::InviteIntent;
pub use reducer::InviteReducer;
pub use state::{validate_email, InviteState};

use std::sync::Arc;
use std::time::Duration;

use crate::collab::api::InviteGateway;
use crate::mvi::{Effect, Feature, IntentSender};

/// Feature wiring for the share-invite screen.
pub struct InviteScreen {
    gateway: Arc<dyn InviteGateway>,
    notice_ttl: Duration,
}

impl InviteScreen {
    pub fn new(gateway: Arc<dyn InviteGateway>, notice_ttl: Duration) -> Self {
        Self {
            gateway,
            notice_ttl,
        }
    }
}

impl Feature for InviteScreen {
    type State = InviteState;
    type Intent = InviteIntent;
    type Reducer = InviteReducer;

    fn effects(
        &mut self,
        intent: &InviteIntent,
        _before: &InviteState,
        after: &InviteState,
        _intents: &IntentSender<InviteIntent>,
    ) -> Vec<Effect<InviteIntent>> {
        match intent {
            // Only a validated submit reaches the collaborator.
            InviteIntent::Submit if after.is_sending() => {
                let gateway = Arc::clone(&self.gateway);
                let email = after.email.trim().to_string();
                vec![Effect::task(async move {
                    Some(match gateway.send_invite(&email).await {
                        Ok(()) => InviteIntent::SendDone,
                        Err(err) => InviteIntent::SendFailed {
                            message: err.user_message(),
                        },
                    })
                })]
            }

            InviteIntent::SendDone | InviteIntent::SendFailed { .. } => match &after.notice {
                Some(notice) => vec![Effect::delay(
                    self.notice_ttl,
                    InviteIntent::NoticeExpired { seq: notice.seq },
                )],
                None => Vec::new(),
            },

            _ => Vec::new(),
        }
    }

    fn task_failed(&self) -> Option<InviteIntent> {
        Some(InviteIntent::SendFailed {
            message: crate::collab::OpError::unexpected("send task crashed").user_message(),
        })
    }
}
