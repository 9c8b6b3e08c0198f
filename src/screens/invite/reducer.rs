//! Reducer for the share-invite screen.

use crate::flow::{Notice, Remote};
use crate::mvi::Reducer;

use super::intent::InviteIntent;
use super::state::{validate_email, InviteState};

pub struct InviteReducer;

impl Reducer for InviteReducer {
    type State = InviteState;
    type Intent = InviteIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InviteIntent::EmailChanged { value } => InviteState {
                email: value,
                validation: None,
                send: state.send.reset_error(),
                ..state
            },

            InviteIntent::Submit => match validate_email(&state.email) {
                Some(message) => InviteState {
                    validation: Some(message),
                    ..state
                },
                None => InviteState {
                    validation: None,
                    send: state.send.begin(),
                    ..state
                },
            },

            InviteIntent::SendDone => {
                let mut next = InviteState {
                    email: String::new(),
                    send: Remote::Ready(()),
                    ..state
                };
                push_notice(&mut next, |seq| Notice::info(seq, "Invite sent"));
                next
            }

            InviteIntent::SendFailed { message } => {
                // Transient operation error: the form stays editable and
                // the error auto-dismisses.
                let mut next = InviteState {
                    send: Remote::NotAsked,
                    ..state
                };
                push_notice(&mut next, |seq| Notice::error(seq, message));
                next
            }

            InviteIntent::NoticeExpired { seq } => {
                if state.notice.as_ref().map(|n| n.seq) == Some(seq) {
                    InviteState {
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

fn push_notice(state: &mut InviteState, build: impl FnOnce(u64) -> Notice) {
    state.notice_seq += 1;
    state.notice = Some(build(state.notice_seq));
}
