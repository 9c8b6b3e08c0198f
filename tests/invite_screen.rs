mod common;

use std::sync::Arc;
use std::time::Duration;

use common::wait_for;
use navi_core::collab::mock::ScriptedInviteGateway;
use navi_core::collab::{InviteGateway, OpError};
use navi_core::flow::NoticeLevel;
use navi_core::mvi::ScreenHandle;
use navi_core::screens::invite::{InviteIntent, InviteScreen};

const NOTICE_TTL: Duration = Duration::from_millis(100);

fn spawn(gateway: &Arc<ScriptedInviteGateway>) -> ScreenHandle<InviteScreen> {
    ScreenHandle::spawn(InviteScreen::new(
        Arc::clone(gateway) as Arc<dyn InviteGateway>,
        NOTICE_TTL,
    ))
}

#[tokio::test]
async fn malformed_email_never_reaches_the_gateway() {
    let gateway = Arc::new(ScriptedInviteGateway::new([]));
    let screen = spawn(&gateway);
    let mut sub = screen.subscribe();

    screen.dispatch(InviteIntent::EmailChanged {
        value: "not-an-email".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    let invalid = wait_for(&mut sub, |s| s.validation.is_some()).await;

    assert!(!invalid.is_sending());
    assert!(gateway.sent().is_empty());
}

#[tokio::test]
async fn valid_submit_sends_and_clears_the_form() {
    let gateway = Arc::new(ScriptedInviteGateway::new([Ok(())]));
    let screen = spawn(&gateway);
    let mut sub = screen.subscribe();

    screen.dispatch(InviteIntent::EmailChanged {
        value: "ada@example.com".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    let done = wait_for(&mut sub, |s| s.send.is_ready()).await;

    assert_eq!(gateway.sent(), vec!["ada@example.com".to_string()]);
    assert_eq!(done.email, "");
    assert_eq!(
        done.notice.as_ref().map(|n| n.level),
        Some(NoticeLevel::Info)
    );
}

#[tokio::test]
async fn submitted_address_is_trimmed() {
    let gateway = Arc::new(ScriptedInviteGateway::new([Ok(())]));
    let screen = spawn(&gateway);
    let mut sub = screen.subscribe();

    screen.dispatch(InviteIntent::EmailChanged {
        value: "  ada@example.com ".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    wait_for(&mut sub, |s| s.send.is_ready()).await;

    assert_eq!(gateway.sent(), vec!["ada@example.com".to_string()]);
}

#[tokio::test]
async fn gateway_failure_is_transient_and_retryable() {
    let gateway = Arc::new(ScriptedInviteGateway::new([
        Err(OpError::api("invite service unavailable")),
        Ok(()),
    ]));
    let screen = spawn(&gateway);
    let mut sub = screen.subscribe();

    screen.dispatch(InviteIntent::EmailChanged {
        value: "ada@example.com".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    let failed = wait_for(&mut sub, |s| {
        s.notice.as_ref().map(|n| n.level) == Some(NoticeLevel::Error)
    })
    .await;

    // The form stays editable with the address intact.
    assert_eq!(failed.email, "ada@example.com");
    assert!(!failed.is_sending());
    assert_eq!(
        failed.notice.as_ref().map(|n| n.text.as_str()),
        Some("invite service unavailable")
    );

    screen.dispatch(InviteIntent::Submit);
    wait_for(&mut sub, |s| s.send.is_ready()).await;
    assert_eq!(gateway.sent().len(), 2);
}

#[tokio::test(start_paused = true)]
async fn failure_notice_expires_after_its_ttl() {
    let gateway = Arc::new(ScriptedInviteGateway::new([Err(OpError::api(
        "invite service unavailable",
    ))]));
    let screen = spawn(&gateway);
    let mut sub = screen.subscribe();

    screen.dispatch(InviteIntent::EmailChanged {
        value: "ada@example.com".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    wait_for(&mut sub, |s| s.notice.is_some()).await;

    let expired = wait_for(&mut sub, |s| s.notice.is_none()).await;
    assert_eq!(expired.email, "ada@example.com");
}
