use std::time::Duration;

use navi_core::mvi::Subscription;

/// Wait (bounded) for the first snapshot satisfying `pred`.
pub async fn wait_for<S: Clone>(
    sub: &mut Subscription<S>,
    mut pred: impl FnMut(&S) -> bool,
) -> S {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let state = sub.next().await.expect("screen closed");
            if pred(&state) {
                return state;
            }
        }
    })
    .await
    .expect("expected state did not arrive")
}
