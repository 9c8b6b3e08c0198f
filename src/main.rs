//! Headless demo runner: drives one screen end-to-end against scripted
//! collaborators and logs every state change.

use std::sync::Arc;
use std::time::SystemTime;

use anyhow::Result;
use clap::Parser;

use navi_core::cli::{Cli, Demo};
use navi_core::collab::mock::{
    MemorySettingsStore, ScriptedBackupService, ScriptedDirectory, ScriptedInviteGateway,
};
use navi_core::collab::{
    live_feed, BackupService, InviteGateway, NearbyQuery, OpError, Place, PlaceCategory,
    PositionFix, PrefId, SettingsStore,
};
use navi_core::config::Config;
use navi_core::flow::NoticeLevel;
use navi_core::mvi::{ScreenHandle, Subscription};
use navi_core::screens::invite::{InviteIntent, InviteScreen};
use navi_core::screens::places::{PlacesIntent, PlacesScreen};
use navi_core::screens::settings::{SettingsAction, SettingsIntent, SettingsScreen};
use navi_core::screens::tracker::{TrackerIntent, TrackerScreen};

#[tokio::main]
async fn main() -> Result<()> {
    navi_core::logging::init_tracing();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.demo {
        Demo::Places => demo_places(&config).await,
        Demo::Settings => demo_settings(&config).await,
        Demo::Tracker => demo_tracker(&config).await,
        Demo::Invite => demo_invite(&config).await,
    }
}

/// Wait for the first snapshot satisfying `pred`.
async fn next_where<S: Clone>(
    sub: &mut Subscription<S>,
    pred: impl Fn(&S) -> bool,
) -> Result<S> {
    while let Some(state) = sub.next().await {
        if pred(&state) {
            return Ok(state);
        }
    }
    anyhow::bail!("screen closed before the expected state arrived")
}

fn sample_places() -> Vec<Place> {
    vec![
        Place {
            id: "pl-301".to_string(),
            name: "Isar Cafe".to_string(),
            category: PlaceCategory::Cafe,
            distance_m: 240,
            open_now: true,
        },
        Place {
            id: "pl-140".to_string(),
            name: "Hauptbahnhof".to_string(),
            category: PlaceCategory::Station,
            distance_m: 820,
            open_now: true,
        },
        Place {
            id: "pl-077".to_string(),
            name: "Westpark".to_string(),
            category: PlaceCategory::Park,
            distance_m: 1_450,
            open_now: true,
        },
        Place {
            id: "pl-512".to_string(),
            name: "Old Mill Landmark".to_string(),
            category: PlaceCategory::Landmark,
            distance_m: 560,
            open_now: false,
        },
        Place {
            id: "pl-513".to_string(),
            name: "North Mill Landmark".to_string(),
            category: PlaceCategory::Landmark,
            distance_m: 560,
            open_now: true,
        },
    ]
}

async fn demo_places(config: &Config) -> Result<()> {
    let mut outcomes: Vec<Result<Vec<Place>, OpError>> = Vec::new();
    for _ in 0..config.demo.fail_first {
        outcomes.push(Err(OpError::api("network down")));
    }
    outcomes.push(Ok(sample_places()));
    // Retries replay the same request, so keep the script long enough.
    outcomes.push(Ok(sample_places()));

    let directory =
        Arc::new(ScriptedDirectory::new(outcomes).with_latency(config.demo.latency()));
    let screen = ScreenHandle::spawn(PlacesScreen::new(directory, NearbyQuery::default()));
    let mut sub = screen.subscribe();

    screen.dispatch(PlacesIntent::Refresh);
    let ready = loop {
        let state =
            next_where(&mut sub, |s| s.load.error().is_some() || s.load.is_ready()).await?;
        match state.load.error() {
            Some(message) => {
                tracing::warn!(error = %message, "nearby fetch failed; retrying");
                screen.dispatch(PlacesIntent::Refresh);
            }
            None => break state,
        }
    };
    for place in ready.visible() {
        tracing::info!(id = %place.id, name = %place.name, distance_m = place.distance_m, "visible");
    }

    screen.dispatch(PlacesIntent::SetMaxDistance { meters: Some(600) });
    let filtered = next_where(&mut sub, |s| s.filters.max_distance_m == Some(600)).await?;
    tracing::info!(max_distance_m = 600, count = filtered.visible().len(), "after filter");
    for place in filtered.visible() {
        tracing::info!(id = %place.id, name = %place.name, distance_m = place.distance_m, "visible");
    }

    screen.shutdown();
    Ok(())
}

async fn demo_settings(config: &Config) -> Result<()> {
    let store = Arc::new(MemorySettingsStore::new());
    let backup = Arc::new(
        ScriptedBackupService::new([Ok(ScriptedBackupService::sample_report(42))])
            .with_latency(config.demo.latency()),
    );
    let screen = ScreenHandle::spawn(SettingsScreen::new(
        Arc::clone(&store) as Arc<dyn SettingsStore>,
        Arc::clone(&backup) as Arc<dyn BackupService>,
        config.ui.notice_ttl(),
    ));
    let mut sub = screen.subscribe();

    screen.dispatch(SettingsIntent::Open);
    next_where(&mut sub, |s| s.prefs.is_ready()).await?;

    screen.dispatch(SettingsIntent::Toggle {
        id: PrefId::TripSummaries,
    });
    next_where(&mut sub, |s| s.dirty).await?;
    screen.dispatch(SettingsIntent::Save);
    let saved = next_where(&mut sub, |s| s.save.is_ready()).await?;
    tracing::info!(
        notice = saved.notice.as_ref().map(|n| n.text.as_str()),
        stored = ?store.stored(),
        "settings saved"
    );

    // Sensitive toggles and backups go through the confirmation dialog.
    screen.dispatch(SettingsIntent::Toggle {
        id: PrefId::FriendRequests,
    });
    let staged = next_where(&mut sub, |s| s.confirm_visible()).await?;
    tracing::info!(message = staged.confirm.message(), "confirmation required");
    screen.dispatch(SettingsIntent::DismissConfirm);

    screen.dispatch(SettingsIntent::BackupRequested);
    next_where(&mut sub, |s| {
        s.confirm.pending_action() == Some(&SettingsAction::RunBackup)
    })
    .await?;
    screen.dispatch(SettingsIntent::Confirm);
    let done = next_where(&mut sub, |s| s.backup.is_ready()).await?;
    tracing::info!(
        runs = backup.runs(),
        notice = done.notice.as_ref().map(|n| n.text.as_str()),
        "backup finished"
    );

    screen.shutdown();
    Ok(())
}

async fn demo_tracker(config: &Config) -> Result<()> {
    let (publisher, feed) = live_feed::<PositionFix>();
    let screen = ScreenHandle::spawn(TrackerScreen::new(feed));
    let mut sub = screen.subscribe();

    screen.dispatch(TrackerIntent::StartFollowing);
    next_where(&mut sub, |s| s.following).await?;

    let interval = config.demo.latency();
    let driver = tokio::spawn(async move {
        for step in 0..5u32 {
            publisher.publish(PositionFix {
                lat: 48.1351 + f64::from(step) * 0.0005,
                lon: 11.5820,
                heading_deg: 45.0,
                recorded_at: SystemTime::now(),
            });
            tokio::time::sleep(interval).await;
        }
        // Dropping the publisher ends the feed.
    });

    loop {
        let Some(state) = sub.next().await else { break };
        if let Some(fix) = &state.position {
            tracing::info!(lat = fix.lat, lon = fix.lon, "fix");
        }
        if state.feed_ended {
            tracing::info!("feed ended");
            break;
        }
    }

    driver.await?;
    screen.shutdown();
    Ok(())
}

async fn demo_invite(config: &Config) -> Result<()> {
    let gateway = Arc::new(
        ScriptedInviteGateway::new([Err(OpError::api("invite service unavailable")), Ok(())])
            .with_latency(config.demo.latency()),
    );
    let screen = ScreenHandle::spawn(InviteScreen::new(
        Arc::clone(&gateway) as Arc<dyn InviteGateway>,
        config.ui.notice_ttl(),
    ));
    let mut sub = screen.subscribe();

    screen.dispatch(InviteIntent::EmailChanged {
        value: "not-an-email".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    let invalid = next_where(&mut sub, |s| s.validation.is_some()).await?;
    tracing::warn!(error = invalid.validation.as_deref(), "validation failed");

    screen.dispatch(InviteIntent::EmailChanged {
        value: "ada@example.com".to_string(),
    });
    screen.dispatch(InviteIntent::Submit);
    let failed = next_where(&mut sub, |s| {
        s.notice.as_ref().map(|n| n.level) == Some(NoticeLevel::Error)
    })
    .await?;
    tracing::warn!(
        error = failed.notice.as_ref().map(|n| n.text.as_str()),
        "send failed; retrying"
    );

    screen.dispatch(InviteIntent::Submit);
    next_where(&mut sub, |s| s.send.is_ready()).await?;
    tracing::info!(sent = ?gateway.sent(), "invite sent");

    screen.shutdown();
    Ok(())
}
