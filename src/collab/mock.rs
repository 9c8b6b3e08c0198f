//! Deterministic scripted collaborators for tests and demos.
//!
//! Outcomes are injected up front instead of drawn at random, so every
//! run of a test or demo behaves identically. An exhausted script reports
//! an unexpected error rather than inventing a response.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, SystemTime};

use async_trait::async_trait;
use parking_lot::Mutex;

use super::api::{BackupReport, BackupService, InviteGateway, NearbyQuery, Place, PlaceDirectory};
use super::error::OpError;
use super::settings::SettingsStore;

/// FIFO script of outcomes for one collaborator operation.
pub struct Script<T> {
    outcomes: Mutex<VecDeque<Result<T, OpError>>>,
}

impl<T> Script<T> {
    pub fn new(outcomes: impl IntoIterator<Item = Result<T, OpError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
        }
    }

    pub fn push(&self, outcome: Result<T, OpError>) {
        self.outcomes.lock().push_back(outcome);
    }

    fn next(&self) -> Result<T, OpError> {
        self.outcomes
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(OpError::unexpected("outcome script exhausted")))
    }
}

/// Scripted [`PlaceDirectory`].
pub struct ScriptedDirectory {
    script: Script<Vec<Place>>,
    latency: Duration,
}

impl ScriptedDirectory {
    pub fn new(outcomes: impl IntoIterator<Item = Result<Vec<Place>, OpError>>) -> Self {
        Self {
            script: Script::new(outcomes),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl PlaceDirectory for ScriptedDirectory {
    async fn nearby(&self, _query: &NearbyQuery) -> Result<Vec<Place>, OpError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.script.next()
    }
}

/// Scripted [`InviteGateway`] that records every address it was asked to
/// deliver to.
pub struct ScriptedInviteGateway {
    script: Script<()>,
    sent: Mutex<Vec<String>>,
    latency: Duration,
}

impl ScriptedInviteGateway {
    pub fn new(outcomes: impl IntoIterator<Item = Result<(), OpError>>) -> Self {
        Self {
            script: Script::new(outcomes),
            sent: Mutex::new(Vec::new()),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Addresses the gateway was invoked with, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().clone()
    }
}

#[async_trait]
impl InviteGateway for ScriptedInviteGateway {
    async fn send_invite(&self, email: &str) -> Result<(), OpError> {
        self.sent.lock().push(email.to_string());
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.script.next()
    }
}

/// Scripted [`BackupService`] that counts how many backups actually ran.
pub struct ScriptedBackupService {
    script: Script<BackupReport>,
    runs: AtomicU32,
    latency: Duration,
}

impl ScriptedBackupService {
    pub fn new(outcomes: impl IntoIterator<Item = Result<BackupReport, OpError>>) -> Self {
        Self {
            script: Script::new(outcomes),
            runs: AtomicU32::new(0),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn runs(&self) -> u32 {
        self.runs.load(Ordering::SeqCst)
    }

    /// A plausible successful report for scripts.
    pub fn sample_report(entries: u32) -> BackupReport {
        BackupReport {
            entries,
            finished_at: SystemTime::UNIX_EPOCH,
        }
    }
}

#[async_trait]
impl BackupService for ScriptedBackupService {
    async fn run_backup(&self) -> Result<BackupReport, OpError> {
        self.runs.fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        self.script.next()
    }
}

/// In-memory [`SettingsStore`].
///
/// Writes land in the map before `save` resolves, matching the durability
/// contract. Failures are injected per call; with nothing injected every
/// save succeeds.
pub struct MemorySettingsStore {
    values: Mutex<HashMap<String, bool>>,
    save_failures: Mutex<VecDeque<OpError>>,
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self {
            values: Mutex::new(HashMap::new()),
            save_failures: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_values(values: HashMap<String, bool>) -> Self {
        Self {
            values: Mutex::new(values),
            save_failures: Mutex::new(VecDeque::new()),
        }
    }

    /// Make the next `save` call fail with `error` (and not write).
    pub fn fail_next_save(&self, error: OpError) {
        self.save_failures.lock().push_back(error);
    }

    /// What is durably stored right now.
    pub fn stored(&self) -> HashMap<String, bool> {
        self.values.lock().clone()
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> Result<HashMap<String, bool>, OpError> {
        Ok(self.values.lock().clone())
    }

    async fn save(&self, values: HashMap<String, bool>) -> Result<(), OpError> {
        if let Some(error) = self.save_failures.lock().pop_front() {
            return Err(error);
        }
        *self.values.lock() = values;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn script_pops_in_order_then_exhausts() {
        let directory = ScriptedDirectory::new([
            Err(OpError::api("network down")),
            Ok(Vec::new()),
        ]);
        let query = NearbyQuery::default();
        assert_eq!(
            directory.nearby(&query).await,
            Err(OpError::api("network down"))
        );
        assert_eq!(directory.nearby(&query).await, Ok(Vec::new()));
        assert!(matches!(
            directory.nearby(&query).await,
            Err(OpError::Unexpected { .. })
        ));
    }

    #[tokio::test]
    async fn failed_save_does_not_write() {
        let store = MemorySettingsStore::new();
        store.fail_next_save(OpError::store("disk full"));

        let mut values = HashMap::new();
        values.insert("nearby_alerts".to_string(), false);

        assert!(store.save(values.clone()).await.is_err());
        assert!(store.stored().is_empty());

        assert!(store.save(values.clone()).await.is_ok());
        assert_eq!(store.stored(), values);
    }

    #[tokio::test]
    async fn gateway_records_recipients() {
        let gateway = ScriptedInviteGateway::new([Ok(())]);
        gateway.send_invite("ada@example.com").await.expect("scripted ok");
        assert_eq!(gateway.sent(), vec!["ada@example.com".to_string()]);
    }
}
