//! Request/response API sources and their domain records.
//!
//! No wire format is assumed; any transport works as long as it can be
//! expressed as an async call returning records or an [`OpError`].

use std::time::SystemTime;

use async_trait::async_trait;

use super::error::OpError;

/// A place near the user. Plain immutable value record; `id` is opaque
/// and unique within one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    /// Distance from the query center, meters.
    pub distance_m: u32,
    pub open_now: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceCategory {
    Cafe,
    Station,
    Park,
    Landmark,
}

impl PlaceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cafe => "Cafe",
            Self::Station => "Station",
            Self::Park => "Park",
            Self::Landmark => "Landmark",
        }
    }
}

/// Parameters of a nearby-places request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyQuery {
    pub radius_m: u32,
    pub limit: usize,
}

impl Default for NearbyQuery {
    fn default() -> Self {
        Self {
            radius_m: 5_000,
            limit: 50,
        }
    }
}

/// Result of a completed manual backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReport {
    pub entries: u32,
    pub finished_at: SystemTime,
}

/// Directory of places around the user.
#[async_trait]
pub trait PlaceDirectory: Send + Sync {
    async fn nearby(&self, query: &NearbyQuery) -> Result<Vec<Place>, OpError>;
}

/// Delivers share invites to other users.
#[async_trait]
pub trait InviteGateway: Send + Sync {
    async fn send_invite(&self, email: &str) -> Result<(), OpError>;
}

/// Runs a manual backup of the user's data.
#[async_trait]
pub trait BackupService: Send + Sync {
    async fn run_backup(&self) -> Result<BackupReport, OpError>;
}
