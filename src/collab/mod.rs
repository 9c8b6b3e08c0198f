//! Collaborator boundaries: the external systems the screen core depends
//! on but does not implement.
//!
//! Three shapes cover everything a screen consumes:
//! - request/response API sources ([`api`])
//! - continuous most-recent-wins feeds ([`feed`])
//! - the durable key-value settings store ([`settings`])
//!
//! [`mock`] holds the deterministic scripted implementations used by tests
//! and the demo binary. Outcomes are always injected, never random.

pub mod api;
pub mod error;
pub mod feed;
pub mod mock;
pub mod settings;

pub use api::{BackupReport, BackupService, InviteGateway, NearbyQuery, Place, PlaceCategory, PlaceDirectory};
pub use error::OpError;
pub use feed::{live_feed, FeedPublisher, LiveFeed, PositionFix};
pub use settings::{builtin_registry, PrefDef, PrefId, PrefManager, PrefSnapshot, SettingsStore};
