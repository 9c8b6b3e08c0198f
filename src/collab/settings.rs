//! Statically enumerated notification preferences and the settings store
//! boundary.
//!
//! Preferences are a closed schema: every key is a [`PrefId`] variant with
//! a declared default, validated when raw persisted values cross the
//! boundary. There is no dynamic string-keyed lookup anywhere above this
//! module.

use std::collections::HashMap;

use async_trait::async_trait;

use super::error::OpError;

/// Unique identifier for each notification preference.
///
/// Adding a preference: add a variant here + an entry in
/// `builtin_registry()`. The `as_str()` value is the persistence key —
/// once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefId {
    NearbyAlerts,
    FriendRequests,
    TripSummaries,
}

impl PrefId {
    /// Stable persistence key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NearbyAlerts => "nearby_alerts",
            Self::FriendRequests => "friend_requests",
            Self::TripSummaries => "trip_summaries",
        }
    }

    /// All variants for iteration.
    pub fn all() -> &'static [PrefId] {
        &[Self::NearbyAlerts, Self::FriendRequests, Self::TripSummaries]
    }

    /// Parse from a persistence key. Unknown keys return `None`
    /// (forward compat).
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "nearby_alerts" => Some(Self::NearbyAlerts),
            "friend_requests" => Some(Self::FriendRequests),
            "trip_summaries" => Some(Self::TripSummaries),
            _ => None,
        }
    }
}

/// Self-contained definition of a single preference.
pub struct PrefDef {
    pub id: PrefId,
    pub label: &'static str,
    pub description: &'static str,
    /// Changing this preference stages a confirmation step instead of
    /// applying immediately.
    pub sensitive: bool,
    pub default: bool,
}

/// The builtin schema. Order here determines UI order.
pub fn builtin_registry() -> Vec<PrefDef> {
    vec![
        PrefDef {
            id: PrefId::NearbyAlerts,
            label: "Nearby alerts",
            description: "Notify when saved places are close by",
            sensitive: false,
            default: true,
        },
        PrefDef {
            id: PrefId::FriendRequests,
            label: "Friend request alerts",
            description: "Notify when someone wants to share trips with you",
            sensitive: true,
            default: true,
        },
        PrefDef {
            id: PrefId::TripSummaries,
            label: "Trip summaries",
            description: "Weekly summary of your trips",
            sensitive: false,
            default: false,
        },
    ]
}

/// Immutable per-preference view handed to screen state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefSnapshot {
    pub id: PrefId,
    pub label: &'static str,
    pub description: &'static str,
    pub sensitive: bool,
    pub value: bool,
}

/// Registry-based preference manager.
///
/// Owns both the definitions (immutable) and current values. UI snapshots
/// are derived from this; edits are applied back via snapshots; raw
/// persisted maps are validated here at the boundary.
pub struct PrefManager {
    registry: Vec<PrefDef>,
    values: HashMap<PrefId, bool>,
}

impl Default for PrefManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefManager {
    /// Create with the builtin registry and default values.
    pub fn new() -> Self {
        Self {
            registry: builtin_registry(),
            values: HashMap::new(),
        }
    }

    /// Current value for a preference (falls back to its default).
    pub fn get(&self, id: PrefId) -> bool {
        self.values
            .get(&id)
            .copied()
            .unwrap_or_else(|| self.default_for(id))
    }

    pub fn set(&mut self, id: PrefId, value: bool) {
        self.values.insert(id, value);
    }

    /// Access the ordered registry.
    pub fn registry(&self) -> &[PrefDef] {
        &self.registry
    }

    fn default_for(&self, id: PrefId) -> bool {
        self.registry
            .iter()
            .find(|def| def.id == id)
            .map(|def| def.default)
            .unwrap_or(false)
    }

    /// Create UI snapshots from current state.
    pub fn to_snapshots(&self) -> Vec<PrefSnapshot> {
        self.registry
            .iter()
            .map(|def| PrefSnapshot {
                id: def.id,
                label: def.label,
                description: def.description,
                sensitive: def.sensitive,
                value: self.get(def.id),
            })
            .collect()
    }

    /// Apply edited UI snapshots back to values.
    pub fn apply_snapshots(&mut self, fields: &[PrefSnapshot]) {
        for field in fields {
            self.values.insert(field.id, field.value);
        }
    }

    /// Serialize to the raw persistence map (every key present).
    pub fn to_raw(&self) -> HashMap<String, bool> {
        self.registry
            .iter()
            .map(|def| (def.id.as_str().to_string(), self.get(def.id)))
            .collect()
    }

    /// Load from a raw persisted map. Unknown keys are ignored
    /// (forward compat); missing keys keep their defaults.
    pub fn load_from_raw(&mut self, raw: &HashMap<String, bool>) {
        for (key, &value) in raw {
            if let Some(id) = PrefId::parse(key) {
                self.values.insert(id, value);
            }
        }
    }
}

/// Durable key-value store for preference values.
///
/// `save` must not return `Ok` before the write is durable — the screen
/// only shows its success state after this resolves.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Last-written map, or an empty map if nothing was ever saved.
    async fn load(&self) -> Result<HashMap<String, bool>, OpError>;

    async fn save(&self, values: HashMap<String, bool>) -> Result<(), OpError>;
}
