//! Intents for the nearby-places screen.

use crate::collab::api::{Place, PlaceCategory};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PlacesIntent {
    /// Load the list. Fired on screen entry and by the user's Retry —
    /// a retry replays exactly the same request.
    Refresh,
    /// Fetch completed.
    Loaded { places: Vec<Place> },
    /// Fetch failed; `message` is ready for display.
    LoadFailed { message: String },
    SetMaxDistance { meters: Option<u32> },
    SetCategory { category: Option<PlaceCategory> },
    ToggleOpenOnly,
}

impl Intent for PlacesIntent {}
