//! State for the nearby-places screen.

use crate::collab::api::{Place, PlaceCategory};
use crate::flow::Remote;
use crate::mvi::ScreenState;
use crate::projection;

/// Nearby-places screen state: the raw fetched list plus the active
/// filter criteria. The visible list is a projection, never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlacesState {
    pub load: Remote<Vec<Place>>,
    pub filters: PlaceFilters,
}

impl ScreenState for PlacesState {}

/// Active filter criteria. All filters are conjunctive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlaceFilters {
    pub max_distance_m: Option<u32>,
    pub category: Option<PlaceCategory>,
    pub open_only: bool,
}

impl PlacesState {
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// The visible, ordered subset: all active filters pass, distance
    /// ascending, id as stable tie-break.
    pub fn visible(&self) -> Vec<Place> {
        match self.load.ready() {
            Some(places) => visible_places(places, &self.filters),
            None => Vec::new(),
        }
    }
}

pub fn visible_places(places: &[Place], filters: &PlaceFilters) -> Vec<Place> {
    projection::select(
        places,
        |place| {
            filters
                .max_distance_m
                .map_or(true, |max| place.distance_m <= max)
                && filters.category.map_or(true, |c| place.category == c)
                && (!filters.open_only || place.open_now)
        },
        |place| place.distance_m,
        |place| place.id.as_str(),
    )
}
