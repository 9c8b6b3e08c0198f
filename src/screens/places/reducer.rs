//! Reducer for the nearby-places screen.

use crate::flow::Remote;
use crate::mvi::Reducer;

use super::intent::PlacesIntent;
use super::state::PlacesState;

pub struct PlacesReducer;

impl Reducer for PlacesReducer {
    type State = PlacesState;
    type Intent = PlacesIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PlacesIntent::Refresh => PlacesState {
                load: state.load.begin(),
                ..state
            },

            PlacesIntent::Loaded { places } => PlacesState {
                load: Remote::Ready(places),
                ..state
            },

            PlacesIntent::LoadFailed { message } => PlacesState {
                load: Remote::Failed { message },
                ..state
            },

            PlacesIntent::SetMaxDistance { meters } => {
                let mut next = state;
                next.filters.max_distance_m = meters;
                next
            }

            PlacesIntent::SetCategory { category } => {
                let mut next = state;
                next.filters.category = category;
                next
            }

            PlacesIntent::ToggleOpenOnly => {
                let mut next = state;
                next.filters.open_only = !next.filters.open_only;
                next
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::api::{Place, PlaceCategory};

    fn loaded_state() -> PlacesState {
        PlacesState {
            load: Remote::Ready(vec![Place {
                id: "a".to_string(),
                name: "Cafe A".to_string(),
                category: PlaceCategory::Cafe,
                distance_m: 120,
                open_now: true,
            }]),
            ..PlacesState::default()
        }
    }

    #[test]
    fn refresh_enters_loading_and_clears_error() {
        let failed = PlacesState {
            load: Remote::Failed {
                message: "network down".into(),
            },
            ..PlacesState::default()
        };
        let next = PlacesReducer::reduce(failed, PlacesIntent::Refresh);
        assert!(next.is_loading());
        assert_eq!(next.load.error(), None);
    }

    #[test]
    fn loaded_stores_places_and_stops_loading() {
        let next = PlacesReducer::reduce(
            PlacesState {
                load: Remote::Loading,
                ..PlacesState::default()
            },
            PlacesIntent::Loaded {
                places: loaded_state().load.ready().cloned().unwrap_or_default(),
            },
        );
        assert!(next.load.is_ready());
        assert!(!next.is_loading());
    }

    #[test]
    fn load_failed_sets_message_and_stops_loading() {
        let next = PlacesReducer::reduce(
            PlacesState {
                load: Remote::Loading,
                ..PlacesState::default()
            },
            PlacesIntent::LoadFailed {
                message: "network down".into(),
            },
        );
        assert_eq!(next.load.error(), Some("network down"));
        assert!(!next.is_loading());
    }

    #[test]
    fn reduce_is_deterministic() {
        let run = || {
            PlacesReducer::reduce(
                loaded_state(),
                PlacesIntent::SetMaxDistance { meters: Some(500) },
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn filter_edits_keep_loaded_data() {
        let next = PlacesReducer::reduce(loaded_state(), PlacesIntent::ToggleOpenOnly);
        assert!(next.load.is_ready());
        assert!(next.filters.open_only);

        let next = PlacesReducer::reduce(
            next,
            PlacesIntent::SetCategory {
                category: Some(PlaceCategory::Park),
            },
        );
        assert_eq!(next.filters.category, Some(PlaceCategory::Park));
        assert!(next.filters.open_only);
    }
}
