//! Nearby-places screen: retryable list load with conjunctive filters
//! and a deterministic distance-ordered projection.

mod intent;
mod reducer;
mod state;

pub use intent::PlacesIntent;
pub use reducer::PlacesReducer;
pub use state::{visible_places, PlaceFilters, PlacesState};

use std::sync::Arc;

use crate::collab::api::{NearbyQuery, PlaceDirectory};
use crate::mvi::{Effect, Feature, IntentSender};

/// Feature wiring for the nearby-places screen.
pub struct PlacesScreen {
    directory: Arc<dyn PlaceDirectory>,
    query: NearbyQuery,
}

impl PlacesScreen {
    pub fn new(directory: Arc<dyn PlaceDirectory>, query: NearbyQuery) -> Self {
        Self { directory, query }
    }
}

impl Feature for PlacesScreen {
    type State = PlacesState;
    type Intent = PlacesIntent;
    type Reducer = PlacesReducer;

    fn effects(
        &mut self,
        intent: &PlacesIntent,
        _before: &PlacesState,
        _after: &PlacesState,
        _intents: &IntentSender<PlacesIntent>,
    ) -> Vec<Effect<PlacesIntent>> {
        match intent {
            PlacesIntent::Refresh => {
                let directory = Arc::clone(&self.directory);
                let query = self.query.clone();
                vec![Effect::task(async move {
                    Some(match directory.nearby(&query).await {
                        Ok(places) => PlacesIntent::Loaded { places },
                        Err(err) => PlacesIntent::LoadFailed {
                            message: err.user_message(),
                        },
                    })
                })]
            }
            _ => Vec::new(),
        }
    }

    fn task_failed(&self) -> Option<PlacesIntent> {
        Some(PlacesIntent::LoadFailed {
            message: crate::collab::OpError::unexpected("fetch task crashed").user_message(),
        })
    }
}
