use super::Engine;

use async_trait::async_trait;

use crate::{
    api::{RouteAPI, WaypointAPI},
    entities::{PlaceSuggestion, Route},
    error::{invalid_input_error, Error},
};

#[async_trait]
impl WaypointAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn select_suggestion(&self, suggestion: PlaceSuggestion) {
        {
            let mut state = self.inner.state.lock().await;

            state.waypoints.push(suggestion.coordinates);
            state.debouncer.cancel();
            state.search_text.clear();
            state.clear_suggestions();
            self.publish(&state);
        }

        if let Err(err) = self.recompute_route().await {
            tracing::debug!("route not updated after selection: {}", err);
        }
    }

    #[tracing::instrument(skip(self))]
    async fn remove_waypoint(&self, index: usize) -> Result<(), Error> {
        {
            let mut state = self.inner.state.lock().await;

            if index >= state.waypoints.len() {
                tracing::info!(
                    "waypoint {} out of range ({} waypoints)",
                    index,
                    state.waypoints.len()
                );
                return Err(invalid_input_error());
            }

            state.waypoints.remove(index);
            self.publish(&state);
        }

        if let Err(err) = self.recompute_route().await {
            tracing::debug!("route not updated after removal: {}", err);
        }

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn clear_all(&self) {
        let mut state = self.inner.state.lock().await;

        state.waypoints.clear();
        state.route = Route::default();
        state.route_seq.invalidate();
        self.publish(&state);
    }
}
