use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RouteAPI,
    entities::{Coordinates, NoticeKind, Route},
    error::Error,
};

impl Engine {
    async fn fetch_route(&self, stops: &[Coordinates]) -> Result<Route, Error> {
        let directions = self.inner.directions.find_directions(stops).await?;
        let path = self.inner.codec.decode(&directions.geometry)?;

        Ok(Route::new(path, directions.distance, directions.duration))
    }
}

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn recompute_route(&self) -> Result<(), Error> {
        let (seq, stops) = {
            let mut state = self.inner.state.lock().await;

            match state.route_stops() {
                Some(stops) => (state.route_seq.issue(), stops),
                None => {
                    state.route = Route::default();
                    state.route_seq.invalidate();
                    self.publish(&state);
                    return Ok(());
                }
            }
        };

        let result = self.fetch_route(&stops).await;
        let mut state = self.inner.state.lock().await;

        let route = match result {
            Ok(route) => route,
            Err(err) if state.route_seq.is_stale(seq) => {
                tracing::debug!("stale route {} failed: {}", seq, err);
                return Err(err);
            }
            Err(err) => {
                tracing::warn!("route through {} stops failed: {}", stops.len(), err);
                self.notify(NoticeKind::RouteFailed, &err);
                return Err(err);
            }
        };

        if !state.route_seq.accept(seq) {
            tracing::debug!("dropping stale route {}", seq);
            return Ok(());
        }

        tracing::info!(
            "route through {} stops: {} points, {}m",
            stops.len(),
            route.path.len(),
            route.distance
        );

        state.route = route;
        self.publish(&state);

        Ok(())
    }
}
