use super::Engine;

use async_trait::async_trait;

use crate::{api::LocationAPI, entities::Coordinates};

#[async_trait]
impl LocationAPI for Engine {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn update_location(&self, coordinates: Coordinates) {
        let mut state = self.inner.state.lock().await;

        state.location = Some(coordinates);

        if state.is_loading {
            tracing::info!("received first location fix");
            state.is_loading = false;
        }

        self.publish(&state);
    }

    async fn recenter(&self) -> Option<Coordinates> {
        self.inner.state.lock().await.location
    }
}
