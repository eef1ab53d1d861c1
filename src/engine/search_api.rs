use super::{Engine, State};

use async_trait::async_trait;

use crate::{
    api::SearchAPI,
    entities::{Coordinates, NoticeKind, PlaceQuery},
    error::Error,
};

impl State {
    pub(super) fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.search_seq.invalidate();
    }
}

impl Engine {
    /// Runs a search tagged with `seq`. The tag is issued by the caller, so a
    /// search scheduled before an invalidation never reaches the geocoder.
    async fn run_search(&self, text: String, seq: u64) -> Result<(), Error> {
        let settings = &self.inner.settings;

        let query = {
            let state = self.inner.state.lock().await;

            if state.search_seq.is_stale(seq) {
                tracing::debug!("skipping superseded search for {:?}", text);
                return Ok(());
            }

            PlaceQuery {
                text,
                proximity: state.location.unwrap_or_else(Coordinates::origin),
                limit: settings.limit,
                types: settings.types.clone(),
                language: settings.language.clone(),
                country: settings.country.clone(),
            }
        };

        let result = self.inner.geocoder.find_places(&query).await;
        let mut state = self.inner.state.lock().await;

        let suggestions = match result {
            Ok(suggestions) => suggestions,
            Err(err) if state.search_seq.is_stale(seq) => {
                tracing::debug!("stale search for {:?} failed: {}", query.text, err);
                return Err(err);
            }
            Err(err) => {
                tracing::warn!("search for {:?} failed: {}", query.text, err);
                self.notify(NoticeKind::SearchFailed, &err);
                return Err(err);
            }
        };

        if !state.search_seq.accept(seq) {
            tracing::debug!("dropping stale suggestions for {:?}", query.text);
            return Ok(());
        }

        tracing::info!("{} suggestions for {:?}", suggestions.len(), query.text);

        state.suggestions = suggestions;
        self.publish(&state);

        Ok(())
    }
}

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn change_search_text(&self, text: String) {
        let mut state = self.inner.state.lock().await;

        state.debouncer.cancel();
        state.search_text = text.clone();

        if text.trim().is_empty() {
            state.clear_suggestions();
            self.publish(&state);
            return;
        }

        let seq = state.search_seq.issue();
        let engine = self.clone();

        state
            .debouncer
            .schedule(self.inner.settings.debounce, async move {
                if let Err(err) = engine.run_search(text, seq).await {
                    tracing::debug!("debounced search failed: {}", err);
                }
            });
    }

    #[tracing::instrument(skip(self))]
    async fn search(&self, text: String) -> Result<(), Error> {
        let seq = {
            let mut state = self.inner.state.lock().await;

            if text.trim().is_empty() {
                state.clear_suggestions();
                self.publish(&state);
                return Ok(());
            }

            state.search_seq.issue()
        };

        self.run_search(text, seq).await
    }
}
