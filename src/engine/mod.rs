mod debounce;
mod location_api;
mod route_api;
mod search_api;
mod sequence;
mod waypoint_api;


use std::iter;
use std::sync::Arc;

use async_channel::{Receiver, Sender, TrySendError};
use futures::StreamExt;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;

use crate::{
    api::{LocationAPI, StateAPI, API},
    config::SearchSettings,
    entities::{Coordinates, Notice, NoticeKind, PlaceSuggestion, Route, Snapshot},
    error::Error,
    external::{Directions, Geocoder, LocationSource, PolylineCodec},
};

pub use debounce::Debouncer;
use sequence::Sequence;

const NOTICE_CAPACITY: usize = 16;

pub type DynGeocoder = Arc<dyn Geocoder + Send + Sync>;
pub type DynDirections = Arc<dyn Directions + Send + Sync>;
pub type DynPolylineCodec = Arc<dyn PolylineCodec + Send + Sync>;

struct State {
    location: Option<Coordinates>,
    waypoints: Vec<Coordinates>,
    route: Route,
    suggestions: Vec<PlaceSuggestion>,
    is_loading: bool,
    search_text: String,
    debouncer: Debouncer,
    search_seq: Sequence,
    route_seq: Sequence,
}

impl State {
    fn new() -> Self {
        Self {
            location: None,
            waypoints: vec![],
            route: Route::default(),
            suggestions: vec![],
            is_loading: true,
            search_text: String::new(),
            debouncer: Debouncer::default(),
            search_seq: Sequence::default(),
            route_seq: Sequence::default(),
        }
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            location: self.location,
            waypoints: self.waypoints.clone(),
            route: self.route.clone(),
            suggestions: self.suggestions.clone(),
            search_text: self.search_text.clone(),
            is_loading: self.is_loading,
        }
    }

    /// Current location followed by the waypoints, or `None` when there is
    /// nothing to route.
    fn route_stops(&self) -> Option<Vec<Coordinates>> {
        let location = self.location?;

        if self.waypoints.is_empty() {
            return None;
        }

        Some(
            iter::once(location)
                .chain(self.waypoints.iter().copied())
                .collect(),
        )
    }
}

struct Inner {
    state: Mutex<State>,
    settings: SearchSettings,
    geocoder: DynGeocoder,
    directions: DynDirections,
    codec: DynPolylineCodec,
    snapshots: watch::Sender<Snapshot>,
    notices: (Sender<Notice>, Receiver<Notice>),
}

/// Waypoint and route controller for one map screen.
///
/// Owns the location, waypoints, route and search suggestions, and is the
/// only caller of the geocoder and the router. Every mutation publishes a
/// single [`Snapshot`] to subscribers.
#[derive(Clone)]
pub struct Engine {
    inner: Arc<Inner>,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new", skip_all)]
    pub fn new(
        settings: SearchSettings,
        geocoder: DynGeocoder,
        directions: DynDirections,
        codec: DynPolylineCodec,
    ) -> Self {
        let state = State::new();
        let (snapshots, _) = watch::channel(state.snapshot());

        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                settings,
                geocoder,
                directions,
                codec,
                snapshots,
                notices: async_channel::bounded(NOTICE_CAPACITY),
            }),
        }
    }

    /// Waits for the source to report availability, then feeds its updates
    /// into [`LocationAPI::update_location`] until the stream ends.
    ///
    /// When the source is unavailable the engine stays in the loading state.
    #[tracing::instrument(skip_all)]
    pub async fn track_location<S>(&self, source: &S) -> Result<JoinHandle<()>, Error>
    where
        S: LocationSource + Sync,
    {
        if let Err(err) = source.check_availability().await {
            tracing::warn!("location unavailable: {}", err);
            self.notify(NoticeKind::LocationUnavailable, &err);
            return Err(err);
        }

        let mut updates = source.updates();
        let engine = self.clone();

        Ok(tokio::spawn(async move {
            while let Some(coordinates) = updates.next().await {
                engine.update_location(coordinates).await;
            }

            tracing::info!("location updates ended");
        }))
    }

    fn publish(&self, state: &State) {
        self.inner.snapshots.send_replace(state.snapshot());
    }

    /// Queues a notice. When the queue is full the oldest notice makes room.
    fn notify(&self, kind: NoticeKind, cause: &Error) {
        let (sender, receiver) = &self.inner.notices;

        if let Err(TrySendError::Full(notice)) = sender.try_send(Notice::new(kind, cause)) {
            if let Ok(evicted) = receiver.try_recv() {
                tracing::warn!("notice queue full, dropping {:?} notice", evicted.kind);
            }

            if sender.try_send(notice).is_err() {
                tracing::warn!("notice queue full, dropping {:?} notice", kind);
            }
        }
    }
}

impl StateAPI for Engine {
    fn snapshot(&self) -> Snapshot {
        self.inner.snapshots.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.snapshots.subscribe()
    }

    fn notices(&self) -> Receiver<Notice> {
        self.inner.notices.1.clone()
    }
}

impl API for Engine {}
