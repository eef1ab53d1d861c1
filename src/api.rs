use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::watch;

use crate::entities::{Coordinates, Notice, PlaceSuggestion, Snapshot};
use crate::error::Error;

#[async_trait]
pub trait LocationAPI {
    /// Replaces the device position. The route is left as it is.
    async fn update_location(&self, coordinates: Coordinates);

    /// Where the map should pan to, if the position is known.
    async fn recenter(&self) -> Option<Coordinates>;
}

#[async_trait]
pub trait SearchAPI {
    /// Debounced entry point for the search box.
    async fn change_search_text(&self, text: String);

    async fn search(&self, text: String) -> Result<(), Error>;
}

#[async_trait]
pub trait WaypointAPI {
    async fn select_suggestion(&self, suggestion: PlaceSuggestion);

    async fn remove_waypoint(&self, index: usize) -> Result<(), Error>;

    async fn clear_all(&self);
}

#[async_trait]
pub trait RouteAPI {
    async fn recompute_route(&self) -> Result<(), Error>;
}

pub trait StateAPI {
    fn snapshot(&self) -> Snapshot;

    fn subscribe(&self) -> watch::Receiver<Snapshot>;

    fn notices(&self) -> async_channel::Receiver<Notice>;
}

pub trait API: LocationAPI + SearchAPI + WaypointAPI + RouteAPI + StateAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
