mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{delete, get, post, put},
    Router,
};

use crate::server::handlers::{location, notices, search, state, suggestions, waypoints};
use crate::{
    api::{DynAPI, API},
    error::{unexpected_error, Error},
    external::LocationFeed,
};

pub fn router(api: DynAPI, feed: LocationFeed) -> Router {
    Router::new()
        .route("/state", get(state::find))
        .route("/location", post(location::update))
        .route("/location/recenter", get(location::recenter))
        .route("/search", put(search::change))
        .route("/suggestions/:index/select", post(suggestions::select))
        .route("/waypoints", delete(waypoints::clear))
        .route("/waypoints/:index", delete(waypoints::remove))
        .route("/notices", get(notices::drain))
        .layer(Extension(api))
        .layer(Extension(feed))
}

/// Serves the screen state to the presentation layer. Location fixes posted
/// to `/location` go through `feed`.
pub async fn serve<T: API + Sync + Send + 'static>(
    api: T,
    feed: LocationFeed,
    addr: SocketAddr,
) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;

    let app = router(api, feed);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(unexpected_error)
}
