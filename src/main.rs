use std::sync::Arc;

use wayfinder::config::Config;
use wayfinder::engine::Engine;
use wayfinder::error::Error;
use wayfinder::external::{LocationFeed, Mapbox, Polyline5};
use wayfinder::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let mapbox = Arc::new(Mapbox::new(config.mapbox.clone())?);
    let engine = Engine::new(
        config.search.clone(),
        mapbox.clone(),
        mapbox,
        Arc::new(Polyline5),
    );

    let feed = LocationFeed::new();
    let _tracking = engine.track_location(&feed).await?;

    serve(engine, feed, config.listen_addr).await
}
