use axum::extract::{Extension, Json};
use axum::http::StatusCode;

use crate::api::DynAPI;
use crate::entities::Coordinates;
use crate::error::Error;
use crate::external::LocationFeed;

pub async fn update(
    Extension(feed): Extension<LocationFeed>,
    Json(coordinates): Json<Coordinates>,
) -> Result<StatusCode, Error> {
    feed.push(coordinates).await?;

    Ok(StatusCode::ACCEPTED)
}

pub async fn recenter(Extension(api): Extension<DynAPI>) -> Json<Option<Coordinates>> {
    api.recenter().await.into()
}
