use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::entities::Snapshot;
use crate::error::Error;

pub async fn remove(
    Extension(api): Extension<DynAPI>,
    Path(index): Path<usize>,
) -> Result<Json<Snapshot>, Error> {
    api.remove_waypoint(index).await?;

    Ok(api.snapshot().into())
}

pub async fn clear(Extension(api): Extension<DynAPI>) -> Json<Snapshot> {
    api.clear_all().await;

    api.snapshot().into()
}
