use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Snapshot;

pub async fn find(Extension(api): Extension<DynAPI>) -> Json<Snapshot> {
    api.snapshot().into()
}
