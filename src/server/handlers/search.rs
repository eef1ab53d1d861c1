use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::DynAPI;
use crate::entities::Snapshot;

#[derive(Serialize, Deserialize)]
pub struct ChangeParams {
    text: String,
}

pub async fn change(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<ChangeParams>,
) -> Json<Snapshot> {
    api.change_search_text(params.text).await;

    api.snapshot().into()
}
