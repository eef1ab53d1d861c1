use axum::extract::{Extension, Json, Path};

use crate::api::DynAPI;
use crate::entities::Snapshot;
use crate::error::{invalid_input_error, Error};

pub async fn select(
    Extension(api): Extension<DynAPI>,
    Path(index): Path<usize>,
) -> Result<Json<Snapshot>, Error> {
    let suggestion = api
        .snapshot()
        .suggestions
        .get(index)
        .cloned()
        .ok_or_else(|| invalid_input_error())?;

    api.select_suggestion(suggestion).await;

    Ok(api.snapshot().into())
}
