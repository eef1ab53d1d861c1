use axum::extract::{Extension, Json};

use crate::api::DynAPI;
use crate::entities::Notice;

/// Everything queued since the last call.
pub async fn drain(Extension(api): Extension<DynAPI>) -> Json<Vec<Notice>> {
    let receiver = api.notices();
    let mut notices = vec![];

    while let Ok(notice) = receiver.try_recv() {
        notices.push(notice);
    }

    notices.into()
}
