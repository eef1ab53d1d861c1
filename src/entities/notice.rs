use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    LocationUnavailable,
    SearchFailed,
    RouteFailed,
}

/// Transient message for the user. Nothing else reacts to it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl Notice {
    pub fn new(kind: NoticeKind, cause: &Error) -> Self {
        let message = match kind {
            NoticeKind::LocationUnavailable => "Location is unavailable",
            NoticeKind::SearchFailed => "Could not search places",
            NoticeKind::RouteFailed => "Could not calculate the route",
        };

        Self {
            id: Uuid::new_v4(),
            kind,
            message: format!("{}: {}", message, cause.message),
            issued_at: Utc::now(),
        }
    }
}
