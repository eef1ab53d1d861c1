use axum::extract::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::env;
use std::fmt::{self, Debug, Display};

#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<env::VarError> for Error {
    fn from(err: env::VarError) -> Self {
        env_var_error(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, error_message) = if self.is_internal() {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        } else {
            (StatusCode::BAD_REQUEST, self.message.as_str())
        };

        let body = Json(json!({
            "code": self.code,
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl Error {
    /// Codes below 100 are server-side faults and are not shown to clients.
    pub fn is_internal(&self) -> bool {
        matches!(self.code, 1..=99)
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn no_route_error() -> Error {
    Error {
        code: 102,
        message: "no route between stops".into(),
    }
}

pub fn env_var_error(_: env::VarError) -> Error {
    Error {
        code: 1,
        message: "environment variable error".into(),
    }
}

pub fn configuration_error<T: Debug>(err: T) -> Error {
    tracing::error!("invalid configuration: {:?}", err);

    Error {
        code: 2,
        message: "configuration error".into(),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    tracing::warn!("request failed: {}", err);

    Error {
        code: 3,
        message: "reqwest error".into(),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error<T: Debug>(err: T) -> Error {
    tracing::error!("unexpected error: {:?}", err);

    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}

pub fn polyline_error<T: Debug>(err: T) -> Error {
    tracing::warn!("could not decode polyline: {:?}", err);

    Error {
        code: 6,
        message: "polyline error".into(),
    }
}

pub fn location_unavailable_error() -> Error {
    Error {
        code: 7,
        message: "location unavailable".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_codes_map_to_server_errors() {
        let response = upstream_error().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = invalid_input_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn classifies_internal_errors() {
        assert!(location_unavailable_error().is_internal());
        assert!(!no_route_error().is_internal());
    }

    #[test]
    fn status_follows_internal_classification() {
        let response = no_route_error().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = polyline_error("bad").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
