use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Uniform response envelope wrapping every API outcome.
///
/// The HTTP status is mirrored in `statusCode` so clients can treat the body as
/// self-describing. `data` is `null` for message-only outcomes and for errors.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Builds a success envelope carrying `data`.
    pub fn success(
        status: StatusCode,
        message: impl Into<String>,
        data: T,
    ) -> (StatusCode, Json<Envelope<T>>) {
        (
            status,
            Json(Envelope {
                status_code: status.as_u16(),
                message: message.into(),
                data: Some(data),
            }),
        )
    }
}

impl Envelope<serde_json::Value> {
    /// Builds a success envelope with no payload (`data: null`).
    pub fn message(
        status: StatusCode,
        message: impl Into<String>,
    ) -> (StatusCode, Json<Envelope<serde_json::Value>>) {
        (
            status,
            Json(Envelope {
                status_code: status.as_u16(),
                message: message.into(),
                data: None,
            }),
        )
    }

    /// Builds a finished error response carrying the envelope.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
        (
            status,
            Json(Envelope::<serde_json::Value> {
                status_code: status.as_u16(),
                message: message.into(),
                data: None,
            }),
        )
            .into_response()
    }
}
