//! Uniform JSON response envelopes
//!
//! Success bodies are the payload itself; error bodies are
//! `{"status": "Error", "message": "..."}`. Bodies are serialized into a
//! buffer before the status is chosen, so a serialization failure turns into
//! a logged 500 instead of a truncated response.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// `status` value carried by every error body
pub const STATUS_ERROR: &str = "Error";

const FALLBACK_ERROR_BODY: &str = r#"{"status":"Error","message":"an internal error occurred"}"#;

/// Error body
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub status: &'static str,
    pub message: &'a str,
}

/// Small status/message object returned by mutations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub success: &'static str,
    pub message: String,
}

impl StatusMessage {
    pub fn new(success: &'static str, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}

/// Payload plus the status code to send it with
#[derive(Debug)]
pub struct Envelope<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    /// 200 OK
    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        json_response(self.status, &self.body)
    }
}

/// Serialize `body` and write it with `status` and a JSON content type.
pub fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => with_json_content_type(status, bytes),
        Err(e) => {
            tracing::error!(error = %e, intended_status = %status, "failed to serialize response body");
            with_json_content_type(
                StatusCode::INTERNAL_SERVER_ERROR,
                FALLBACK_ERROR_BODY.as_bytes().to_vec(),
            )
        }
    }
}

/// Error envelope with the given status.
pub fn error_response(status: StatusCode, message: &str) -> Response {
    json_response(
        status,
        &ErrorBody {
            status: STATUS_ERROR,
            message,
        },
    )
}

fn with_json_content_type(status: StatusCode, bytes: Vec<u8>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        bytes,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("refusing to serialize"))
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn success_envelope_is_raw_payload() {
        let response = Envelope::new(
            StatusCode::CREATED,
            StatusMessage::new("OK", "Student created with ID 1"),
        )
        .into_response();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            HeaderValue::from_static("application/json")
        );
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"success": "OK", "message": "Student created with ID 1"})
        );
    }

    #[tokio::test]
    async fn error_envelope_shape() {
        let response = error_response(StatusCode::BAD_REQUEST, "empty body");
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"status": "Error", "message": "empty body"})
        );
    }

    #[tokio::test]
    async fn serialization_failure_becomes_500() {
        let response = Envelope::ok(Unserializable).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["status"], "Error");
    }

    #[tokio::test]
    async fn empty_list_serializes_as_array() {
        let response = Envelope::ok(Vec::<StatusMessage>::new()).into_response();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"[]");
    }
}
