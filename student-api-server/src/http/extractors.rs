//! Custom Axum extractors
//!
//! Both reject with [`ApiError`] so malformed requests get the same error
//! envelope as every other failure.

use axum::body::Bytes;
use axum::extract::path::ErrorKind;
use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Extract and parse a numeric student id from the path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::MissingPathParams(_) => ApiError::invalid_input("missing student ID in URL"),
                PathRejection::FailedToDeserializePathParams(e)
                    if matches!(e.kind(), ErrorKind::WrongNumberOfParameters { .. }) =>
                {
                    ApiError::invalid_input("missing student ID in URL")
                }
                // present but undecodable, e.g. `%FF`
                _ => ApiError::invalid_input("invalid student ID"),
            })?;

        if raw.is_empty() {
            return Err(ApiError::invalid_input("missing student ID in URL"));
        }

        let id = raw
            .parse::<i64>()
            .map_err(|_| ApiError::invalid_input("invalid student ID"))?;

        Ok(Self(id))
    }
}

/// JSON request body.
///
/// Unlike `axum::Json` this does not require a `Content-Type` header, reports
/// an empty body as `empty body`, and answers decode failures with 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;

        if bytes.trim_ascii().is_empty() {
            return Err(ApiError::invalid_input("empty body"));
        }

        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::InvalidInput(e.to_string()))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request as HttpRequest;
    use axum::routing::get;
    use axum::Router;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        n: i64,
    }

    async fn json(body: &str) -> Result<JsonBody<Payload>, ApiError> {
        let req = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body.to_owned()))
            .unwrap();
        JsonBody::<Payload>::from_request(req, &()).await
    }

    #[tokio::test]
    async fn decodes_without_content_type() {
        let JsonBody(payload) = json(r#"{"n": 4}"#).await.unwrap();
        assert_eq!(payload.n, 4);
    }

    #[tokio::test]
    async fn empty_and_blank_bodies() {
        for body in ["", "  \n"] {
            let err = json(body).await.unwrap_err();
            assert_eq!(err.to_string(), "empty body");
        }
    }

    #[tokio::test]
    async fn malformed_json_reports_decoder_message() {
        let err = json(r#"{"n": "#).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
        assert!(err.to_string().contains("EOF"), "{}", err);
    }

    async fn id_of(uri: &str) -> Result<i64, String> {
        use tower::ServiceExt;

        let app: Router = Router::new().route(
            "/items/{id}",
            get(|StudentId(id): StudentId| async move { id.to_string() }),
        );
        let response = app
            .oneshot(HttpRequest::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        if status.is_success() {
            Ok(String::from_utf8(bytes.to_vec()).unwrap().parse().unwrap())
        } else {
            assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
            let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            Err(body["message"].as_str().unwrap().to_owned())
        }
    }

    #[tokio::test]
    async fn parses_numeric_id() {
        assert_eq!(id_of("/items/17").await.unwrap(), 17);
    }

    #[tokio::test]
    async fn rejects_non_numeric_id() {
        assert_eq!(id_of("/items/abc").await.unwrap_err(), "invalid student ID");
    }

    #[tokio::test]
    async fn undecodable_id_is_invalid_not_missing() {
        assert_eq!(id_of("/items/%FF").await.unwrap_err(), "invalid student ID");
    }

    #[tokio::test]
    async fn missing_path_param_is_reported() {
        let (mut parts, ()) = HttpRequest::builder().uri("/items").body(()).unwrap().into_parts();
        let err = StudentId::from_request_parts(&mut parts, &()).await.unwrap_err();
        assert_eq!(err.to_string(), "missing student ID in URL");
    }
}
