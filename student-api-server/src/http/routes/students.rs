//! Student endpoints
//!
//! - POST   /api/students       create
//! - GET    /api/students       list (limit/offset)
//! - GET    /api/students/{id}  fetch one
//! - PUT    /api/students/{id}  replace fields
//! - DELETE /api/students/{id}  remove
//!
//! Update and delete check existence first so a missing id is a 404 before
//! any write is attempted.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use tracing::{info, instrument};

use crate::http::envelope::{Envelope, StatusMessage};
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, StudentId};
use crate::http::state::AppState;
use crate::models::{Pagination, PaginationParams, Student, StudentPayload};

/// POST /api/students
#[instrument(skip_all)]
async fn create_student(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<Envelope<StatusMessage>, ApiError> {
    let student = payload.validate()?;
    let id = state.store().create(&student).await?;

    info!(id, "student created");
    Ok(Envelope::new(
        StatusCode::CREATED,
        StatusMessage::new("OK", format!("Student created with ID {id}")),
    ))
}

/// GET /api/students/{id}
#[instrument(skip_all, fields(id = id))]
async fn get_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<Envelope<Student>, ApiError> {
    let student = state.store().get_by_id(id).await?;
    Ok(Envelope::ok(student))
}

/// GET /api/students?limit=&offset=
///
/// `limit` defaults to 10 and is clamped to 50; `offset` defaults to 0.
/// A repeated key uses its first value.
#[instrument(skip_all)]
async fn list_students(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Envelope<Vec<Student>>, ApiError> {
    let Query(pairs) = query.map_err(|rejection| ApiError::InvalidInput(rejection.body_text()))?;
    let page = Pagination::try_from(pairs.into_iter().collect::<PaginationParams>())?;

    let students = state.store().list(page).await?;
    info!(
        limit = page.limit(),
        offset = page.offset(),
        count = students.len(),
        "students listed"
    );
    Ok(Envelope::ok(students))
}

/// PUT /api/students/{id}
#[instrument(skip_all, fields(id = id))]
async fn update_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
    JsonBody(payload): JsonBody<StudentPayload>,
) -> Result<Envelope<StatusMessage>, ApiError> {
    let student = payload.validate()?;

    state.store().get_by_id(id).await?;
    state.store().update_by_id(id, &student).await?;

    info!("student updated");
    Ok(Envelope::ok(StatusMessage::new(
        "ok",
        format!("Student updated with ID {id}"),
    )))
}

/// DELETE /api/students/{id}
#[instrument(skip_all, fields(id = id))]
async fn delete_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<Envelope<StatusMessage>, ApiError> {
    state.store().get_by_id(id).await?;
    state.store().delete_by_id(id).await?;

    info!("student deleted");
    Ok(Envelope::ok(StatusMessage::new(
        "ok",
        format!("Student deleted with ID {id}"),
    )))
}

/// Student routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/students", get(list_students).post(create_student))
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
}
