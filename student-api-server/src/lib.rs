//! student-api-server: HTTP CRUD service for student records
//!
//! Decodes and validates JSON payloads, persists them through a
//! [`StudentStore`](db::StudentStore) and answers with uniform JSON
//! envelopes.

pub mod db;
pub mod http;
pub mod models;

pub use db::{MemoryStudentStore, SqliteStudentStore, StoreError, StudentStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig, ServerError};
pub use models::{NewStudent, Student, StudentPayload, ValidationErrors};
