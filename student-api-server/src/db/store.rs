//! Persistence contract for student records
//!
//! Handlers only see `dyn StudentStore`; the SQLite and in-memory
//! implementations live beside this module.

use async_trait::async_trait;

use crate::models::{NewStudent, Pagination, Student};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("student with ID {id} not found")]
    NotFound { id: i64 },

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Storage operations for students.
///
/// `update_by_id` and `delete_by_id` report [`StoreError::NotFound`] when no
/// row was affected, so a record removed between a caller's existence check
/// and its mutation is still reported as missing.
#[async_trait]
pub trait StudentStore: Send + Sync + 'static {
    /// Insert a record and return its newly assigned id.
    async fn create(&self, student: &NewStudent) -> Result<i64, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError>;

    /// Up to `limit` records starting at `offset`, ordered by id ascending.
    async fn list(&self, page: Pagination) -> Result<Vec<Student>, StoreError>;

    /// Replace every mutable field of the record.
    async fn update_by_id(&self, id: i64, student: &NewStudent) -> Result<(), StoreError>;

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError>;

    /// Cheap reachability check for health reporting.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
