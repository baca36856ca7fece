//! SQLite-backed student store

use std::path::Path;

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::pool::{create_memory_pool, create_pool, run_migrations};
use super::store::{StoreError, StudentStore};
use crate::models::{NewStudent, Pagination, Student};

/// Student repository over a sqlx pool
#[derive(Clone)]
pub struct SqliteStudentStore {
    pool: SqlitePool,
}

impl SqliteStudentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database file at `path` and run migrations.
    pub async fn connect(path: &Path) -> Result<Self, StoreError> {
        let pool = create_pool(path).await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Fresh in-memory database with migrations applied (for testing)
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = create_memory_pool().await?;
        run_migrations(&pool).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl StudentStore for SqliteStudentStore {
    async fn create(&self, student: &NewStudent) -> Result<i64, StoreError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?, ?, ?)")
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError> {
        sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age FROM students WHERE id = ? LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Student>, StoreError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, name, email, age FROM students ORDER BY id ASC LIMIT ? OFFSET ?",
        )
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(students)
    }

    async fn update_by_id(&self, id: i64, student: &NewStudent) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE students SET name = ?, email = ?, age = ? WHERE id = ?")
            .bind(&student.name)
            .bind(&student.email)
            .bind(student.age)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound { id });
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
