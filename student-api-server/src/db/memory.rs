//! In-memory student store
//!
//! Same contract as the SQLite store, no database required.
//! Backs the HTTP test suite.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, StudentStore};
use crate::models::{NewStudent, Pagination, Student};

#[derive(Debug)]
struct Inner {
    // Monotonic: ids are never handed out twice.
    next_id: i64,
    rows: BTreeMap<i64, Student>,
}

/// Thread-safe map of students keyed by id
#[derive(Debug)]
pub struct MemoryStudentStore {
    inner: RwLock<Inner>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for MemoryStudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn create(&self, student: &NewStudent) -> Result<i64, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        inner.rows.insert(id, Student::from_new(id, student.clone()));
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Student, StoreError> {
        self.inner
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn list(&self, page: Pagination) -> Result<Vec<Student>, StoreError> {
        let inner = self.inner.read().await;
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(page.limit()).unwrap_or(0);

        Ok(inner.rows.values().skip(skip).take(take).cloned().collect())
    }

    async fn update_by_id(&self, id: i64, student: &NewStudent) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let row = inner
            .rows
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;
        *row = Student::from_new(id, student.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob(age: i64) -> NewStudent {
        NewStudent {
            name: "Bob".into(),
            email: "bob@example.com".into(),
            age,
        }
    }

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = MemoryStudentStore::new();
        let a = store.create(&bob(20)).await.unwrap();
        let b = store.create(&bob(21)).await.unwrap();
        assert_eq!((a, b), (1, 2));

        store.delete_by_id(b).await.unwrap();
        assert_eq!(store.create(&bob(22)).await.unwrap(), 3);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn list_windows_by_id() {
        let store = MemoryStudentStore::new();
        for age in 0..60 {
            store.create(&bob(age)).await.unwrap();
        }

        let page = store.list(Pagination::new(1000, 5).unwrap()).await.unwrap();
        assert_eq!(page.len(), 50);
        assert_eq!(page[0].id, 6);
    }

    #[tokio::test]
    async fn missing_rows_are_not_found() {
        let store = MemoryStudentStore::new();
        assert!(store.is_empty().await);
        assert!(matches!(store.get_by_id(1).await, Err(StoreError::NotFound { id: 1 })));
        assert!(matches!(
            store.update_by_id(1, &bob(1)).await,
            Err(StoreError::NotFound { id: 1 })
        ));
        assert!(matches!(store.delete_by_id(1).await, Err(StoreError::NotFound { id: 1 })));
    }
}
