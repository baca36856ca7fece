//! Database layer - connection pool and student stores
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Stores are consumed through the `StudentStore` trait
//! - Zero rows affected on update/delete is reported as not found

pub mod memory;
pub mod pool;
pub mod sqlite;
pub mod store;

pub use memory::MemoryStudentStore;
pub use pool::{create_memory_pool, create_pool, run_migrations};
pub use sqlite::SqliteStudentStore;
pub use store::{StoreError, StudentStore};
