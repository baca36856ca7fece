//! Domain models with validation at construction
//!
//! Client input is checked before it reaches the store.
//! Invalid input returns an error value, not panic.

pub mod pagination;
pub mod student;
pub mod validation;

pub use pagination::{Pagination, PaginationError, PaginationParams};
pub use student::{NewStudent, Student, StudentPayload};
pub use validation::{FieldViolation, Rule, ValidationErrors};
