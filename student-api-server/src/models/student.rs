//! Student record and its request payload
//!
//! [`StudentPayload`] is what clients send; [`NewStudent`] is what survives
//! validation and reaches the store; [`Student`] is what the store returns.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::validation::{Rule, ValidationErrors};

/// Inclusive lower bound for `age`
pub const MIN_AGE: i64 = 0;

/// Inclusive upper bound for `age`
pub const MAX_AGE: i64 = 110;

/// RFC 5322 dot-atom local part, then a dotted host name whose top-level
/// label starts and ends with a letter
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    const ATEXT: &str = r"[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]+";
    const LABEL: &str = r"[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?";
    const TLD: &str = r"[a-zA-Z](?:[a-zA-Z0-9-]{0,61}[a-zA-Z])?";

    Regex::new(&format!(r"^{ATEXT}(?:\.{ATEXT})*@(?:{LABEL}\.)+{TLD}$"))
        .expect("invalid email regex")
});

/// Persisted student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl Student {
    pub fn from_new(id: i64, new: NewStudent) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            age: new.age,
        }
    }
}

/// Validated field set for create and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
    pub age: i64,
}

/// Request body for create and update.
///
/// Every field is optional so a missing field is reported by validation
/// rather than by the JSON decoder. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<i64>,
}

impl StudentPayload {
    /// Check every field and return the validated record.
    ///
    /// All fields are checked; each contributes at most one violation
    /// (its first failing rule).
    ///
    /// # Example
    /// ```
    /// use student_api_server::models::StudentPayload;
    ///
    /// let payload = StudentPayload {
    ///     name: Some("Alice".into()),
    ///     email: Some("alice@example.com".into()),
    ///     age: Some(30),
    /// };
    /// assert!(payload.validate().is_ok());
    ///
    /// let err = StudentPayload::default().validate().unwrap_err();
    /// assert_eq!(err.to_string(), "Name is required, Email is required, Age is required");
    /// ```
    pub fn validate(self) -> Result<NewStudent, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = match self.name {
            Some(name) if !name.is_empty() => Some(name),
            _ => {
                errors.push("Name", Rule::Required);
                None
            }
        };

        let email = match self.email {
            Some(email) if email.is_empty() => {
                errors.push("Email", Rule::Required);
                None
            }
            Some(email) if !EMAIL_RE.is_match(&email) => {
                errors.push("Email", Rule::Email);
                None
            }
            Some(email) => Some(email),
            None => {
                errors.push("Email", Rule::Required);
                None
            }
        };

        let age = match self.age {
            Some(age) if age < MIN_AGE => {
                errors.push("Age", Rule::Gte(MIN_AGE));
                None
            }
            Some(age) if age > MAX_AGE => {
                errors.push("Age", Rule::Lte(MAX_AGE));
                None
            }
            Some(age) => Some(age),
            None => {
                errors.push("Age", Rule::Required);
                None
            }
        };

        match (name, email, age) {
            (Some(name), Some(email), Some(age)) => Ok(NewStudent { name, email, age }),
            _ => Err(errors),
        }
    }
}
