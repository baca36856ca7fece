//! Validation error types
//!
//! A failed validation carries every field violation found, in field order.
//! The joined display form is what clients see in the error envelope.

use std::fmt;

/// Rule a field failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Field is absent or empty
    Required,

    /// Field is not a syntactically valid email address
    Email,

    /// Field is below the inclusive lower bound
    Gte(i64),

    /// Field is above the inclusive upper bound
    Lte(i64),

    /// Any other failure
    Invalid,
}

/// A single field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Display name of the field, e.g. `Email`
    pub field: &'static str,
    pub rule: Rule,
}

impl FieldViolation {
    pub fn new(field: &'static str, rule: Rule) -> Self {
        Self { field, rule }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            Rule::Required => write!(f, "{} is required", self.field),
            Rule::Email => write!(f, "{} must be a valid email", self.field),
            Rule::Gte(min) => {
                write!(f, "{} must be greater than or equal to {}", self.field, min)
            }
            Rule::Lte(max) => {
                write!(f, "{} must be less than or equal to {}", self.field, max)
            }
            Rule::Invalid => write!(f, "{} is not valid", self.field),
        }
    }
}

/// Ordered collection of field violations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<FieldViolation>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, rule: Rule) {
        self.violations.push(FieldViolation::new(field, rule));
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_messages() {
        assert_eq!(
            FieldViolation::new("Name", Rule::Required).to_string(),
            "Name is required"
        );
        assert_eq!(
            FieldViolation::new("Email", Rule::Email).to_string(),
            "Email must be a valid email"
        );
        assert_eq!(
            FieldViolation::new("Age", Rule::Gte(0)).to_string(),
            "Age must be greater than or equal to 0"
        );
        assert_eq!(
            FieldViolation::new("Age", Rule::Lte(110)).to_string(),
            "Age must be less than or equal to 110"
        );
        assert_eq!(
            FieldViolation::new("Age", Rule::Invalid).to_string(),
            "Age is not valid"
        );
    }

    #[test]
    fn joins_with_comma() {
        let mut errors = ValidationErrors::new();
        errors.push("Name", Rule::Required);
        errors.push("Age", Rule::Lte(110));
        assert_eq!(
            errors.to_string(),
            "Name is required, Age must be less than or equal to 110"
        );
    }

    #[test]
    fn empty_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
