//! Error types for ws-schema

use std::fmt;

/// Result type for ws-schema operations
pub type Result<T> = std::result::Result<T, SchemaValidationError>;

/// Errors raised while compiling a schema or validating a document
#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    /// The document did not conform to the schema.
    #[error("Schema validation failed against '{schema_name}':\n{violations}")]
    ValidationFailed {
        schema_name: String,
        violations: ValidationViolations,
    },

    /// The schema source could not be parsed as JSON.
    #[error("Schema load error for '{schema_name}': {reason}")]
    SchemaLoadError { schema_name: String, reason: String },

    /// The schema parsed but could not be compiled into a validator.
    #[error("Validator build error for schema '{schema_name}': {reason}")]
    ValidatorBuildError { schema_name: String, reason: String },
}

impl SchemaValidationError {
    /// The violations carried by a failed validation, if any.
    pub fn violations(&self) -> Option<&ValidationViolations> {
        match self {
            Self::ValidationFailed { violations, .. } => Some(violations),
            _ => None,
        }
    }
}

/// A single violated constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the offending value in the document.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that rejected it.
    pub schema_path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "  (root): {}", self.message)
        } else {
            write!(f, "  {}: {}", self.instance_path, self.message)
        }
    }
}

/// Every violation reported for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationViolations {
    violations: Vec<Violation>,
}

impl ValidationViolations {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn into_inner(self) -> Vec<Violation> {
        self.violations
    }
}

impl<'a> IntoIterator for &'a ValidationViolations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}
