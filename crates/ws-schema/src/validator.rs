//! Compiled JSON Schema validators

use jsonschema::{Draft, Validator};
use serde_json::Value;

use crate::{Result, SchemaValidationError, ValidationViolations, Violation};

/// Name reported for the bundled workspace schema.
pub const WORKSPACE_SCHEMA_NAME: &str = "workspace-schema.json";

/// Source of the bundled workspace schema.
pub const WORKSPACE_SCHEMA: &str = include_str!("../schemas/workspace-schema.json");

/// Validation boundary consumed by the resolver.
///
/// Implementations are pure: the same document always yields the same
/// outcome, and nothing is retained between calls.
pub trait Validate: Send + Sync {
    /// Check `document`, reporting every violated constraint on failure.
    fn validate(&self, document: &Value) -> Result<()>;
}

/// A schema compiled once and reused for every validation.
pub struct SchemaValidator {
    schema_name: String,
    validator: Validator,
}

impl SchemaValidator {
    /// Compile the bundled workspace schema.
    pub fn workspace() -> Result<Self> {
        let schema: Value = serde_json::from_str(WORKSPACE_SCHEMA).map_err(|e| {
            SchemaValidationError::SchemaLoadError {
                schema_name: WORKSPACE_SCHEMA_NAME.to_string(),
                reason: format!("invalid JSON: {e}"),
            }
        })?;
        Self::from_schema(WORKSPACE_SCHEMA_NAME, &schema)
    }

    /// Compile an arbitrary draft-07 schema.
    pub fn from_schema(schema_name: impl Into<String>, schema: &Value) -> Result<Self> {
        let schema_name = schema_name.into();
        let validator = jsonschema::options()
            .with_draft(Draft::Draft7)
            .build(schema)
            .map_err(|e| SchemaValidationError::ValidatorBuildError {
                schema_name: schema_name.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(schema = %schema_name, "Compiled schema validator");
        Ok(Self {
            schema_name,
            validator,
        })
    }

    pub fn schema_name(&self) -> &str {
        &self.schema_name
    }

    /// Collect every violation without failing.
    pub fn violations(&self, document: &Value) -> ValidationViolations {
        let violations = self
            .validator
            .iter_errors(document)
            .map(|e| Violation {
                instance_path: e.instance_path.to_string(),
                schema_path: e.schema_path.to_string(),
                message: e.to_string(),
            })
            .collect();
        ValidationViolations::new(violations)
    }
}

impl Validate for SchemaValidator {
    fn validate(&self, document: &Value) -> Result<()> {
        let violations = self.violations(document);
        if violations.is_empty() {
            return Ok(());
        }

        tracing::warn!(
            schema = %self.schema_name,
            count = violations.len(),
            "Document failed schema validation"
        );
        Err(SchemaValidationError::ValidationFailed {
            schema_name: self.schema_name.clone(),
            violations,
        })
    }
}

impl std::fmt::Debug for SchemaValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaValidator")
            .field("schema_name", &self.schema_name)
            .finish_non_exhaustive()
    }
}
