//! Schema validation for workspace documents.
//!
//! The resolver treats validation as a black box behind the [`Validate`]
//! trait. [`SchemaValidator`] is the default implementation: it compiles
//! the bundled workspace schema (draft-07) with the `jsonschema` crate and
//! reports every violated constraint as a structured [`Violation`].

pub mod error;
pub mod validator;

pub use error::{Result, SchemaValidationError, ValidationViolations, Violation};
pub use validator::{SchemaValidator, Validate, WORKSPACE_SCHEMA, WORKSPACE_SCHEMA_NAME};
