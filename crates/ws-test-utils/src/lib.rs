//! Shared test utilities for the workspace resolver crates.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only — never published.
//!
//! # Modules
//!
//! - [`documents`] — canned workspace documents as JSON values
//! - [`workspace`] — [`TestWorkspace`] builder for on-disk workspaces

pub mod documents;
pub mod workspace;

pub use workspace::TestWorkspace;
