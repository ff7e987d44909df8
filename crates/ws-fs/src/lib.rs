//! Storage abstraction for the workspace resolver
//!
//! Provides slash-normalized path handling and the [`Host`] boundary used
//! to read raw workspace documents from a named location.

pub mod error;
pub mod host;
pub mod path;

pub use error::{Error, Result};
pub use host::{Host, LocalHost, MemoryHost};
pub use path::NormalizedPath;
