//! Storage hosts that serve raw workspace documents

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{Error, NormalizedPath, Result};

/// Read-only access to a storage location.
///
/// The resolver only ever reads one document per load, so the surface is
/// deliberately small. Implementations may block on I/O; callers await
/// each read to completion and never retry.
#[async_trait]
pub trait Host: Send + Sync {
    /// Read the full contents stored at `path`.
    async fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>>;

    /// Check whether anything is stored at `path`.
    async fn exists(&self, path: &NormalizedPath) -> bool;
}

#[async_trait]
impl<H: Host + ?Sized> Host for Arc<H> {
    async fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        (**self).read(path).await
    }

    async fn exists(&self, path: &NormalizedPath) -> bool {
        (**self).exists(path).await
    }
}

/// Host backed by the local file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalHost;

impl LocalHost {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Host for LocalHost {
    async fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        let native_path = path.to_native();
        tracing::trace!(%path, "Reading from local host");
        tokio::fs::read(&native_path)
            .await
            .map_err(|e| Error::from_io(native_path, e))
    }

    async fn exists(&self, path: &NormalizedPath) -> bool {
        tokio::fs::try_exists(path.to_native())
            .await
            .unwrap_or(false)
    }
}

/// Host that serves files from memory.
///
/// Keys are stored in normalized form, so `a/./b.json` and `a/b.json`
/// address the same entry.
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    files: HashMap<NormalizedPath, Vec<u8>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`MemoryHost::insert`].
    pub fn with_file(mut self, path: impl Into<NormalizedPath>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    /// Store `content` at `path`, replacing any previous entry.
    pub fn insert(&mut self, path: impl Into<NormalizedPath>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into().normalize(), content.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

#[async_trait]
impl Host for MemoryHost {
    async fn read(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        self.files
            .get(&path.normalize())
            .cloned()
            .ok_or_else(|| Error::not_found(path.to_native()))
    }

    async fn exists(&self, path: &NormalizedPath) -> bool {
        self.files.contains_key(&path.normalize())
    }
}
