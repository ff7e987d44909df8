//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Workspace documents describe project roots with forward slashes
/// regardless of platform, so every path the resolver compares is kept
/// in this form and converted to a platform-native path only when it
/// reaches the file system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes. No other cleanup happens
    /// here; call [`NormalizedPath::normalize`] to fold `.` and `..`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether this is the empty path, which denotes "the current root".
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the path is rooted (`/x`, `//server/x` or `C:/x`).
    pub fn is_absolute(&self) -> bool {
        self.inner.starts_with('/') || self.drive_prefix().is_some()
    }

    /// Join this path with a segment.
    ///
    /// An absolute segment replaces the base, mirroring [`Path::join`].
    pub fn join(&self, segment: &str) -> Self {
        let segment = Self::new(segment);
        if segment.is_absolute() || self.inner.is_empty() {
            return segment;
        }
        if segment.inner.is_empty() {
            return self.clone();
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment.inner)
        } else {
            format!("{}/{}", self.inner, segment.inner)
        };
        Self { inner: joined }
    }

    /// Fold `.` and `..` segments and collapse repeated separators.
    ///
    /// A leading `..` on a relative path is kept; on an absolute path it
    /// stops at the root. Trailing separators are dropped. The path `"."`
    /// normalizes to the empty path.
    pub fn normalize(&self) -> Self {
        let (prefix, rest) = self.split_prefix();

        let mut parts: Vec<&str> = Vec::new();
        for segment in rest.split('/') {
            match segment {
                "" | "." => {}
                ".." => match parts.last() {
                    Some(&last) if last != ".." => {
                        parts.pop();
                    }
                    _ if !prefix.is_empty() => {}
                    _ => parts.push(".."),
                },
                other => parts.push(other),
            }
        }

        Self {
            inner: format!("{prefix}{}", parts.join("/")),
        }
    }

    /// Strip `base` from the front of this path.
    ///
    /// Both paths are compared in normalized form and only whole segments
    /// match, so `apps/web2` is not within `apps/web`. Returns the empty
    /// path when both are equal. An empty base holds every relative path
    /// that does not climb out of it with a leading `..`.
    pub fn strip_prefix(&self, base: &NormalizedPath) -> Option<Self> {
        let path = self.normalize();
        let base = base.normalize();

        if base.is_empty() {
            let escapes = path.inner == ".." || path.inner.starts_with("../");
            return (!path.is_absolute() && !escapes).then_some(path);
        }
        if path.inner == base.inner {
            return Some(Self::default());
        }

        let rest = path.inner.strip_prefix(base.inner.as_str())?;
        if base.inner.ends_with('/') {
            return Some(Self::new(rest));
        }
        rest.strip_prefix('/').map(Self::new)
    }

    /// Whether this path equals `base` or lies underneath it.
    pub fn is_within(&self, base: &NormalizedPath) -> bool {
        self.strip_prefix(base).is_some()
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    fn drive_prefix(&self) -> Option<&str> {
        let bytes = self.inner.as_bytes();
        if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
            Some(&self.inner[..2])
        } else {
            None
        }
    }

    /// Split off the root marker so segment folding never climbs past it.
    fn split_prefix(&self) -> (String, &str) {
        if let Some(drive) = self.drive_prefix() {
            let rest = self.inner[2..].trim_start_matches('/');
            return (format!("{drive}/"), rest);
        }
        if let Some(rest) = self.inner.strip_prefix("//") {
            if !rest.starts_with('/') {
                return ("//".to_string(), rest);
            }
        }
        match self.inner.strip_prefix('/') {
            Some(rest) => ("/".to_string(), rest),
            None => (String::new(), self.inner.as_str()),
        }
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
