//! Filesystem fragment transport.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::fetcher::{FetchError, FragmentFetcher};

/// Reads fragments from a local directory.
///
/// A root-relative source like `/header.html` maps to
/// `<root>/header.html`. Sources containing parent-directory components are
/// rejected so a marker can never read outside the fragment root.
pub struct DirFetcher {
    root: PathBuf,
}

impl DirFetcher {
    /// Create a fetcher rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn fragment_path(&self, source: &str) -> Result<PathBuf, FetchError> {
        let relative = source.trim_start_matches('/');
        let has_parent_component = Path::new(relative)
            .components()
            .any(|c| matches!(c, Component::ParentDir));
        if relative.is_empty() || has_parent_component {
            return Err(FetchError::InvalidSource(source.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl FragmentFetcher for DirFetcher {
    async fn fetch(&self, source: &str) -> Result<String, FetchError> {
        let path = self.fragment_path(source)?;
        tracing::debug!(path = %path.display(), "Reading fragment");
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
