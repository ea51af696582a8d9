use std::path::{Path, PathBuf};

use crate::assets::resolver::{ImageResolver, ResolvedResource};

/// Root directory the static pages and images live under.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    /// Reads `file` relative to the root.
    pub async fn read(&self, file: &str) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(self.path_of(file)).await
    }

    pub fn images(&self) -> ImageResolver<'_> {
        ImageResolver::new(self)
    }

    /// Shorthand for `self.images().resolve(name)`.
    pub async fn resolve_image(&self, name: &str) -> Option<ResolvedResource> {
        self.images().resolve(name).await
    }
}
