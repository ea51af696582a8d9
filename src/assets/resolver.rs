//! Locates an image by base name by probing known extensions.

use std::path::{Component, Path};

use crate::assets::store::AssetStore;

/// Extensions probed, in order.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// An image found on disk, owned by the request that asked for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub bytes: Vec<u8>,
    /// `image/<ext>`, with the extension exactly as it appears in the file name
    pub content_type: String,
    pub is_binary: bool,
}

impl ResolvedResource {
    fn image(bytes: Vec<u8>, ext: &str) -> Self {
        Self {
            bytes,
            content_type: format!("image/{ext}"),
            is_binary: true,
        }
    }
}

pub struct ImageResolver<'a> {
    store: &'a AssetStore,
}

impl<'a> ImageResolver<'a> {
    pub fn new(store: &'a AssetStore) -> Self {
        Self { store }
    }

    /// Finds the image called `name`.
    ///
    /// A name that already ends in `.png`, `.jpg`, `.jpeg` or `.gif` is opened
    /// as is. Otherwise `<name>.<ext>` is probed for each extension in
    /// [`IMAGE_EXTENSIONS`] order and the first regular file wins. Returns
    /// `None` when nothing matches.
    ///
    /// The name is not sanitized: `..` segments and absolute names reach the
    /// filesystem unchanged.
    pub async fn resolve(&self, name: &str) -> Option<ResolvedResource> {
        if escapes_root(name) {
            tracing::warn!(name, "image name reaches outside the asset root");
        }

        match explicit_extension(name) {
            Some(ext) => self.open_named(name, ext).await,
            None => self.probe(name).await,
        }
    }

    async fn open_named(&self, name: &str, ext: &str) -> Option<ResolvedResource> {
        let path = self.store.path_of(name);

        match tokio::fs::read(&path).await {
            Ok(bytes) => {
                tracing::debug!(path = %path.display(), "found image");
                Some(ResolvedResource::image(bytes, ext))
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "image not found");
                None
            }
        }
    }

    async fn probe(&self, name: &str) -> Option<ResolvedResource> {
        for ext in IMAGE_EXTENSIONS {
            let path = self.store.path_of(&format!("{name}.{ext}"));

            let is_file = tokio::fs::metadata(&path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    tracing::debug!(path = %path.display(), "found image");
                    return Some(ResolvedResource::image(bytes, ext));
                }
                // vanished or unreadable between the probe and the read
                Err(e) => {
                    tracing::debug!(path = %path.display(), error = %e, "skipping unreadable image");
                }
            }
        }

        tracing::debug!(name, "image not found");
        None
    }
}

/// The extension `name` already carries, if it is one of the probed ones.
fn explicit_extension(name: &str) -> Option<&'static str> {
    IMAGE_EXTENSIONS
        .into_iter()
        .find(|ext| name.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}

fn escapes_root(name: &str) -> bool {
    Path::new(name)
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_extension_requires_dot_suffix() {
        assert_eq!(explicit_extension("logo.png"), Some("png"));
        assert_eq!(explicit_extension("photo.jpeg"), Some("jpeg"));
        assert_eq!(explicit_extension("logopng"), None);
        assert_eq!(explicit_extension("logo.PNG"), None);
        assert_eq!(explicit_extension("logo"), None);
    }

    #[test]
    fn parent_segments_are_flagged() {
        assert!(escapes_root("../secret"));
        assert!(escapes_root("/etc/passwd"));
        assert!(!escapes_root("bzu-logo"));
    }
}
