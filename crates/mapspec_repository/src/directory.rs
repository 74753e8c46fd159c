//! Directory-backed model repository.
//!
//! Layout: `<root>/<namespace>/<name>/<version>/model.json` holds the
//! platform-agnostic content, `<root>/<namespace>/<name>/<version>/platforms/<platform>.json`
//! the content for one platform. Platform files live in their own directory so
//! no platform key can name the platform-agnostic file. Files are JSON
//! [`ModelContent`].

use crate::content::{ContentKind, ModelContent};
use crate::repository::{check_content, ModelRepository, RepositoryError, RepositoryResult};
use mapspec_core::{CoreError, ModelId};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const AGNOSTIC_FILE: &str = "model";
const PLATFORM_DIR: &str = "platforms";
const EXTENSION: &str = "json";

/// Repository reading model content from a directory tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryRepository {
    root: PathBuf,
}

impl DirectoryRepository {
    /// Open a repository rooted at `root`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the content file for a model and optional platform
    ///
    /// # Errors
    ///
    /// Returns error if the platform key cannot be used as a file name
    pub fn content_path(&self, id: &ModelId, platform_key: Option<&str>) -> RepositoryResult<PathBuf> {
        let version_dir = self
            .root
            .join(id.namespace())
            .join(id.name())
            .join(id.version());
        let path = match platform_key {
            Some(key) => {
                validate_platform_key(key)?;
                version_dir
                    .join(PLATFORM_DIR)
                    .join(format!("{}.{}", key, EXTENSION))
            }
            None => version_dir.join(format!("{}.{}", AGNOSTIC_FILE, EXTENSION)),
        };
        Ok(path)
    }

    /// Write content into the tree, creating directories as needed
    ///
    /// # Errors
    ///
    /// Returns error on IO failure or invalid platform key
    pub fn put(&self, content: &ModelContent, platform_key: Option<&str>) -> RepositoryResult<PathBuf> {
        let path = self.content_path(content.id(), platform_key)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(content).map_err(|e| RepositoryError::Encoding {
            id: content.id().clone(),
            source: CoreError::from(e),
        })?;
        std::fs::write(&path, json)?;
        tracing::debug!(path = %path.display(), "wrote model content");
        Ok(path)
    }
}

fn validate_platform_key(key: &str) -> RepositoryResult<()> {
    let usable = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');
    if usable {
        Ok(())
    } else {
        Err(RepositoryError::InvalidPlatformKey(key.to_string()))
    }
}

impl ModelRepository for DirectoryRepository {
    fn fetch(
        &self,
        id: &ModelId,
        kind: ContentKind,
        platform_key: Option<&str>,
    ) -> RepositoryResult<Option<ModelContent>> {
        let path = self.content_path(id, platform_key)?;
        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no content file");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        let content: ModelContent =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Encoding {
                id: id.clone(),
                source: CoreError::from(e),
            })?;
        check_content(id, kind, &content)?;
        Ok(Some(content))
    }
}
