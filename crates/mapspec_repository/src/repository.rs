//! Fetch contract for model repositories.

use crate::content::{ContentKind, ModelContent};
use mapspec_core::{CoreError, ModelId};

/// Repository result type
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    /// Content was of a different kind than requested
    #[error("Unexpected content for {id}: expected {expected}, found {found}")]
    UnexpectedContent {
        /// Requested model
        id: ModelId,
        /// Requested kind
        expected: ContentKind,
        /// Delivered kind
        found: ContentKind,
    },

    /// Content describes a different model than requested
    #[error("Repository returned {found} when {requested} was requested")]
    IdMismatch {
        /// Requested model
        requested: ModelId,
        /// Delivered model
        found: ModelId,
    },

    /// Platform key cannot be used by this backend
    #[error("Invalid platform key: {0}")]
    InvalidPlatformKey(String),

    /// Content could not be encoded or decoded
    #[error("Invalid content encoding for {id}: {source}")]
    Encoding {
        /// Requested model
        id: ModelId,
        /// Codec error
        #[source]
        source: CoreError,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Backend-specific failure
    #[error("Repository backend failed: {0}")]
    Backend(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Source of model content
///
/// `platform_key` selects platform-specific content; `None` requests the
/// platform-agnostic content. A missing model is `Ok(None)`, not an error.
pub trait ModelRepository: Send + Sync {
    /// Fetch content of the given kind
    ///
    /// # Errors
    ///
    /// Returns error if the backend fails or delivers unusable content
    fn fetch(
        &self,
        id: &ModelId,
        kind: ContentKind,
        platform_key: Option<&str>,
    ) -> RepositoryResult<Option<ModelContent>>;
}

impl<R: ModelRepository + ?Sized> ModelRepository for &R {
    fn fetch(
        &self,
        id: &ModelId,
        kind: ContentKind,
        platform_key: Option<&str>,
    ) -> RepositoryResult<Option<ModelContent>> {
        (**self).fetch(id, kind, platform_key)
    }
}

impl<R: ModelRepository + ?Sized> ModelRepository for std::sync::Arc<R> {
    fn fetch(
        &self,
        id: &ModelId,
        kind: ContentKind,
        platform_key: Option<&str>,
    ) -> RepositoryResult<Option<ModelContent>> {
        (**self).fetch(id, kind, platform_key)
    }
}

impl<R: ModelRepository + ?Sized> ModelRepository for Box<R> {
    fn fetch(
        &self,
        id: &ModelId,
        kind: ContentKind,
        platform_key: Option<&str>,
    ) -> RepositoryResult<Option<ModelContent>> {
        (**self).fetch(id, kind, platform_key)
    }
}

/// Check delivered content against the request
///
/// # Errors
///
/// Returns error if kind or ID differ from the request
pub(crate) fn check_content(
    id: &ModelId,
    kind: ContentKind,
    content: &ModelContent,
) -> RepositoryResult<()> {
    if content.kind() != kind {
        return Err(RepositoryError::UnexpectedContent {
            id: id.clone(),
            expected: kind,
            found: content.kind(),
        });
    }
    if content.id() != id {
        return Err(RepositoryError::IdMismatch {
            requested: id.clone(),
            found: content.id().clone(),
        });
    }
    Ok(())
}
