//! Read errors.

use mapspec_core::CoreError;
use mapspec_repository::RepositoryError;

/// Read result type
pub type ReadResult<T> = Result<T, ReadError>;

/// Failure of a specification read
///
/// A missing information model is reported on its own; every other failure
/// is wrapped as [`ReadError::CannotRead`] with its cause.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// The information model does not exist for the ID and platform key
    #[error(
        "Information model cannot be found with given model ID and/or key: {model_id} (platform key: {})",
        .platform_key.as_deref().unwrap_or("none")
    )]
    NotFound {
        /// Requested model ID
        model_id: String,
        /// Requested platform key
        platform_key: Option<String>,
    },

    /// Any other failure while reading
    #[error("Problem reading mapping specification: {cause}")]
    CannotRead {
        /// Underlying failure
        #[source]
        cause: ReadCause,
    },
}

/// Cause of a [`ReadError::CannotRead`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadCause {
    /// Model ID or model content was invalid
    #[error(transparent)]
    Model(#[from] CoreError),

    /// Repository fetch failed
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A function block property is not typed by a model
    #[error("Function block property '{property}' does not reference a model")]
    NotAModelReference {
        /// Property name
        property: String,
    },
}

impl From<ReadCause> for ReadError {
    fn from(cause: ReadCause) -> Self {
        Self::CannotRead { cause }
    }
}

impl From<CoreError> for ReadError {
    fn from(err: CoreError) -> Self {
        ReadCause::from(err).into()
    }
}

impl From<RepositoryError> for ReadError {
    fn from(err: RepositoryError) -> Self {
        ReadCause::from(err).into()
    }
}

impl ReadError {
    /// Check if this is the missing information model case
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
