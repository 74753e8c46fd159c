//! MAPSPEC Model Repository
//!
//! The fetch contract consumed by the specification reader, plus two
//! backends: an in-memory map and a directory of JSON files.
//! Transport, authentication and retries of remote repositories live behind
//! the [`ModelRepository`] trait and are not handled here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod content;
pub mod directory;
pub mod memory;
pub mod repository;

pub use content::{ContentKind, ModelContent};
pub use directory::DirectoryRepository;
pub use memory::{FetchRecord, InMemoryRepository};
pub use repository::{ModelRepository, RepositoryError, RepositoryResult};
