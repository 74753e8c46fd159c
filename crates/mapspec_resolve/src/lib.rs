//! MAPSPEC Specification Reader
//!
//! Resolves an information model into a [`MappingSpecification`]: the model
//! itself, its function block models fetched for a target platform, and the
//! scripting functions those function blocks declare.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod reader;
pub mod specification;

pub use config::ReaderConfig;
pub use error::{ReadCause, ReadError, ReadResult};
pub use reader::{read_specification, SpecificationReader, FUNCTIONS_STEREOTYPE, NAMESPACE_ATTRIBUTE};
pub use specification::MappingSpecification;
