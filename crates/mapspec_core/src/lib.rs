//! MAPSPEC Core Types
//!
//! This crate contains pure types and logic with no I/O.
//! Model content is treated as a data contract owned by the model repository;
//! everything here is serializable so repositories can decode it directly.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod id;
pub mod model;

// Re-exports
pub use error::{CoreError, CoreResult};
pub use id::ModelId;
pub use model::{FunctionblockModel, Infomodel, ModelProperty, PropertyType, Stereotype};
