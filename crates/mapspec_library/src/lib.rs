//! MAPSPEC Function Library
//!
//! Scripting functions declared on function block models, grouped by
//! namespace. Expression evaluators look functions up by namespace and name;
//! this crate only stores declarations and never executes them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod functions;
pub mod library;

pub use functions::ScriptFunctions;
pub use library::{FunctionLibrary, LibraryError};
