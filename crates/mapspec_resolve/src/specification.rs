//! Resolved mapping specification.

use indexmap::IndexMap;
use mapspec_core::{FunctionblockModel, Infomodel};
use mapspec_library::FunctionLibrary;
use serde::{Deserialize, Serialize};

/// Result of a specification read
///
/// Function blocks are keyed by property name in the declaration order of the
/// information model. An entry is `None` when neither platform-specific nor
/// platform-agnostic content could be found for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingSpecification {
    infomodel: Infomodel,
    functionblocks: IndexMap<String, Option<FunctionblockModel>>,
    library: FunctionLibrary,
}

impl MappingSpecification {
    pub(crate) fn new(
        infomodel: Infomodel,
        functionblocks: IndexMap<String, Option<FunctionblockModel>>,
        library: FunctionLibrary,
    ) -> Self {
        Self {
            infomodel,
            functionblocks,
            library,
        }
    }

    /// The information model
    #[must_use]
    pub fn infomodel(&self) -> &Infomodel {
        &self.infomodel
    }

    /// Function blocks by property name, unresolved entries included
    #[must_use]
    pub fn functionblocks(&self) -> &IndexMap<String, Option<FunctionblockModel>> {
        &self.functionblocks
    }

    /// Resolved function block for a property
    #[must_use]
    pub fn functionblock(&self, property: &str) -> Option<&FunctionblockModel> {
        self.functionblocks.get(property).and_then(Option::as_ref)
    }

    /// Property names whose function block could not be resolved
    pub fn unresolved(&self) -> impl Iterator<Item = &str> {
        self.functionblocks
            .iter()
            .filter(|(_, fb)| fb.is_none())
            .map(|(name, _)| name.as_str())
    }

    /// Scripting functions declared by the function blocks
    #[must_use]
    pub fn library(&self) -> &FunctionLibrary {
        &self.library
    }

    /// Split into information model, function blocks and library
    #[must_use]
    pub fn into_parts(
        self,
    ) -> (
        Infomodel,
        IndexMap<String, Option<FunctionblockModel>>,
        FunctionLibrary,
    ) {
        (self.infomodel, self.functionblocks, self.library)
    }
}
