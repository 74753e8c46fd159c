//! Repository content kinds.

use mapspec_core::{FunctionblockModel, Infomodel, ModelId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content requested from a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// Information model content
    Infomodel,
    /// Function block model content
    Functionblock,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Infomodel => write!(f, "infomodel"),
            Self::Functionblock => write!(f, "functionblock"),
        }
    }
}

/// Model content returned by a repository, tagged by model type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ModelContent {
    /// Information model
    Infomodel(Infomodel),
    /// Function block model
    Functionblock(FunctionblockModel),
}

impl ModelContent {
    /// Kind of this content
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Infomodel(_) => ContentKind::Infomodel,
            Self::Functionblock(_) => ContentKind::Functionblock,
        }
    }

    /// ID of the contained model
    #[must_use]
    pub fn id(&self) -> &ModelId {
        match self {
            Self::Infomodel(m) => &m.id,
            Self::Functionblock(m) => &m.id,
        }
    }
}

impl From<Infomodel> for ModelContent {
    fn from(model: Infomodel) -> Self {
        Self::Infomodel(model)
    }
}

impl From<FunctionblockModel> for ModelContent {
    fn from(model: FunctionblockModel) -> Self {
        Self::Functionblock(model)
    }
}
