//! Model content as delivered by a model repository.

use crate::id::ModelId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named annotation block with string attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stereotype {
    /// Stereotype name
    pub name: String,
    /// Attribute name to value
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

impl Stereotype {
    /// Create an empty stereotype
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Add an attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Declared type of a property
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Reference to another model
    Model(ModelId),
    /// Primitive type such as `string` or `float`
    Primitive(String),
}

impl PropertyType {
    /// Referenced model, if this is a model reference
    #[must_use]
    pub fn as_model_id(&self) -> Option<&ModelId> {
        match self {
            Self::Model(id) => Some(id),
            Self::Primitive(_) => None,
        }
    }
}

/// Property of a model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelProperty {
    /// Property name
    pub name: String,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the property is mandatory
    #[serde(default = "default_mandatory")]
    pub mandatory: bool,
    /// Whether the property holds multiple values
    #[serde(default)]
    pub multiple: bool,
    /// Declared type
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Stereotypes attached to the property
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stereotypes: Vec<Stereotype>,
}

fn default_mandatory() -> bool {
    true
}

impl ModelProperty {
    /// Create a property referencing another model
    #[must_use]
    pub fn model_ref(name: impl Into<String>, id: ModelId) -> Self {
        Self::new(name, PropertyType::Model(id))
    }

    /// Create a property with the given type
    #[must_use]
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            description: None,
            mandatory: true,
            multiple: false,
            property_type,
            stereotypes: Vec::new(),
        }
    }
}

/// Information model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Infomodel {
    /// Model ID
    pub id: ModelId,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Category
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Function block properties, in declaration order
    #[serde(default)]
    pub functionblocks: Vec<ModelProperty>,
    /// Stereotypes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stereotypes: Vec<Stereotype>,
}

impl Infomodel {
    /// Create an information model without function blocks
    #[must_use]
    pub fn new(id: ModelId) -> Self {
        Self {
            id,
            display_name: None,
            description: None,
            category: None,
            functionblocks: Vec::new(),
            stereotypes: Vec::new(),
        }
    }

    /// Add a function block property
    #[must_use]
    pub fn with_functionblock(mut self, property: ModelProperty) -> Self {
        self.functionblocks.push(property);
        self
    }
}

/// Function block model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionblockModel {
    /// Model ID
    pub id: ModelId,
    /// Display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Configuration properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub configuration: Vec<ModelProperty>,
    /// Status properties
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<ModelProperty>,
    /// Event names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    /// Operation names
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<String>,
    /// Stereotypes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stereotypes: Vec<Stereotype>,
}

impl FunctionblockModel {
    /// Create an empty function block model
    #[must_use]
    pub fn new(id: ModelId) -> Self {
        Self {
            id,
            display_name: None,
            description: None,
            configuration: Vec::new(),
            status: Vec::new(),
            events: Vec::new(),
            operations: Vec::new(),
            stereotypes: Vec::new(),
        }
    }

    /// Add a stereotype
    #[must_use]
    pub fn with_stereotype(mut self, stereotype: Stereotype) -> Self {
        self.stereotypes.push(stereotype);
        self
    }

    /// First stereotype with the given name
    #[must_use]
    pub fn stereotype(&self, name: &str) -> Option<&Stereotype> {
        self.stereotypes.iter().find(|s| s.name == name)
    }
}
