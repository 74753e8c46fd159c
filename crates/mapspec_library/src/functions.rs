//! Function set for a single namespace.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scripting functions sharing one namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptFunctions {
    /// Namespace the functions are called under
    namespace: String,
    /// Function name to source body
    functions: IndexMap<String, String>,
}

impl ScriptFunctions {
    /// Create an empty function set
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            functions: IndexMap::new(),
        }
    }

    /// Namespace of this set
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Add a function, replacing any previous body under the same name.
    ///
    /// Returns the replaced body.
    pub fn add_function(&mut self, name: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.functions.insert(name.into(), body.into())
    }

    /// Body of a function
    #[must_use]
    pub fn function(&self, name: &str) -> Option<&str> {
        self.functions.get(name).map(String::as_str)
    }

    /// Check if a function is declared
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Declared function names
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    /// Iterate over `(name, body)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.functions.iter().map(|(n, b)| (n.as_str(), b.as_str()))
    }

    /// Number of functions
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Check if the set is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
