//! Namespace-keyed function library.

use crate::functions::ScriptFunctions;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Error from library lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryError {
    /// Qualified name is not of the form `namespace:function`
    InvalidQualifiedName {
        /// The rejected qualified name
        name: String,
    },
    /// Namespace not registered
    NamespaceNotFound {
        /// The namespace looked up
        namespace: String,
    },
    /// Function not declared in the namespace
    FunctionNotFound {
        /// Namespace that was searched
        namespace: String,
        /// Function name that was not found
        name: String,
    },
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidQualifiedName { name } => {
                write!(f, "Invalid qualified function name: {}", name)
            }
            Self::NamespaceNotFound { namespace } => {
                write!(f, "Function namespace not found: {}", namespace)
            }
            Self::FunctionNotFound { namespace, name } => {
                write!(f, "Function not found: {}:{}", namespace, name)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// Library of scripting functions keyed by namespace
///
/// Each namespace maps to exactly one [`ScriptFunctions`]; declarations for a
/// namespace that is already present are merged into the existing set.
/// There is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionLibrary {
    /// Function sets by namespace
    namespaces: IndexMap<String, ScriptFunctions>,
}

impl FunctionLibrary {
    /// Create a new empty library
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespaces: IndexMap::new(),
        }
    }

    /// Get the function set for a namespace, creating it if absent.
    ///
    /// The empty string is a valid namespace.
    pub fn get_or_create(&mut self, namespace: &str) -> &mut ScriptFunctions {
        if !self.namespaces.contains_key(namespace) {
            tracing::debug!(namespace, "creating function namespace");
        }
        self.namespaces
            .entry(namespace.to_string())
            .or_insert_with(|| ScriptFunctions::new(namespace))
    }

    /// Add a function declaration, overwriting a previous one with the same name
    pub fn add(&mut self, namespace: &str, name: impl Into<String>, body: impl Into<String>) {
        let name = name.into();
        if self
            .get_or_create(namespace)
            .add_function(name.clone(), body)
            .is_some()
        {
            tracing::debug!(namespace, function = %name, "function declaration replaced");
        }
    }

    /// Function set for a namespace
    #[must_use]
    pub fn get(&self, namespace: &str) -> Option<&ScriptFunctions> {
        self.namespaces.get(namespace)
    }

    /// Body of a function by namespace and name
    #[must_use]
    pub fn function(&self, namespace: &str, name: &str) -> Option<&str> {
        self.get(namespace).and_then(|set| set.function(name))
    }

    /// Resolve a qualified `namespace:function` name to its body.
    ///
    /// The name is split at the first `:`.
    ///
    /// # Errors
    ///
    /// Returns error if the name is malformed or the function is unknown
    pub fn resolve(&self, qualified: &str) -> Result<&str, LibraryError> {
        let (namespace, name) =
            qualified
                .split_once(':')
                .ok_or_else(|| LibraryError::InvalidQualifiedName {
                    name: qualified.to_string(),
                })?;
        if name.is_empty() {
            return Err(LibraryError::InvalidQualifiedName {
                name: qualified.to_string(),
            });
        }

        let set = self
            .get(namespace)
            .ok_or_else(|| LibraryError::NamespaceNotFound {
                namespace: namespace.to_string(),
            })?;
        set.function(name)
            .ok_or_else(|| LibraryError::FunctionNotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }

    /// Check if a namespace is registered
    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.namespaces.contains_key(namespace)
    }

    /// Registered namespaces
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Iterate over all function sets
    pub fn iter(&self) -> impl Iterator<Item = &ScriptFunctions> {
        self.namespaces.values()
    }

    /// Number of namespaces
    #[must_use]
    pub fn len(&self) -> usize {
        self.namespaces.len()
    }

    /// Total number of functions across namespaces
    #[must_use]
    pub fn function_count(&self) -> usize {
        self.namespaces.values().map(ScriptFunctions::len).sum()
    }

    /// Check if library is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashMap;

    #[test]
    fn test_library_new() {
        let library = FunctionLibrary::new();
        assert!(library.is_empty());
        assert_eq!(library.len(), 0);
        assert_eq!(library.function_count(), 0);
    }

    #[test]
    fn test_get_or_create_returns_same_set() {
        let mut library = FunctionLibrary::new();
        library.get_or_create("geo").add_function("toRad", "r");
        library.get_or_create("geo").add_function("toDeg", "d");

        assert_eq!(library.len(), 1);
        let geo = library.get("geo").unwrap();
        assert_eq!(geo.len(), 2);
        assert_eq!(geo.namespace(), "geo");
    }

    #[test]
    fn test_empty_namespace_is_a_key() {
        let mut library = FunctionLibrary::new();
        library.add("", "f", "body");

        assert!(library.contains(""));
        assert_eq!(library.function("", "f"), Some("body"));
        assert_eq!(library.resolve(":f"), Ok("body"));
    }

    #[test]
    fn test_add_overwrites() {
        let mut library = FunctionLibrary::new();
        library.add("geo", "f", "first");
        library.add("geo", "f", "second");

        assert_eq!(library.function_count(), 1);
        assert_eq!(library.function("geo", "f"), Some("second"));
    }

    #[test]
    fn test_resolve_qualified() {
        let mut library = FunctionLibrary::new();
        library.add("geo", "toRad", "r");

        assert_eq!(library.resolve("geo:toRad"), Ok("r"));
        assert_eq!(
            library.resolve("toRad"),
            Err(LibraryError::InvalidQualifiedName {
                name: "toRad".to_string()
            })
        );
        assert!(matches!(
            library.resolve("geo:"),
            Err(LibraryError::InvalidQualifiedName { .. })
        ));
        assert_eq!(
            library.resolve("str:upper"),
            Err(LibraryError::NamespaceNotFound {
                namespace: "str".to_string()
            })
        );
        assert_eq!(
            library.resolve("geo:toDeg"),
            Err(LibraryError::FunctionNotFound {
                namespace: "geo".to_string(),
                name: "toDeg".to_string()
            })
        );
    }

    #[test]
    fn test_error_display_names_fields() {
        let err = LibraryError::FunctionNotFound {
            namespace: "geo".to_string(),
            name: "toDeg".to_string(),
        };
        assert_eq!(err.to_string(), "Function not found: geo:toDeg");

        let err = LibraryError::NamespaceNotFound {
            namespace: "str".to_string(),
        };
        assert_eq!(err.to_string(), "Function namespace not found: str");

        let err = LibraryError::InvalidQualifiedName {
            name: "toRad".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid qualified function name: toRad");
    }

    #[test]
    fn test_namespaces_listing() {
        let mut library = FunctionLibrary::new();
        library.add("geo", "a", "1");
        library.add("str", "b", "2");
        library.add("geo", "c", "3");

        let mut names: Vec<&str> = library.namespaces().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["geo", "str"]);
        assert_eq!(library.iter().count(), 2);
        assert_eq!(library.function_count(), 3);
    }

    #[test]
    fn test_library_serializes() {
        let mut library = FunctionLibrary::new();
        library.add("geo", "toRad", "r");
        let json = serde_json::to_value(&library).unwrap();
        assert_eq!(json["namespaces"]["geo"]["functions"]["toRad"], "r");
    }

    proptest! {
        #[test]
        fn prop_one_set_per_namespace_last_write_wins(
            decls in proptest::collection::vec(
                (
                    prop_oneof![Just("geo"), Just("str"), Just("math"), Just("")],
                    "[a-z]{1,3}",
                    "[a-z0-9]{0,6}",
                ),
                0..40,
            )
        ) {
            let mut library = FunctionLibrary::new();
            let mut expected: HashMap<String, HashMap<String, String>> = HashMap::new();
            for (ns, name, body) in &decls {
                library.add(ns, name.clone(), body.clone());
                expected
                    .entry(ns.to_string())
                    .or_default()
                    .insert(name.clone(), body.clone());
            }

            prop_assert_eq!(library.len(), expected.len());
            for (ns, functions) in &expected {
                let set = library.get(ns.as_str()).unwrap();
                prop_assert_eq!(set.len(), functions.len());
                for (name, body) in functions {
                    prop_assert_eq!(set.function(name), Some(body.as_str()));
                }
            }
        }
    }
}
