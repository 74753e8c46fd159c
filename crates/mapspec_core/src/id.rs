//! Model identifiers.
//!
//! A model is addressed by namespace, name and version. The canonical
//! "pretty" format is `namespace:name:version`, e.g. `com.acme:Thermometer:1.0.0`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SEPARATOR: char = ':';

/// Model identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId {
    namespace: String,
    name: String,
    version: String,
}

impl ModelId {
    /// Create a model ID from its parts
    ///
    /// # Errors
    ///
    /// Returns error if any part is empty or contains whitespace or `:`
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> CoreResult<Self> {
        let id = Self {
            namespace: namespace.into(),
            name: name.into(),
            version: version.into(),
        };
        for (field, value) in [
            ("namespace", &id.namespace),
            ("name", &id.name),
            ("version", &id.version),
        ] {
            validate_segment(value).map_err(|reason| CoreError::InvalidModelId {
                input: id.pretty_format(),
                reason: format!("{} {}", field, reason),
            })?;
        }
        Ok(id)
    }

    /// Parse from pretty format `namespace:name:version`
    ///
    /// # Errors
    ///
    /// Returns error if format is invalid
    pub fn from_pretty_format(s: &str) -> CoreResult<Self> {
        let parts: Vec<&str> = s.trim().split(SEPARATOR).collect();
        if parts.len() != 3 {
            return Err(CoreError::InvalidModelId {
                input: s.to_string(),
                reason: "expected namespace:name:version".to_string(),
            });
        }
        Self::new(parts[0], parts[1], parts[2]).map_err(|err| match err {
            CoreError::InvalidModelId { reason, .. } => CoreError::InvalidModelId {
                input: s.to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Namespace part
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name part
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version part
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Canonical pretty format
    #[must_use]
    pub fn pretty_format(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}",
            self.namespace,
            self.name,
            self.version,
            sep = SEPARATOR
        )
    }
}

fn validate_segment(segment: &str) -> Result<(), &'static str> {
    if segment.is_empty() {
        return Err("must not be empty");
    }
    if segment.chars().any(|c| c.is_whitespace() || c == SEPARATOR) {
        return Err("must not contain whitespace or ':'");
    }
    Ok(())
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.namespace, self.name, self.version)
    }
}

impl FromStr for ModelId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_pretty_format(s)
    }
}

impl TryFrom<String> for ModelId {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_pretty_format(&value)
    }
}

impl From<ModelId> for String {
    fn from(id: ModelId) -> Self {
        id.pretty_format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_pretty_format() {
        let id = ModelId::from_pretty_format("com.acme:Thermometer:1.0.0").unwrap();
        assert_eq!(id.namespace(), "com.acme");
        assert_eq!(id.name(), "Thermometer");
        assert_eq!(id.version(), "1.0.0");
        assert_eq!(id.pretty_format(), "com.acme:Thermometer:1.0.0");
        assert_eq!(format!("{}", id), "com.acme:Thermometer:1.0.0");
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let id: ModelId = "  com.acme:Lamp:2.1.0\n".parse().unwrap();
        assert_eq!(id.name(), "Lamp");
    }

    #[test]
    fn test_parse_rejects_wrong_segment_count() {
        let result = ModelId::from_pretty_format("com.acme:Thermometer");
        assert!(matches!(result, Err(CoreError::InvalidModelId { .. })));

        let result = ModelId::from_pretty_format("a:b:c:d");
        assert!(matches!(result, Err(CoreError::InvalidModelId { .. })));
    }

    #[test]
    fn test_parse_rejects_empty_segment() {
        let err = ModelId::from_pretty_format("com.acme::1.0.0").unwrap_err();
        match err {
            CoreError::InvalidModelId { input, reason } => {
                assert_eq!(input, "com.acme::1.0.0");
                assert!(reason.starts_with("name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_whitespace() {
        assert!(ModelId::new("com acme", "Lamp", "1.0.0").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let id = ModelId::new("com.acme", "Lamp", "1.0.0").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"com.acme:Lamp:1.0.0\"");

        let back: ModelId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);

        let bad = serde_json::from_str::<ModelId>("\"nope\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn prop_pretty_format_parses_back(
            namespace in "[a-z][a-z0-9.]{0,12}",
            name in "[A-Z][A-Za-z0-9_]{0,12}",
            version in "[0-9]{1,2}\\.[0-9]{1,2}\\.[0-9]{1,2}",
        ) {
            let id = ModelId::new(namespace, name, version).unwrap();
            let parsed = ModelId::from_pretty_format(&id.pretty_format()).unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}
