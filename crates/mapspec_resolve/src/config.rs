//! Reader configuration.

use mapspec_core::CoreResult;
use serde::{Deserialize, Serialize};

/// What to resolve and for which platform
///
/// The model ID is kept in its textual pretty format and parsed when a read
/// starts, so a malformed ID surfaces as a read failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderConfig {
    /// Information model ID in `namespace:name:version` form
    pub model_id: String,
    /// Target platform key; `None` requests platform-agnostic content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_key: Option<String>,
}

impl ReaderConfig {
    /// Create a configuration without a platform key
    #[must_use]
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            platform_key: None,
        }
    }

    /// Set the target platform key
    #[must_use]
    pub fn with_platform_key(mut self, key: impl Into<String>) -> Self {
        self.platform_key = Some(key.into());
        self
    }

    /// Effective platform key. An empty key counts as unset.
    #[must_use]
    pub fn platform_key(&self) -> Option<&str> {
        self.platform_key.as_deref().filter(|key| !key.is_empty())
    }

    /// Parse a configuration from JSON
    ///
    /// # Errors
    ///
    /// Returns error if the JSON is malformed
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = ReaderConfig::new("com.acme:Tracker:1.0.0").with_platform_key("lwm2m");
        assert_eq!(config.model_id, "com.acme:Tracker:1.0.0");
        assert_eq!(config.platform_key(), Some("lwm2m"));
    }

    #[test]
    fn test_empty_platform_key_is_unset() {
        let config = ReaderConfig::new("com.acme:Tracker:1.0.0").with_platform_key("");
        assert_eq!(config.platform_key(), None);
    }

    #[test]
    fn test_from_json() {
        let config =
            ReaderConfig::from_json(r#"{"modelId": "com.acme:Tracker:1.0.0", "platformKey": "aws"}"#)
                .unwrap();
        assert_eq!(config.platform_key(), Some("aws"));

        let config = ReaderConfig::from_json(r#"{"modelId": "com.acme:Tracker:1.0.0"}"#).unwrap();
        assert_eq!(config.platform_key(), None);

        assert!(ReaderConfig::from_json(r#"{"platformKey": "aws"}"#).is_err());
    }
}
