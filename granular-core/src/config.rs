//! Host configuration.
//!
//! Configuration is plain data so it can be embedded in a larger application
//! config file. Missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Settings for one component [`Instance`](crate::host::Instance).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Label attached to the tracing span of every render pass.
    pub label: String,

    /// Emit a warning when a dependency list changes length between renders.
    ///
    /// A changing length is a caller bug: positions past the shorter list
    /// are never compared.
    pub warn_on_dependency_resize: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            label: String::from("component"),
            warn_on_dependency_resize: true,
        }
    }
}

impl HostConfig {
    /// Create a configuration with the given label and default settings.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = HostConfig::from_json(r#"{ "label": "search-box" }"#).unwrap();
        assert_eq!(config.label, "search-box");
        assert!(config.warn_on_dependency_resize);

        let config = HostConfig::from_json("{}").unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn config_survives_json() {
        let config = HostConfig {
            label: "table".into(),
            warn_on_dependency_resize: false,
        };
        let json = config.to_json().unwrap();
        assert_eq!(HostConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(HostConfig::from_json(r#"{ "label": 3 }"#).is_err());
    }
}
