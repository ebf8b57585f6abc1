//! Plugin configuration.

use artfit_layout::{FitOptions, HiddenOnlyPolicy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while loading the plugin configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid plugin configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// User-adjustable behavior of the resize commands.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Leave hidden layers out of the bounding box
    pub ignore_invisible: bool,
    /// What to do with artboards whose layers are all hidden
    pub hidden_only: HiddenOnlyPolicy,
    /// Fit each artboard once even when several of its layers are selected
    pub dedupe_containers: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            ignore_invisible: true,
            hidden_only: HiddenOnlyPolicy::Skip,
            dedupe_containers: true,
        }
    }
}

impl PluginConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fitting options for these settings.
    pub fn fit_options(&self) -> FitOptions {
        FitOptions {
            ignore_invisible: self.ignore_invisible,
            hidden_only: self.hidden_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        let config = PluginConfig::from_json("{}").unwrap();
        assert_eq!(config, PluginConfig::default());
        assert!(config.fit_options().ignore_invisible);
    }

    #[test]
    fn test_partial_config() {
        let config =
            PluginConfig::from_json(r#"{ "hidden_only": "include_hidden", "dedupe_containers": false }"#)
                .unwrap();
        assert!(config.ignore_invisible);
        assert_eq!(config.hidden_only, HiddenOnlyPolicy::IncludeHidden);
        assert!(!config.dedupe_containers);
        assert_eq!(config.fit_options().hidden_only, HiddenOnlyPolicy::IncludeHidden);
    }

    #[test]
    fn test_invalid_config() {
        let err = PluginConfig::from_json(r#"{ "hidden_only": "sometimes" }"#).unwrap_err();
        assert!(err.to_string().starts_with("Invalid plugin configuration"));
    }
}
