//! Root of a rotapack configuration file and profile merging.
//!
//! For file discovery, see the `discovery` module.

use std::collections::HashMap;
use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::build::BuildConfig;
use crate::error::{ConfigError, Result as ConfigResult};
use crate::settings::GlobalSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectConfig {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub profiles: HashMap<String, ProfileConfig>,

    #[serde(default)]
    pub settings: GlobalSettings,
}

/// Partial overrides deep-merged over the base when a profile is selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ProfileConfig {
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub build: Value,

    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub settings: Value,
}

impl ProjectConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use rotapack_config::ProjectConfig;
    /// use serde_json::json;
    ///
    /// let value = json!({
    ///     "build": {
    ///         "entry": ["./src/constants.js"],
    ///         "devtool": "inline-source-map"
    ///     }
    /// });
    ///
    /// let config = ProjectConfig::from_value(value).unwrap();
    /// assert_eq!(config.build.entry_points(), ["./src/constants.js"]);
    /// ```
    pub fn from_value(value: Value) -> ConfigResult<Self> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value
    pub fn to_value(&self) -> ConfigResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.build.base_dir = base_dir.into();
        self
    }

    /// Apply the named profile's overrides on top of the base config.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ProfileNotFound` if `profile` is not declared.
    pub fn materialize_profile(mut self, profile: Option<&str>) -> ConfigResult<Self> {
        let Some(name) = profile else {
            return Ok(self);
        };
        let profile_cfg = self
            .profiles
            .get(name)
            .cloned()
            .ok_or_else(|| ConfigError::ProfileNotFound(name.to_string()))?;

        if !profile_cfg.build.is_null() {
            let base_dir = std::mem::take(&mut self.build.base_dir);
            let mut base = to_override_value(&self.build)?;
            merge_values(&mut base, &profile_cfg.build);
            self.build = from_override_value(base)?;
            self.build.base_dir = base_dir;
        }

        if !profile_cfg.settings.is_null() {
            let mut base = to_override_value(&self.settings)?;
            merge_values(&mut base, &profile_cfg.settings);
            self.settings = from_override_value(base)?;
        }

        tracing::debug!(profile = name, "materialized profile");
        Ok(self)
    }
}

fn to_override_value<T: Serialize>(value: &T) -> ConfigResult<Value> {
    serde_json::to_value(value).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

fn from_override_value<T: serde::de::DeserializeOwned>(value: Value) -> ConfigResult<T> {
    serde_json::from_value(value).map_err(|err| ConfigError::InvalidProfileOverride {
        message: err.to_string(),
    })
}

// Objects merge key by key, everything else replaces.
fn merge_values(target: &mut Value, update: &Value) {
    match (target, update) {
        (Value::Object(target_map), Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_values(target_map.entry(key.clone()).or_insert(Value::Null), value);
            }
        }
        (target_slot, _) => {
            *target_slot = update.clone();
        }
    }
}
