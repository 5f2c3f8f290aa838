//! The build configuration descriptor handed to the external bundler.

mod helpers;
mod preset;
mod rule;
mod types;

use std::path::{Path, PathBuf};

use path_clean::PathClean;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use preset::ROTASHIFT_ENTRIES;
pub use rule::{Pattern, TransformRule};
pub use types::DebugMode;

use crate::error::{ConfigError, ResolveError};
use crate::resolve::{ExtensionResolver, FsProbe, SOURCE_EXTENSIONS};
use helpers::{
    default_extensions, default_output_dir, default_output_filename, lenient_path, lenient_string,
};

/// Everything the bundler needs to locate inputs, pick special handling,
/// resolve extension-less imports and place its output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BuildConfig {
    /// Root modules, in bundle inclusion order
    #[serde(default, rename = "entry")]
    pub entry_points: Vec<String>,

    /// Where the single concatenated bundle is written
    #[serde(default)]
    pub output: OutputTarget,

    /// Pattern-based selection of files needing non-default handling
    #[serde(default, rename = "rules", skip_serializing_if = "Vec::is_empty")]
    pub transform_rules: Vec<TransformRule>,

    /// Import resolution options
    #[serde(default)]
    pub resolve: ResolveOptions,

    /// Debug metadata mode
    #[serde(default, rename = "devtool")]
    pub debug_mode: DebugMode,

    /// Absolute directory of the configuration file. Relative paths in the
    /// descriptor resolve against it, never against the working directory.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            entry_points: Vec::new(),
            output: OutputTarget::default(),
            transform_rules: Vec::new(),
            resolve: ResolveOptions::default(),
            debug_mode: DebugMode::None,
            base_dir: PathBuf::new(),
        }
    }
}

/// Output file name and directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutputTarget {
    #[serde(default = "default_output_filename", deserialize_with = "lenient_string")]
    pub filename: String,

    /// Relative to the configuration file's directory unless absolute
    #[serde(
        default = "default_output_dir",
        rename = "path",
        deserialize_with = "lenient_path"
    )]
    #[schemars(with = "String")]
    pub directory: PathBuf,
}

impl Default for OutputTarget {
    fn default() -> Self {
        Self {
            filename: default_output_filename(),
            directory: default_output_dir(),
        }
    }
}

/// Import resolution options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolveOptions {
    /// Extensions tried, in order, for imports written without one
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

impl BuildConfig {
    /// Create from serde_json::Value (for programmatic config)
    ///
    /// # Example
    ///
    /// ```
    /// use rotapack_config::BuildConfig;
    /// use serde_json::json;
    ///
    /// let config = BuildConfig::from_value(json!({
    ///     "entry": ["./src/constants.js"],
    ///     "devtool": "source-map"
    /// }))
    /// .unwrap();
    /// assert_eq!(config.entry_points(), ["./src/constants.js"]);
    /// assert_eq!(config.output.filename, "bundle.js");
    /// ```
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// Convert to serde_json::Value. `base_dir` is not part of the value.
    pub fn to_value(&self) -> Result<Value, ConfigError> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "build".to_string(),
            hint: Some(e.to_string()),
        })
    }

    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn entry_points(&self) -> &[String] {
        &self.entry_points
    }

    pub fn resolution_extensions(&self) -> &[String] {
        &self.resolve.extensions
    }

    /// First rule that selects `path`, with its position in `rules`.
    pub fn matching_rule(&self, path: impl AsRef<Path>) -> Option<(usize, &TransformRule)> {
        let path = path.as_ref();
        self.transform_rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.matches(path))
    }

    /// Output directory anchored at `base_dir`, lexically cleaned.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.output.directory).clean()
    }

    pub fn output_file(&self) -> PathBuf {
        self.output_dir().join(&self.output.filename)
    }

    /// Extension resolver over the real file system.
    pub fn resolver(&self) -> ExtensionResolver<'_, FsProbe> {
        ExtensionResolver::new(&self.resolve.extensions)
    }

    /// Resolve one entry against `base_dir`.
    pub fn resolve_entry(&self, entry: &str) -> Result<PathBuf, ResolveError> {
        self.resolver().resolve(&self.base_dir, entry)
    }

    /// Whether `path` ends in a known source suffix or a configured extension.
    pub fn has_source_suffix(&self, path: &str) -> bool {
        SOURCE_EXTENSIONS
            .iter()
            .copied()
            .chain(self.resolve.extensions.iter().map(String::as_str))
            .any(|ext| !ext.is_empty() && path.ends_with(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_output_names_are_accepted() {
        let config = BuildConfig::from_value(json!({
            "entry": ["./src/a.js"],
            "output": { "filename": 7, "path": 2024 }
        }))
        .unwrap();
        assert_eq!(config.output.filename, "7");
        assert_eq!(config.output.directory, PathBuf::from("2024"));

        assert!(BuildConfig::from_value(json!({ "output": { "path": ["dist"] } })).is_err());
    }

    #[test]
    fn file_keys_map_to_descriptor_fields() {
        let config = BuildConfig::from_value(json!({
            "entry": ["./src/a.js", "./src/b.js"],
            "devtool": "inline-source-map",
            "rules": [{ "test": "\\.tsx?$", "exclude": "node_modules" }],
            "resolve": { "extensions": [".ts", ".js"] },
            "output": { "filename": "app.js", "path": "public/js" }
        }))
        .unwrap();

        assert_eq!(config.entry_points(), ["./src/a.js", "./src/b.js"]);
        assert_eq!(config.debug_mode, DebugMode::InlineSourceMap);
        assert_eq!(config.transform_rules.len(), 1);
        assert_eq!(config.resolution_extensions(), [".ts", ".js"]);
        assert_eq!(config.output.filename, "app.js");
        assert_eq!(config.output.directory, PathBuf::from("public/js"));
    }

    #[test]
    fn base_dir_is_not_serialized() {
        let config = BuildConfig::default().with_base_dir("/srv/static");
        let value = config.to_value().unwrap();
        assert!(value.get("base_dir").is_none());
        assert!(value.get("rules").is_none());
    }

    #[test]
    fn output_dir_is_anchored_at_base_dir() {
        let config = BuildConfig::default().with_base_dir("/srv/app/static");
        assert_eq!(config.output_dir(), PathBuf::from("/srv/app/static/dist"));
        assert_eq!(
            config.output_file(),
            PathBuf::from("/srv/app/static/dist/bundle.js")
        );
    }

    #[test]
    fn output_dir_is_cleaned() {
        let mut config = BuildConfig::default().with_base_dir("/srv/app/static");
        config.output.directory = PathBuf::from("./../public/./js");
        assert_eq!(config.output_dir(), PathBuf::from("/srv/app/public/js"));
    }

    #[test]
    fn absolute_output_dir_is_kept() {
        let mut config = BuildConfig::default().with_base_dir("/srv/app/static");
        config.output.directory = PathBuf::from("/var/www/assets");
        assert_eq!(config.output_dir(), PathBuf::from("/var/www/assets"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let config = BuildConfig::from_value(json!({
            "entry": ["./src/a.js"],
            "rules": [
                { "test": "\\.tsx$", "loader": "tsx-loader" },
                { "test": "\\.tsx?$", "exclude": "node_modules", "loader": "ts-loader" }
            ]
        }))
        .unwrap();

        let (index, rule) = config.matching_rule("src/view.tsx").unwrap();
        assert_eq!(index, 0);
        assert_eq!(rule.loader.as_deref(), Some("tsx-loader"));

        let (index, _) = config.matching_rule("src/model.ts").unwrap();
        assert_eq!(index, 1);

        assert!(config.matching_rule("node_modules/x/model.ts").is_none());
        assert!(config.matching_rule("src/plain.js").is_none());
    }

    #[test]
    fn source_suffix_includes_configured_extensions() {
        let mut config = BuildConfig::default();
        assert!(config.has_source_suffix("./src/a.js"));
        assert!(config.has_source_suffix("./src/a.tsx"));
        assert!(!config.has_source_suffix("./src/a.coffee"));

        config.resolve.extensions.push(".coffee".to_string());
        assert!(config.has_source_suffix("./src/a.coffee"));
    }
}
