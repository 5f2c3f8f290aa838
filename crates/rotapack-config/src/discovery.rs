//! File-based config discovery and layered loading.
//!
//! Priority: environment (`ROTAPACK_` prefix) > config file > defaults.

use std::fs;
use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use serde_json::Value;
use tracing::debug;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, Result};

/// Config file names searched in each root, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["rotapack.toml", "rotapack.json"];

/// Field holding the config inside package.json
pub const PACKAGE_JSON_FIELD: &str = "rotapack";

/// Prefix of environment overrides. `__` separates nested keys, so
/// `ROTAPACK_BUILD__DEVTOOL=source-map` sets `build.devtool`.
pub const ENV_PREFIX: &str = "ROTAPACK_";

/// File-based configuration discovery
///
/// # Example
///
/// ```no_run
/// use rotapack_config::ConfigDiscovery;
///
/// let discovery = ConfigDiscovery::new("cmd/app/static");
/// let config = discovery.load().unwrap();
/// println!("{}", config.build.output_file().display());
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory
    ///
    /// Searches in this order:
    /// 1. rotapack.toml
    /// 2. rotapack.json
    /// 3. package.json (rotapack field)
    pub fn find(&self) -> Option<PathBuf> {
        for name in CONFIG_FILE_NAMES {
            let path = self.root.join(name);
            if path.is_file() {
                return Some(path);
            }
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.is_file() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get(PACKAGE_JSON_FIELD).is_some_and(|v| !v.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file is found.
    pub fn load(&self) -> Result<ProjectConfig> {
        let path = self.find().ok_or_else(|| ConfigError::NotFound {
            root: self.root.clone(),
        })?;
        Self::load_file(&path)
    }

    /// Load config and apply a profile
    pub fn load_with_profile(&self, profile: &str) -> Result<ProjectConfig> {
        self.load()?.materialize_profile(Some(profile))
    }

    /// Load config from a specific file path.
    ///
    /// The descriptor's `base_dir` becomes the canonical directory holding
    /// `path`, so later path resolution does not depend on the caller's
    /// working directory.
    pub fn load_file(path: &Path) -> Result<ProjectConfig> {
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let figment = Figment::from(Serialized::defaults(ProjectConfig::default()));
        let figment = match file_format(path)? {
            FileFormat::Toml => figment.merge(Toml::file(path)),
            FileFormat::Json => figment.merge(Json::file(path)),
            FileFormat::PackageJson => figment.merge(Serialized::defaults(package_field(path)?)),
        };

        let config: ProjectConfig = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConfigError::InvalidValue {
                field: "configuration".to_string(),
                hint: Some(e.to_string()),
            })?;

        let base_dir = config_dir(path)?;
        debug!(path = %path.display(), base_dir = %base_dir.display(), "loaded config");
        Ok(config.with_base_dir(base_dir))
    }
}

enum FileFormat {
    Toml,
    Json,
    PackageJson,
}

fn file_format(path: &Path) -> Result<FileFormat> {
    if path.file_name().is_some_and(|name| name == "package.json") {
        return Ok(FileFormat::PackageJson);
    }
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => Ok(FileFormat::Toml),
        Some("json") => Ok(FileFormat::Json),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn package_field(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;

    let mut parsed: Value =
        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidValue {
            field: "package.json".to_string(),
            hint: Some(format!("Invalid JSON: {}", e)),
        })?;

    match parsed.get_mut(PACKAGE_JSON_FIELD).map(Value::take) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(ConfigError::InvalidValue {
            field: PACKAGE_JSON_FIELD.to_string(),
            hint: Some("Add a 'rotapack' object to your package.json".to_string()),
        }),
    }
}

fn config_dir(path: &Path) -> Result<PathBuf> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    Ok(fs::canonicalize(parent)?)
}

/// Discover and load config from the current directory
pub fn discover() -> Result<ProjectConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load()
}

/// Discover and load config from the current directory, applying a profile
pub fn discover_with_profile(profile: &str) -> Result<ProjectConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(&root).load_with_profile(profile)
}
