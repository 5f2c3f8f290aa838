//! Pluggable config validation strategies
//!
//! Separates structural checks (no I/O) from checks against the file system.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::build::{BuildConfig, Pattern};
use crate::error::{ConfigError, Result};
use crate::resolve::ExtensionResolver;

/// Trait for pluggable config validation strategies
pub trait ConfigValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()>;
}

/// Structural validation (no filesystem checks)
///
/// # Example
///
/// ```
/// use rotapack_config::{BuildConfig, ConfigValidator, SchemaValidator};
///
/// SchemaValidator.validate(&BuildConfig::rotashift()).unwrap();
/// ```
pub struct SchemaValidator;

impl ConfigValidator for SchemaValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        validate_entries(config)?;
        validate_extensions(config)?;
        validate_output(config)?;

        for (index, rule) in config.transform_rules.iter().enumerate() {
            if rule.test.as_str().is_empty() {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rules[{index}].test is empty and would match every file"),
                    hint: Some("Use a suffix pattern such as '\\.tsx?$'".to_string()),
                });
            }
            if rule.exclude.as_ref().is_some_and(|p| p.as_str().is_empty()) {
                return Err(ConfigError::SchemaValidation {
                    message: format!("rules[{index}].exclude is empty and would exclude every file"),
                    hint: Some("Remove the exclude key or give it a pattern".to_string()),
                });
            }

            validate_js_pattern(&rule.test, index, "test")?;
            if let Some(exclude) = &rule.exclude {
                validate_js_pattern(exclude, index, "exclude")?;
            }
        }

        Ok(())
    }
}

// Rule patterns are exported verbatim as JavaScript regex literals.
fn validate_js_pattern(pattern: &Pattern, index: usize, key: &str) -> Result<()> {
    match pattern.js_incompatibility() {
        Some(what) => Err(ConfigError::SchemaValidation {
            message: format!(
                "rules[{index}].{key} `{pattern}` uses {what}, which the bundler's \
                 JavaScript regex engine does not support"
            ),
            hint: Some(
                "Use syntax shared by Rust and JavaScript, e.g. '$' instead of '\\z' \
                 or '[Tt][Ss]$' instead of '(?i)ts$'"
                    .to_string(),
            ),
        }),
        None => Ok(()),
    }
}

fn validate_entries(config: &BuildConfig) -> Result<()> {
    if config.entry_points.is_empty() {
        return Err(ConfigError::NoEntries);
    }

    let mut seen = HashSet::new();
    for entry in &config.entry_points {
        if entry.trim().is_empty() {
            return Err(ConfigError::SchemaValidation {
                message: "entry paths cannot be empty".to_string(),
                hint: Some("Remove empty strings from the 'entry' array".to_string()),
            });
        }

        if has_dotted_file_name(entry) && !config.has_source_suffix(entry) {
            warn!(
                entry = %entry,
                "entry has no recognized source suffix; resolution extensions will be appended"
            );
        }

        if !seen.insert(entry.as_str()) {
            warn!(entry = %entry, "entry listed more than once; later occurrences add nothing");
        }
    }

    Ok(())
}

fn validate_extensions(config: &BuildConfig) -> Result<()> {
    let extensions = &config.resolve.extensions;
    if extensions.is_empty() {
        return Err(ConfigError::SchemaValidation {
            message: "resolve.extensions must list at least one extension".to_string(),
            hint: Some("The usual value is [\".js\"]".to_string()),
        });
    }

    let mut seen = HashSet::new();
    for ext in extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::SchemaValidation {
                message: format!("invalid resolution extension `{ext}`"),
                hint: Some("Extensions start with a dot, e.g. \".js\"".to_string()),
            });
        }
        if !seen.insert(ext.as_str()) {
            return Err(ConfigError::SchemaValidation {
                message: format!("resolution extension `{ext}` is listed twice"),
                hint: Some("Each extension is tried once; remove the duplicate".to_string()),
            });
        }
    }

    Ok(())
}

fn validate_output(config: &BuildConfig) -> Result<()> {
    let filename = config.output.filename.trim();
    if filename.is_empty() {
        return Err(ConfigError::SchemaValidation {
            message: "output.filename cannot be empty".to_string(),
            hint: Some("Set output.filename, e.g. \"bundle.js\"".to_string()),
        });
    }
    if Path::new(filename).is_absolute() {
        return Err(ConfigError::SchemaValidation {
            message: format!("output.filename `{filename}` must be relative"),
            hint: Some("Put the directory in output.path instead".to_string()),
        });
    }
    if config.output.directory.as_os_str().is_empty() {
        return Err(ConfigError::SchemaValidation {
            message: "output.path cannot be empty".to_string(),
            hint: Some("Use \".\" for the config directory".to_string()),
        });
    }
    Ok(())
}

fn has_dotted_file_name(entry: &str) -> bool {
    entry
        .rsplit(['/', '\\'])
        .next()
        .is_some_and(|name| name.trim_start_matches('.').contains('.'))
}

/// Filesystem validator
///
/// Runs schema validation, then checks that every entry resolves to a file
/// under `root` through the configured extensions.
///
/// # Example
///
/// ```no_run
/// use rotapack_config::{BuildConfig, ConfigValidator, FsValidator};
///
/// let config = BuildConfig::rotashift();
/// FsValidator::new("cmd/app/static").validate(&config).unwrap();
/// ```
pub struct FsValidator {
    root: PathBuf,
}

impl FsValidator {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl ConfigValidator for FsValidator {
    fn validate(&self, config: &BuildConfig) -> Result<()> {
        SchemaValidator.validate(config)?;

        let resolver = ExtensionResolver::new(&config.resolve.extensions);
        for entry in &config.entry_points {
            resolver
                .resolve(&self.root, entry)
                .map_err(|source| ConfigError::EntryNotFound {
                    path: self.root.join(entry),
                    source,
                })?;
        }

        Ok(())
    }
}

/// Convenience function for schema-only validation
pub fn validate_schema(config: &BuildConfig) -> Result<()> {
    SchemaValidator.validate(config)
}

/// Convenience function for filesystem validation against `config.base_dir`
pub fn validate_fs(config: &BuildConfig) -> Result<()> {
    FsValidator::new(&config.base_dir).validate(config)
}
