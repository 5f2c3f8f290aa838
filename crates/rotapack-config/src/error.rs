//! Error types for configuration loading, validation and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Filesystem validation errors
    #[error("entry not found: {}", path.display())]
    EntryNotFound {
        path: PathBuf,
        #[source]
        source: ResolveError,
    },

    // Config parsing/loading errors
    #[error("no rotapack config found in {}", root.display())]
    NotFound { root: PathBuf },

    #[error("config file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("invalid config value for `{field}`")]
    InvalidValue { field: String, hint: Option<String> },

    #[error("invalid profile override: {message}")]
    InvalidProfileOverride { message: String },

    #[error("profile `{0}` is not defined")]
    ProfileNotFound(String),

    // Schema validation errors (no filesystem checks)
    #[error("no entries specified")]
    NoEntries,

    #[error("schema validation failed: {message}")]
    SchemaValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Actionable follow-up for the user, when one is known.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidValue { hint, .. } | Self::SchemaValidation { hint, .. } => {
                hint.as_deref()
            }
            Self::NoEntries => Some("Add at least one path to the `entry` list"),
            Self::NotFound { .. } => {
                Some("Create rotapack.toml (try `rotapack init`) or pass --config <path>")
            }
            Self::EntryNotFound { .. } => {
                Some("Check the entry path and the `resolve.extensions` list")
            }
            Self::ProfileNotFound(_) => Some("Declare the profile under [profiles.<name>]"),
            _ => None,
        }
    }
}

/// Failure to turn an import specifier into an existing file.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot resolve `{specifier}` from {}", from.display())]
    Unresolved {
        specifier: String,
        from: PathBuf,
        /// Candidates in the order they were probed.
        tried: Vec<PathBuf>,
    },

    #[error("cannot resolve `{specifier}`: no resolution extensions configured")]
    NoExtensions { specifier: String },

    #[error("import specifier is empty")]
    EmptySpecifier,
}

impl ResolveError {
    pub fn tried(&self) -> &[PathBuf] {
        match self {
            Self::Unresolved { tried, .. } => tried,
            _ => &[],
        }
    }
}
