//! Error handling for the rotapack CLI.
//!
//! Library errors convert into [`CliError`] through `#[from]`; `main` renders
//! the result with miette, attaching the library's hints.

use std::path::PathBuf;

use miette::Report;
use rotapack_config::{ConfigError, ResolveError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration loading or validation failed
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An import specifier did not resolve
    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    /// Refusing to overwrite an existing file
    #[error("File already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convert a CliError to a miette Report with an actionable hint.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(e) => {
            let detail = config_detail(&e);
            match e.hint() {
                Some(hint) => miette::miette!(help = hint.to_string(), "{}{}", e, detail),
                None => miette::miette!("{}{}", e, detail),
            }
        }
        CliError::Resolve(e) => {
            let tried = format_tried(e.tried());
            miette::miette!(
                help = "Add the missing extension to resolve.extensions or fix the path",
                "{}{}",
                e,
                tried
            )
        }
        CliError::AlreadyExists(path) => miette::miette!(
            help = "Pass --force to overwrite it",
            "File already exists: {}",
            path.display()
        ),
        other => miette::miette!("{}", other),
    }
}

fn config_detail(err: &ConfigError) -> String {
    match err {
        ConfigError::EntryNotFound { source, .. } => format_tried(source.tried()),
        _ => String::new(),
    }
}

fn format_tried(tried: &[PathBuf]) -> String {
    if tried.is_empty() {
        return String::new();
    }
    let mut out = String::from("\n\nTried:");
    for path in tried {
        out.push_str(&format!("\n  {}", path.display()));
    }
    out
}
