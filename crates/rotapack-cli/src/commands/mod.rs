//! Command implementations for the rotapack CLI.
//!
//! - [`check`] - configuration and entry validation
//! - [`print`] - materialized descriptor as JSON
//! - [`export`] - bundler configuration object
//! - [`resolve`] - ordered extension resolution for one specifier
//! - [`matching`] - transform rule lookup per path
//! - [`schema`] - JSON schema of the configuration file
//! - [`init`] - write the rota-shift preset
//!
//! Each command lives in its own module and provides an `execute` function
//! that takes the parsed arguments and returns a Result.

pub mod check;
pub mod export;
pub mod init;
pub mod matching;
pub mod print;
pub mod resolve;
pub mod schema;
pub mod utils;

use rotapack_config::ProjectConfig;

use crate::cli::{Command, ConfigArgs};
use crate::error::Result;

/// Dispatch a parsed command to its implementation.
///
/// `project` is the configuration already loaded for the command's
/// `--config`/`--profile` flags. When it is `None`, commands that need a
/// configuration load it themselves.
pub fn execute(command: Command, project: Option<ProjectConfig>) -> Result<()> {
    match command {
        Command::Check(args) => {
            let project = loaded(project, &args.config)?;
            check::execute(args, project)
        }
        Command::Print(args) => print::execute(loaded(project, &args.config)?),
        Command::Export(args) => {
            let project = loaded(project, &args.config)?;
            export::execute(args, project)
        }
        Command::Resolve(args) => {
            let project = loaded(project, &args.config)?;
            resolve::execute(args, project)
        }
        Command::Match(args) => {
            let project = loaded(project, &args.config)?;
            matching::execute(args, project)
        }
        Command::Schema => schema::execute(),
        Command::Init(args) => init::execute(args),
    }
}

fn loaded(project: Option<ProjectConfig>, args: &ConfigArgs) -> Result<ProjectConfig> {
    match project {
        Some(project) => Ok(project),
        None => utils::load_project(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::PrintArgs;
    use crate::error::CliError;
    use rotapack_config::{BuildConfig, ConfigError};
    use std::path::PathBuf;

    fn print_missing_file() -> Command {
        Command::Print(PrintArgs {
            config: ConfigArgs {
                config: Some(PathBuf::from("/nonexistent/rotapack.toml")),
                profile: None,
            },
        })
    }

    #[test]
    fn preloaded_project_is_not_loaded_again() {
        let project = ProjectConfig {
            build: BuildConfig::rotashift(),
            ..Default::default()
        };
        assert!(execute(print_missing_file(), Some(project)).is_ok());
    }

    #[test]
    fn missing_project_is_loaded_from_flags() {
        let err = execute(print_missing_file(), None).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::FileNotFound(_))));
    }
}
