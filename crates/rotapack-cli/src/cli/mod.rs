//! Command-line interface definition.
//!
//! - `rotapack check` - validate the configuration and its entries
//! - `rotapack print` - show the materialized descriptor
//! - `rotapack export` - emit the bundler's configuration object
//! - `rotapack resolve` - run ordered extension resolution for a specifier
//! - `rotapack match` - show which transform rule handles a path
//! - `rotapack schema` - JSON schema of the configuration file
//! - `rotapack init` - write the rota-shift preset

mod commands;

use clap::Parser;

pub use commands::{
    CheckArgs, Command, ConfigArgs, ExportArgs, ExportFormat, InitArgs, MatchArgs, PrintArgs,
    ResolveArgs,
};

/// rotapack - build configuration tooling for the rota-shift front end
#[derive(Parser, Debug)]
#[command(
    name = "rotapack",
    version,
    about = "Build configuration tooling for the rota-shift front end",
    long_about = "rotapack loads, validates and exports the build configuration descriptor\n\
                  that an external bundler consumes to produce the rota-shift bundle."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_check_with_config_and_profile() {
        let cli = Cli::try_parse_from([
            "rotapack",
            "check",
            "--config",
            "static/rotapack.toml",
            "--profile",
            "production",
            "--schema-only",
        ])
        .unwrap();

        match cli.command {
            Command::Check(args) => {
                assert_eq!(args.config.config, Some(PathBuf::from("static/rotapack.toml")));
                assert_eq!(args.config.profile.as_deref(), Some("production"));
                assert!(args.schema_only);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn export_defaults_to_module_format() {
        let cli = Cli::try_parse_from(["rotapack", "export"]).unwrap();
        match cli.command {
            Command::Export(args) => {
                assert_eq!(args.format, ExportFormat::Module);
                assert!(args.out.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn match_requires_paths() {
        assert!(Cli::try_parse_from(["rotapack", "match"]).is_err());
        assert!(Cli::try_parse_from(["rotapack", "match", "src/a.ts", "src/b.js"]).is_ok());
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["rotapack", "-v", "-q", "schema"]).is_err());
    }

    #[test]
    fn only_config_commands_expose_config_args() {
        let schema = Cli::try_parse_from(["rotapack", "schema"]).unwrap();
        assert!(schema.command.config_args().is_none());

        let print = Cli::try_parse_from(["rotapack", "print"]).unwrap();
        assert!(print.command.config_args().is_some());
    }
}
