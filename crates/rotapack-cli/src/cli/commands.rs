use clap::{Args, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Available rotapack subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the configuration
    ///
    /// Checks the descriptor's structure and, unless --schema-only is given,
    /// that every entry resolves to a file next to the configuration.
    Check(CheckArgs),

    /// Print the materialized descriptor as JSON
    Print(PrintArgs),

    /// Export the bundler configuration object
    ///
    /// Writes a CommonJS module by default, or plain JSON with --format json.
    Export(ExportArgs),

    /// Resolve an import specifier with the configured extensions
    Resolve(ResolveArgs),

    /// Show which transform rule handles each path
    Match(MatchArgs),

    /// Print the JSON schema of the configuration file
    Schema,

    /// Write the rota-shift preset as rotapack.toml
    Init(InitArgs),
}

impl Command {
    /// Config location flags, for commands that read a configuration.
    pub fn config_args(&self) -> Option<&ConfigArgs> {
        match self {
            Command::Check(args) => Some(&args.config),
            Command::Print(args) => Some(&args.config),
            Command::Export(args) => Some(&args.config),
            Command::Resolve(args) => Some(&args.config),
            Command::Match(args) => Some(&args.config),
            Command::Schema | Command::Init(_) => None,
        }
    }
}

/// Where to find the configuration and which profile to apply
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// Path to the configuration file
    ///
    /// Defaults to rotapack.toml, rotapack.json or the "rotapack" field of
    /// package.json in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Profile to apply on top of the base configuration
    #[arg(short, long, value_name = "NAME")]
    pub profile: Option<String>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Skip file system checks
    #[arg(long)]
    pub schema_only: bool,
}

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

/// Output format of the export command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// `module.exports = {...}` with regular expression literals
    #[default]
    Module,
    /// Plain JSON, patterns as strings
    Json,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    #[arg(short, long, value_enum, default_value_t = ExportFormat::Module)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Import specifier, e.g. ./src/constants
    #[arg(value_name = "SPECIFIER")]
    pub specifier: String,

    /// Directory of the importing module (defaults to the config directory)
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,
}

/// Arguments for the match command
#[derive(Args, Debug)]
pub struct MatchArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Paths to test against the transform rules
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write rotapack.toml into
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Overwrite an existing rotapack.toml
    #[arg(long)]
    pub force: bool,
}
