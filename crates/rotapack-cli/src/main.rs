//! rotapack CLI entry point.
//!
//! Parses arguments, loads the configuration once, initializes logging and
//! dispatches the command.

use clap::Parser;
use miette::Result;
use rotapack_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Loaded before the logger so its settings can tune logging. A load
    // error is reported once the logger is up.
    let project = args.command.config_args().map(commands::utils::load_project);
    let settings = match &project {
        Some(Ok(project)) => project.settings.clone(),
        _ => Default::default(),
    };

    logger::init_logger(args.verbose, args.quiet, args.no_color, &settings);
    ui::init_colors(args.no_color);

    let project = project.transpose().map_err(error::cli_error_to_miette)?;
    commands::execute(args.command, project).map_err(error::cli_error_to_miette)
}
