//! Check command implementation.
//!
//! Validates the descriptor without producing anything.

use rotapack_config::{ProjectConfig, validate_fs, validate_schema};

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// `project` is the configuration named by `args.config`, profile applied.
///
/// 1. Validate its structure
/// 2. Resolve every entry against the config directory (unless `--schema-only`)
pub fn execute(args: CheckArgs, project: ProjectConfig) -> Result<()> {
    ui::info("Checking configuration...");

    let build = &project.build;

    validate_schema(build)?;
    ui::success("Configuration is valid");

    if args.schema_only {
        return Ok(());
    }

    ui::info("Checking entry points...");
    if let Err(err) = validate_fs(build) {
        ui::error("Entry point check failed");
        return Err(err.into());
    }
    for entry in build.entry_points() {
        ui::success(&format!("  {entry} resolves"));
    }

    ui::info(&format!(
        "{} entries, {} rules, output {}",
        build.entry_points().len(),
        build.transform_rules.len(),
        build.output_file().display()
    ));
    if !build.debug_mode.is_enabled() {
        ui::warning("Source maps are disabled");
    }

    Ok(())
}
