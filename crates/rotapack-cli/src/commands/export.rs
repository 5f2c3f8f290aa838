//! Export command implementation.

use rotapack_config::{ProjectConfig, webpack_options};
use tracing::debug;

use crate::cli::{ExportArgs, ExportFormat};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Write the bundler configuration object to stdout or `--out`.
pub fn execute(args: ExportArgs, project: ProjectConfig) -> Result<()> {
    rotapack_config::validate_schema(&project.build)?;

    let options = webpack_options(&project.build);
    let rendered = match args.format {
        ExportFormat::Module => options.to_module(),
        ExportFormat::Json => options.to_json()?,
    };
    debug!(format = ?args.format, "Rendered bundler options");

    utils::write_output(args.out.as_deref(), &rendered)?;
    if let Some(out) = &args.out {
        ui::success(&format!("Wrote {}", out.display()));
    }
    Ok(())
}
