//! Init command implementation.
//!
//! Writes the rota-shift preset as `rotapack.toml`.

use rotapack_config::CONFIG_FILE_NAMES;

use crate::cli::InitArgs;
use crate::error::{CliError, Result};
use crate::ui;

/// `rotapack.toml` describing the rota-shift bundle.
const PRESET_TEMPLATE: &str = r#"# rotapack configuration for the rota-shift front end

[build]
# Included in this order; constants must come first.
entry = [
    "./src/constants.js",
    "./src/rotashiftcurrent.js",
    "./src/rotashifthistory.js",
    "./src/rotashiftgenerate.js",
]
devtool = "inline-source-map"

[[build.rules]]
test = '\.tsx?$'
exclude = 'node_modules'

[build.resolve]
extensions = [".js"]

[build.output]
filename = "bundle.js"
path = "dist"

[profiles.production.build]
devtool = "none"
"#;

/// Execute the init command.
///
/// # Errors
///
/// Returns `CliError::AlreadyExists` when the file exists and `--force` was
/// not given.
pub fn execute(args: InitArgs) -> Result<()> {
    let path = args.dir.join(CONFIG_FILE_NAMES[0]);
    if path.exists() && !args.force {
        return Err(CliError::AlreadyExists(path));
    }

    std::fs::create_dir_all(&args.dir)?;
    std::fs::write(&path, PRESET_TEMPLATE)?;
    ui::success(&format!("Created {}", path.display()));
    Ok(())
}
