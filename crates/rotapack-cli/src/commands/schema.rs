//! Schema command implementation.

use rotapack_config::ProjectConfig;

use crate::error::Result;

/// Print the JSON schema of the configuration file.
pub fn execute() -> Result<()> {
    let schema = schemars::schema_for!(ProjectConfig);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
