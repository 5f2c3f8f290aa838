//! Print command implementation.

use rotapack_config::{BuildConfig, ProjectConfig};
use serde_json::Value;

use crate::error::Result;

/// Print the materialized descriptor as pretty JSON on stdout.
///
/// The resolved output directory is included under `outputDir` since
/// `base_dir` itself is not part of the descriptor.
pub fn execute(project: ProjectConfig) -> Result<()> {
    println!("{}", render(&project.build)?);
    Ok(())
}

fn render(build: &BuildConfig) -> Result<String> {
    let mut value = build.to_value()?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "outputDir".to_string(),
            Value::String(build.output_dir().display().to_string()),
        );
    }
    Ok(serde_json::to_string_pretty(&value)?)
}
