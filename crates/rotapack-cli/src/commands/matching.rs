//! Match command implementation.

use std::path::Path;

use rotapack_config::{BuildConfig, ProjectConfig};

use crate::cli::MatchArgs;
use crate::error::Result;

/// Report which transform rule handles each path, one line per path.
pub fn execute(args: MatchArgs, project: ProjectConfig) -> Result<()> {
    for path in &args.paths {
        println!("{}", describe(&project.build, path));
    }
    Ok(())
}

fn describe(build: &BuildConfig, path: &Path) -> String {
    match build.matching_rule(path) {
        Some((index, rule)) => match &rule.loader {
            Some(loader) => format!(
                "{}: rule {} ({}, {})",
                path.display(),
                index,
                rule.test,
                loader
            ),
            None => format!("{}: rule {} ({})", path.display(), index, rule.test),
        },
        None => format!("{}: no rule", path.display()),
    }
}
