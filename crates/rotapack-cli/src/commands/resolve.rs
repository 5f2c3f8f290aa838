//! Resolve command implementation.

use rotapack_config::ProjectConfig;

use crate::cli::ResolveArgs;
use crate::commands::utils;
use crate::error::Result;

/// Resolve one specifier with the configured extensions and print the path.
///
/// `--from` is taken relative to the current directory; without it the
/// specifier resolves against the config directory, like an entry.
pub fn execute(args: ResolveArgs, project: ProjectConfig) -> Result<()> {
    let build = &project.build;

    let from = match &args.from {
        Some(dir) => utils::resolve_path(dir, &utils::get_cwd()?),
        None => build.base_dir.clone(),
    };

    let resolved = build.resolver().resolve(&from, &args.specifier)?;
    println!("{}", resolved.display());
    Ok(())
}
