//! Shared helpers for command implementations.

use std::path::{Path, PathBuf};

use rotapack_config::{ConfigDiscovery, ProjectConfig};
use tracing::debug;

use crate::cli::ConfigArgs;
use crate::error::Result;

/// Load the project configuration named by `args` and apply its profile.
///
/// An explicit `--config` path is loaded as is; otherwise the current
/// directory is searched.
pub fn load_project(args: &ConfigArgs) -> Result<ProjectConfig> {
    let project = match &args.config {
        Some(path) => ConfigDiscovery::load_file(path)?,
        None => ConfigDiscovery::new(get_cwd()?).load()?,
    };
    debug!(profile = ?args.profile, "Materializing configuration");
    Ok(project.materialize_profile(args.profile.as_deref())?)
}

/// Get the current working directory.
pub fn get_cwd() -> Result<PathBuf> {
    Ok(std::env::current_dir()?)
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Write `contents` to `out`, or to stdout when no file is given.
pub fn write_output(out: Option<&Path>, contents: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, contents)?;
        }
        None => println!("{contents}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn absolute_paths_are_kept() {
        let base = Path::new("/project");
        assert_eq!(resolve_path(Path::new("/tmp/x"), base), PathBuf::from("/tmp/x"));
        assert_eq!(
            resolve_path(Path::new("src/a.ts"), base),
            PathBuf::from("/project/src/a.ts")
        );
    }

    #[test]
    fn write_output_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("out/webpack.config.js");
        write_output(Some(&target), "module.exports = {};").unwrap();
        assert_eq!(
            std::fs::read_to_string(target).unwrap(),
            "module.exports = {};"
        );
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let args = ConfigArgs {
            config: Some(PathBuf::from("/definitely/not/here/rotapack.toml")),
            profile: None,
        };
        assert!(load_project(&args).is_err());
    }
}
