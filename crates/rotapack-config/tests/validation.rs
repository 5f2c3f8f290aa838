//! Filesystem validation against real fixture directories.

use rotapack_config::{
    BuildConfig, ConfigError, ConfigValidator, FsValidator, ROTASHIFT_ENTRIES, ResolveError,
    validate_fs, validate_schema,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_sources(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "// rota\n").unwrap();
    }
}

#[test]
fn preset_passes_when_all_entries_exist() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &ROTASHIFT_ENTRIES);

    let config = BuildConfig::rotashift().with_base_dir(dir.path());
    assert!(validate_schema(&config).is_ok());
    assert!(validate_fs(&config).is_ok());
}

#[test]
fn missing_entry_is_reported_with_candidates() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &ROTASHIFT_ENTRIES[..3]);

    let config = BuildConfig::rotashift().with_base_dir(dir.path());
    let err = validate_fs(&config).unwrap_err();
    match err {
        ConfigError::EntryNotFound { path, source } => {
            assert_eq!(path, dir.path().join("./src/rotashiftgenerate.js"));
            assert!(matches!(source, ResolveError::Unresolved { .. }));
            assert_eq!(source.tried(), [dir.path().join("src/rotashiftgenerate.js")]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn extension_less_entries_resolve_through_extensions() {
    let dir = TempDir::new().unwrap();
    write_sources(dir.path(), &["src/constants.ts", "src/rotashiftcurrent.js"]);

    let mut config = BuildConfig::rotashift().with_base_dir(dir.path());
    config.entry_points = vec!["./src/constants".into(), "./src/rotashiftcurrent".into()];
    config.resolve.extensions = vec![".js".into(), ".ts".into()];

    assert!(validate_fs(&config).is_ok());
    assert_eq!(
        config.resolve_entry("./src/constants").unwrap(),
        dir.path().join("src/constants.ts")
    );
}

#[test]
fn directories_do_not_satisfy_resolution() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("src/constants.js")).unwrap();

    let mut config = BuildConfig::rotashift().with_base_dir(dir.path());
    config.entry_points = vec!["./src/constants.js".into()];

    assert!(matches!(
        FsValidator::new(dir.path()).validate(&config),
        Err(ConfigError::EntryNotFound { .. })
    ));
}

#[test]
fn fs_validation_runs_schema_checks_first() {
    let dir = TempDir::new().unwrap();
    let config = BuildConfig::default().with_base_dir(dir.path());
    assert!(matches!(
        FsValidator::new(dir.path()).validate(&config),
        Err(ConfigError::NoEntries)
    ));
}
