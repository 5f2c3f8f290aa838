//! Tests for default values and edge cases.

use rotapack_config::{
    BuildConfig, DebugMode, GlobalSettings, OutputTarget, ProjectConfig, ResolveOptions,
};
use std::path::PathBuf;

#[test]
fn project_config_defaults() {
    let config = ProjectConfig::default();
    assert!(config.build.entry_points().is_empty());
    assert!(config.profiles.is_empty());
    assert_eq!(config.settings, GlobalSettings::default());
}

#[test]
fn build_config_defaults() {
    let build = BuildConfig::default();
    assert!(build.entry_points.is_empty());
    assert!(build.transform_rules.is_empty());
    assert_eq!(build.debug_mode, DebugMode::None);
    assert_eq!(build.base_dir, PathBuf::new());
}

#[test]
fn output_defaults() {
    let output = OutputTarget::default();
    assert_eq!(output.filename, "bundle.js");
    assert_eq!(output.directory, PathBuf::from("dist"));
}

#[test]
fn resolve_defaults() {
    assert_eq!(ResolveOptions::default().extensions, [".js"]);
}

#[test]
fn partial_sections_fill_defaults() {
    let config = ProjectConfig::from_value(serde_json::json!({
        "build": {
            "entry": ["./src/constants.js"],
            "output": { "path": "public" },
            "resolve": {}
        }
    }))
    .unwrap();

    assert_eq!(config.build.output.filename, "bundle.js");
    assert_eq!(config.build.output.directory, PathBuf::from("public"));
    assert_eq!(config.build.resolution_extensions(), [".js"]);
}

#[test]
fn unknown_devtool_is_rejected() {
    let result = ProjectConfig::from_value(serde_json::json!({
        "build": { "entry": ["./a.js"], "devtool": "inline" }
    }));
    assert!(result.is_err());
}
