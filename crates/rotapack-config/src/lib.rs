//! Build configuration descriptor for the rota-shift front end.
//!
//! The descriptor is plain data: entry points, an output target, transform
//! rules, resolution extensions and a debug mode. It is loaded once per build,
//! validated, and handed to an external bundler in the shape that bundler
//! expects (see [`export`]).

pub mod build;
pub mod config;
pub mod discovery;
pub mod error;
pub mod export;
pub mod resolve;
pub mod settings;
pub mod validation;

// Re-export main types
pub use build::*;
pub use config::*;
pub use error::*;
pub use settings::*;

// Re-export discovery, resolution and validation
pub use discovery::{
    CONFIG_FILE_NAMES, ConfigDiscovery, ENV_PREFIX, PACKAGE_JSON_FIELD, discover,
    discover_with_profile,
};
pub use export::{WebpackOptions, webpack_options};
pub use resolve::{ExtensionResolver, FsProbe, Probe, SOURCE_EXTENSIONS};
pub use validation::{ConfigValidator, FsValidator, SchemaValidator, validate_fs, validate_schema};
