use std::path::PathBuf;

use super::{BuildConfig, DebugMode, OutputTarget, Pattern, ResolveOptions, TransformRule};

/// Entry modules of the rota-shift front end, in inclusion order.
pub const ROTASHIFT_ENTRIES: [&str; 4] = [
    "./src/constants.js",
    "./src/rotashiftcurrent.js",
    "./src/rotashifthistory.js",
    "./src/rotashiftgenerate.js",
];

impl BuildConfig {
    /// Descriptor of the rota-shift front-end bundle.
    ///
    /// `constants` comes first so the page scripts that follow can use it.
    /// TypeScript sources get special handling unless they are vendored.
    pub fn rotashift() -> Self {
        Self {
            entry_points: ROTASHIFT_ENTRIES.iter().map(|e| e.to_string()).collect(),
            output: OutputTarget {
                filename: "bundle.js".to_string(),
                directory: PathBuf::from("dist"),
            },
            transform_rules: vec![typescript_rule()],
            resolve: ResolveOptions {
                extensions: vec![".js".to_string()],
            },
            debug_mode: DebugMode::InlineSourceMap,
            base_dir: PathBuf::new(),
        }
    }
}

fn typescript_rule() -> TransformRule {
    TransformRule {
        test: Pattern::new(r"\.tsx?$").expect("typescript pattern is a valid regex"),
        exclude: Some(Pattern::new("node_modules").expect("vendor pattern is a valid regex")),
        loader: None,
    }
}
