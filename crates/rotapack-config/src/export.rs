//! Export the descriptor in the shape the external bundler consumes.
//!
//! The bundler reads a plain options object: `entry`, `devtool`,
//! `module.rules`, `resolve.extensions` and `output`. Output paths are
//! absolute so the bundler never resolves them against its own working
//! directory.

use std::path::PathBuf;

use serde::Serialize;
use serde_json::Value;

use crate::build::BuildConfig;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebpackOptions {
    pub entry: Vec<String>,
    /// `false` or a devtool name
    pub devtool: Value,
    pub module: ModuleOptions,
    pub resolve: ResolveOptions,
    pub output: OutputOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleOptions {
    pub rules: Vec<RuleOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleOptions {
    pub test: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolveOptions {
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputOptions {
    pub filename: String,
    pub path: PathBuf,
}

/// Build the bundler options object for `config`.
pub fn webpack_options(config: &BuildConfig) -> WebpackOptions {
    let devtool = if config.debug_mode.is_enabled() {
        Value::String(config.debug_mode.as_str().to_string())
    } else {
        Value::Bool(false)
    };

    WebpackOptions {
        entry: config.entry_points.clone(),
        devtool,
        module: ModuleOptions {
            rules: config
                .transform_rules
                .iter()
                .map(|rule| RuleOptions {
                    test: rule.test.as_str().to_string(),
                    exclude: rule.exclude.as_ref().map(|p| p.as_str().to_string()),
                    loader: rule.loader.clone(),
                })
                .collect(),
        },
        resolve: ResolveOptions {
            extensions: config.resolve.extensions.clone(),
        },
        output: OutputOptions {
            filename: config.output.filename.clone(),
            path: config.output_dir(),
        },
    }
}

impl WebpackOptions {
    /// Pretty JSON. Patterns appear as their source strings.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            field: "export".to_string(),
            hint: Some(e.to_string()),
        })
    }

    /// CommonJS config module with regular expression literals for patterns.
    pub fn to_module(&self) -> String {
        let mut out = String::from("module.exports = {\n");

        out.push_str("  entry: [\n");
        for entry in &self.entry {
            out.push_str(&format!("    {},\n", js_string(entry)));
        }
        out.push_str("  ],\n");

        out.push_str(&format!("  devtool: {},\n", self.devtool));

        out.push_str("  module: {\n    rules: [\n");
        for rule in &self.module.rules {
            out.push_str("      {\n");
            out.push_str(&format!("        test: {},\n", regex_literal(&rule.test)));
            if let Some(exclude) = &rule.exclude {
                out.push_str(&format!("        exclude: {},\n", regex_literal(exclude)));
            }
            if let Some(loader) = &rule.loader {
                out.push_str(&format!("        loader: {},\n", js_string(loader)));
            }
            out.push_str("      },\n");
        }
        out.push_str("    ],\n  },\n");

        let extensions: Vec<String> = self.resolve.extensions.iter().map(|e| js_string(e)).collect();
        out.push_str(&format!(
            "  resolve: {{\n    extensions: [{}],\n  }},\n",
            extensions.join(", ")
        ));

        out.push_str("  output: {\n");
        out.push_str(&format!("    filename: {},\n", js_string(&self.output.filename)));
        out.push_str(&format!(
            "    path: {},\n",
            js_string(&self.output.path.to_string_lossy())
        ));
        out.push_str("  },\n};\n");

        out
    }
}

fn js_string(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

// `/` must be escaped inside a literal unless the source already escapes it.
fn regex_literal(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 2);
    out.push('/');
    let mut escaped = false;
    for ch in source.chars() {
        match ch {
            '/' if !escaped => out.push_str("\\/"),
            '\n' => out.push_str("\\n"),
            _ => out.push(ch),
        }
        escaped = ch == '\\' && !escaped;
    }
    out.push('/');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::DebugMode;

    #[test]
    fn preset_exports_expected_shape() {
        let config = BuildConfig::rotashift().with_base_dir("/srv/app/static");
        let options = webpack_options(&config);

        assert_eq!(options.entry.len(), 4);
        assert_eq!(options.devtool, Value::String("inline-source-map".into()));
        assert_eq!(options.module.rules[0].test, r"\.tsx?$");
        assert_eq!(options.module.rules[0].exclude.as_deref(), Some("node_modules"));
        assert_eq!(options.resolve.extensions, [".js"]);
        assert_eq!(options.output.path, PathBuf::from("/srv/app/static/dist"));
    }

    #[test]
    fn disabled_debug_mode_becomes_false() {
        let mut config = BuildConfig::rotashift();
        config.debug_mode = DebugMode::None;
        let json: Value = serde_json::from_str(&webpack_options(&config).to_json().unwrap()).unwrap();
        assert_eq!(json["devtool"], Value::Bool(false));
        assert!(json["module"]["rules"][0].get("loader").is_none());
    }

    #[test]
    fn module_uses_regex_literals() {
        let config = BuildConfig::rotashift().with_base_dir("/srv/app/static");
        let module = webpack_options(&config).to_module();

        assert!(module.starts_with("module.exports = {\n"));
        assert!(module.contains("    \"./src/constants.js\",\n    \"./src/rotashiftcurrent.js\",\n"));
        assert!(module.contains("devtool: \"inline-source-map\","));
        assert!(module.contains(r"test: /\.tsx?$/,"));
        assert!(module.contains("exclude: /node_modules/,"));
        assert!(module.contains("extensions: [\".js\"],"));
        assert!(module.contains("path: \"/srv/app/static/dist\","));
        assert!(module.ends_with("};\n"));
    }

    #[test]
    fn slashes_in_patterns_are_escaped_once() {
        assert_eq!(regex_literal("/node_modules/"), r"/\/node_modules\//");
        assert_eq!(regex_literal(r"\/vendor\/"), r"/\/vendor\//");
        assert_eq!(regex_literal(r"a\\/b"), r"/a\\\/b/");
    }
}
