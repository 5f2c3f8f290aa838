use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How positional debug metadata is attached to the bundle.
///
/// Mirrors the external bundler's `devtool` values.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum DebugMode {
    /// No debug metadata
    #[default]
    None,
    /// Each module wrapped in `eval` with a source URL comment
    Eval,
    /// `eval` with an inline source map per module
    EvalSourceMap,
    /// Source map embedded as a data URL in the bundle
    InlineSourceMap,
    /// Separate `.map` file referenced from the bundle
    SourceMap,
    /// Separate `.map` file without a reference comment
    HiddenSourceMap,
    /// Line-only mappings, separate file
    CheapSourceMap,
    /// Line-only mappings through loaders, separate file
    CheapModuleSourceMap,
}

impl DebugMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Eval => "eval",
            Self::EvalSourceMap => "eval-source-map",
            Self::InlineSourceMap => "inline-source-map",
            Self::SourceMap => "source-map",
            Self::HiddenSourceMap => "hidden-source-map",
            Self::CheapSourceMap => "cheap-source-map",
            Self::CheapModuleSourceMap => "cheap-module-source-map",
        }
    }

    pub fn is_enabled(self) -> bool {
        self != Self::None
    }

    /// Debug metadata ends up inside the bundle itself.
    pub fn is_inline(self) -> bool {
        matches!(self, Self::Eval | Self::EvalSourceMap | Self::InlineSourceMap)
    }

    /// A `.map` file is written next to the bundle.
    pub fn emits_map_file(self) -> bool {
        matches!(
            self,
            Self::SourceMap
                | Self::HiddenSourceMap
                | Self::CheapSourceMap
                | Self::CheapModuleSourceMap
        )
    }
}

impl std::fmt::Display for DebugMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
