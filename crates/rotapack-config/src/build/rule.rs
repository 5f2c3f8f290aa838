use std::borrow::Cow;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Regular expression compiled once at load time.
///
/// Serializes back to its source text. Two patterns are equal when their
/// sources are equal.
#[derive(Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(source)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, haystack: &str) -> bool {
        self.regex.is_match(haystack)
    }

    /// Syntax in this pattern that a JavaScript `RegExp` literal reads
    /// differently, or rejects. `None` when the source means the same in both.
    pub fn js_incompatibility(&self) -> Option<&'static str> {
        let mut chars = self.as_str().chars().peekable();
        let mut in_class = false;
        while let Some(ch) = chars.next() {
            match ch {
                '\\' => match chars.next() {
                    Some('A' | 'z') => return Some("the `\\A`/`\\z` anchors"),
                    Some('p' | 'P') => return Some("a Unicode class `\\p{..}`"),
                    _ => {}
                },
                '[' if !in_class => in_class = true,
                ']' if in_class => in_class = false,
                '(' if !in_class && chars.peek() == Some(&'?') => {
                    chars.next();
                    match chars.peek() {
                        Some(':' | '<') => {}
                        Some('P') => return Some("a `(?P<name>..)` named group"),
                        _ => return Some("an inline flag group such as `(?i)`"),
                    }
                }
                _ => {}
            }
        }
        None
    }
}

impl FromStr for Pattern {
    type Err = regex::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Selects files that get non-default handling from the bundler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TransformRule {
    /// Files whose path matches this expression are candidates
    #[schemars(with = "String")]
    pub test: Pattern,

    /// Files whose path matches this expression are never selected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(with = "Option<String>")]
    pub exclude: Option<Pattern>,

    /// Loader the bundler should run on selected files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loader: Option<String>,
}

impl TransformRule {
    pub fn new(test: Pattern) -> Self {
        Self {
            test,
            exclude: None,
            loader: None,
        }
    }

    pub fn excluding(mut self, exclude: Pattern) -> Self {
        self.exclude = Some(exclude);
        self
    }

    pub fn with_loader(mut self, loader: impl Into<String>) -> Self {
        self.loader = Some(loader.into());
        self
    }

    /// Whether this rule selects `path`. An exclusion match always wins.
    pub fn matches(&self, path: impl AsRef<Path>) -> bool {
        let normalized = normalize_separators(path.as_ref());
        if let Some(exclude) = &self.exclude {
            if exclude.is_match(&normalized) {
                return false;
            }
        }
        self.test.is_match(&normalized)
    }
}

// Patterns are written against `/`-separated paths on every platform.
fn normalize_separators(path: &Path) -> Cow<'_, str> {
    let text = path.to_string_lossy();
    if text.contains('\\') {
        Cow::Owned(text.replace('\\', "/"))
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typescript_rule() -> TransformRule {
        TransformRule::new(Pattern::new(r"\.tsx?$").unwrap())
            .excluding(Pattern::new("node_modules").unwrap())
    }

    #[test]
    fn matches_typed_sources() {
        let rule = typescript_rule();
        assert!(rule.matches("src/rotashiftcurrent.ts"));
        assert!(rule.matches("src/components/Shift.tsx"));
        assert!(!rule.matches("src/constants.js"));
        assert!(!rule.matches("src/types.ts.bak"));
    }

    #[test]
    fn exclusion_wins_over_positive_match() {
        let rule = typescript_rule();
        assert!(!rule.matches("node_modules/moment/index.ts"));
        assert!(!rule.matches("./node_modules/@types/node/index.d.ts"));
        assert!(!rule.matches("/srv/app/node_modules/lib/a.tsx"));
    }

    #[test]
    fn backslash_paths_are_normalized() {
        let rule = TransformRule::new(Pattern::new(r"src/.*\.ts$").unwrap())
            .excluding(Pattern::new("/node_modules/").unwrap());
        assert!(rule.matches(r"src\nested\a.ts"));
        assert!(!rule.matches(r"app\node_modules\x\a.ts"));
    }

    #[test]
    fn invalid_pattern_fails_to_deserialize() {
        let result: Result<TransformRule, _> =
            serde_json::from_value(serde_json::json!({ "test": "(unclosed" }));
        assert!(result.is_err());
    }

    #[test]
    fn shared_syntax_is_js_compatible() {
        let sources = [
            r"\.tsx?$",
            r"^src/(?:a|b)/",
            r"(?<ext>ts|js)$",
            r"[(?i)]\.js$",
            r"\\Aname",
        ];
        for source in sources {
            assert_eq!(Pattern::new(source).unwrap().js_incompatibility(), None, "{source}");
        }
    }

    #[test]
    fn rust_only_syntax_is_reported() {
        let cases = [
            (r"(?i)\.tsx?$", "inline flag"),
            (r"\.ts(?x) $", "inline flag"),
            (r"\Asrc/", "anchors"),
            (r"\.tsx?\z", "anchors"),
            (r"(?P<ext>ts)$", "named group"),
            (r"\p{Greek}", "Unicode class"),
        ];
        for (source, expected) in cases {
            let found = Pattern::new(source).unwrap().js_incompatibility();
            assert!(found.is_some_and(|what| what.contains(expected)), "{source}: {found:?}");
        }
    }

    #[test]
    fn pattern_serializes_as_source() {
        let rule = typescript_rule().with_loader("ts-loader");
        let value = serde_json::to_value(&rule).unwrap();
        assert_eq!(value["test"], r"\.tsx?$");
        assert_eq!(value["exclude"], "node_modules");
        assert_eq!(value["loader"], "ts-loader");

        let back: TransformRule = serde_json::from_value(value).unwrap();
        assert_eq!(back, rule);
    }
}
