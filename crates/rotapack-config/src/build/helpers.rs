use std::fmt;
use std::path::PathBuf;

use serde::Deserializer;
use serde::de::{self, Visitor};

// Helper defaults
pub(crate) fn default_extensions() -> Vec<String> {
    vec![".js".to_string()]
}

pub(crate) fn default_output_filename() -> String {
    "bundle.js".to_string()
}

pub(crate) fn default_output_dir() -> PathBuf {
    PathBuf::from("dist")
}

/// Accepts a bare number where a name is expected. Environment overrides
/// such as `ROTAPACK_BUILD__OUTPUT__PATH=2024` arrive as numbers.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(LenientString)
}

pub(crate) fn lenient_path<'de, D>(deserializer: D) -> Result<PathBuf, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_string(deserializer).map(PathBuf::from)
}

struct LenientString;

impl Visitor<'_> for LenientString {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
        Ok(v)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
        Ok(v.to_string())
    }
}
