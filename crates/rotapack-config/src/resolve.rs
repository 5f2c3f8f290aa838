//! Ordered extension resolution for imports written without an extension.
//!
//! A specifier that already names a source file is probed once as written.
//! Otherwise every configured extension is appended in declared order and
//! the first candidate that exists wins. A specifier naming a directory
//! (`./src/`, `..`) gets no extensions and never resolves.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use path_clean::PathClean;
use tracing::debug;

use crate::error::ResolveError;

/// Suffixes that always count as an explicit source extension.
pub const SOURCE_EXTENSIONS: [&str; 7] = [".js", ".jsx", ".mjs", ".cjs", ".ts", ".tsx", ".json"];

/// Existence check used by the resolver.
pub trait Probe {
    fn is_file(&self, path: &Path) -> bool;
}

/// Probe backed by the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

impl<P: Probe + ?Sized> Probe for &P {
    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }
}

/// Resolves import specifiers against a directory using ordered extensions.
///
/// # Example
///
/// ```no_run
/// use rotapack_config::ExtensionResolver;
/// use std::path::Path;
///
/// let extensions = vec![".js".to_string(), ".ts".to_string()];
/// let resolver = ExtensionResolver::new(&extensions);
/// let path = resolver.resolve(Path::new("/srv/static"), "./src/constants").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ExtensionResolver<'a, P = FsProbe> {
    extensions: &'a [String],
    probe: P,
}

impl<'a> ExtensionResolver<'a, FsProbe> {
    pub fn new(extensions: &'a [String]) -> Self {
        Self {
            extensions,
            probe: FsProbe,
        }
    }
}

impl<'a, P: Probe> ExtensionResolver<'a, P> {
    pub fn with_probe(extensions: &'a [String], probe: P) -> Self {
        Self { extensions, probe }
    }

    pub fn extensions(&self) -> &'a [String] {
        self.extensions
    }

    /// Whether `specifier` already ends in a source extension.
    pub fn has_explicit_extension(&self, specifier: &str) -> bool {
        let file_name = specifier.rsplit(['/', '\\']).next().unwrap_or(specifier);
        SOURCE_EXTENSIONS
            .iter()
            .copied()
            .chain(self.extensions.iter().map(String::as_str))
            .any(|ext| !ext.is_empty() && file_name.len() > ext.len() && file_name.ends_with(ext))
    }

    /// Paths that would be probed for `specifier`, in probe order.
    pub fn candidates(&self, from: &Path, specifier: &str) -> Vec<PathBuf> {
        let base = from.join(specifier).clean();
        if names_directory(specifier) || self.has_explicit_extension(specifier) {
            return vec![base];
        }

        self.extensions
            .iter()
            .map(|ext| {
                let mut candidate = OsString::from(base.as_os_str());
                candidate.push(ext);
                PathBuf::from(candidate)
            })
            .collect()
    }

    /// Resolve `specifier` relative to the directory `from`.
    pub fn resolve(&self, from: &Path, specifier: &str) -> Result<PathBuf, ResolveError> {
        if specifier.trim().is_empty() {
            return Err(ResolveError::EmptySpecifier);
        }
        if self.extensions.is_empty()
            && !self.has_explicit_extension(specifier)
            && !names_directory(specifier)
        {
            return Err(ResolveError::NoExtensions {
                specifier: specifier.to_string(),
            });
        }

        let mut tried = Vec::new();
        for candidate in self.candidates(from, specifier) {
            debug!(candidate = %candidate.display(), "probing");
            if self.probe.is_file(&candidate) {
                debug!(specifier, resolved = %candidate.display(), "resolved");
                return Ok(candidate);
            }
            tried.push(candidate);
        }

        Err(ResolveError::Unresolved {
            specifier: specifier.to_string(),
            from: from.to_path_buf(),
            tried,
        })
    }
}

// Cleaning drops a trailing `/` and folds `..`, so this is decided on the
// specifier as written.
fn names_directory(specifier: &str) -> bool {
    let last = specifier.rsplit(['/', '\\']).next().unwrap_or(specifier);
    matches!(last, "" | "." | "..")
}
