//! Library and resource types, plus the lexical resource classification.

/// Substring marking a minified resource (`jquery.min.js`).
pub const MINIFIED_MARKER: &str = ".min.";

/// A named bundle of static web assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    /// Unique library name (may contain `|`).
    pub name: String,
    /// Filesystem root the resources live under.
    pub rootpath: String,
    /// Resource filenames relative to `rootpath`, in declared order.
    pub known_resources: Vec<String>,
}

/// Kind of a resource, decided by filename suffix only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// `*.js`
    Js,
    /// `*.css`
    Css,
}

impl ResourceKind {
    /// Classify a filename, or `None` when it is neither JS nor CSS.
    #[must_use]
    #[allow(clippy::case_sensitive_file_extension_comparisons)]
    pub fn of(filename: &str) -> Option<Self> {
        if filename.ends_with(".js") {
            Some(Self::Js)
        } else if filename.ends_with(".css") {
            Some(Self::Css)
        } else {
            None
        }
    }
}

/// Whether a filename names a minified resource.
#[must_use]
pub fn is_minified(filename: &str) -> bool {
    filename.contains(MINIFIED_MARKER)
}

/// Make a library name usable as a URL path segment (`|` becomes `_`).
#[must_use]
pub fn sanitize_name(name: &str) -> String {
    name.replace('|', "_")
}
