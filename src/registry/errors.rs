/// Errors from the registry layer and the commands built on it.
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while discovering, loading, or rendering libraries.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No manifest was given and none was found by discovery.
    #[error("No fanstat.toml found (searched {searched})")]
    ManifestNotFound {
        /// Human-readable description of the searched locations.
        searched: String,
    },

    /// The manifest exists but could not be read.
    #[error("Failed to read manifest '{}': {source}", .path.display())]
    ManifestRead {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest is not valid TOML or does not match the schema.
    #[error("Failed to parse manifest '{}': {source}", .path.display())]
    ManifestParse {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying TOML error.
        source: toml::de::Error,
    },

    /// The manifest parsed but declares inconsistent libraries.
    #[error("Invalid manifest:\n{}", bullet_list(.problems))]
    ManifestInvalid {
        /// Every problem found, in declaration order.
        problems: Vec<String>,
    },

    /// A requested library name has no entry point.
    #[error("No library named '{name}'")]
    UnknownLibrary {
        /// The requested name.
        name: String,
        /// Installed library names that resemble the request.
        candidates: Vec<String>,
    },

    /// An entry point failed to produce its library.
    #[error("Failed to load library '{name}' from '{}': {source}", .path.display())]
    LibraryLoad {
        /// Library name.
        name: String,
        /// Root path that was being scanned.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing JSON output failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

fn bullet_list(problems: &[String]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {p}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Exit code mapping for `RegistryError` variants.
impl RegistryError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ManifestNotFound { .. }
            | Self::ManifestRead { .. }
            | Self::ManifestParse { .. }
            | Self::ManifestInvalid { .. } => 3,
            Self::UnknownLibrary { .. } => 4,
            Self::LibraryLoad { .. } | Self::Io(_) | Self::Json(_) => 1,
        }
    }

    /// Machine-readable `snake_case` code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ManifestNotFound { .. } => "manifest_not_found",
            Self::ManifestRead { .. } => "manifest_unreadable",
            Self::ManifestParse { .. } => "manifest_parse_error",
            Self::ManifestInvalid { .. } => "manifest_invalid",
            Self::UnknownLibrary { .. } => "unknown_library",
            Self::LibraryLoad { .. } => "library_load_failed",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let not_found = RegistryError::ManifestNotFound {
            searched: "here".to_owned(),
        };
        assert_eq!(not_found.exit_code(), 3);

        let unknown = RegistryError::UnknownLibrary {
            name: "jqury".to_owned(),
            candidates: vec!["jquery".to_owned()],
        };
        assert_eq!(unknown.exit_code(), 4);
        assert_eq!(unknown.code(), "unknown_library");

        let load = RegistryError::LibraryLoad {
            name: "foo".to_owned(),
            path: PathBuf::from("/nope"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(load.exit_code(), 1);
    }

    #[test]
    fn test_invalid_message_lists_problems() {
        let err = RegistryError::ManifestInvalid {
            problems: vec!["first".to_owned(), "second".to_owned()],
        };
        assert_eq!(err.to_string(), "Invalid manifest:\n  - first\n  - second");
    }
}
