/// Shared serializable output types for the listing commands.
///
/// These types are what gets written to stdout, either as JSON or rendered
/// as a table. They are decoupled from the registry's `Library` / `EntryPoint`.
use serde::{Deserialize, Serialize};

use crate::registry::{EntryPoint, Library, RegistryError};

/// A package that registers at least one library.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageOutput {
    /// Declaring package identifier.
    pub package: String,
    /// Names of the libraries it registers, in registration order.
    pub libraries: Vec<String>,
}

impl PackageOutput {
    /// Group entry points by declaring package, in order of first appearance.
    #[must_use]
    pub fn group(packages: &[&str], entry_points: &[EntryPoint]) -> Vec<Self> {
        packages
            .iter()
            .map(|&package| Self {
                package: package.to_owned(),
                libraries: entry_points
                    .iter()
                    .filter(|ep| ep.package == package)
                    .map(|ep| ep.name.clone())
                    .collect(),
            })
            .collect()
    }
}

/// A loaded library without its contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryOutput {
    /// Library name.
    pub name: String,
    /// Root path of the library.
    pub rootpath: String,
    /// Number of known resources.
    pub resource_count: usize,
}

impl From<&Library> for LibraryOutput {
    fn from(library: &Library) -> Self {
        Self {
            name: library.name.clone(),
            rootpath: library.rootpath.clone(),
            resource_count: library.known_resources.len(),
        }
    }
}

/// A loaded library with its resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsOutput {
    /// Library name.
    pub name: String,
    /// Root path of the library.
    pub rootpath: String,
    /// Resource filenames in declared order.
    pub resources: Vec<String>,
}

impl From<&Library> for ContentsOutput {
    fn from(library: &Library) -> Self {
        Self {
            name: library.name.clone(),
            rootpath: library.rootpath.clone(),
            resources: library.known_resources.clone(),
        }
    }
}

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (`snake_case`).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Suggested library names (for unknown library errors).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Vec<String>>,
}

impl ErrorOutput {
    /// Construct from a `RegistryError`.
    #[must_use]
    pub fn from_registry_error(err: &RegistryError) -> Self {
        let candidates = match err {
            RegistryError::UnknownLibrary { candidates, .. } if !candidates.is_empty() => {
                Some(candidates.clone())
            }
            _ => None,
        };
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                candidates,
            },
        }
    }
}
