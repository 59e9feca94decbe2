/// The `fanstat.toml` registration manifest: discovery, parsing, validation.
///
/// A manifest lists packages and the libraries each one declares:
///
/// ```toml
/// [[package]]
/// name = "js.jquery"
///
/// [[package.library]]
/// name = "jquery"
/// rootpath = "resources/jquery"
/// resources = ["jquery.js", "jquery.min.js"]
/// ```
///
/// A library without `resources` is loaded by scanning its root directory.
use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use super::entry::{DirectoryLoader, EntryPoint, StaticLoader};
use super::errors::RegistryError;
use super::library::Library;

/// File name looked up during discovery.
pub const MANIFEST_FILE: &str = "fanstat.toml";

/// Top-level manifest document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Packages in declaration order.
    #[serde(default, rename = "package")]
    pub packages: Vec<PackageDecl>,
}

/// A package that registers libraries.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageDecl {
    /// Package identifier.
    pub name: String,
    /// Libraries declared by this package.
    #[serde(default, rename = "library")]
    pub libraries: Vec<LibraryDecl>,
}

/// One library registration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LibraryDecl {
    pub name: String,
    /// Root directory; relative paths are resolved against the manifest's directory.
    pub rootpath: PathBuf,
    /// Known resources. Scanned from `rootpath` when absent.
    pub resources: Option<Vec<String>>,
}

impl Manifest {
    /// Parse manifest text. `path` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ManifestParse` on TOML or schema errors and
    /// `RegistryError::ManifestInvalid` when validation fails.
    pub fn parse(text: &str, path: &Path) -> Result<Self, RegistryError> {
        let manifest: Self = toml::from_str(text).map_err(|source| RegistryError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Read and parse a manifest file.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ManifestRead` if the file cannot be read, plus
    /// everything [`Manifest::parse`] returns.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        debug!(path = %path.display(), "reading manifest");
        let text = fs::read_to_string(path).map_err(|source| RegistryError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text, path)
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let mut problems = Vec::new();
        let mut seen = HashSet::new();

        for (i, package) in self.packages.iter().enumerate() {
            if package.name.trim().is_empty() {
                problems.push(format!("package #{} has an empty name", i + 1));
            }
            for library in &package.libraries {
                if library.name.trim().is_empty() {
                    problems.push(format!(
                        "package '{}' declares a library with an empty name",
                        package.name
                    ));
                } else if !seen.insert(library.name.as_str()) {
                    problems.push(format!(
                        "library '{}' is declared more than once",
                        library.name
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(RegistryError::ManifestInvalid { problems })
        }
    }

    /// Turn every library declaration into an entry point, in declaration order.
    #[must_use]
    pub fn into_entry_points(self, base_dir: &Path) -> Vec<EntryPoint> {
        let mut entry_points = Vec::new();
        for package in self.packages {
            for library in package.libraries {
                let root = base_dir.join(&library.rootpath);
                let ep = match library.resources {
                    Some(resources) => {
                        let lib = Library {
                            name: library.name.clone(),
                            rootpath: root.display().to_string(),
                            known_resources: resources,
                        };
                        EntryPoint::new(&library.name, &package.name, StaticLoader::new(lib))
                    }
                    None => EntryPoint::new(
                        &library.name,
                        &package.name,
                        DirectoryLoader::new(&library.name, root),
                    ),
                };
                entry_points.push(ep);
            }
        }
        entry_points
    }
}

/// Locate the manifest to use.
///
/// Search order:
/// 1. The explicit path, if given (must exist).
/// 2. Walk up from the current directory looking for `fanstat.toml`.
/// 3. `<config dir>/fanstat/fanstat.toml` (`$XDG_CONFIG_HOME` or `~/.config` on Linux).
///
/// # Errors
///
/// Returns `RegistryError::ManifestNotFound` when nothing is found, and
/// `RegistryError::ManifestRead` when an explicit path does not exist.
pub fn find_manifest(explicit: Option<&Path>) -> Result<PathBuf, RegistryError> {
    if let Some(path) = explicit {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(RegistryError::ManifestRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_manifest_from(cwd) {
            return Ok(path);
        }
    }

    if let Some(path) = find_user_manifest() {
        return Ok(path);
    }

    Err(RegistryError::ManifestNotFound {
        searched: format!(
            "current directory and parents, {}",
            user_manifest_path().map_or_else(
                || "no user config directory".to_owned(),
                |p| p.display().to_string()
            )
        ),
    })
}

/// Walk up from `start` looking for `fanstat.toml`.
#[must_use]
pub fn find_manifest_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn user_manifest_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fanstat").join(MANIFEST_FILE))
}

fn find_user_manifest() -> Option<PathBuf> {
    user_manifest_path().filter(|p| p.is_file())
}
