/// Entry points: installed library descriptors with lazy loaders.
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::errors::RegistryError;
use super::library::Library;

/// Produces a [`Library`] on demand.
pub trait LibraryLoader {
    /// Load the library.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::LibraryLoad` when the library cannot be built.
    fn load(&self) -> Result<Library, RegistryError>;
}

/// A library whose resources were listed at registration time.
#[derive(Debug, Clone)]
pub struct StaticLoader {
    library: Library,
}

impl StaticLoader {
    #[must_use]
    pub fn new(library: Library) -> Self {
        Self { library }
    }
}

impl LibraryLoader for StaticLoader {
    fn load(&self) -> Result<Library, RegistryError> {
        Ok(self.library.clone())
    }
}

/// A library whose resources are every file found under its root directory.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    name: String,
    root: PathBuf,
}

impl DirectoryLoader {
    #[must_use]
    pub fn new(name: &str, root: PathBuf) -> Self {
        Self {
            name: name.to_owned(),
            root,
        }
    }
}

impl LibraryLoader for DirectoryLoader {
    fn load(&self) -> Result<Library, RegistryError> {
        debug!(library = %self.name, root = %self.root.display(), "scanning library root");
        let resources = scan_resources(&self.root).map_err(|source| RegistryError::LibraryLoad {
            name: self.name.clone(),
            path: self.root.clone(),
            source,
        })?;
        Ok(Library {
            name: self.name.clone(),
            rootpath: self.root.display().to_string(),
            known_resources: resources,
        })
    }
}

/// List every file under `root` as a `/`-separated relative path, sorted.
///
/// Symlinks are followed, so linked assets count as files.
fn scan_resources(root: &Path) -> std::io::Result<Vec<String>> {
    if !root.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "library root is not a directory",
        ));
    }

    let mut resources = Vec::new();
    for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Ok(relative) = entry.path().strip_prefix(root) else {
            continue;
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        resources.push(segments.join("/"));
    }
    Ok(resources)
}

/// An installed library descriptor.
pub struct EntryPoint {
    /// Library name the entry point is registered under.
    pub name: String,
    /// Identifier of the package that declares the library.
    pub package: String,
    loader: Box<dyn LibraryLoader>,
}

impl EntryPoint {
    #[must_use]
    pub fn new(name: &str, package: &str, loader: impl LibraryLoader + 'static) -> Self {
        Self {
            name: name.to_owned(),
            package: package.to_owned(),
            loader: Box::new(loader),
        }
    }

    /// Run the lazy loader.
    ///
    /// # Errors
    ///
    /// Propagates the loader's error.
    pub fn load(&self) -> Result<Library, RegistryError> {
        debug!(library = %self.name, package = %self.package, "loading library");
        self.loader.load()
    }
}

impl fmt::Debug for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryPoint")
            .field("name", &self.name)
            .field("package", &self.package)
            .finish_non_exhaustive()
    }
}
