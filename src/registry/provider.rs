/// The two discovery surfaces: installed entry points and the loaded registry.
use std::collections::BTreeMap;
use std::path::Path;

use super::entry::EntryPoint;
use super::errors::RegistryError;
use super::library::Library;
use super::manifest::Manifest;
use super::suggest::suggest;

/// Installed libraries, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    entry_points: Vec<EntryPoint>,
}

impl Registry {
    #[must_use]
    pub fn new(entry_points: Vec<EntryPoint>) -> Self {
        Self { entry_points }
    }

    /// Build a registry from a manifest file.
    ///
    /// # Errors
    ///
    /// Returns any manifest read, parse, or validation error.
    pub fn from_manifest_path(path: &Path) -> Result<Self, RegistryError> {
        let manifest = Manifest::load(path)?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(manifest.into_entry_points(base_dir)))
    }

    /// All entry points in registration order.
    #[must_use]
    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    /// Entry points whose name appears in `names`, in registration order.
    /// An empty `names` selects everything.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnknownLibrary` for the first requested name
    /// that no entry point carries.
    pub fn select(&self, names: &[String]) -> Result<Vec<&EntryPoint>, RegistryError> {
        if names.is_empty() {
            return Ok(self.entry_points.iter().collect());
        }

        if let Some(missing) = names
            .iter()
            .find(|n| !self.entry_points.iter().any(|ep| &ep.name == *n))
        {
            let installed: Vec<&str> = self
                .entry_points
                .iter()
                .map(|ep| ep.name.as_str())
                .collect();
            return Err(RegistryError::UnknownLibrary {
                name: missing.clone(),
                candidates: suggest(missing, &installed),
            });
        }

        Ok(self
            .entry_points
            .iter()
            .filter(|ep| names.contains(&ep.name))
            .collect())
    }

    /// Distinct declaring packages, in order of first appearance.
    #[must_use]
    pub fn packages(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = Vec::new();
        for ep in &self.entry_points {
            if !packages.contains(&ep.package.as_str()) {
                packages.push(&ep.package);
            }
        }
        packages
    }

    /// Load every entry point into a name-keyed registry.
    ///
    /// # Errors
    ///
    /// Fails on the first library that cannot be loaded.
    pub fn load_all(&self) -> Result<LoadedRegistry, RegistryError> {
        let mut libraries = BTreeMap::new();
        for ep in &self.entry_points {
            libraries.insert(ep.name.clone(), ep.load()?);
        }
        Ok(LoadedRegistry { libraries })
    }
}

/// Loaded libraries keyed by name, iterated in ascending name order.
#[derive(Debug, Clone, Default)]
pub struct LoadedRegistry {
    libraries: BTreeMap<String, Library>,
}

impl LoadedRegistry {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Library)> {
        self.libraries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::entry::StaticLoader;

    fn ep(name: &str, package: &str) -> EntryPoint {
        let lib = Library {
            name: name.to_owned(),
            rootpath: format!("/pkg/{name}"),
            known_resources: vec![format!("{name}.js")],
        };
        EntryPoint::new(name, package, StaticLoader::new(lib))
    }

    fn registry() -> Registry {
        Registry::new(vec![
            ep("zepto", "js.zepto"),
            ep("bootstrap", "js.bootstrap"),
            ep("bootstrap-icons", "js.bootstrap"),
            ep("jquery", "js.jquery"),
        ])
    }

    #[test]
    fn test_packages_are_distinct_in_first_seen_order() {
        assert_eq!(
            registry().packages(),
            vec!["js.zepto", "js.bootstrap", "js.jquery"]
        );
    }

    #[test]
    fn test_select_empty_means_all() {
        let r = registry();
        assert_eq!(r.select(&[]).unwrap().len(), 4);
    }

    #[test]
    fn test_select_keeps_registration_order() {
        let r = registry();
        let names = vec!["jquery".to_owned(), "zepto".to_owned()];
        let selected: Vec<&str> = r
            .select(&names)
            .unwrap()
            .iter()
            .map(|ep| ep.name.as_str())
            .collect();
        assert_eq!(selected, vec!["zepto", "jquery"]);
    }

    #[test]
    fn test_select_unknown_name_suggests() {
        let r = registry();
        let err = r.select(&["jqury".to_owned()]).unwrap_err();
        match err {
            RegistryError::UnknownLibrary { name, candidates } => {
                assert_eq!(name, "jqury");
                assert_eq!(candidates, vec!["jquery"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_loaded_registry_sorted_by_name() {
        let loaded = registry().load_all().unwrap();
        let names: Vec<&str> = loaded.iter().map(|(k, _)| k).collect();
        assert_eq!(
            names,
            vec!["bootstrap", "bootstrap-icons", "jquery", "zepto"]
        );
    }

    #[test]
    fn test_from_manifest_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fanstat.toml");
        std::fs::write(
            &path,
            "[[package]]\nname = \"foopkg\"\n[[package.library]]\nname = \"foo\"\nrootpath = \"/pkg/foo\"\nresources = [\"foo.js\"]\n",
        )
        .unwrap();
        let r = Registry::from_manifest_path(&path).unwrap();
        assert_eq!(r.entry_points().len(), 1);
        assert_eq!(r.packages(), vec!["foopkg"]);
    }
}
