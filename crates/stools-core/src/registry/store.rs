//! Registry persistence

use stools_fs::{ConfigStore, NormalizedPath};
use tracing::debug;

use super::{Registry, ToolEntry};
use crate::error::Result;
use crate::root::InstallRoot;

/// Reads and writes the registry file.
///
/// Every mutating call is a full load-modify-save cycle. There is no lock
/// around the cycle, so concurrent writers can lose updates.
#[derive(Debug, Clone)]
pub struct RegistryStore {
    path: NormalizedPath,
    config: ConfigStore,
}

impl RegistryStore {
    /// Store backed by the YAML file at `path`.
    pub fn new(path: NormalizedPath) -> Self {
        Self {
            path,
            config: ConfigStore::new(),
        }
    }

    /// Store backed by the install root's `conf.yaml`.
    pub fn for_root(root: &InstallRoot) -> Self {
        Self::new(root.registry_path())
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Load the registry, or `None` if the file does not exist.
    ///
    /// Unparsable content is an error.
    pub fn load_if_exists(&self) -> Result<Option<Registry>> {
        Ok(self.config.load_if_exists(&self.path)?)
    }

    /// Load the registry; a missing file is an empty registry.
    pub fn load(&self) -> Result<Registry> {
        Ok(self.load_if_exists()?.unwrap_or_default())
    }

    /// Replace the file's content with `registry`.
    pub fn save(&self, registry: &Registry) -> Result<()> {
        debug!(path = %self.path, entries = registry.len(), "Saving registry");
        self.config.save(&self.path, registry)?;
        Ok(())
    }

    /// Entries in file order.
    pub fn list_ordered(&self) -> Result<Vec<ToolEntry>> {
        Ok(self.load()?.iter().cloned().collect())
    }

    /// Set or overwrite one entry and save. Last write wins.
    pub fn upsert(&self, name: &str, description: &str) -> Result<()> {
        let mut registry = self.load()?;
        if registry.upsert(name, description).is_some() {
            debug!(tool = name, "Overwriting registry entry");
        }
        self.save(&registry)
    }

    /// Remove one entry and save.
    ///
    /// A missing registry file short-circuits without creating one. Returns
    /// whether an entry was removed; an absent name still rewrites the file
    /// unchanged.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let Some(mut registry) = self.load_if_exists()? else {
            debug!(path = %self.path, "No registry file, nothing to delete");
            return Ok(false);
        };
        let removed = registry.remove(name).is_some();
        self.save(&registry)?;
        Ok(removed)
    }
}
