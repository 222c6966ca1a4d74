//! Module directory management: installing, removing and resolving tools.

use std::path::{Path, PathBuf};

use stools_fs::{NormalizedPath, io, validate_path_identifier};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::registry::RegistryStore;
use crate::root::InstallRoot;

/// Owns `<root>/module/*` and keeps the registry in step with it.
#[derive(Debug, Clone)]
pub struct ModuleManager {
    root: InstallRoot,
    registry: RegistryStore,
}

impl ModuleManager {
    pub fn new(root: InstallRoot) -> Self {
        let registry = RegistryStore::for_root(&root);
        Self { root, registry }
    }

    pub fn root(&self) -> &InstallRoot {
        &self.root
    }

    pub fn registry(&self) -> &RegistryStore {
        &self.registry
    }

    /// Install the tool directory at `toolpath` under the name of its last
    /// path segment and record `description` for it.
    ///
    /// An existing module of the same name is replaced. The copy happens
    /// before the registry update; a failed registry write leaves the module
    /// directory in place without an entry.
    pub fn add_tool(&self, toolpath: &Path, description: &str) -> Result<String> {
        let source = std::path::absolute(toolpath).map_err(|e| Error::InvalidToolPath {
            path: toolpath.to_path_buf(),
            message: e.to_string(),
        })?;
        let source = NormalizedPath::new(&source);

        let tool_file = source.join(stools_fs::StoolsPath::ToolEntry.as_str());
        if !tool_file.exists() {
            return Err(Error::ToolFileMissing {
                path: tool_file.to_native(),
            });
        }

        let name = source
            .file_name()
            .ok_or_else(|| Error::InvalidToolPath {
                path: source.to_native(),
                message: "path has no final segment".into(),
            })?
            .to_string();
        Self::validate_tool_name(&name)?;

        let module_root = self.root.module_root();
        let source_real = resolve_existing(&source.to_native());
        let module_real = resolve_existing(&module_root.to_native());
        if source_real.starts_with(&module_real) {
            return Err(Error::InvalidToolPath {
                path: source.to_native(),
                message: "source lies inside the module directory".into(),
            });
        }
        if module_real.join(&name).starts_with(&source_real) {
            return Err(Error::InvalidToolPath {
                path: source.to_native(),
                message: "cannot copy a directory into itself".into(),
            });
        }

        io::ensure_dir(self.root.path())?;
        io::ensure_dir(&module_root)?;

        let target = self.root.module_dir(&name);
        if target.exists() {
            debug!(tool = %name, path = %target, "Replacing existing module directory");
            io::remove_tree(&target)?;
        }

        debug!(tool = %name, from = %source, to = %target, "Copying tool");
        io::copy_tree(&source, &target)?;

        let executable = self.root.tool_executable(&name);
        if let Err(e) = io::set_executable(&executable) {
            warn!("Failed to set executable permission on {}: {}", executable, e);
        }

        self.registry.upsert(&name, description)?;
        Ok(name)
    }

    /// Delete the module directory for `name`, then its registry entry.
    ///
    /// Unknown names are a no-op; a missing registry file is left missing.
    pub fn remove_tool(&self, name: &str) -> Result<()> {
        Self::validate_tool_name(name)?;

        let target = self.root.module_dir(name);
        debug!(tool = name, path = %target, "Removing module directory");
        io::remove_tree(&target)?;

        if !self.registry.delete(name)? {
            debug!(tool = name, "No registry entry to remove");
        }
        Ok(())
    }

    /// Absolute path of the `tool` executable for `name`.
    pub fn resolve(&self, name: &str) -> Result<NormalizedPath> {
        if validate_path_identifier(name, "Tool name").is_err() {
            return Err(Error::ToolNotFound { name: name.into() });
        }
        let executable = self.root.tool_executable(name);
        if executable.exists() {
            Ok(executable)
        } else {
            Err(Error::ToolNotFound { name: name.into() })
        }
    }

    fn validate_tool_name(name: &str) -> Result<()> {
        validate_path_identifier(name, "Tool name")
            .map_err(|message| Error::InvalidToolName { message })
    }
}

/// Canonicalize the longest existing prefix of `path` and re-append the rest.
fn resolve_existing(path: &Path) -> PathBuf {
    let mut missing = Vec::new();
    let mut current = path;
    loop {
        if let Ok(real) = dunce::canonicalize(current) {
            return missing.iter().rev().fold(real, |acc, part| acc.join(part));
        }
        match (current.parent(), current.file_name()) {
            (Some(parent), Some(part)) => {
                missing.push(part.to_os_string());
                current = parent;
            }
            _ => return path.to_path_buf(),
        }
    }
}
