//! The install root: base directory for the registry and module tree.

use std::path::{Path, PathBuf};

use stools_fs::{NormalizedPath, StoolsPath};

use crate::error::{Error, Result};

/// Directory holding `conf.yaml` and `module/`.
///
/// Determined once at startup and handed to every component; nothing reads
/// the executable location after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRoot {
    root: NormalizedPath,
}

impl InstallRoot {
    /// Use `path` as the install root without further resolution.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            root: NormalizedPath::new(path),
        }
    }

    /// Resolve `path` to an absolute install root.
    ///
    /// Existing directories are canonicalized; a missing directory is made
    /// absolute against the current directory so `add` can create it later.
    pub fn from_dir(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let resolved = if path.exists() {
            dunce::canonicalize(path).map_err(|e| Error::InstallRoot {
                message: format!("{}: {}", path.display(), e),
            })?
        } else {
            std::path::absolute(path).map_err(|e| Error::InstallRoot {
                message: format!("{}: {}", path.display(), e),
            })?
        };
        Ok(Self::new(resolved))
    }

    /// The directory containing the running executable.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe().map_err(|e| Error::InstallRoot {
            message: e.to_string(),
        })?;
        let exe = dunce::canonicalize(&exe).unwrap_or(exe);
        let dir = exe.parent().map(PathBuf::from).ok_or_else(|| Error::InstallRoot {
            message: format!("{} has no parent directory", exe.display()),
        })?;
        Ok(Self::new(dir))
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.root
    }

    /// `<root>/conf.yaml`
    pub fn registry_path(&self) -> NormalizedPath {
        self.root.join(StoolsPath::Registry.as_str())
    }

    /// `<root>/module`
    pub fn module_root(&self) -> NormalizedPath {
        self.root.join(StoolsPath::ModuleDir.as_str())
    }

    /// `<root>/module/<name>`
    pub fn module_dir(&self, name: &str) -> NormalizedPath {
        self.module_root().join(name)
    }

    /// `<root>/module/<name>/tool`
    pub fn tool_executable(&self, name: &str) -> NormalizedPath {
        self.module_dir(name).join(StoolsPath::ToolEntry.as_str())
    }
}
