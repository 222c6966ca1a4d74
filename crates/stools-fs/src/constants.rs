//! Well-known names inside an stools install root.

use std::path::Path;

/// Fixed file and directory names under the install root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoolsPath {
    /// The `conf.yaml` registry file (tool name to description)
    Registry,
    /// The `module` directory holding one subdirectory per tool
    ModuleDir,
    /// The `tool` executable inside each module directory
    ToolEntry,
}

impl StoolsPath {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registry => "conf.yaml",
            Self::ModuleDir => "module",
            Self::ToolEntry => "tool",
        }
    }
}

impl AsRef<Path> for StoolsPath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for StoolsPath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for StoolsPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
