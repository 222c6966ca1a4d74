//! Filesystem layer for stools
//!
//! Provides normalized path handling, atomic writes, symlink-dereferencing
//! tree copies and YAML document storage.

pub mod config;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use config::ConfigStore;
pub use constants::StoolsPath;
pub use error::{Error, Result};
pub use path::{NormalizedPath, validate_path_identifier};
