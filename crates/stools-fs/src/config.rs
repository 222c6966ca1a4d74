//! YAML document loading and saving

use crate::{Error, NormalizedPath, Result, io};
use serde::{Serialize, de::DeserializeOwned};

/// Reads and writes serde values as YAML documents.
///
/// Saving goes through [`io::write_atomic`], so a reader never sees a
/// half-written file.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load a document, returning `None` when the file does not exist.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn load_if_exists<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<Option<T>> {
        match io::read_text_if_exists(path)? {
            Some(content) => self.parse(path, &content).map(Some),
            None => Ok(None),
        }
    }

    fn parse<T: DeserializeOwned>(&self, path: &NormalizedPath, content: &str) -> Result<T> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Replace the file at `path` with `value` serialized as YAML.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let content = serde_yaml::to_string(value).map_err(|e| Error::ConfigSerialize {
            path: path.to_native(),
            message: e.to_string(),
        })?;

        io::write_atomic(path, content.as_bytes())
    }
}
