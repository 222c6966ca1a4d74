//! Core types for the tool registry

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One registered tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Unique tool name, also the module directory name
    pub name: String,
    /// One-line description shown in the usage listing
    pub description: String,
}

impl ToolEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Ordered collection of tool entries with unique names.
///
/// Serializes as a flat map of name to description. Entries keep the order
/// they were read in; new names are appended and overwritten names keep
/// their position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: Vec<ToolEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or overwrite the description for `name`.
    ///
    /// Returns the previous description when the name was already present.
    pub fn upsert(&mut self, name: impl Into<String>, description: impl Into<String>) -> Option<String> {
        let name = name.into();
        let description = description.into();
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.description, description)),
            None => {
                self.entries.push(ToolEntry { name, description });
                None
            }
        }
    }

    /// Remove `name`, returning the entry if it was present.
    pub fn remove(&mut self, name: &str) -> Option<ToolEntry> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolEntry> {
        self.entries.iter()
    }

    /// `(name, description)` pairs in registry order.
    pub fn list_ordered(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.name.as_str(), e.description.as_str()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ToolEntry;
    type IntoIter = std::slice::Iter<'a, ToolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<(String, String)> for Registry {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, description) in iter {
            registry.upsert(name, description);
        }
        registry
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.description)?;
        }
        map.end()
    }
}

struct RegistryVisitor;

impl<'de> Visitor<'de> for RegistryVisitor {
    type Value = Registry;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of tool names to descriptions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Registry, A::Error> {
        let mut registry = Registry::new();
        while let Some((name, description)) = access.next_entry::<String, String>()? {
            registry.upsert(name, description);
        }
        Ok(registry)
    }

    // An empty YAML document is null
    fn visit_unit<E: serde::de::Error>(self) -> Result<Registry, E> {
        Ok(Registry::new())
    }

    fn visit_none<E: serde::de::Error>(self) -> Result<Registry, E> {
        Ok(Registry::new())
    }
}

impl<'de> Deserialize<'de> for Registry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RegistryVisitor)
    }
}
