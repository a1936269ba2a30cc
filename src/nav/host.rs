//! The page the menus are rendered into.

use std::collections::BTreeMap;

/// Location and container access supplied by whatever hosts the menus: the
/// browser DOM, a server-side page shell, or a test double.
pub trait Host {
    /// Current location path, e.g. `/library/`
    fn location_path(&self) -> String;

    fn has_container(&self, id: &str) -> bool;

    /// Overwrite the container's contents. Returns false, changing nothing,
    /// when the container does not exist.
    fn replace_container(&mut self, id: &str, markup: &str) -> bool;
}

/// In-memory page: a location plus named containers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    location: String,
    containers: BTreeMap<String, String>,
}

impl MemoryHost {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            containers: BTreeMap::new(),
        }
    }

    /// Add an empty container
    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.containers.insert(id.into(), String::new());
        self
    }

    pub fn with_containers<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            self.containers.insert(id.into(), String::new());
        }
        self
    }

    pub fn container(&self, id: &str) -> Option<&str> {
        self.containers.get(id).map(String::as_str)
    }

    pub fn containers(&self) -> &BTreeMap<String, String> {
        &self.containers
    }

    pub fn into_containers(self) -> BTreeMap<String, String> {
        self.containers
    }
}

impl Host for MemoryHost {
    fn location_path(&self) -> String {
        self.location.clone()
    }

    fn has_container(&self, id: &str) -> bool {
        self.containers.contains_key(id)
    }

    fn replace_container(&mut self, id: &str, markup: &str) -> bool {
        match self.containers.get_mut(id) {
            Some(contents) => {
                contents.clear();
                contents.push_str(markup);
                true
            }
            None => false,
        }
    }
}
