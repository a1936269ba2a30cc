//! Navigation configuration store.
//!
//! Holds the four groups in configured order. Sorting for display happens on
//! copies in the renderer, so the stored order is always insertion order.
//! Runtime edits live only as long as the value itself.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use super::active::apply_active;
use super::defaults;
use super::entry::{EntryPatch, NavigationEntry};
use super::error::Result;
use super::group::{EntryTarget, NavGroup};
use super::paths::RouteMapping;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationConfig {
    #[serde(default = "defaults::main_nav")]
    main_nav: Vec<NavigationEntry>,
    #[serde(default = "defaults::public_nav")]
    public_nav: Vec<NavigationEntry>,
    #[serde(default = "defaults::admin_nav")]
    admin_nav: Vec<NavigationEntry>,
    #[serde(default = "defaults::faculty_nav")]
    faculty_nav: Vec<NavigationEntry>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            main_nav: defaults::main_nav(),
            public_nav: defaults::public_nav(),
            admin_nav: defaults::admin_nav(),
            faculty_nav: defaults::faculty_nav(),
        }
    }
}

/// A group id that appears more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateId {
    pub group: NavGroup,
    pub id: String,
}

impl fmt::Display for DuplicateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate id {:?} in {} navigation", self.id, self.group)
    }
}

impl NavigationConfig {
    /// All four groups empty
    pub fn empty() -> Self {
        Self {
            main_nav: Vec::new(),
            public_nav: Vec::new(),
            admin_nav: Vec::new(),
            faculty_nav: Vec::new(),
        }
    }

    /// Replace a whole group. Construction-time only; runtime edits go
    /// through [`add`](Self::add) and friends.
    pub fn with_group(mut self, group: NavGroup, entries: Vec<NavigationEntry>) -> Self {
        *self.group_mut(group) = entries;
        self
    }

    pub fn entries(&self, group: NavGroup) -> &[NavigationEntry] {
        match group {
            NavGroup::Main => &self.main_nav,
            NavGroup::Public => &self.public_nav,
            NavGroup::Admin => &self.admin_nav,
            NavGroup::Faculty => &self.faculty_nav,
        }
    }

    fn group_mut(&mut self, group: NavGroup) -> &mut Vec<NavigationEntry> {
        match group {
            NavGroup::Main => &mut self.main_nav,
            NavGroup::Public => &mut self.public_nav,
            NavGroup::Admin => &mut self.admin_nav,
            NavGroup::Faculty => &mut self.faculty_nav,
        }
    }

    /// Append an entry. Duplicate ids are accepted.
    pub fn add(&mut self, entry: NavigationEntry, target: EntryTarget) {
        tracing::debug!("Adding {} to {} navigation", entry.id, target);
        self.group_mut(target.group()).push(entry);
    }

    /// Remove every entry with `id`, returning how many went
    pub fn remove(&mut self, id: &str, target: EntryTarget) -> usize {
        let entries = self.group_mut(target.group());
        let before = entries.len();
        entries.retain(|entry| entry.id != id);
        before - entries.len()
    }

    /// Merge `patch` onto the first entry with `id`. Returns false when no
    /// entry matched and nothing changed.
    pub fn update(&mut self, id: &str, patch: &EntryPatch, target: EntryTarget) -> bool {
        match self
            .group_mut(target.group())
            .iter_mut()
            .find(|entry| entry.id == id)
        {
            Some(entry) => {
                patch.apply(entry);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str, target: EntryTarget) -> Option<&NavigationEntry> {
        self.all(target).iter().find(|entry| entry.id == id)
    }

    /// Stored (insertion) order
    pub fn all(&self, target: EntryTarget) -> &[NavigationEntry] {
        self.entries(target.group())
    }

    /// Recompute stored flags for every group that shows an active entry
    pub fn set_active_page(&mut self, page: &str) {
        for group in NavGroup::ALL {
            if group.tracks_active() {
                apply_active(self.group_mut(group), page);
            }
        }
    }

    /// Ids repeated within a group. Not an error, later lookups just never
    /// see the second copy.
    pub fn lint(&self) -> Vec<DuplicateId> {
        let mut found = Vec::new();
        for group in NavGroup::ALL {
            let entries = self.entries(group);
            for (index, entry) in entries.iter().enumerate() {
                let first = entries.iter().position(|e| e.id == entry.id);
                let already_reported = found
                    .iter()
                    .any(|d: &DuplicateId| d.group == group && d.id == entry.id);
                if first != Some(index) && !already_reported {
                    found.push(DuplicateId {
                        group,
                        id: entry.id.clone(),
                    });
                }
            }
        }
        found
    }
}

/// On-disk navigation file: the four groups (each optional) plus extra routes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationFile {
    #[serde(flatten)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub routes: Vec<RouteMapping>,
}

impl NavigationFile {
    pub fn from_json(json: &str) -> Result<Self> {
        let file: NavigationFile = serde_json::from_str(json)?;
        for lint in file.navigation.lint() {
            tracing::warn!("Navigation config: {}", lint);
        }
        Ok(file)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_json(&content)?;
        tracing::info!(
            "Loaded navigation from {} ({} extra routes)",
            path.display(),
            file.routes.len()
        );
        Ok(file)
    }
}
