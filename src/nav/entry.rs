//! Navigation entries and partial updates to them.

use serde::{Deserialize, Serialize};

/// One clickable menu item.
///
/// `id` is the identity used for active-state matching and for the entry
/// management operations. It is unique within its group by convention only:
/// nothing rejects a duplicate, lookups simply return the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub id: String,
    pub title: String,
    /// Absolute site path, in-page anchor or external URL
    #[serde(default)]
    pub href: String,
    /// Icon class, passed through untouched (e.g. "bi-book")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub order: i32,
    /// Recomputed on every resolution pass, never read from configuration
    #[serde(default, skip_deserializing)]
    pub active: bool,
    /// Tooltip text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NavigationEntry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            href: href.into(),
            icon: None,
            order,
            active: false,
            description: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Field-wise patch merged onto an existing entry.
///
/// Absent fields leave the entry untouched. `id` and `active` are not
/// patchable: the first is the entry's identity, the second is derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub href: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
    pub description: Option<String>,
}

impl EntryPatch {
    /// Patch that only replaces the title
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, entry: &mut NavigationEntry) {
        if let Some(ref title) = self.title {
            entry.title = title.clone();
        }
        if let Some(ref href) = self.href {
            entry.href = href.clone();
        }
        if let Some(ref icon) = self.icon {
            entry.icon = Some(icon.clone());
        }
        if let Some(order) = self.order {
            entry.order = order;
        }
        if let Some(ref description) = self.description {
            entry.description = Some(description.clone());
        }
    }
}
