//! The four fixed navigation groups.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::NavError;
use super::normalize::HrefPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavGroup {
    /// Student portal tabs
    Main,
    /// Landing page menu
    Public,
    Admin,
    Faculty,
}

impl NavGroup {
    /// Render order used by initialization
    pub const ALL: [NavGroup; 4] = [
        NavGroup::Main,
        NavGroup::Public,
        NavGroup::Admin,
        NavGroup::Faculty,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NavGroup::Main => "main",
            NavGroup::Public => "public",
            NavGroup::Admin => "admin",
            NavGroup::Faculty => "faculty",
        }
    }

    /// Id of the page element this group renders into
    pub fn container_id(self) -> &'static str {
        match self {
            NavGroup::Main => "moduleTabs",
            NavGroup::Public => "navMenu",
            NavGroup::Admin => "adminTabs",
            NavGroup::Faculty => "facultyTabs",
        }
    }

    /// Whether entries of this group can be marked active. The landing menu
    /// always renders plain links.
    pub fn tracks_active(self) -> bool {
        !matches!(self, NavGroup::Public)
    }

    /// Only the student tabs get the full canonicalization; the other menus
    /// just get a leading slash.
    pub fn href_policy(self) -> HrefPolicy {
        match self {
            NavGroup::Main => HrefPolicy::FULL,
            NavGroup::Public | NavGroup::Admin | NavGroup::Faculty => HrefPolicy::LIGHT,
        }
    }
}

impl fmt::Display for NavGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavGroup {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(NavGroup::Main),
            "public" => Ok(NavGroup::Public),
            "admin" => Ok(NavGroup::Admin),
            "faculty" => Ok(NavGroup::Faculty),
            other => Err(NavError::UnknownGroup(other.to_string())),
        }
    }
}

/// The groups reachable through add/remove/update/get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryTarget {
    #[default]
    Main,
    Public,
}

impl EntryTarget {
    /// Maps the legacy `isMainNav` flag onto a target
    pub fn from_main_flag(is_main: bool) -> Self {
        if is_main {
            EntryTarget::Main
        } else {
            EntryTarget::Public
        }
    }

    pub fn group(self) -> NavGroup {
        match self {
            EntryTarget::Main => NavGroup::Main,
            EntryTarget::Public => NavGroup::Public,
        }
    }
}

impl fmt::Display for EntryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.group(), f)
    }
}

impl FromStr for EntryTarget {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<NavGroup>()? {
            NavGroup::Main => Ok(EntryTarget::Main),
            NavGroup::Public => Ok(EntryTarget::Public),
            group => Err(NavError::ReadOnlyGroup(group)),
        }
    }
}
