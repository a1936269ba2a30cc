use thiserror::Error;

use super::group::NavGroup;

/// Errors raised at the edges of the navigation core.
///
/// Rendering and resolution never fail; these only come from parsing group
/// names, the HTTP entry-management surface and loading navigation files.
#[derive(Debug, Error)]
pub enum NavError {
    #[error("Unknown navigation group: {0}")]
    UnknownGroup(String),

    #[error("Navigation group is not editable: {0}")]
    ReadOnlyGroup(NavGroup),

    #[error("Navigation entry not found: {0}")]
    EntryNotFound(String),

    #[error("Navigation file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Navigation file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NavError>;
