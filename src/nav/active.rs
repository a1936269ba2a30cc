//! Active-state computation.
//!
//! One rule for every group: the first entry whose id equals the current page
//! is active, everything else is not. Rendering and the stored flags both go
//! through [`active_position`] so they cannot disagree.

use super::entry::NavigationEntry;

/// Index of the entry that should be marked active, if any
pub fn active_position(entries: &[NavigationEntry], page: &str) -> Option<usize> {
    entries.iter().position(|entry| entry.id == page)
}

/// Rewrite the stored `active` flags for `page`. Idempotent.
pub fn apply_active(entries: &mut [NavigationEntry], page: &str) {
    let active = active_position(entries, page);
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.active = Some(index) == active;
    }
}
