//! Navigation manager: resolves the current page once, then renders groups.

use super::entry::{EntryPatch, NavigationEntry};
use super::group::{EntryTarget, NavGroup};
use super::host::Host;
use super::paths::PathTable;
use super::render::render_group;
use super::store::NavigationConfig;

/// Owns the navigation configuration for one page view.
///
/// The current page is fixed at construction; later location changes are not
/// followed. Entry edits made between render passes show up in the next pass.
#[derive(Debug, Clone)]
pub struct NavigationManager {
    config: NavigationConfig,
    paths: PathTable,
    current_page: String,
}

impl NavigationManager {
    pub fn new(config: NavigationConfig, paths: PathTable, location: &str) -> Self {
        let current_page = paths.resolve(location).to_string();
        tracing::debug!("Resolved location {} to page {}", location, current_page);

        let mut manager = Self {
            config,
            paths,
            current_page,
        };
        manager.refresh_active();
        manager
    }

    /// Read the location from the host
    pub fn for_host<H: Host + ?Sized>(config: NavigationConfig, paths: PathTable, host: &H) -> Self {
        Self::new(config, paths, &host.location_path())
    }

    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    pub fn paths(&self) -> &PathTable {
        &self.paths
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn into_config(self) -> NavigationConfig {
        self.config
    }

    /// Recompute stored active flags against the current page
    pub fn refresh_active(&mut self) {
        self.config.set_active_page(&self.current_page);
    }

    pub fn render(&self, group: NavGroup) -> String {
        render_group(self.config.entries(group), group, &self.current_page)
    }

    /// Render `group` into `container_id` (default: the group's own
    /// container). Returns whether the container existed; a missing one is
    /// silently skipped.
    pub fn render_into<H: Host + ?Sized>(
        &self,
        group: NavGroup,
        container_id: Option<&str>,
        host: &mut H,
    ) -> bool {
        let container_id = container_id.unwrap_or(group.container_id());
        if !host.has_container(container_id) {
            tracing::debug!("No {} container on page, skipping {} navigation", container_id, group);
            return false;
        }
        let markup = self.render(group);
        host.replace_container(container_id, &markup)
    }

    pub fn render_main<H: Host + ?Sized>(&self, host: &mut H) -> bool {
        self.render_into(NavGroup::Main, None, host)
    }

    pub fn render_public<H: Host + ?Sized>(&self, host: &mut H) -> bool {
        self.render_into(NavGroup::Public, None, host)
    }

    pub fn render_admin<H: Host + ?Sized>(&self, host: &mut H) -> bool {
        self.render_into(NavGroup::Admin, None, host)
    }

    pub fn render_faculty<H: Host + ?Sized>(&self, host: &mut H) -> bool {
        self.render_into(NavGroup::Faculty, None, host)
    }

    /// One pass per group whose container is present. Returns the groups
    /// that were rendered.
    pub fn render_all<H: Host + ?Sized>(&self, host: &mut H) -> Vec<NavGroup> {
        let mut rendered = Vec::new();
        for group in NavGroup::ALL {
            if self.render_into(group, None, host) {
                rendered.push(group);
            }
        }
        rendered
    }

    pub fn add_entry(&mut self, entry: NavigationEntry, target: EntryTarget) {
        self.config.add(entry, target);
        self.refresh_active();
    }

    pub fn remove_entry(&mut self, id: &str, target: EntryTarget) -> usize {
        let removed = self.config.remove(id, target);
        self.refresh_active();
        removed
    }

    // EntryPatch cannot change an id, so active flags stay valid without a refresh.
    pub fn update_entry(&mut self, id: &str, patch: &EntryPatch, target: EntryTarget) -> bool {
        self.config.update(id, patch, target)
    }

    pub fn entry(&self, id: &str, target: EntryTarget) -> Option<&NavigationEntry> {
        self.config.get(id, target)
    }

    pub fn entries(&self, target: EntryTarget) -> &[NavigationEntry] {
        self.config.all(target)
    }
}
