//! Page-load startup.
//!
//! Menus are built once the document is ready: right away if it already is,
//! otherwise from a one-shot callback on the load event.

use super::host::Host;
use super::manager::NavigationManager;
use super::paths::PathTable;
use super::store::NavigationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    /// Document still parsing, load event not fired yet
    Loading,
    Ready,
}

impl ReadyState {
    /// Map a DOM `document.readyState` value
    pub fn from_document_state(state: &str) -> Self {
        if state == "loading" {
            ReadyState::Loading
        } else {
            ReadyState::Ready
        }
    }
}

/// Run `init` now when ready, or hand it to `defer` to be called once on load.
pub fn schedule_init<F, D>(ready: ReadyState, defer: D, init: F)
where
    F: FnOnce() + 'static,
    D: FnOnce(Box<dyn FnOnce()>),
{
    match ready {
        ReadyState::Ready => init(),
        ReadyState::Loading => defer(Box::new(init)),
    }
}

/// Build the manager from the host's location and render every group whose
/// container is on the page.
pub fn initialize<H: Host + ?Sized>(
    config: NavigationConfig,
    paths: PathTable,
    host: &mut H,
) -> NavigationManager {
    let manager = NavigationManager::for_host(config, paths, host);
    let rendered = manager.render_all(host);
    tracing::debug!(
        "Navigation initialized for page {} ({} groups rendered)",
        manager.current_page(),
        rendered.len()
    );
    manager
}
