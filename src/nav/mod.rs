//! Navigation core: configuration store, page resolution, active state and
//! menu rendering.
//!
//! Everything here is synchronous and infallible: a menu that cannot be
//! rendered is skipped, never an error that breaks the page.

pub mod active;
pub mod defaults;
pub mod entry;
pub mod error;
pub mod group;
pub mod host;
pub mod manager;
pub mod normalize;
pub mod paths;
pub mod render;
pub mod startup;
pub mod store;

pub use entry::{EntryPatch, NavigationEntry};
pub use error::NavError;
pub use group::{EntryTarget, NavGroup};
pub use host::{Host, MemoryHost};
pub use manager::NavigationManager;
pub use normalize::{normalize, normalize_href, HrefPolicy};
pub use paths::{resolve, PathTable, RouteMapping, DEFAULT_PAGE};
pub use render::{escape_html, render_group};
pub use startup::{initialize, schedule_init, ReadyState};
pub use store::{NavigationConfig, NavigationFile};
