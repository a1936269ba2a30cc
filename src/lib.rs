//! Portal Navigation - Rust Implementation
//!
//! Role-specific navigation menus for the college ERP portal.
//!
//! This library provides:
//! - The navigation store (student, landing page, admin and faculty menus)
//! - Location to page resolution against the portal's routes
//! - Active-entry computation and menu markup rendering
//! - An HTTP service serving rendered menus to server-side templates
//! - A browser build that renders straight into the page (wasm32)

pub mod nav;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod ui;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use nav::{NavigationConfig, NavigationManager};
