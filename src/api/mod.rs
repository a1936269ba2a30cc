//! HTTP API handlers
//!
//! Server-side templates fetch rendered menus from here instead of running
//! the navigation script in the browser. Every request resolves against a
//! snapshot of the shared store, so a render never sees a half-applied edit.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::nav::{
    initialize, EntryPatch, EntryTarget, MemoryHost, NavError, NavGroup, NavigationConfig,
    NavigationEntry, NavigationManager, PathTable,
};
use crate::ui;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub navigation: Arc<RwLock<NavigationConfig>>,
    pub paths: Arc<PathTable>,
}

impl AppState {
    pub fn new(navigation: NavigationConfig, paths: PathTable) -> Self {
        Self {
            navigation: Arc::new(RwLock::new(navigation)),
            paths: Arc::new(paths),
        }
    }

    /// Manager over a snapshot of the store, resolved for `location`
    pub async fn manager(&self, location: &str) -> NavigationManager {
        let config = self.navigation.read().await.clone();
        NavigationManager::new(config, (*self.paths).clone(), location)
    }
}

/// Error response
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for NavError {
    fn into_response(self) -> Response {
        let status = match self {
            NavError::UnknownGroup(_) | NavError::EntryNotFound(_) => StatusCode::NOT_FOUND,
            NavError::ReadOnlyGroup(_) => StatusCode::FORBIDDEN,
            NavError::Io(_) | NavError::Parse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// `?path=` query; a missing path means the site root
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    #[serde(default = "root_path")]
    pub path: String,
}

fn root_path() -> String {
    "/".to_string()
}

/// Build the router with every API and UI route
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/status", get(status_handler))
        // Rendered navigation
        .route("/nav", get(nav_handler))
        .route("/nav/page", get(page_handler))
        .route("/nav/{group}", get(group_fragment_handler))
        // Entry management (main and public menus only)
        .route("/api/nav/{target}", get(list_entries_handler).post(add_entry_handler))
        .route(
            "/api/nav/{target}/{id}",
            get(get_entry_handler)
                .patch(update_entry_handler)
                .delete(delete_entry_handler),
        )
        // Web UI
        .route("/preview", get(ui::preview_page))
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub routes: usize,
    pub entries: BTreeMap<NavGroup, usize>,
}

/// GET /status - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    let navigation = state.navigation.read().await;
    let entries = NavGroup::ALL
        .into_iter()
        .map(|group| (group, navigation.entries(group).len()))
        .collect();

    Json(StatusResponse {
        service: "portal-nav",
        version: env!("PORTAL_NAV_VERSION"),
        git_sha: env!("PORTAL_NAV_GIT_SHA"),
        routes: state.paths.len(),
        entries,
    })
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub page: String,
    /// Container id to rendered markup
    pub containers: BTreeMap<String, String>,
}

/// GET /nav?path=/library/ - All four menus rendered for a location
pub async fn nav_handler(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Json<NavigationResponse> {
    let config = state.navigation.read().await.clone();
    let mut host = MemoryHost::new(query.path)
        .with_containers(NavGroup::ALL.into_iter().map(NavGroup::container_id));
    let manager = initialize(config, (*state.paths).clone(), &mut host);

    Json(NavigationResponse {
        page: manager.current_page().to_string(),
        containers: host.into_containers(),
    })
}

#[derive(Serialize)]
pub struct PageResponse {
    pub path: String,
    pub page: String,
}

/// GET /nav/page?path=/library/ - Page identity for a location
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> Json<PageResponse> {
    let page = state.paths.resolve(&query.path).to_string();
    Json(PageResponse {
        path: query.path,
        page,
    })
}

/// GET /nav/{group}?path=/library/ - One menu as an HTML fragment
pub async fn group_fragment_handler(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Query(query): Query<LocationQuery>,
) -> Result<Html<String>, NavError> {
    let group: NavGroup = group.parse()?;
    let manager = state.manager(&query.path).await;
    Ok(Html(manager.render(group)))
}

// =============================================================================
// Entry management
// =============================================================================

/// GET /api/nav/{target} - Entries in stored order
pub async fn list_entries_handler(
    State(state): State<AppState>,
    Path(target): Path<String>,
) -> Result<Json<Vec<NavigationEntry>>, NavError> {
    let target: EntryTarget = target.parse()?;
    let navigation = state.navigation.read().await;
    Ok(Json(navigation.all(target).to_vec()))
}

/// POST /api/nav/{target} - Append an entry
pub async fn add_entry_handler(
    State(state): State<AppState>,
    Path(target): Path<String>,
    Json(entry): Json<NavigationEntry>,
) -> Result<(StatusCode, Json<NavigationEntry>), NavError> {
    let target: EntryTarget = target.parse()?;
    tracing::info!("Adding navigation entry {} to {}", entry.id, target);
    state.navigation.write().await.add(entry.clone(), target);
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /api/nav/{target}/{id} - First entry with this id
pub async fn get_entry_handler(
    State(state): State<AppState>,
    Path((target, id)): Path<(String, String)>,
) -> Result<Json<NavigationEntry>, NavError> {
    let target: EntryTarget = target.parse()?;
    let navigation = state.navigation.read().await;
    navigation
        .get(&id, target)
        .cloned()
        .map(Json)
        .ok_or(NavError::EntryNotFound(id))
}

/// PATCH /api/nav/{target}/{id} - Merge fields onto the first match
pub async fn update_entry_handler(
    State(state): State<AppState>,
    Path((target, id)): Path<(String, String)>,
    Json(patch): Json<EntryPatch>,
) -> Result<Json<NavigationEntry>, NavError> {
    let target: EntryTarget = target.parse()?;
    let mut navigation = state.navigation.write().await;
    if !navigation.update(&id, &patch, target) {
        return Err(NavError::EntryNotFound(id));
    }
    tracing::info!("Updated navigation entry {} in {}", id, target);
    navigation
        .get(&id, target)
        .cloned()
        .map(Json)
        .ok_or(NavError::EntryNotFound(id))
}

/// DELETE /api/nav/{target}/{id} - Remove every entry with this id
pub async fn delete_entry_handler(
    State(state): State<AppState>,
    Path((target, id)): Path<(String, String)>,
) -> Result<StatusCode, NavError> {
    let target: EntryTarget = target.parse()?;
    let removed = state.navigation.write().await.remove(&id, target);
    tracing::info!("Removed {} navigation entries {} from {}", removed, id, target);
    Ok(StatusCode::NO_CONTENT)
}
