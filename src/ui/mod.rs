//! Preview page: a bare portal shell with all four menu containers filled in.
//!
//! Useful for checking a navigation file before the templates pick it up.
//! Uses Bootstrap (the classes the menus are rendered with) and Bootstrap
//! Icons from the CDN.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
};

use crate::api::{AppState, LocationQuery};
use crate::nav::{escape_html, initialize, MemoryHost, NavGroup};

/// HTML document wrapper with Bootstrap
fn html_doc(title: &str, content: &str) -> String {
    let version = env!("PORTAL_NAV_VERSION");
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} - Portal Navigation</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.11.3/font/bootstrap-icons.min.css">
    <style>
        section {{ margin-bottom: 2rem; }}
        .nav {{ gap: 0.5rem; flex-wrap: wrap; }}
    </style>
</head>
<body>
    <main class="container py-4">
        {content}
    </main>
    <footer class="container">
        <small class="text-muted">Portal Navigation v{version}</small>
    </footer>
</body>
</html>"#
    )
}

fn section(heading: &str, group: NavGroup, markup: &str) -> String {
    let list_class = match group {
        NavGroup::Public => "navbar-nav flex-row",
        _ => "nav",
    };
    format!(
        r#"<section>
            <h2 class="h5">{heading}</h2>
            <ul id="{id}" class="{list_class}">
{markup}
            </ul>
        </section>"#,
        id = group.container_id(),
    )
}

/// GET /preview?path=/library/ - All menus as a page would show them
pub async fn preview_page(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> impl IntoResponse {
    let config = state.navigation.read().await.clone();
    let mut host = MemoryHost::new(query.path.clone())
        .with_containers(NavGroup::ALL.into_iter().map(NavGroup::container_id));
    let manager = initialize(config, (*state.paths).clone(), &mut host);

    let sections: Vec<String> = [
        ("Student portal", NavGroup::Main),
        ("Landing page", NavGroup::Public),
        ("Admin", NavGroup::Admin),
        ("Faculty", NavGroup::Faculty),
    ]
    .into_iter()
    .map(|(heading, group)| {
        section(heading, group, host.container(group.container_id()).unwrap_or(""))
    })
    .collect();

    let content = format!(
        r#"<h1 class="h3">Navigation preview</h1>
        <p>Location <code>{path}</code> resolves to page <code>{page}</code>.</p>
        {sections}"#,
        path = escape_html(&query.path),
        page = escape_html(manager.current_page()),
        sections = sections.join("\n"),
    );
    Html(html_doc("Preview", &content))
}
