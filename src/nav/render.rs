//! Menu markup for one navigation group.

use std::borrow::Cow;

use super::active::active_position;
use super::entry::NavigationEntry;
use super::group::NavGroup;
use super::normalize::normalize_href;

/// CSS classes a group renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupStyle {
    /// `None` for groups that never show an active entry
    pub active: Option<&'static str>,
    pub inactive: &'static str,
}

pub fn group_style(group: NavGroup) -> GroupStyle {
    match group {
        NavGroup::Main | NavGroup::Faculty => GroupStyle {
            active: Some("btn btn-warning text-white"),
            inactive: "btn btn-outline-warning",
        },
        NavGroup::Admin => GroupStyle {
            active: Some("btn btn-danger text-white"),
            inactive: "btn btn-outline-danger",
        },
        NavGroup::Public => GroupStyle {
            active: None,
            inactive: "nav-link",
        },
    }
}

/// Entries by ascending `order`, ties in stored order. Each entry keeps its
/// stored index.
pub fn sorted_entries(entries: &[NavigationEntry]) -> Vec<(usize, &NavigationEntry)> {
    let mut sorted: Vec<_> = entries.iter().enumerate().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|(_, entry)| entry.order);
    sorted
}

pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(&['&', '<', '>', '"', '\''][..]) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

fn render_label(entry: &NavigationEntry, class: &str) -> String {
    format!(
        r#"<li class="nav-item"><span class="{class}" title="{title}">{label}</span></li>"#,
        class = class,
        title = escape_html(entry.description.as_deref().unwrap_or("")),
        label = escape_html(&entry.title),
    )
}

fn render_link(entry: &NavigationEntry, class: &str, href: &str) -> String {
    format!(
        r#"<li class="nav-item"><a class="{class}" href="{href}" title="{title}"><i class="{icon} me-1"></i>{label}</a></li>"#,
        class = class,
        href = escape_html(href),
        title = escape_html(entry.description.as_deref().unwrap_or("")),
        icon = escape_html(entry.icon.as_deref().unwrap_or("")),
        label = escape_html(&entry.title),
    )
}

/// Markup for every entry of `group`, one `<li>` per line.
///
/// The entry matching `current_page` renders as a plain label, the rest as
/// links with their normalized href.
pub fn render_group(entries: &[NavigationEntry], group: NavGroup, current_page: &str) -> String {
    let style = group_style(group);
    let policy = group.href_policy();
    let active = if group.tracks_active() {
        active_position(entries, current_page)
    } else {
        None
    };

    sorted_entries(entries)
        .into_iter()
        .map(|(index, entry)| match style.active {
            Some(class) if Some(index) == active => render_label(entry, class),
            _ => render_link(entry, style.inactive, &normalize_href(&entry.href, policy)),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
