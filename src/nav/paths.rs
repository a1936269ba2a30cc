//! Location-to-page resolution.
//!
//! The routing layer owns the real URL dispatch; this table mirrors the paths
//! it serves so the menus can tell which page is on screen. Several paths may
//! point at one page (every exam sheet and form lights up the EXAMINATION tab).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Page reported for any path the table does not know
pub const DEFAULT_PAGE: &str = "home";

/// Paths served by the portal, as `(path, page)` pairs
pub const CANONICAL_PATHS: &[(&str, &str)] = &[
    ("/", "home"),
    ("/dashboard/", "dashboard"),
    ("/attendance/", "attendance"),
    ("/fees/", "fees"),
    ("/transport-fee/", "transport-fee"),
    ("/examination/", "examination"),
    ("/result/", "result"),
    ("/library/", "library"),
    ("/registration/", "registration"),
    ("/assignment/", "assignment"),
    ("/class/", "class"),
    ("/events/", "events"),
    ("/calendar/", "calendar"),
    ("/placement/", "placement"),
    ("/application-center/", "application-center"),
    ("/syllabus/", "syllabus"),
    ("/hostel/", "hostel"),
    ("/college-info/", "college-info"),
    ("/admin-student-registration/", "admin-registration"),
    ("/admin-dashboard/", "admin-dashboard"),
    ("/faculty-portal/", "faculty-portal"),
    ("/internal-datesheet/", "examination"),
    ("/external-datesheet/", "examination"),
    ("/exam-form-main/", "examination"),
    ("/exam-form-reappear/", "examination"),
];

/// Extra mapping supplied by a navigation file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteMapping {
    pub path: String,
    pub page: String,
}

/// Exact-match lookup from location path to page identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathTable {
    pages: HashMap<String, String>,
}

impl PathTable {
    pub fn empty() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// The portal's built-in routes
    pub fn canonical() -> Self {
        Self::from_pairs(CANONICAL_PATHS.iter().copied())
    }

    /// Build from `(path, page)` pairs. A repeated path keeps its last
    /// definition and is logged.
    pub fn from_pairs<I, P, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::empty();
        table.extend(pairs);
        table
    }

    /// Add mappings on top of the existing ones, last write wins
    pub fn extend<I, P, V>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (P, V)>,
        P: Into<String>,
        V: Into<String>,
    {
        for (path, page) in pairs {
            let path = path.into();
            let page = page.into();
            if let Some(previous) = self.pages.get(&path) {
                tracing::warn!(
                    "Duplicate path mapping for {}: {} replaced by {}",
                    path,
                    previous,
                    page
                );
            }
            self.pages.insert(path, page);
        }
    }

    pub fn extend_routes(&mut self, routes: &[RouteMapping]) {
        self.extend(routes.iter().map(|r| (r.path.as_str(), r.page.as_str())));
    }

    pub fn resolve(&self, path: &str) -> &str {
        self.pages
            .get(path)
            .map(String::as_str)
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for PathTable {
    fn default() -> Self {
        Self::canonical()
    }
}

/// Total: unknown paths resolve to [`DEFAULT_PAGE`].
pub fn resolve<'a>(path: &str, table: &'a PathTable) -> &'a str {
    table.resolve(path)
}

/// Paths defined more than once in a pair list, in first-seen order
pub fn duplicate_paths<'a>(pairs: &[(&'a str, &str)]) -> Vec<&'a str> {
    let mut seen = HashMap::new();
    let mut dupes = Vec::new();
    for (path, _) in pairs {
        let count = seen.entry(*path).or_insert(0u32);
        *count += 1;
        if *count == 2 {
            dupes.push(*path);
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve_to_their_page() {
        let table = PathTable::canonical();
        assert_eq!(resolve("/attendance/", &table), "attendance");
        assert_eq!(resolve("/admin-student-registration/", &table), "admin-registration");
        assert_eq!(resolve("/", &table), "home");
    }

    #[test]
    fn unknown_paths_resolve_home() {
        let table = PathTable::canonical();
        assert_eq!(resolve("/unknown-path/", &table), DEFAULT_PAGE);
        assert_eq!(resolve("", &table), DEFAULT_PAGE);
        // exact match only, no trailing slash repair
        assert_eq!(resolve("/attendance", &table), DEFAULT_PAGE);
    }

    #[test]
    fn exam_paths_share_one_page() {
        let table = PathTable::canonical();
        for path in [
            "/examination/",
            "/internal-datesheet/",
            "/external-datesheet/",
            "/exam-form-main/",
            "/exam-form-reappear/",
        ] {
            assert_eq!(table.resolve(path), "examination", "path {}", path);
        }
    }

    #[test]
    fn canonical_table_has_no_duplicate_paths() {
        assert!(
            duplicate_paths(CANONICAL_PATHS).is_empty(),
            "duplicate paths in CANONICAL_PATHS: {:?}",
            duplicate_paths(CANONICAL_PATHS)
        );
        assert_eq!(PathTable::canonical().len(), CANONICAL_PATHS.len());
    }

    #[test]
    fn last_definition_wins() {
        let table = PathTable::from_pairs([("/a/", "first"), ("/b/", "b"), ("/a/", "second")]);
        assert_eq!(table.resolve("/a/"), "second");
        assert_eq!(table.len(), 2);
        assert_eq!(
            duplicate_paths(&[("/a/", "first"), ("/b/", "b"), ("/a/", "second")]),
            vec!["/a/"]
        );
    }

    #[test]
    fn routes_extend_the_canonical_table() {
        let mut table = PathTable::canonical();
        table.extend_routes(&[
            RouteMapping {
                path: "/hr-department/".into(),
                page: "faculty-hr".into(),
            },
            RouteMapping {
                path: "/result/".into(),
                page: "examination".into(),
            },
        ]);
        assert_eq!(table.resolve("/hr-department/"), "faculty-hr");
        assert_eq!(table.resolve("/result/"), "examination");
    }
}
