//! Link target canonicalization.
//!
//! The routing layer serves every page at an absolute path with a trailing
//! slash. Hand-edited entries tend to drift (`about.html`, `../fees`), so links
//! are canonicalized at render time rather than trusted.

/// Suffix left over from the static-site days
const PAGE_EXTENSION: &str = ".html";

/// Which rewrites to apply. A leading `/` is always added to bare relative
/// targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HrefPolicy {
    /// Drop a trailing `.html`
    pub strip_extension: bool,
    /// Drop leading `./` and `../`
    pub strip_relative: bool,
    /// Append `/` to absolute paths that have no query string
    pub enforce_trailing_slash: bool,
}

impl HrefPolicy {
    pub const FULL: HrefPolicy = HrefPolicy {
        strip_extension: true,
        strip_relative: true,
        enforce_trailing_slash: true,
    };

    pub const LIGHT: HrefPolicy = HrefPolicy {
        strip_extension: false,
        strip_relative: false,
        enforce_trailing_slash: false,
    };
}

fn is_passthrough(href: &str) -> bool {
    href.starts_with('/') || href.starts_with("http") || href.starts_with('#')
}

pub fn normalize_href(href: &str, policy: HrefPolicy) -> String {
    if href.is_empty() {
        return String::new();
    }

    let mut target = href;
    if policy.strip_extension {
        while let Some(rest) = target.strip_suffix(PAGE_EXTENSION) {
            target = rest;
        }
    }
    if policy.strip_relative {
        while let Some(rest) = target
            .strip_prefix("./")
            .or_else(|| target.strip_prefix("../"))
        {
            target = rest;
        }
    }

    let mut out = if is_passthrough(target) {
        target.to_string()
    } else {
        format!("/{}", target)
    };

    if policy.enforce_trailing_slash
        && out.starts_with('/')
        && !out.ends_with('/')
        && !out.contains('?')
    {
        out.push('/');
    }
    out
}

/// Full canonicalization, as applied to the student tabs
pub fn normalize(href: &str) -> String {
    normalize_href(href, HrefPolicy::FULL)
}
