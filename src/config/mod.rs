//! Configuration management

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

use crate::nav::{NavigationConfig, NavigationFile, PathTable};

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file replacing the built-in menus and extending the path table
    #[serde(default)]
    pub navigation_file: Option<PathBuf>,
}

fn default_port() -> u16 {
    8090
}

/// Get config directory (PORTAL_NAV_CONFIG_DIR, XDG_CONFIG_HOME or platform default)
pub fn get_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("PORTAL_NAV_CONFIG_DIR") {
        return PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join("Library/Application Support/portal-nav");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("portal-nav");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(".config/portal-nav");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("portal-nav");
        }
    }

    // Fallback to current directory
    PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let mut builder = ::config::Config::builder()
        // Start with defaults
        .set_default("port", default_port() as i64)?
        // Load from config file if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (PORTAL_NAV_NAVIGATION_FILE, etc.)
        .add_source(
            ::config::Environment::with_prefix("PORTAL_NAV")
                .separator("__")
                .try_parsing(true),
        );

    // Port precedence: PORTAL_NAV_PORT > PORT > config > default.
    // Unparseable values are ignored so a bad env var can't stop startup.
    let env_port = |key: &str| std::env::var(key).ok().and_then(|p| p.parse::<u16>().ok());
    if let Some(port_num) = env_port("PORTAL_NAV_PORT").or_else(|| env_port("PORT")) {
        builder = builder.set_override("port", port_num as i64)?;
    }

    let config = builder.build()?;

    Ok(config.try_deserialize()?)
}

/// Menus and path table for the service: the built-in data, or the
/// configured navigation file on top of the canonical routes.
pub fn load_navigation(config: &Config) -> Result<(NavigationConfig, PathTable)> {
    let mut paths = PathTable::canonical();

    let Some(ref path) = config.navigation_file else {
        return Ok((NavigationConfig::default(), paths));
    };

    let file = NavigationFile::load(path)
        .with_context(|| format!("Failed to load navigation file {}", path.display()))?;
    paths.extend_routes(&file.routes);
    Ok((file.navigation, paths))
}
