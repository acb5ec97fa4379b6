//! App Configuration
//!
//! Compile-time defaults, optionally adjusted by the page's query string
//! (`?log=debug`). The storage namespace is fixed so saved lists are always
//! found again.

use std::str::FromStr;

use tracing::Level;

use crate::domain::Filter;

/// localStorage key the list lives under
pub const STORAGE_NAMESPACE: &str = "todos-leptos";

/// `KeyboardEvent.key` values the inputs react to
pub const ENTER_KEY: &str = "Enter";
pub const ESCAPE_KEY: &str = "Escape";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_namespace: String,
    pub log_level: Level,
    /// Filter used when the route is missing or does not match
    pub default_filter: Filter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_namespace: STORAGE_NAMESPACE.to_string(),
            log_level: Level::INFO,
            default_filter: Filter::All,
        }
    }
}

impl AppConfig {
    /// Apply recognized parameters from a `location.search` string.
    ///
    /// Unknown keys and unparsable values are ignored.
    pub fn from_query(search: &str) -> Self {
        let mut config = Self::default();
        let pairs = search
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='));

        for (key, value) in pairs {
            if key == "log" {
                if let Ok(level) = Level::from_str(value) {
                    config.log_level = level;
                }
            }
        }
        config
    }

    /// Read the current page's query string; defaults outside a browser
    pub fn from_location() -> Self {
        web_sys::window()
            .and_then(|window| window.location().search().ok())
            .map(|search| Self::from_query(&search))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_namespace, "todos-leptos");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.default_filter, Filter::All);
    }

    #[test]
    fn test_log_level_from_query() {
        assert_eq!(AppConfig::from_query("?log=debug").log_level, Level::DEBUG);
        assert_eq!(AppConfig::from_query("?x=1&log=warn").log_level, Level::WARN);
        assert_eq!(AppConfig::from_query("log=TRACE").log_level, Level::TRACE);
    }

    #[test]
    fn test_bad_query_keeps_defaults() {
        assert_eq!(AppConfig::from_query(""), AppConfig::default());
        assert_eq!(AppConfig::from_query("?log=loud"), AppConfig::default());
        assert_eq!(AppConfig::from_query("?log"), AppConfig::default());
    }
}
