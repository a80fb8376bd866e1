//! Runtime settings read from the page URL, e.g. `?log=warn`.

use serde::Deserialize;
use std::str::FromStr;

const DEFAULT_LOG_LEVEL: log::Level = log::Level::Debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Console log level: error, warn, info, debug or trace
    pub log: Option<String>,
}

impl AppConfig {
    /// Parse a query string (with or without the leading `?`).
    /// Unparseable input yields the defaults.
    pub fn from_query(query: &str) -> Self {
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
    }

    /// Read the configuration of the current page
    pub fn load() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    pub fn log_level(&self) -> log::Level {
        self.log
            .as_deref()
            .and_then(|s| log::Level::from_str(s).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}
