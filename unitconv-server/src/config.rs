//! Server configuration, read from the environment

use std::env;

/// Log filter variable, checked before `RUST_LOG`
pub const LOG_ENV: &str = "UNITCONV_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let log_filter = non_blank(LOG_ENV)
            .or_else(|| non_blank("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { log_filter }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self { log_filter: DEFAULT_LOG_FILTER.to_string() }
    }
}
